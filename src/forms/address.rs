//! Address form
//!
//! The state select only appears while the country is "US".

use crate::models::{PartialRegistration, COUNTRIES, US, US_STATES};
use crate::schema::address::{CITY, COUNTRY, STATE, STREET, ZIP_CODE};
use crate::schema::{AddressSchema, FieldErrors};
use crate::wizard::{Step, StepPayload};

use super::{FormField, FormState, ShowWhen, StepForm};

/// Street address with a country-dependent state field
#[derive(Debug, Clone)]
pub struct ChooseAddressForm {
    form: FormState,
    default_country: Option<String>,
}

impl ChooseAddressForm {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text(STREET, "Street Address", "123 Main St"),
                FormField::text(CITY, "City", "Springfield"),
                FormField::select(COUNTRY, "Country", "Select country", COUNTRIES),
                FormField::select(STATE, "State", "Select state", US_STATES),
                FormField::text(ZIP_CODE, "ZIP Code", "12345"),
            ])
            .with_condition(ShowWhen {
                field: STATE,
                depends_on: COUNTRY,
                equals: US,
            }),
            default_country: None,
        }
    }

    /// Pre-select a country whenever the form is cleared
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        let country = country.into();
        if country.is_empty() {
            self.default_country = None;
        } else {
            self.form.set_value(COUNTRY, &country);
            self.default_country = Some(country);
        }
        self
    }

    /// Whether the state field is shown right now
    pub fn shows_state(&self) -> bool {
        self.form.is_visible(STATE)
    }
}

impl Default for ChooseAddressForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StepForm for ChooseAddressForm {
    fn step(&self) -> Step {
        Step::Address
    }

    fn form(&self) -> &FormState {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    fn submit(&mut self) -> Result<StepPayload, FieldErrors> {
        self.form.validate(&AddressSchema).map(StepPayload::Address)
    }

    fn load(&mut self, accumulated: &PartialRegistration) {
        if let Some(data) = &accumulated.address {
            self.form.apply([
                (STREET, data.street.as_str()),
                (CITY, data.city.as_str()),
                (COUNTRY, data.country.as_str()),
                (STATE, data.state.as_str()),
                (ZIP_CODE, data.zip_code.as_str()),
            ]);
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        if let Some(country) = &self.default_country {
            self.form.set_value(COUNTRY, country);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressData;

    fn fill(form: &mut ChooseAddressForm, country: &str) {
        let state = form.form_mut();
        state.set_value(STREET, "1 Main St");
        state.set_value(CITY, "Springfield");
        state.set_value(COUNTRY, country);
        state.set_value(ZIP_CODE, "62701");
    }

    #[test]
    fn test_state_hidden_until_us() {
        let mut form = ChooseAddressForm::new();
        assert!(!form.shows_state());
        form.form_mut().set_value(COUNTRY, "US");
        assert!(form.shows_state());
        form.form_mut().set_value(COUNTRY, "DE");
        assert!(!form.shows_state());
    }

    #[test]
    fn test_us_requires_state() {
        let mut form = ChooseAddressForm::new();
        fill(&mut form, "US");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(STATE), Some("Please select a state"));

        form.form_mut().set_value(STATE, "IL");
        let StepPayload::Address(data) = form.submit().unwrap() else {
            panic!("wrong payload");
        };
        assert_eq!(data.state, "IL");
    }

    #[test]
    fn test_non_us_drops_hidden_state() {
        let mut form = ChooseAddressForm::new();
        fill(&mut form, "US");
        form.form_mut().set_value(STATE, "IL");
        form.form_mut().set_value(COUNTRY, "CA");

        assert_eq!(
            form.submit().unwrap(),
            StepPayload::Address(AddressData {
                street: "1 Main St".into(),
                city: "Springfield".into(),
                state: String::new(),
                zip_code: "62701".into(),
                country: "CA".into(),
            })
        );
    }

    #[test]
    fn test_default_country_survives_reset() {
        let mut form = ChooseAddressForm::new().with_default_country("US");
        assert!(form.shows_state());
        form.form_mut().set_value(COUNTRY, "GB");
        form.mount(&PartialRegistration::new());
        assert_eq!(form.form().value(COUNTRY), "US");
    }
}
