//! Choice lists offered by the select fields
//!
//! Company type and industry are closed enums serialized as their option
//! value. Countries and US states stay plain `(value, label)` tables because
//! the address payload carries them as strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate a select-option enum with value/label tables
macro_rules! define_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// `(value, label)` pairs in display order
            pub const OPTIONS: &'static [(&'static str, &'static str)] = &[$(($value, $label)),+];

            /// The serialized option value
            pub fn value(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Look up a variant by its option value
            pub fn from_value(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|o| o.value() == value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

define_options! {
    /// Legal form of the registering company
    CompanyType {
        SoleProprietorship => ("sole_proprietorship", "Sole Proprietorship"),
        Partnership => ("partnership", "Partnership"),
        Llc => ("llc", "LLC"),
        Corporation => ("corporation", "Corporation"),
        NonProfit => ("non_profit", "Non-Profit"),
        Other => ("other", "Other"),
    }
}

define_options! {
    /// Industry the company operates in
    Industry {
        Technology => ("technology", "Technology"),
        Finance => ("finance", "Finance"),
        Healthcare => ("healthcare", "Healthcare"),
        Retail => ("retail", "Retail"),
        Manufacturing => ("manufacturing", "Manufacturing"),
        Education => ("education", "Education"),
        Hospitality => ("hospitality", "Hospitality"),
        Other => ("other", "Other"),
    }
}

/// Country code that makes the state field required
pub const US: &str = "US";

/// Countries offered by the address step
pub const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("GB", "United Kingdom"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("OTHER", "Other"),
];

/// US states and DC
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Label for an option value, falling back to the value itself
pub fn label_for(options: &[(&'static str, &'static str)], value: &str) -> String {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| value.to_string())
}
