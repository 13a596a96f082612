//! Submission display formatting
//!
//! Renders a saved submission record as a two-column table.

use tabled::{builder::Builder, settings::Style};

use crate::models::options::{label_for, COUNTRIES};
use crate::submission::SubmissionRecord;

/// Format a saved submission as a field/value table
pub fn format_submission(record: &SubmissionRecord) -> String {
    let company = &record.company_info;
    let address = &record.address;

    let mut builder = Builder::default();
    builder.push_record(["Field".to_string(), "Value".to_string()]);

    let rows: Vec<(&str, String)> = vec![
        ("ID", record.id.to_string()),
        (
            "Submitted",
            record.submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
        ("Email", record.email.clone()),
        ("Company Name", company.company_name.clone()),
        ("Company Type", company.company_type.label().to_string()),
        ("Industry", company.industry.label().to_string()),
        ("Employees", company.employee_count.to_string()),
        ("Street", address.street.clone()),
        ("City", address.locality_line()),
        ("Country", label_for(COUNTRIES, &address.country)),
        ("Card", format!("•••• {}", record.card.last_four)),
        ("Expires", record.card.expiry_date.clone()),
        ("Name on Card", record.card.name_on_card.clone()),
    ];
    for (field, value) in rows {
        builder.push_record([field.to_string(), value]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::record::tests::registration;

    #[test]
    fn test_table_shows_redacted_fields() {
        let record = SubmissionRecord::from_registration(&registration()).unwrap();
        let table = format_submission(&record);

        assert!(table.contains("a@b.com"));
        assert!(table.contains("Partnership"));
        assert!(table.contains("Springfield, IL 62701"));
        assert!(table.contains("United States"));
        assert!(table.contains("•••• 5556"));
        assert!(!table.contains("4000056655665556"));
        assert!(!table.contains("$argon2"));
    }
}
