//! Employee create/update form.

use serde::{Deserialize, Serialize};

use crate::{
    config::FormLimits,
    validation::{FormReport, ValidationOutcome, messages, rules},
};

/// Payload submitted by the employee create/update dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    /// Legal full name.
    pub full_name: String,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Birth date, `YYYY-MM-DD`.
    pub birth_date: String,
    /// Vietnamese ID card number (CMND/CCCD).
    pub id_card_number: String,
}

/// Validates an employee form against the default limits.
pub fn validate_employee_form(form: &EmployeeForm) -> ValidationOutcome {
    validate_employee_form_with(form, &FormLimits::default())
}

/// Validates an employee form against explicit limits.
///
/// Every field is required. Format and age checks only run for non-empty
/// values so a missing field never carries two contradictory messages.
pub fn validate_employee_form_with(form: &EmployeeForm, limits: &FormLimits) -> ValidationOutcome {
    let mut report = FormReport::new();

    let required_fields: [(&str, &str, &str); 5] = [
        ("fullName", &form.full_name, messages::EMPLOYEE_FULL_NAME_REQUIRED),
        ("username", &form.username, messages::EMPLOYEE_USERNAME_REQUIRED),
        ("email", &form.email, messages::EMPLOYEE_EMAIL_REQUIRED),
        ("birthDate", &form.birth_date, messages::EMPLOYEE_BIRTH_DATE_REQUIRED),
        ("idCardNumber", &form.id_card_number, messages::EMPLOYEE_ID_CARD_REQUIRED),
    ];
    for (field, value, msg) in required_fields {
        report.check(field, &[&|| rules::required(value, msg)]);
    }

    if !form.email.trim().is_empty() {
        report.check(
            "email",
            &[&|| rules::email(&form.email, messages::EMPLOYEE_EMAIL_INVALID)],
        );
    }

    if !form.id_card_number.trim().is_empty() {
        report.check(
            "idCardNumber",
            &[&|| rules::id_card(&form.id_card_number, messages::EMPLOYEE_ID_CARD_INVALID)],
        );
    }

    if !form.birth_date.trim().is_empty() {
        report.check(
            "birthDate",
            &[&|| {
                rules::minimum_age(
                    &form.birth_date,
                    limits.employee_min_age,
                    messages::EMPLOYEE_UNDERAGE,
                )
            }],
        );
    }

    report.finish()
}
