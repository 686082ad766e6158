//! Pig pen create/update form.

use serde::{Deserialize, Serialize};

use crate::{
    config::FormLimits,
    validation::{FormReport, ValidationOutcome, messages, rules},
};

/// Payload submitted by the pen create/update dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenForm {
    /// Pen display name.
    pub name: String,
    /// Date the pen was opened, `YYYY-MM-DD`.
    pub created_date: String,
    /// Date the pen was closed; absent while the pen is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<String>,
    /// Number of animals currently assigned.
    pub quantity: i64,
}

/// Validates a pen form against the default limits.
pub fn validate_pen_form(form: &PenForm) -> ValidationOutcome {
    validate_pen_form_with(form, &FormLimits::default())
}

/// Validates a pen form against explicit limits.
///
/// `closedDate` intentionally has no required check: an active pen has no
/// closing date. When present it must fall on or after `createdDate`.
pub fn validate_pen_form_with(form: &PenForm, limits: &FormLimits) -> ValidationOutcome {
    let mut report = FormReport::new();

    report.check(
        "name",
        &[
            &|| rules::required(&form.name, messages::PEN_NAME_REQUIRED),
            &|| rules::max_length(&form.name, limits.pen_name_max_len, messages::PEN_NAME_TOO_LONG),
        ],
    );

    report.check(
        "createdDate",
        &[
            &|| rules::required(&form.created_date, messages::PEN_CREATED_DATE_REQUIRED),
            &|| rules::not_future_date(&form.created_date, messages::PEN_CREATED_DATE_FUTURE),
        ],
    );

    if let Some(closed_date) = &form.closed_date {
        report.check(
            "closedDate",
            &[&|| {
                rules::date_order(
                    closed_date,
                    &form.created_date,
                    messages::PEN_CLOSED_BEFORE_CREATED,
                )
            }],
        );
    }

    report.check(
        "quantity",
        &[
            &|| rules::non_negative(form.quantity, messages::PEN_QUANTITY_NEGATIVE),
            &|| {
                rules::in_range(
                    form.quantity,
                    0,
                    limits.pen_quantity_max,
                    messages::PEN_QUANTITY_RANGE,
                )
            },
        ],
    );

    report.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_pen() -> PenForm {
        PenForm {
            name: "Chuồng A1".into(),
            created_date: "2024-01-15".into(),
            closed_date: None,
            quantity: 10,
        }
    }

    #[test]
    fn open_pen_without_closing_date_is_valid() {
        let outcome = validate_pen_form(&open_pen());
        assert!(outcome.is_valid);
        assert!(outcome.errors.values().all(String::is_empty));
        assert!(!outcome.errors.contains_key("closedDate"));
    }

    #[test]
    fn closing_before_creation_fails_on_closed_date() {
        let form = PenForm {
            name: "A".into(),
            created_date: "2024-01-01".into(),
            closed_date: Some("2023-01-01".into()),
            quantity: 5,
        };
        let outcome = validate_pen_form(&form);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.message("closedDate"),
            Some(messages::PEN_CLOSED_BEFORE_CREATED)
        );
        assert_eq!(outcome.message("name"), None);
    }

    #[test]
    fn closing_on_the_creation_day_is_allowed() {
        let form = PenForm {
            closed_date: Some("2024-01-15".into()),
            ..open_pen()
        };
        assert!(validate_pen_form(&form).is_valid);
    }

    #[test]
    fn blank_name_and_date_are_both_reported() {
        let form = PenForm {
            name: "  ".into(),
            created_date: "".into(),
            closed_date: None,
            quantity: 0,
        };
        let outcome = validate_pen_form(&form);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.message("name"), Some(messages::PEN_NAME_REQUIRED));
        assert_eq!(
            outcome.message("createdDate"),
            Some(messages::PEN_CREATED_DATE_REQUIRED)
        );
        // boundary value, still valid
        assert_eq!(outcome.message("quantity"), None);
    }

    #[test]
    fn overlong_name_is_reported_once() {
        let form = PenForm {
            name: "c".repeat(101),
            ..open_pen()
        };
        let outcome = validate_pen_form(&form);
        assert_eq!(
            outcome.message("name"),
            Some("Tên chuồng không được vượt quá 100 ký tự")
        );
    }

    #[test]
    fn quantity_bounds_are_enforced() {
        let negative = PenForm {
            quantity: -1,
            ..open_pen()
        };
        let outcome = validate_pen_form(&negative);
        assert_eq!(
            outcome.message("quantity"),
            Some(messages::PEN_QUANTITY_NEGATIVE)
        );

        let oversized = PenForm {
            quantity: 1001,
            ..open_pen()
        };
        let outcome = validate_pen_form(&oversized);
        assert_eq!(
            outcome.message("quantity"),
            Some("Số lượng phải nằm trong khoảng 0 đến 1000")
        );

        let full = PenForm {
            quantity: 1000,
            ..open_pen()
        };
        assert!(validate_pen_form(&full).is_valid);
    }

    #[test]
    fn custom_limits_apply() {
        let limits = FormLimits {
            pen_quantity_max: 20,
            ..FormLimits::default()
        };
        let form = PenForm {
            quantity: 21,
            ..open_pen()
        };
        assert!(!validate_pen_form_with(&form, &limits).is_valid);
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let form: PenForm = serde_json::from_str(
            r#"{"name":"Chuồng B2","createdDate":"2024-03-01","quantity":12}"#,
        )
        .unwrap();
        assert_eq!(form.closed_date, None);
        assert!(validate_pen_form(&form).is_valid);
    }
}
