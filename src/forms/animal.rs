//! Animal create/update form.

use serde::{Deserialize, Serialize};

use crate::{
    config::FormLimits,
    status::AnimalStatus,
    validation::{FormReport, ValidationOutcome, messages, rules},
};

/// Payload submitted by the animal create/update dialog.
///
/// `status` stays a raw string on purpose: the dialog submits whatever the
/// select control held and the validator reports vocabulary violations as a
/// field error instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalForm {
    /// Animal name or tag.
    pub name: String,
    /// Date the animal entered its pen, `YYYY-MM-DD`.
    pub entry_date: String,
    /// Trade status code, one of [`AnimalStatus::CODES`].
    pub status: String,
    /// Weight in kilograms; `None` when the field was left blank.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Identifier of the pen the animal is assigned to.
    pub pen_id: String,
    /// Date the animal left the pen, if it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<String>,
}

/// Validates an animal form against the default limits.
pub fn validate_animal_form(form: &AnimalForm) -> ValidationOutcome {
    validate_animal_form_with(form, &FormLimits::default())
}

/// Validates an animal form against explicit limits.
///
/// All five mandatory fields are required first; the weight bounds then run
/// as a separate, layered check rather than inside the required pass, so a
/// supplied-but-invalid weight is reported even though the field already
/// went through the required loop.
pub fn validate_animal_form_with(form: &AnimalForm, limits: &FormLimits) -> ValidationOutcome {
    let mut report = FormReport::new();

    report.check(
        "name",
        &[&|| rules::required(&form.name, messages::ANIMAL_NAME_REQUIRED)],
    );
    report.check(
        "entryDate",
        &[&|| rules::required(&form.entry_date, messages::ANIMAL_ENTRY_DATE_REQUIRED)],
    );
    report.check(
        "status",
        &[&|| rules::required(&form.status, messages::ANIMAL_STATUS_REQUIRED)],
    );
    report.check(
        "weight",
        &[&|| rules::provided(&form.weight, messages::ANIMAL_WEIGHT_REQUIRED)],
    );
    report.check(
        "penId",
        &[&|| rules::required(&form.pen_id, messages::ANIMAL_PEN_REQUIRED)],
    );

    report.check(
        "name",
        &[&|| {
            rules::max_length(
                &form.name,
                limits.animal_name_max_len,
                messages::ANIMAL_NAME_TOO_LONG,
            )
        }],
    );

    report.check(
        "entryDate",
        &[&|| rules::not_future_date(&form.entry_date, messages::ANIMAL_ENTRY_DATE_FUTURE)],
    );

    if let Some(exit_date) = &form.exit_date {
        if !form.entry_date.trim().is_empty() {
            report.check(
                "exitDate",
                &[&|| {
                    rules::date_order(
                        exit_date,
                        &form.entry_date,
                        messages::ANIMAL_EXIT_BEFORE_ENTRY,
                    )
                }],
            );
        }
    }

    if let Some(weight) = form.weight {
        report.check(
            "weight",
            &[
                &|| rules::positive(weight, messages::ANIMAL_WEIGHT_NOT_POSITIVE),
                &|| {
                    rules::in_range(
                        weight,
                        0.0,
                        limits.animal_weight_max,
                        messages::ANIMAL_WEIGHT_RANGE,
                    )
                },
            ],
        );
    }

    report.check(
        "status",
        &[&|| rules::one_of(&form.status, &AnimalStatus::CODES, messages::ANIMAL_STATUS_INVALID)],
    );

    report.finish()
}
