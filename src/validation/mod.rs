//! Field-level validation plumbing shared by every form validator.
//!
//! A form validator walks its fields in a fixed order, feeding each field's
//! rules to [`FormReport::check`]; `finish` folds the per-field results into
//! a single [`ValidationOutcome`] that the form component renders.

pub mod messages;
pub mod rules;

use indexmap::IndexMap;
use serde::Serialize;

/// Result of validating one form submission.
///
/// `errors` carries an entry for every checked field in check order; an empty
/// string marks the field as valid. `is_valid` is true exactly when every
/// message is empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Whether every checked field passed.
    pub is_valid: bool,
    /// Message per checked field, empty when the field is valid.
    pub errors: IndexMap<String, String>,
}

impl ValidationOutcome {
    /// The failure message for `field`, if that field was checked and failed.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }
}

/// Accumulates per-field check results for one form.
///
/// Rules are supplied as lazy closures so that a field's remaining rules are
/// never evaluated once one has failed. Checking the same field twice keeps
/// the first failure, giving a single deterministic message per field.
#[derive(Debug)]
pub struct FormReport {
    errors: IndexMap<String, String>,
    is_valid: bool,
}

impl Default for FormReport {
    fn default() -> Self {
        Self::new()
    }
}

impl FormReport {
    /// Starts an empty report.
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
            is_valid: true,
        }
    }

    /// Runs `rules` in order for `field`, recording the first failure.
    ///
    /// Returns whether this particular check passed.
    pub fn check(&mut self, field: &str, rules: &[&dyn Fn() -> Option<String>]) -> bool {
        let failure = rules.iter().find_map(|rule| rule());
        let passed = failure.is_none();
        self.is_valid &= passed;

        let entry = self.errors.entry(field.to_owned()).or_default();
        if entry.is_empty() {
            *entry = failure.unwrap_or_default();
        }
        passed
    }

    /// Folds the accumulated checks into the final outcome.
    pub fn finish(self) -> ValidationOutcome {
        ValidationOutcome {
            is_valid: self.is_valid,
            errors: self.errors,
        }
    }
}
