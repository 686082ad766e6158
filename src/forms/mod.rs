//! Typed form records and their validators.
//!
//! Field names serialize in camelCase to match the dashboard's JSON payloads,
//! and the error maps returned by the validators are keyed by those same
//! names so the form components can bind messages straight to inputs.

pub mod animal;
pub mod employee;
pub mod pen;
