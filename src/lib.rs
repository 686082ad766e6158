//! Library crate for pigfarm-forms: form validation and shared domain vocabularies
//! for the pig farm administration dashboard.
//!
//! Form components assemble a typed record ([`forms::pen::PenForm`],
//! [`forms::employee::EmployeeForm`], [`forms::animal::AnimalForm`]), run the
//! matching `validate_*_form` function, and either render the returned
//! per-field messages or forward the record to the HTTP service layer. The
//! validators are pure and synchronous; the only ambient input is the current
//! calendar date.

pub mod config;
pub mod error;
pub mod forms;
pub mod session;
pub mod status;
pub mod validation;
