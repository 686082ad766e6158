//! Shared error types.
//!
//! Field-validation failures are data, not errors: they travel as message
//! strings inside [`crate::validation::ValidationOutcome`]. The types here
//! cover the few operations that can actually fail, such as parsing a status
//! code received from the backend.

use thiserror::Error;

/// A status code that does not belong to the expected vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status code: {0}")]
pub struct UnknownStatus(pub String);
