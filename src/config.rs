//! Validation limits, loadable from an optional JSON configuration file.
//!
//! The limits ship with built-in defaults matching the backend's rules; a
//! deployment can override them without a rebuild by dropping a JSON file at
//! `config/limits.json` (or pointing `PIGFARM_FORMS_LIMITS_PATH` elsewhere).

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the limits file is looked up.
const DEFAULT_LIMITS_PATH: &str = "config/limits.json";
/// Environment variable that overrides [`DEFAULT_LIMITS_PATH`].
const LIMITS_PATH_ENV: &str = "PIGFARM_FORMS_LIMITS_PATH";

/// Bounds applied by the form validators.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLimits {
    /// Maximum pen name length in characters.
    pub pen_name_max_len: usize,
    /// Maximum number of animals a pen can hold.
    pub pen_quantity_max: i64,
    /// Maximum animal name length in characters.
    pub animal_name_max_len: usize,
    /// Maximum animal weight in kilograms.
    pub animal_weight_max: f64,
    /// Minimum employee age in years.
    pub employee_min_age: i32,
}

impl FormLimits {
    /// Load limits from disk, falling back to the built-in defaults when the
    /// file is absent, unreadable, or malformed.
    pub fn load() -> Self {
        let path = resolve_limits_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawLimits>(&contents) {
                Ok(raw) => {
                    let limits: Self = raw.into();
                    info!(path = %path.display(), "loaded form limits from config");
                    limits
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse limits config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "limits config not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read limits config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            pen_name_max_len: 100,
            pen_quantity_max: 1000,
            animal_name_max_len: 100,
            animal_weight_max: 1000.0,
            employee_min_age: 18,
        }
    }
}

/// JSON representation of the limits file. Every field is optional so a
/// deployment only states the bounds it wants to change.
#[derive(Debug, Deserialize)]
struct RawLimits {
    pen_name_max_len: Option<usize>,
    pen_quantity_max: Option<i64>,
    animal_name_max_len: Option<usize>,
    animal_weight_max: Option<f64>,
    employee_min_age: Option<i32>,
}

impl From<RawLimits> for FormLimits {
    fn from(raw: RawLimits) -> Self {
        let defaults = FormLimits::default();
        Self {
            pen_name_max_len: raw.pen_name_max_len.unwrap_or(defaults.pen_name_max_len),
            pen_quantity_max: raw.pen_quantity_max.unwrap_or(defaults.pen_quantity_max),
            animal_name_max_len: raw
                .animal_name_max_len
                .unwrap_or(defaults.animal_name_max_len),
            animal_weight_max: raw.animal_weight_max.unwrap_or(defaults.animal_weight_max),
            employee_min_age: raw.employee_min_age.unwrap_or(defaults.employee_min_age),
        }
    }
}

/// Resolve the limits path taking the environment override into account.
fn resolve_limits_path() -> PathBuf {
    env::var_os(LIMITS_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIMITS_PATH))
}
