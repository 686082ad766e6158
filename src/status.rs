//! Status vocabularies used across the dashboard.
//!
//! Three distinct enumerations coexist and are deliberately not reconciled:
//! [`AnimalStatus`] is the trade vocabulary checked by the animal form
//! validator, while [`HealthStatus`] and [`RaisingStatus`] are what the
//! animal list and medical screens display. Mixing them up is a type error
//! here rather than a silently-accepted string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownStatus;

/// Trade status accepted by the animal form validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimalStatus {
    /// Animal is held on the farm.
    Active,
    /// Animal has been sold.
    Sold,
    /// Animal died on the farm.
    Dead,
    /// Animal was transferred to another facility.
    Transferred,
}

impl AnimalStatus {
    /// Wire codes in declaration order, fed to the membership rule.
    pub const CODES: [&'static str; 4] = ["ACTIVE", "SOLD", "DEAD", "TRANSFERRED"];

    /// Wire code of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimalStatus::Active => "ACTIVE",
            AnimalStatus::Sold => "SOLD",
            AnimalStatus::Dead => "DEAD",
            AnimalStatus::Transferred => "TRANSFERRED",
        }
    }

    /// Display label shown in tables and detail dialogs.
    pub fn label(self) -> &'static str {
        match self {
            AnimalStatus::Active => "Đang nuôi",
            AnimalStatus::Sold => "Đã bán",
            AnimalStatus::Dead => "Đã chết",
            AnimalStatus::Transferred => "Đã chuyển trại",
        }
    }
}

impl FromStr for AnimalStatus {
    type Err = UnknownStatus;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "ACTIVE" => Ok(AnimalStatus::Active),
            "SOLD" => Ok(AnimalStatus::Sold),
            "DEAD" => Ok(AnimalStatus::Dead),
            "TRANSFERRED" => Ok(AnimalStatus::Transferred),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medical condition classification shown on the animal screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    /// Healthy, no pending treatment.
    Active,
    /// Under treatment.
    Sick,
    /// Missing one or more scheduled vaccinations.
    Unvaccinated,
}

impl HealthStatus {
    /// Wire code of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Active => "ACTIVE",
            HealthStatus::Sick => "SICK",
            HealthStatus::Unvaccinated => "UNVACCINATED",
        }
    }

    /// Display label shown in tables and detail dialogs.
    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Active => "Khỏe mạnh",
            HealthStatus::Sick => "Bị bệnh",
            HealthStatus::Unvaccinated => "Chưa tiêm phòng",
        }
    }
}

impl FromStr for HealthStatus {
    type Err = UnknownStatus;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "ACTIVE" => Ok(HealthStatus::Active),
            "SICK" => Ok(HealthStatus::Sick),
            "UNVACCINATED" => Ok(HealthStatus::Unvaccinated),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// Whether an animal is still held on the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaisingStatus {
    /// Currently raised in a pen.
    Raising,
    /// Left the farm.
    Exported,
}

impl RaisingStatus {
    /// Wire code of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            RaisingStatus::Raising => "RAISING",
            RaisingStatus::Exported => "EXPORTED",
        }
    }

    /// Display label shown in tables and detail dialogs.
    pub fn label(self) -> &'static str {
        match self {
            RaisingStatus::Raising => "Đang nuôi",
            RaisingStatus::Exported => "Đã xuất chuồng",
        }
    }
}

impl FromStr for RaisingStatus {
    type Err = UnknownStatus;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "RAISING" => Ok(RaisingStatus::Raising),
            "EXPORTED" => Ok(RaisingStatus::Exported),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}
