//! Vehicle categories and their fixed per-block rates

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Amount;
use crate::shared::errors::DomainError;

/// Category of a parked vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Regular car
    Standard,
    Motorcycle,
    Pickup,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [Self::Standard, Self::Motorcycle, Self::Pickup];

    /// Price of one 30-minute block (in currency units)
    pub const fn rate_per_block(self) -> Amount {
        match self {
            Self::Standard => 800,
            Self::Motorcycle => 500,
            Self::Pickup => 1000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Motorcycle => "motorcycle",
            Self::Pickup => "pickup",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}

// ── Tests ──────────────────────────────────────────────────────
