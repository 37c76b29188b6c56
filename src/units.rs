//! Unit system selection and conversion constants
//!
//! All ingredient math runs internally in US units (gallons and pounds);
//! metric batches are converted on the way in and the results converted
//! back out with the same factors, so the reported top-off water always
//! lines up with the requested batch volume.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MazerError;

/// 1 liter = 0.264172 US gallons
pub const L_TO_GAL: f64 = 0.264172;

/// 1 kilogram = 2.20462 pounds
pub const KG_TO_LBS: f64 = 2.20462;

/// Volume displaced by 10 lbs of honey, in gallons (empirical estimate)
pub const HONEY_DISPLACEMENT_GAL_PER_10_LBS: f64 = 0.65;

/// Volume displaced by 1 kg of honey, in liters (empirical estimate)
///
/// Rule-of-thumb quoted alongside the gallon figure; the calculator itself
/// derives all displacement from [`HONEY_DISPLACEMENT_GAL_PER_10_LBS`] so
/// both unit systems report the same water for the same batch.
pub const HONEY_DISPLACEMENT_L_PER_KG: f64 = 0.74;

/// Convert liters to US gallons
pub fn liters_to_gallons(liters: f64) -> f64 {
    liters * L_TO_GAL
}

/// Convert US gallons to liters
pub fn gallons_to_liters(gallons: f64) -> f64 {
    gallons / L_TO_GAL
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / KG_TO_LBS
}

/// Unit system for batch volume input and ingredient output
///
/// - `Us`: volumes in gallons, honey in pounds
/// - `Metric`: volumes in liters, honey in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// US imperial (gallons / lbs)
    #[default]
    Us,
    /// Metric (liters / kg)
    Metric,
}

impl UnitSystem {
    /// Returns true for the metric system
    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    /// Unit label for batch and water volumes
    pub fn volume_label(&self) -> &'static str {
        match self {
            UnitSystem::Us => "gallons",
            UnitSystem::Metric => "liters",
        }
    }

    /// Unit label for honey mass
    pub fn honey_label(&self) -> &'static str {
        match self {
            UnitSystem::Us => "lbs",
            UnitSystem::Metric => "kg",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Us => write!(f, "us"),
            UnitSystem::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = MazerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" | "imperial" | "us-imperial" => Ok(UnitSystem::Us),
            "metric" | "si" => Ok(UnitSystem::Metric),
            _ => Err(MazerError::InvalidUnits {
                input: s.to_string(),
            }),
        }
    }
}
