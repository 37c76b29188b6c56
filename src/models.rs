//! Core data models for mazer
//!
//! Defines the input-side value records:
//! - `Sweetness`: desired residual-sugar level, parsed once at the boundary
//! - `YeastMode`: standard vs turbo fermentation profile
//! - `BatchSpec`: a validated calculation input

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MazerError, MazerResult};
use crate::units::UnitSystem;

/// Lowest supported target ABV, percent
pub const MIN_ABV: u8 = 5;

/// Highest supported target ABV, percent (turbo yeast territory)
pub const MAX_ABV: u8 = 25;

/// Desired sweetness of the finished mead
///
/// Each level maps to an assumed final gravity under standard yeast;
/// turbo yeast ignores the selection and ferments bone dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Sweetness {
    #[default]
    Dry,
    SemiSweet,
    Sweet,
    Dessert,
}

impl Sweetness {
    /// All levels, in menu order
    pub const ALL: [Sweetness; 4] = [
        Sweetness::Dry,
        Sweetness::SemiSweet,
        Sweetness::Sweet,
        Sweetness::Dessert,
    ];

    /// Assumed final gravity for this level under standard yeast
    pub fn final_gravity(&self) -> f64 {
        match self {
            Sweetness::Dry => 1.000,
            Sweetness::SemiSweet => 1.010,
            Sweetness::Sweet => 1.020,
            Sweetness::Dessert => 1.030,
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Sweetness::Dry => "Dry",
            Sweetness::SemiSweet => "Semi-Sweet",
            Sweetness::Sweet => "Sweet",
            Sweetness::Dessert => "Dessert",
        }
    }
}

impl std::fmt::Display for Sweetness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sweetness {
    type Err = MazerError;

    /// Case-insensitive match against the four recognized labels.
    ///
    /// "Semi-Sweet" tolerates hyphen, space, underscore, or nothing
    /// between the words; anything else is `InvalidSweetness`, never a
    /// default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dry" => Ok(Sweetness::Dry),
            "semi-sweet" | "semisweet" | "semi sweet" | "semi_sweet" => Ok(Sweetness::SemiSweet),
            "sweet" => Ok(Sweetness::Sweet),
            "dessert" => Ok(Sweetness::Dessert),
            _ => Err(MazerError::InvalidSweetness {
                input: s.to_string(),
            }),
        }
    }
}

/// Fermentation profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YeastMode {
    /// Standard yeast - final gravity follows the sweetness selection
    #[default]
    Standard,
    /// Turbo yeast - assumed to consume all fermentable sugar (FG 1.000)
    Turbo,
}

impl YeastMode {
    /// Returns true for turbo yeast
    pub fn is_turbo(&self) -> bool {
        matches!(self, YeastMode::Turbo)
    }
}

impl std::fmt::Display for YeastMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YeastMode::Standard => write!(f, "standard"),
            YeastMode::Turbo => write!(f, "turbo"),
        }
    }
}

/// Validated input for one calculation pass
///
/// Construction enforces the caller-side contract: volume strictly
/// positive and finite, ABV within `[MIN_ABV, MAX_ABV]`. Once built, the
/// spec is safe to feed to the resolver and calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSpec {
    /// Batch volume in the chosen unit system (gallons or liters)
    pub volume: f64,
    /// Unit system for input and output
    pub units: UnitSystem,
    /// Target alcohol by volume, integer percent
    pub abv: u8,
    /// Desired sweetness level
    pub sweetness: Sweetness,
    /// Fermentation profile
    pub yeast: YeastMode,
}

impl BatchSpec {
    /// Validate and build a batch spec
    pub fn new(
        volume: f64,
        units: UnitSystem,
        abv: u8,
        sweetness: Sweetness,
        yeast: YeastMode,
    ) -> MazerResult<Self> {
        if !volume.is_finite() || volume <= 0.0 {
            return Err(MazerError::InvalidVolume { value: volume });
        }
        if !(MIN_ABV..=MAX_ABV).contains(&abv) {
            return Err(MazerError::InvalidAbv { value: abv });
        }
        Ok(Self {
            volume,
            units,
            abv,
            sweetness,
            yeast,
        })
    }
}
