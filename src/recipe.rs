//! Ingredient quantities for a batch
//!
//! The math runs in US units - gravity points per pound of honey per
//! gallon - and converts for metric display. Input and output volumes go
//! through the same conversion factor, so the reported top-off water stays
//! consistent with the requested batch volume in either system.

use serde::Serialize;

use crate::gravity::GravityTargets;
use crate::units::{
    gallons_to_liters, lbs_to_kg, liters_to_gallons, UnitSystem,
    HONEY_DISPLACEMENT_GAL_PER_10_LBS,
};

/// Gravity points contributed by one pound of honey per gallon (35 PPG, a
/// standard estimate for most floral honeys)
pub const HONEY_PPG: f64 = 35.0;

/// Calculated ingredient quantities for one batch
///
/// Amounts are reported in the requested unit system: honey in lbs or kg,
/// water and honey volume in gallons or liters. `gravity_points` is the
/// raw total; use [`Recipe::gravity_points_rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recipe {
    /// Target original gravity, three decimals
    pub og: f64,
    /// Required honey mass
    pub honey: f64,
    /// Volume the honey itself occupies
    pub honey_volume: f64,
    /// Top-off water to reach the batch volume, clamped at zero
    pub water: f64,
    /// Total gravity points the batch must contain
    pub gravity_points: f64,
    /// Unit system the amounts are expressed in
    pub units: UnitSystem,
}

impl Recipe {
    /// Calculate ingredient quantities for a batch
    pub fn calculate(targets: &GravityTargets, volume: f64, units: UnitSystem) -> Self {
        let volume_gal = match units {
            UnitSystem::Us => volume,
            UnitSystem::Metric => liters_to_gallons(volume),
        };

        let gravity_points = (targets.og - 1.000) * 1000.0 * volume_gal;
        let honey_lbs = gravity_points / HONEY_PPG;
        let honey_volume_gal = honey_lbs / 10.0 * HONEY_DISPLACEMENT_GAL_PER_10_LBS;
        let water_gal = (volume_gal - honey_volume_gal).max(0.0);

        let (honey, honey_volume, water) = match units {
            UnitSystem::Us => (honey_lbs, honey_volume_gal, water_gal),
            UnitSystem::Metric => (
                lbs_to_kg(honey_lbs),
                gallons_to_liters(honey_volume_gal),
                gallons_to_liters(water_gal),
            ),
        };

        Self {
            og: targets.og,
            honey,
            honey_volume,
            water,
            gravity_points,
            units,
        }
    }

    /// Total gravity points, rounded to an integer for display
    pub fn gravity_points_rounded(&self) -> i64 {
        self.gravity_points.round() as i64
    }

    /// True when the honey alone meets or exceeds the batch volume
    pub fn honey_fills_batch(&self) -> bool {
        self.water <= 0.0
    }
}
