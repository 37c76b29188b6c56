//! Target-gravity resolution
//!
//! Maps the desired ABV and sweetness to the starting gravity the must has
//! to reach before pitching. Uses the standard mead/wine approximation
//! `ABV = (OG - FG) * 131.25`, rearranged for OG.

use serde::Serialize;

use crate::error::{MazerError, MazerResult};
use crate::models::{Sweetness, YeastMode};

/// ABV approximation factor: `ABV = (OG - FG) * 131.25`
pub const ABV_FACTOR: f64 = 131.25;

/// Original gravity above which the batch exceeds the tolerance of most
/// mead yeasts (max workable OG is usually around 1.220)
pub const MAX_PRACTICAL_OG: f64 = 1.225;

/// Resolved gravity targets for a batch
///
/// Derived per request, never stored. `og` is rounded to three decimals,
/// the convention for reported gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GravityTargets {
    /// Original gravity the must needs before fermentation
    pub og: f64,
    /// Assumed final gravity once fermentation completes
    pub fg: f64,
}

impl GravityTargets {
    /// Resolve gravity targets from ABV, sweetness, and yeast profile
    ///
    /// Turbo yeast is assumed to ferment bone dry, forcing FG to 1.000
    /// regardless of the selected sweetness.
    pub fn resolve(abv: u8, sweetness: Sweetness, yeast: YeastMode) -> Self {
        let fg = match yeast {
            YeastMode::Turbo => 1.000,
            YeastMode::Standard => sweetness.final_gravity(),
        };
        let og = fg + f64::from(abv) / ABV_FACTOR;
        Self { og: round3(og), fg }
    }

    /// True when the resolved OG is beyond what most mead yeasts tolerate
    ///
    /// Within the supported ABV and sweetness ranges the highest
    /// resolvable OG is 1.220, so this only fires if the input domain is
    /// ever widened. Callers decide the policy: the scripted shell treats
    /// it as fatal, the interactive shell warns and proceeds.
    pub fn is_impractical(&self) -> bool {
        self.og > MAX_PRACTICAL_OG
    }

    /// Error when the resolved OG is impractically high
    pub fn ensure_practical(&self) -> MazerResult<()> {
        if self.is_impractical() {
            return Err(MazerError::ImpracticalGravity { og: self.og });
        }
        Ok(())
    }
}

/// Round to three decimals, half away from zero
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
