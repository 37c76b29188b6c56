//! Result rendering for the CLI shells
//!
//! Text output keeps the classic calculator layout; `--json` emits a
//! single event object for CI and scripting. Styling is opt-in so piped
//! output stays clean.

use crossterm::style::Stylize;
use serde_json::Value;

use crate::gravity::{GravityTargets, MAX_PRACTICAL_OG};
use crate::models::{BatchSpec, Sweetness};
use crate::recipe::{Recipe, HONEY_PPG};
use crate::units::{HONEY_DISPLACEMENT_GAL_PER_10_LBS, HONEY_DISPLACEMENT_L_PER_KG};

/// Introductory banner with the model assumptions
pub fn render_banner() -> String {
    let mut out = String::new();
    out.push_str("======================================\n");
    out.push_str("   Mazer - Mead Ingredient Calculator\n");
    out.push_str("======================================\n");
    out.push_str(
        "Estimates the honey needed to reach a target Original Gravity (OG)\n\
         from your desired ABV and sweetness, and the water to top off the batch.\n",
    );
    out.push_str("Assumptions:\n");
    out.push_str(&format!(
        " - Honey contributes {HONEY_PPG:.0} gravity points per pound per gallon (PPG).\n"
    ));
    out.push_str(" - Sweetness level determines the assumed Final Gravity (FG).\n");
    out.push_str(" - Turbo yeast ferments bone dry, forcing FG to 1.000.\n");
    out.push_str(&format!(
        " - 10 lbs of honey displaces about {HONEY_DISPLACEMENT_GAL_PER_10_LBS} gallons \
         (roughly {HONEY_DISPLACEMENT_L_PER_KG} L per kg).\n"
    ));
    out
}

/// Notice shown when turbo yeast overrides the sweetness selection
pub fn render_turbo_note(sweetness: Sweetness) -> String {
    format!(
        "NOTE: Turbo yeast selected - final gravity forced to 1.000 \
         (selected sweetness: {sweetness}).\n"
    )
}

/// The calculation results block
pub fn render_report(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str("--- Calculation Results ---\n");
    out.push_str(&format!(
        "{:<30}{:.3}\n",
        "Target Original Gravity (OG):", recipe.og
    ));
    out.push_str(&format!(
        "{:<30}{:.2} {}\n",
        "Required Honey:",
        recipe.honey,
        recipe.units.honey_label()
    ));

    let water_note = if recipe.honey_fills_batch() {
        " (honey volume meets or exceeds the batch volume)"
    } else {
        ""
    };
    out.push_str(&format!(
        "{:<30}{:.2} {}{}\n",
        "Required Water (to top off):",
        recipe.water,
        recipe.units.volume_label(),
        water_note
    ));

    let points_note = if recipe.units.is_metric() {
        " (based on US gal/lbs)"
    } else {
        ""
    };
    out.push_str(&format!(
        "{:<30}{}{}\n",
        "Total Gravity Points Needed:",
        recipe.gravity_points_rounded(),
        points_note
    ));
    out
}

/// Verbose breakdown of the intermediate quantities
pub fn render_breakdown(spec: &BatchSpec, recipe: &Recipe) -> String {
    let volume_label = spec.units.volume_label();
    let mut out = String::new();
    out.push_str("Breakdown:\n");
    out.push_str(&format!(
        "  batch volume:   {:.3} {volume_label}\n",
        spec.volume
    ));
    out.push_str(&format!(
        "  honey volume:   {:.3} {volume_label}\n",
        recipe.honey_volume
    ));
    out.push_str(&format!(
        "  top-off water:  {:.3} {volume_label}\n",
        recipe.water
    ));
    out
}

/// Warning block for an impractically high original gravity
pub fn render_warning(targets: &GravityTargets, color: bool) -> String {
    let heading = if color {
        format!("{}", "WARNING:".yellow().bold())
    } else {
        "WARNING:".to_string()
    };
    format!(
        "{heading} calculated original gravity (OG {:.3}) is extremely high.\n\
         This much honey exceeds the tolerance of most mead yeasts\n\
         (practical ceiling {MAX_PRACTICAL_OG:.3}, workable max around 1.220).\n\
         Try a lower ABV or a drier sweetness level.\n",
        targets.og
    )
}

/// Closing reminder shown after the results
pub fn render_closing() -> String {
    "Calculation complete. These quantities are estimates - yeast choice\n\
     and nutrients will shift the final result.\n"
        .to_string()
}

/// JSON event object for `--json` output
pub fn calc_event(spec: &BatchSpec, targets: &GravityTargets, recipe: &Recipe) -> Value {
    serde_json::json!({
        "event": "calc",
        "og": recipe.og,
        "fg": targets.fg,
        "abv": spec.abv,
        "sweetness": spec.sweetness,
        "yeast": spec.yeast,
        "units": spec.units,
        "volume": spec.volume,
        "honey": recipe.honey,
        "honey_unit": spec.units.honey_label(),
        "water": recipe.water,
        "water_unit": spec.units.volume_label(),
        "gravity_points": recipe.gravity_points_rounded(),
    })
}

/// JSON event object for a failed calculation
pub fn error_event(message: &str) -> Value {
    serde_json::json!({
        "event": "error",
        "message": message,
    })
}
