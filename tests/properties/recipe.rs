//! Property tests for ingredient calculation.

use proptest::prelude::*;

use mazer::gravity::GravityTargets;
use mazer::models::YeastMode;
use mazer::recipe::Recipe;
use mazer::units::{UnitSystem, KG_TO_LBS, L_TO_GAL};

use crate::gravity::{sweetness_strategy, yeast_strategy};

fn rel_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: top-off water is never negative for any valid batch.
    #[test]
    fn property_water_is_never_negative(
        volume in 0.01f64..10_000.0,
        abv in 5u8..=25,
        sweetness in sweetness_strategy(),
        yeast in yeast_strategy()
    ) {
        let targets = GravityTargets::resolve(abv, sweetness, yeast);
        for units in [UnitSystem::Us, UnitSystem::Metric] {
            let recipe = Recipe::calculate(&targets, volume, units);
            prop_assert!(recipe.water >= 0.0);
            prop_assert!(recipe.honey >= 0.0);
        }
    }

    /// PROPERTY: computing in US units and converting honey/water to
    /// metric matches computing directly in metric for the equivalent
    /// volume, within 1e-6 relative.
    #[test]
    fn property_unit_round_trip_agrees(
        volume_gal in 0.01f64..5_000.0,
        abv in 5u8..=25,
        sweetness in sweetness_strategy(),
        yeast in yeast_strategy()
    ) {
        let targets = GravityTargets::resolve(abv, sweetness, yeast);
        let us = Recipe::calculate(&targets, volume_gal, UnitSystem::Us);
        let metric = Recipe::calculate(&targets, volume_gal / L_TO_GAL, UnitSystem::Metric);

        prop_assert!(rel_close(metric.honey, us.honey / KG_TO_LBS));
        prop_assert!(rel_close(metric.water, us.water / L_TO_GAL));
        prop_assert!(rel_close(metric.honey_volume, us.honey_volume / L_TO_GAL));
        prop_assert!(rel_close(metric.gravity_points, us.gravity_points));
    }

    /// PROPERTY: the calculation is pure - calling it twice with
    /// identical inputs yields bit-identical output.
    #[test]
    fn property_calculation_is_idempotent(
        volume in 0.01f64..10_000.0,
        abv in 5u8..=25,
        sweetness in sweetness_strategy(),
        yeast in yeast_strategy()
    ) {
        let targets = GravityTargets::resolve(abv, sweetness, yeast);
        let first = Recipe::calculate(&targets, volume, UnitSystem::Metric);
        let second = Recipe::calculate(&targets, volume, UnitSystem::Metric);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: gravity points and honey scale linearly with volume.
    #[test]
    fn property_quantities_scale_with_volume(
        volume in 0.01f64..1_000.0,
        abv in 5u8..=25,
        sweetness in sweetness_strategy()
    ) {
        let targets = GravityTargets::resolve(abv, sweetness, YeastMode::Standard);
        let single = Recipe::calculate(&targets, volume, UnitSystem::Us);
        let double = Recipe::calculate(&targets, volume * 2.0, UnitSystem::Us);
        prop_assert!(rel_close(double.gravity_points, single.gravity_points * 2.0));
        prop_assert!(rel_close(double.honey, single.honey * 2.0));
    }

    /// PROPERTY: honey volume plus top-off water accounts for the whole
    /// batch volume in the requested units.
    #[test]
    fn property_volumes_sum_to_the_batch(
        volume in 0.01f64..10_000.0,
        abv in 5u8..=25,
        sweetness in sweetness_strategy(),
        yeast in yeast_strategy()
    ) {
        let targets = GravityTargets::resolve(abv, sweetness, yeast);
        for units in [UnitSystem::Us, UnitSystem::Metric] {
            let recipe = Recipe::calculate(&targets, volume, units);
            prop_assert!(rel_close(recipe.honey_volume + recipe.water, volume));
        }
    }
}
