//! Property tests for target-gravity resolution.

use proptest::prelude::*;

use mazer::gravity::{GravityTargets, ABV_FACTOR};
use mazer::models::{Sweetness, YeastMode};

pub fn sweetness_strategy() -> impl Strategy<Value = Sweetness> {
    prop_oneof![
        Just(Sweetness::Dry),
        Just(Sweetness::SemiSweet),
        Just(Sweetness::Sweet),
        Just(Sweetness::Dessert),
    ]
}

pub fn yeast_strategy() -> impl Strategy<Value = YeastMode> {
    prop_oneof![Just(YeastMode::Standard), Just(YeastMode::Turbo)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: turbo yeast forces FG to 1.000 regardless of sweetness.
    #[test]
    fn property_turbo_forces_fg(
        abv in 5u8..=25,
        sweetness in sweetness_strategy()
    ) {
        let targets = GravityTargets::resolve(abv, sweetness, YeastMode::Turbo);
        prop_assert_eq!(targets.fg, 1.000);
    }

    /// PROPERTY: dry standard batches follow OG = 1.000 + abv / 131.25,
    /// reported to three decimals.
    #[test]
    fn property_dry_standard_matches_the_formula(
        abv in 5u8..=25
    ) {
        let targets = GravityTargets::resolve(abv, Sweetness::Dry, YeastMode::Standard);
        prop_assert_eq!(targets.fg, 1.000);
        let expected = ((1.000 + f64::from(abv) / ABV_FACTOR) * 1000.0).round() / 1000.0;
        prop_assert_eq!(targets.og, expected);
    }

    /// PROPERTY: resolution is deterministic - same inputs, same targets.
    #[test]
    fn property_resolution_is_deterministic(
        abv in 5u8..=25,
        sweetness in sweetness_strategy(),
        yeast in yeast_strategy()
    ) {
        let first = GravityTargets::resolve(abv, sweetness, yeast);
        let second = GravityTargets::resolve(abv, sweetness, yeast);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: no supported input combination crosses the practical
    /// ceiling; the highest resolvable OG is 1.220.
    #[test]
    fn property_ceiling_is_unreachable(
        abv in 5u8..=25,
        sweetness in sweetness_strategy(),
        yeast in yeast_strategy()
    ) {
        let targets = GravityTargets::resolve(abv, sweetness, yeast);
        prop_assert!(!targets.is_impractical());
        prop_assert!(targets.og <= 1.220);
        prop_assert!(targets.ensure_practical().is_ok());
    }
}
