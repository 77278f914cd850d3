//! Property tests for the clipped update rule.

use proptest::prelude::*;

use causal_learning::apply_update;

proptest! {
    #[test]
    fn result_stays_in_unit_interval(
        current in 0.0f64..=1.0,
        delta in -10.0f64..10.0,
        eta in 0.0f64..=1.0,
    ) {
        let updated = apply_update(current, delta, eta, 4);
        prop_assert!((0.0..=1.0).contains(&updated));
    }

    #[test]
    fn result_has_at_most_four_decimals(
        current in 0.0f64..=1.0,
        delta in -1.0f64..1.0,
        eta in 0.0f64..=1.0,
    ) {
        let updated = apply_update(current, delta, eta, 4);
        let scaled = updated * 10_000.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn update_direction_follows_delta_sign(
        current in 0.0f64..=1.0,
        delta in 0.0f64..10.0,
        eta in 0.0f64..=1.0,
    ) {
        let up = apply_update(current, delta, eta, 4);
        let down = apply_update(current, -delta, eta, 4);
        prop_assert!(up >= down);
    }
}
