//! `w' = round(clamp(w + eta * delta, 0, 1))`.

use causal_core::constants::{WEIGHT_MAX, WEIGHT_MIN};

/// Round to `precision` decimal digits.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Apply one clipped update step. The result is always within [0.0, 1.0].
pub fn apply_update(current: f64, delta: f64, eta: f64, precision: u32) -> f64 {
    round_to((current + eta * delta).clamp(WEIGHT_MIN, WEIGHT_MAX), precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_update_is_clamped_at_one() {
        assert_eq!(apply_update(0.95, 0.6, 0.1, 4), 1.0);
        assert_eq!(apply_update(0.98, 1.0, 0.1, 4), 1.0);
    }

    #[test]
    fn negative_update_is_clamped_at_zero() {
        assert_eq!(apply_update(0.05, -0.6, 0.1, 4), 0.0);
    }

    #[test]
    fn small_steps_are_rounded() {
        assert_eq!(apply_update(0.8, 0.1, 0.1, 4), 0.81);
        assert_eq!(apply_update(0.5, -0.2, 0.1, 4), 0.48);
        assert_eq!(apply_update(0.33333, 0.0, 0.1, 4), 0.3333);
    }

    #[test]
    fn zero_eta_only_rounds() {
        assert_eq!(apply_update(0.123456, 5.0, 0.0, 4), 0.1235);
    }
}
