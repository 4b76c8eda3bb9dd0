//! Display rounding applied at the boundary of every plan accessor

/// Scaled magnitudes at or above 2^52 have no fractional part left to round
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Round `value` to `decimal_places`, half away from zero.
///
/// The scale factor is a direct power of ten; derived values are always
/// computed unrounded and passed through here only when read. A precision
/// finer than the value can represent returns the value unchanged, and a
/// negative zero result is normalized to `0.0`.
pub fn round(value: f64, decimal_places: u32) -> f64 {
    let Ok(exponent) = i32::try_from(decimal_places) else {
        return value + 0.0;
    };

    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value + 0.0;
    }

    scaled.round() / factor + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round(1924.3492519628305, 2), 1924.35);
        assert_eq!(round(1282.899501308554, 2), 1282.9);
        assert_eq!(round(400.0, 2), 400.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -3.0);
        assert_eq!(round(0.125, 2), 0.13);
    }

    #[test]
    fn test_zero_places_gives_whole_units() {
        assert_eq!(round(3207.2487532713844, 0), 3207.0);
    }

    #[test]
    fn test_precision_beyond_f64_keeps_value() {
        assert_eq!(round(1924.3492519628305, 400), 1924.3492519628305);
        assert_eq!(round(1924.3492519628305, u32::MAX), 1924.3492519628305);
        assert_eq!(round(3.2e10, 300), 3.2e10);
        assert_eq!(round(1924.3492519628305, 20), 1924.3492519628305);
        assert_eq!(round(0.0, 400), 0.0);
    }

    #[test]
    fn test_small_values_still_round_at_fine_precision() {
        assert_eq!(round(1.25e-20, 20), 1e-20);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let rounded = round(-0.001, 2);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert!(round(-0.0, 2).is_sign_positive());
        assert!(round(-0.0, 400).is_sign_positive());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_round_is_idempotent(cents in -100_000_000i64..100_000_000, places in 0u32..5) {
            let x = cents as f64 / 997.0;
            let once = round(x, places);
            prop_assert_eq!(round(once, places), once);
        }
    }
}
