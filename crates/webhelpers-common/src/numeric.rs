//! Decimal rounding.

/// Rounds `value` to `places` decimal places, half up.
///
/// Computed as `floor(value * 10^places + 0.5) / 10^places`. Halves move
/// toward positive infinity, so `-0.5` rounds to `0.0` and `-1.5` to `-1.0`.
/// Float representation is not corrected for: `1.005` is stored slightly
/// below the half and rounds to `1.0` at two places.
///
/// ```
/// use webhelpers_common::round;
///
/// assert_eq!(round(2.345, 2), 2.35);
/// assert_eq!(round(-0.5, 0), 0.0);
/// ```
pub fn round(value: f64, places: u32) -> f64 {
    let shift = 10f64.powf(f64::from(places));
    (value * shift + 0.5).floor() / shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round(2.345, 2), 2.35);
        assert_eq!(round(2.344, 2), 2.34);
        assert_eq!(round(0.5, 0), 1.0);
        assert_eq!(round(1.4, 0), 1.0);
    }

    #[test]
    fn negative_halves_round_toward_positive_infinity() {
        assert_eq!(round(-0.5, 0), 0.0);
        assert_eq!(round(-1.5, 0), -1.0);
        assert_eq!(round(-2.6, 0), -3.0);
    }

    #[test]
    fn matches_formula_for_unrepresentable_halves() {
        let shift = 100.0_f64;
        let expected = (1.005_f64 * shift + 0.5).floor() / shift;
        assert_eq!(round(1.005, 2), expected);
    }

    #[test]
    fn zero_places_gives_integers() {
        assert_eq!(round(42.0, 0), 42.0);
        assert_eq!(round(42.49, 0), 42.0);
    }

    #[test]
    fn non_finite_inputs() {
        assert!(round(f64::NAN, 2).is_nan());
        assert_eq!(round(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }

    #[test]
    fn huge_place_counts_do_not_panic() {
        let r = round(1.25, 400);
        assert!(r.is_nan() || r.is_finite());
    }
}
