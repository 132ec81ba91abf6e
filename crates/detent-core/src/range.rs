//! Conversions between integer range values and percentages.
//!
//! All slider arithmetic goes through these functions. Values and bounds are
//! integers; percentages passed *in* are fractions (`0.5` is the middle of
//! the range) while percentages handed *out* are whole numbers in `0..=100`.

/// Round to the nearest integer, halves toward positive infinity.
///
/// `2.5` rounds to `3` and `-2.5` rounds to `-2`. Non-finite input is
/// returned unchanged.
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round a float at an input boundary and convert it to a range integer.
///
/// Returns `None` for NaN and infinities.
#[must_use]
pub fn round_to_value(x: f64) -> Option<i64> {
    let rounded = round_half_up(x);
    rounded.is_finite().then_some(rounded as i64)
}

/// Map a fraction of the range onto a value: `round((max - min) * percent + min)`.
///
/// No clamping happens here. Returns `None` when `percent` is not finite,
/// e.g. when it was measured against a zero-width element.
#[must_use]
pub fn percent_to_value(percent: f64, min: i64, max: i64) -> Option<i64> {
    // f64 span, since `max - min` overflows i64 for ranges wider than it
    let span = max as f64 - min as f64;
    round_to_value(span.mul_add(percent, min as f64))
}

/// Map a value onto a whole-number percentage of the range.
///
/// Returns `None` for an empty range (`min == max`), where the percentage is
/// undefined.
#[must_use]
pub fn value_to_percent(value: i64, min: i64, max: i64) -> Option<i64> {
    if min == max {
        return None;
    }
    let percent = ((value as f64 - min as f64) * 100.0) / (max as f64 - min as f64);
    round_to_value(percent)
}

/// Clamp `value` into `[min, max]`, inclusive.
///
/// Raises to `min` first, then lowers to `max`, so an inverted range yields
/// `max` instead of panicking.
#[must_use]
pub fn clamp_value_to_range(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}

/// Keyboard step size: `1`, or a tenth of `max` when `coarse` is set.
///
/// The coarse step is derived from `max` alone, not from the span
/// `max - min`. Ranges that do not start at zero get a coarse step that is
/// not 10% of their span.
#[must_use]
pub fn step_for(max: i64, coarse: bool) -> i64 {
    if coarse {
        round_to_value(max as f64 / 10.0).unwrap_or(1)
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Rounding
    // =========================================================================

    #[test]
    fn test_round_half_up_halves() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }

    #[test]
    fn test_round_half_up_non_halves() {
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(2.6), 3.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(7.0), 7.0);
    }

    #[test]
    fn test_round_to_value_rejects_non_finite() {
        assert_eq!(round_to_value(f64::NAN), None);
        assert_eq!(round_to_value(f64::INFINITY), None);
        assert_eq!(round_to_value(f64::NEG_INFINITY), None);
        assert_eq!(round_to_value(24.6), Some(25));
    }

    // =========================================================================
    // percent_to_value
    // =========================================================================

    #[test]
    fn test_percent_to_value_midpoint() {
        assert_eq!(percent_to_value(0.5, 0, 100), Some(50));
        assert_eq!(percent_to_value(0.5, -100, 100), Some(0));
    }

    #[test]
    fn test_percent_to_value_endpoints() {
        assert_eq!(percent_to_value(0.0, 20, 80), Some(20));
        assert_eq!(percent_to_value(1.0, 20, 80), Some(80));
    }

    #[test]
    fn test_percent_to_value_does_not_clamp() {
        assert_eq!(percent_to_value(1.5, 0, 100), Some(150));
        assert_eq!(percent_to_value(-0.25, 0, 100), Some(-25));
    }

    #[test]
    fn test_percent_to_value_non_finite() {
        assert_eq!(percent_to_value(f64::NAN, 0, 100), None);
        assert_eq!(percent_to_value(f64::INFINITY, 0, 100), None);
    }

    // =========================================================================
    // value_to_percent
    // =========================================================================

    #[test]
    fn test_value_to_percent() {
        assert_eq!(value_to_percent(50, 0, 100), Some(50));
        assert_eq!(value_to_percent(0, -50, 50), Some(50));
        assert_eq!(value_to_percent(1, 0, 3), Some(33));
        assert_eq!(value_to_percent(2, 0, 3), Some(67));
    }

    #[test]
    fn test_value_to_percent_min_is_zero() {
        assert_eq!(value_to_percent(-20, -20, 40), Some(0));
        assert_eq!(value_to_percent(40, -20, 40), Some(100));
    }

    #[test]
    fn test_value_to_percent_empty_range() {
        assert_eq!(value_to_percent(5, 5, 5), None);
    }

    #[test]
    fn test_full_width_range_does_not_overflow() {
        assert_eq!(value_to_percent(0, i64::MIN, i64::MAX), Some(50));
        assert_eq!(value_to_percent(i64::MAX, i64::MIN, i64::MAX), Some(100));
        assert_eq!(percent_to_value(0.5, i64::MIN, i64::MAX), Some(0));
        assert_eq!(percent_to_value(1.0, i64::MIN, i64::MAX), Some(i64::MAX));
    }

    // =========================================================================
    // clamp_value_to_range
    // =========================================================================

    #[test]
    fn test_clamp_inside() {
        assert_eq!(clamp_value_to_range(42, 0, 100), 42);
    }

    #[test]
    fn test_clamp_bounds_inclusive() {
        assert_eq!(clamp_value_to_range(0, 0, 100), 0);
        assert_eq!(clamp_value_to_range(100, 0, 100), 100);
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        assert_eq!(clamp_value_to_range(50, 100, 0), 0);
    }

    // =========================================================================
    // step_for
    // =========================================================================

    #[test]
    fn test_step_fine() {
        assert_eq!(step_for(100, false), 1);
        assert_eq!(step_for(7, false), 1);
    }

    #[test]
    fn test_step_coarse_uses_max_only() {
        assert_eq!(step_for(100, true), 10);
        assert_eq!(step_for(25, true), 3);
        // span is 10, but the step follows max
        assert_eq!(step_for(110, true), 11);
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_one(
            min in -10_000i64..10_000,
            span in 1i64..10_000,
            offset in 0i64..10_000,
        ) {
            let max = min + span;
            let v = min + offset % (span + 1);
            let percent = value_to_percent(v, min, max).unwrap();
            let back = percent_to_value(percent as f64 / 100.0, min, max).unwrap();
            let back = clamp_value_to_range(back, min, max);
            // percent granularity is 1/100 of the span
            let tolerance = 1 + span / 100;
            prop_assert!((back - v).abs() <= tolerance, "v={v} back={back}");
        }

        #[test]
        fn prop_round_trip_small_span(min in -1000i64..1000, span in 1i64..=100, offset in 0i64..=100) {
            let max = min + span;
            let v = min + offset % (span + 1);
            let percent = value_to_percent(v, min, max).unwrap();
            let back = percent_to_value(percent as f64 / 100.0, min, max).unwrap();
            prop_assert!((clamp_value_to_range(back, min, max) - v).abs() <= 1);
        }

        #[test]
        fn prop_clamp_idempotent(v in any::<i32>(), min in -1000i64..1000, span in 0i64..1000) {
            let max = min + span;
            let once = clamp_value_to_range(i64::from(v), min, max);
            prop_assert_eq!(clamp_value_to_range(once, min, max), once);
        }

        #[test]
        fn prop_clamp_below_min(min in -1000i64..1000, span in 0i64..1000, below in 1i64..1000) {
            let max = min + span;
            prop_assert_eq!(clamp_value_to_range(min - below, min, max), min);
        }

        #[test]
        fn prop_clamp_above_max(min in -1000i64..1000, span in 0i64..1000, above in 1i64..1000) {
            let max = min + span;
            prop_assert_eq!(clamp_value_to_range(max + above, min, max), max);
        }

        #[test]
        fn prop_percent_in_range(min in -1000i64..1000, span in 1i64..1000, offset in 0i64..1000) {
            let max = min + span;
            let v = min + offset % (span + 1);
            let p = value_to_percent(v, min, max).unwrap();
            prop_assert!((0..=100).contains(&p));
        }
    }
}
