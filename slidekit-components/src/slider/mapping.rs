//! Conversions between track offsets, domain values and normalized positions.
//!
//! Everything here is a pure function. Rounding is fixed to
//! round-half-away-from-zero (`f64::round`) so tie cases are stable across
//! hosts.

use tracing::warn;

/// Maps an offset along the usable track span to a raw domain value.
///
/// A non-positive `available_width` means the track has no usable span yet
/// (typically before the first layout pass); every offset then maps to
/// `lower`.
pub fn position_to_value(offset_x: f32, available_width: f32, lower: f64, upper: f64) -> f64 {
    if !(available_width > 0.0) {
        return lower;
    }
    let fraction = f64::from(offset_x) / f64::from(available_width);
    (upper - lower) * fraction + lower
}

/// Rounds `raw` to the nearest multiple of `step` counted from `lower`.
///
/// Ties round away from zero. The result is not clamped; see
/// [`clamp_to_range`].
pub fn quantize(raw: f64, step: f64, lower: f64) -> f64 {
    lower + ((raw - lower) / step).round() * step
}

/// Clamps `value` into `[lower, upper]`.
pub fn clamp_to_range(value: f64, lower: f64, upper: f64) -> f64 {
    value.clamp(lower, upper)
}

/// Maps a domain value to its `[0, 1]` position along the track.
///
/// An empty range (`upper == lower`) has no meaningful position; it is pinned
/// to `1.0` and reported as a warning.
pub fn value_to_normalized(value: f64, lower: f64, upper: f64) -> f64 {
    let span = upper - lower;
    if span == 0.0 {
        warn!(lower, upper, "slider range is empty, pinning position to 1.0");
        return 1.0;
    }
    (1.0 - (upper - value) / span).clamp(0.0, 1.0)
}

/// Full pointer-to-value pipeline: raw value for the thumb, stepped and
/// clamped value for the binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct MappedValue {
    pub raw: f64,
    pub stepped: f64,
}

pub(super) fn map_offset(
    offset_x: f32,
    available_width: f32,
    lower: f64,
    upper: f64,
    step: f64,
) -> MappedValue {
    let raw = position_to_value(offset_x, available_width, lower, upper);
    let stepped = clamp_to_range(quantize(raw, step, lower), lower, upper);
    MappedValue { raw, stepped }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn position_maps_linearly() {
        assert_eq!(position_to_value(0.0, 200.0, 0.0, 100.0), 0.0);
        assert_eq!(position_to_value(100.0, 200.0, 0.0, 100.0), 50.0);
        assert_eq!(position_to_value(200.0, 200.0, 0.0, 100.0), 100.0);
        assert_eq!(position_to_value(50.0, 200.0, -10.0, 10.0), -5.0);
    }

    #[test]
    fn degenerate_width_maps_to_lower() {
        assert_eq!(position_to_value(30.0, 0.0, 5.0, 10.0), 5.0);
        assert_eq!(position_to_value(30.0, -12.0, 5.0, 10.0), 5.0);
        assert_eq!(position_to_value(30.0, f32::NAN, 5.0, 10.0), 5.0);
    }

    #[test]
    fn quantize_rounds_to_nearest_step() {
        assert_eq!(quantize(47.0, 10.0, 0.0), 50.0);
        assert_eq!(quantize(44.9, 10.0, 0.0), 40.0);
        assert_eq!(quantize(3.2, 0.5, 0.0), 3.0);
    }

    #[test]
    fn quantize_ties_round_away_from_zero() {
        assert_eq!(quantize(45.0, 10.0, 0.0), 50.0);
        assert_eq!(quantize(-45.0, 10.0, 0.0), -50.0);
    }

    #[test]
    fn quantize_counts_steps_from_lower_bound() {
        // [1, 10] with step 3 allows 1, 4, 7, 10.
        assert_eq!(quantize(5.0, 3.0, 1.0), 4.0);
        assert_eq!(quantize(6.0, 3.0, 1.0), 7.0);
    }

    #[test]
    fn quantize_stays_within_half_step_and_is_idempotent() {
        let step = 0.25;
        let lower = -1.0;
        for i in 0..200 {
            let x = lower + f64::from(i) * 0.0173;
            let q = quantize(x, step, lower);
            assert!((q - x).abs() <= step / 2.0 + EPS, "{x} -> {q}");
            let steps = (q - lower) / step;
            assert!((steps - steps.round()).abs() < EPS);
            assert!((quantize(q, step, lower) - q).abs() < EPS);
        }
    }

    #[test]
    fn clamp_is_identity_in_range() {
        for v in [0.0, 12.5, 99.999, 100.0] {
            assert_eq!(clamp_to_range(v, 0.0, 100.0), v);
        }
        assert_eq!(clamp_to_range(-3.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp_to_range(130.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn normalized_endpoints_and_monotonicity() {
        assert_eq!(value_to_normalized(20.0, 20.0, 70.0), 0.0);
        assert_eq!(value_to_normalized(70.0, 20.0, 70.0), 1.0);
        let mut previous = -1.0;
        for i in 0..=50 {
            let p = value_to_normalized(20.0 + f64::from(i), 20.0, 70.0);
            assert!(p > previous);
            previous = p;
        }
    }

    #[test]
    fn normalized_is_clamped() {
        assert_eq!(value_to_normalized(-50.0, 0.0, 10.0), 0.0);
        assert_eq!(value_to_normalized(50.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn empty_range_pins_to_one() {
        assert_eq!(value_to_normalized(3.0, 3.0, 3.0), 1.0);
    }

    #[test]
    fn map_offset_steps_and_clamps() {
        let mapped = map_offset(94.0, 200.0, 0.0, 100.0, 10.0);
        assert!((mapped.raw - 47.0).abs() < 1e-4);
        assert_eq!(mapped.stepped, 50.0);

        // 10 is not reachable in whole steps of 3 from 0, 9 is the last stop.
        let mapped = map_offset(200.0, 200.0, 0.0, 10.0, 3.0);
        assert_eq!(mapped.stepped, 9.0);
    }
}
