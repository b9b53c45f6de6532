//! Linear rescaling between display space and simulation space.
//!
//! The frontend edits everything in a fixed `[0, 100)` range while the
//! backend reports coordinates in a per-session `[0, size)` range. Both
//! directions are pure linear maps taking their extents explicitly; there is
//! no shared scale state and no clamping.

use crate::types::LOCAL_SIZE;

/// Map `v` from the range `[0, from)` to the range `[0, to)`.
///
/// `from` and `to` must be strictly positive. Values outside `[0, from)`
/// map outside `[0, to)` without error; the backend and UI are trusted not
/// to emit out-of-range coordinates.
pub fn rescale(v: f64, from: f64, to: f64) -> f64 {
    debug_assert!(from > 0.0 && to > 0.0, "extents must be strictly positive");
    v * (to / from)
}

/// Convert a backend simulation coordinate to a display coordinate.
pub fn to_display(v: f64, size: f64) -> f64 {
    rescale(v, size, LOCAL_SIZE)
}

/// Convert a display coordinate to a backend simulation coordinate.
pub fn to_sim(v: f64, size: f64) -> f64 {
    rescale(v, LOCAL_SIZE, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn rescale_maps_known_values() {
        assert!((rescale(10.0, 128.0, 100.0) - 7.8125).abs() < EPS);
        assert!((rescale(20.0, 128.0, 100.0) - 15.625).abs() < EPS);
        assert!((rescale(50.0, 100.0, 128.0) - 64.0).abs() < EPS);
    }

    #[test]
    fn rescale_is_identity_for_equal_extents() {
        assert!((rescale(37.5, 100.0, 100.0) - 37.5).abs() < EPS);
    }

    #[test]
    fn to_display_and_to_sim_round_trip_on_same_axis() {
        for size in [32.0, 128.0, 256.0, 1000.0] {
            for v in [0.0, 0.5, 7.8125, 42.0, 99.999] {
                let there_and_back = to_display(to_sim(v, size), size);
                assert!(
                    (there_and_back - v).abs() < EPS,
                    "v={v} size={size} got {there_and_back}"
                );
            }
        }
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        assert!((to_display(200.0, 128.0) - 156.25).abs() < EPS);
        assert!((to_sim(-10.0, 128.0) - -12.8).abs() < EPS);
    }
}
