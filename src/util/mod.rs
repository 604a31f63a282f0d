use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod collision;
pub mod intersect;
pub mod linalg;
pub mod viewport;

pub mod angle {
    use std::f32::consts::TAU;

    /// Wraps an angle in radians into `[0, 2π)`.
    pub fn normalized(radians: f32) -> f32 {
        radians.rem_euclid(TAU)
    }

    /// Wraps an angle in degrees into `[0, 360)`.
    pub fn normalized_degrees(degrees: f32) -> f32 {
        degrees.rem_euclid(360.0)
    }

    /// Signed angular distance from `from` to `to` in radians, taking the short
    /// way around the wraparound boundary. The result magnitude is at most π.
    ///
    /// For example, from 359° to 1° the short way is +2°, not -358°.
    pub fn difference(from: f32, to: f32) -> f32 {
        difference_full_turn(from, to, TAU)
    }

    /// Degree version of [`difference`]; result magnitude is at most 180.
    pub fn difference_degrees(from: f32, to: f32) -> f32 {
        difference_full_turn(from, to, 360.0)
    }

    fn difference_full_turn(from: f32, to: f32, full: f32) -> f32 {
        let a1 = from.rem_euclid(full);
        let mut a2 = to.rem_euclid(full);
        // Move a2 to the representative within half a turn of a1.
        if a2 - a1 > full / 2.0 {
            a2 -= full;
        } else if a1 - a2 > full / 2.0 {
            a2 += full;
        }
        a2 - a1
    }
}

pub mod bounds {
    /// True iff `value` lies strictly between `p1` and `p2` (in either order).
    /// Equality with an endpoint does not count.
    pub fn within(p1: f32, p2: f32, value: f32) -> bool {
        p1.min(p2) < value && value < p1.max(p2)
    }

    /// Whether the 1-D intervals `(p1, p2)` and `(p3, p4)` overlap, treating
    /// each pair as unordered endpoints. Touching endpoints count as overlap.
    pub fn intersect_inclusive(p1: f32, p2: f32, p3: f32, p4: f32) -> bool {
        p1.min(p2) <= p3.max(p4) && p1.max(p2) >= p3.min(p4)
    }

    /// Like [`intersect_inclusive`], but touching endpoints do not count.
    pub fn intersect_exclusive(p1: f32, p2: f32, p3: f32, p4: f32) -> bool {
        p1.min(p2) < p3.max(p4) && p1.max(p2) > p3.min(p4)
    }
}

pub fn setup_log() -> Result<()> {
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("run.log")?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(logfile)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    // ==================== Angle Utilities ====================

    #[test]
    fn angle_normalized_wraps_into_full_turn() {
        check_eq!(angle::normalized(0.0), 0.0);
        check_ge!(angle::normalized(-FRAC_PI_2), 0.0);
        check_lt!((angle::normalized(TAU + FRAC_PI_2) - FRAC_PI_2).abs(), EPSILON);
        check_lt!((angle::normalized(-FRAC_PI_2) - (TAU - FRAC_PI_2)).abs(), EPSILON);
        check_lt!((angle::normalized(-3.0 * TAU) - 0.0).abs(), EPSILON);
        check_eq!(angle::normalized_degrees(720.0), 0.0);
        check_eq!(angle::normalized_degrees(-90.0), 270.0);
    }

    #[test]
    fn angle_difference_crosses_wraparound() {
        check_lt!((angle::difference_degrees(1.0, 359.0) - (-2.0)).abs(), EPSILON);
        check_lt!((angle::difference_degrees(359.0, 1.0) - 2.0).abs(), EPSILON);
    }

    #[test]
    fn angle_difference_plain_gap() {
        check_lt!((angle::difference_degrees(10.0, 40.0) - 30.0).abs(), EPSILON);
        check_lt!((angle::difference_degrees(40.0, 10.0) - (-30.0)).abs(), EPSILON);
    }

    #[test]
    fn angle_difference_radians_matches_degrees() {
        let diff = angle::difference(1_f32.to_radians(), 359_f32.to_radians());
        check_lt!((diff - (-2_f32.to_radians())).abs(), EPSILON);
    }

    #[test]
    fn angle_difference_magnitude_at_most_half_turn() {
        for a1 in [0.0, 1.0, 3.0, 5.0, 7.0, -2.0] {
            for a2 in [0.0, 0.5, 2.0, 4.5, 6.2, -1.0] {
                check_le!(angle::difference(a1, a2).abs(), PI + EPSILON);
            }
        }
    }

    #[test]
    fn angle_difference_unnormalized_inputs() {
        // Inputs outside [0, 360) are normalized before comparison.
        check_lt!((angle::difference_degrees(719.0, -359.0) - 2.0).abs(), 1e-3);
    }

    // ==================== Bounds Utilities ====================

    #[test]
    fn within_is_strict() {
        check!(bounds::within(0.0, 10.0, 5.0));
        check_false!(bounds::within(0.0, 10.0, 0.0));
        check_false!(bounds::within(0.0, 10.0, 10.0));
        check_false!(bounds::within(0.0, 10.0, -1.0));
        check_false!(bounds::within(0.0, 10.0, 11.0));
    }

    #[test]
    fn within_is_order_independent() {
        check!(bounds::within(10.0, 0.0, 5.0));
        check_false!(bounds::within(10.0, 0.0, 10.0));
    }

    #[test]
    fn within_degenerate_interval_is_empty() {
        check_false!(bounds::within(3.0, 3.0, 3.0));
    }

    #[test]
    fn intersect_inclusive_counts_touching_endpoints() {
        check!(bounds::intersect_inclusive(0.0, 10.0, 10.0, 20.0));
        check_false!(bounds::intersect_exclusive(0.0, 10.0, 10.0, 20.0));
    }

    #[test]
    fn intersect_overlapping_intervals() {
        check!(bounds::intersect_inclusive(0.0, 10.0, 5.0, 20.0));
        check!(bounds::intersect_exclusive(0.0, 10.0, 5.0, 20.0));
        check!(bounds::intersect_exclusive(5.0, 20.0, 10.0, 0.0));
    }

    #[test]
    fn intersect_disjoint_intervals() {
        check_false!(bounds::intersect_inclusive(0.0, 1.0, 2.0, 3.0));
        check_false!(bounds::intersect_exclusive(3.0, 2.0, 1.0, 0.0));
    }

    #[test]
    fn intersect_contained_interval() {
        check!(bounds::intersect_inclusive(0.0, 10.0, 4.0, 6.0));
        check!(bounds::intersect_exclusive(4.0, 6.0, 0.0, 10.0));
    }
}
