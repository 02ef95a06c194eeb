// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`
use kurbo::Point;

/// Returns the Euclidean distance between two concurrent touch contacts.
#[must_use]
pub fn spacing(p0: Point, p1: Point) -> f64 {
    p0.distance(p1)
}

/// Returns the midpoint of two concurrent touch contacts.
#[must_use]
pub fn midpoint(p0: Point, p1: Point) -> Point {
    p0.midpoint(p1)
}

/// Returns the angle of the segment from `p1` to `p0`, in degrees.
///
/// This is `atan2(p0.y - p1.y, p0.x - p1.x)` converted to degrees, so the
/// result lies in `(-180, 180]` with no further wraparound normalization.
/// The gesture engine only ever consumes differences of consecutive angles,
/// so the choice of contact order merely has to stay consistent within a
/// gesture.
#[must_use]
pub fn angle(p0: Point, p1: Point) -> f64 {
    (p0.y - p1.y).atan2(p0.x - p1.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{angle, midpoint, spacing};

    #[test]
    fn spacing_is_euclidean() {
        let d = spacing(Point::new(1.0, 2.0), Point::new(4.0, 6.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn spacing_of_coincident_contacts_is_zero() {
        assert_eq!(spacing(Point::new(7.0, 7.0), Point::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn midpoint_is_arithmetic_mean() {
        let m = midpoint(Point::new(10.0, 0.0), Point::new(0.0, 6.0));
        assert_eq!(m, Point::new(5.0, 3.0));
    }

    #[test]
    fn angle_of_axis_aligned_pairs() {
        // Contact 0 to the right of contact 1.
        assert_eq!(angle(Point::new(10.0, 0.0), Point::new(0.0, 0.0)), 0.0);
        // Contact 0 below contact 1 (y grows downward in view coordinates).
        assert_eq!(angle(Point::new(0.0, 10.0), Point::new(0.0, 0.0)), 90.0);
        // Contact 0 to the left of contact 1.
        assert_eq!(angle(Point::new(-10.0, 0.0), Point::new(0.0, 0.0)), 180.0);
    }

    #[test]
    fn angle_of_diagonal_pair() {
        let a = angle(Point::new(1.0, 1.0), Point::new(0.0, 0.0));
        assert!((a - 45.0).abs() < 1e-12);
    }

    #[test]
    fn angle_is_antisymmetric_in_contact_order() {
        let a = angle(Point::new(3.0, 4.0), Point::new(0.0, 0.0));
        let b = angle(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!(((a - b).abs() - 180.0).abs() < 1e-12);
    }
}
