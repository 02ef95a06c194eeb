// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchscene Bounds: viewport bounds and centering policy.
//!
//! Helpers that relate a transformed image rectangle to a fixed viewport:
//! - [`corner_offset_from_origin`]: the visual top/left extremes of the
//!   image, re-derived per rotation quadrant from the statically labeled
//!   corners.
//! - [`centering_delta`]: the translation delta that centers a small image
//!   or pulls an overflowing image back flush with the viewport edges.
//! - [`drag_delta_within_bounds`]: a probe for drag deltas against an
//!   offset-limit rectangle.
//!
//! All functions return explicit deltas or offsets; none of them mutate a
//! transform. The caller decides when (and whether) to apply the result,
//! for example on gesture end.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Size, Vec2};
//! use touchscene_bounds::centering_delta;
//!
//! // A 100x50 image sitting at (30, 40) inside an 800x600 viewport.
//! let transform = Affine::translate(Vec2::new(30.0, 40.0));
//! let delta = centering_delta(transform, Size::new(100.0, 50.0), Size::new(800.0, 600.0));
//! assert_eq!(delta, Vec2::new(320.0, 235.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Rect, Size, Vec2};
use touchscene_geometry::{image_rect, map_corners, rotation_angle};

// Indices into the fixed corner label order of
// [`touchscene_geometry::map_corners`].
const TOP_LEFT: usize = 0;
const TOP_RIGHT: usize = 1;
const BOTTOM_RIGHT: usize = 2;
const BOTTOM_LEFT: usize = 3;

/// Whether the static corner labels still face their labeled direction.
///
/// Past 90° of rotation either way, the bottom-labeled corners are the
/// visually top ones and vice versa, so every selection below flips the
/// label pair it consults.
fn labels_upright(angle: f64) -> bool {
    angle.abs() <= 90.0
}

/// Whether the rotation angle lies in the first or third quadrant
/// (`[0, 90]` or `(-180, -90)`).
///
/// The left-extreme corner moves between the top- and bottom-labeled pairs
/// as the image rotates through the quadrants, and it does so asymmetrically
/// with respect to the top-extreme selection.
fn first_or_third_quadrant(angle: f64) -> bool {
    (0.0..=90.0).contains(&angle) || (angle > -180.0 && angle < -90.0)
}

fn min_y_of_top_points(points: &[Point; 4], angle: f64) -> f64 {
    let (p0, p1) = if labels_upright(angle) {
        (points[TOP_LEFT], points[TOP_RIGHT])
    } else {
        (points[BOTTOM_RIGHT], points[BOTTOM_LEFT])
    };
    p0.y.min(p1.y)
}

fn max_y_of_bottom_points(points: &[Point; 4], angle: f64) -> f64 {
    let (p0, p1) = if labels_upright(angle) {
        (points[BOTTOM_RIGHT], points[BOTTOM_LEFT])
    } else {
        (points[TOP_LEFT], points[TOP_RIGHT])
    };
    p0.y.max(p1.y)
}

fn min_x_of_top_points(points: &[Point; 4], angle: f64) -> f64 {
    let (p0, p1) = if labels_upright(angle) {
        (points[TOP_LEFT], points[TOP_RIGHT])
    } else {
        (points[BOTTOM_RIGHT], points[BOTTOM_LEFT])
    };
    p0.x.min(p1.x)
}

fn min_x_of_bottom_points(points: &[Point; 4], angle: f64) -> f64 {
    let (p0, p1) = if labels_upright(angle) {
        (points[BOTTOM_RIGHT], points[BOTTOM_LEFT])
    } else {
        (points[TOP_LEFT], points[TOP_RIGHT])
    };
    p0.x.min(p1.x)
}

// The max-x selections consult the opposite label pair from the min-x ones;
// the drag probe below pairs a min from one edge with a max from the other.
fn max_x_of_top_points(points: &[Point; 4], angle: f64) -> f64 {
    let (p0, p1) = if labels_upright(angle) {
        (points[BOTTOM_RIGHT], points[BOTTOM_LEFT])
    } else {
        (points[TOP_LEFT], points[TOP_RIGHT])
    };
    p0.x.max(p1.x)
}

fn max_x_of_bottom_points(points: &[Point; 4], angle: f64) -> f64 {
    let (p0, p1) = if labels_upright(angle) {
        (points[TOP_LEFT], points[TOP_RIGHT])
    } else {
        (points[BOTTOM_RIGHT], points[BOTTOM_LEFT])
    };
    p0.x.max(p1.x)
}

/// Returns the offset of the transformed image relative to the viewport
/// origin (the upper-left corner of the screen).
///
/// - `y` is the top-most corner's y coordinate.
/// - `x` depends on the rotation quadrant: for angles in `[0, 90]` or
///   `(-180, -90)` it is the minimum x of the bottom-labeled corners,
///   otherwise the minimum x of the top-labeled corners.
///
/// The asymmetric corner selection exists because corner labels do not
/// rotate with the image; this function re-derives the true visual extremes
/// per quadrant.
#[must_use]
pub fn corner_offset_from_origin(transform: Affine, image_size: Size) -> Point {
    let points = map_corners(transform, image_size);
    let angle = rotation_angle(transform);

    let top_y = min_y_of_top_points(&points, angle);
    let left_x = if first_or_third_quadrant(angle) {
        min_x_of_bottom_points(&points, angle)
    } else {
        min_x_of_top_points(&points, angle)
    };
    Point::new(left_x, top_y)
}

/// Returns the translation delta that moves the transformed image into a
/// sensible position inside the viewport.
///
/// Per axis, on the axis-aligned bounding rectangle of the rotated image:
/// - extent smaller than the viewport: center it;
/// - near edge past the viewport's near edge (positive offset): pull it
///   back to exactly 0;
/// - far edge inside the viewport's far edge: push it back flush;
/// - otherwise: leave it unmoved.
///
/// The delta is not applied automatically; callers typically post-translate
/// by it on gesture end.
#[must_use]
pub fn centering_delta(transform: Affine, image_size: Size, viewport: Size) -> Vec2 {
    let rect = image_rect(transform, image_size);
    let width = rect.width();
    let height = rect.height();

    let delta_x = if width < viewport.width {
        (viewport.width - width) / 2.0 - rect.x0
    } else if rect.x0 > 0.0 {
        -rect.x0
    } else if rect.x1 < viewport.width {
        viewport.width - rect.x1
    } else {
        0.0
    };

    let delta_y = if height < viewport.height {
        (viewport.height - height) / 2.0 - rect.y0
    } else if rect.y0 > 0.0 {
        -rect.y0
    } else if rect.y1 < viewport.height {
        viewport.height - rect.y1
    } else {
        0.0
    };

    Vec2::new(delta_x, delta_y)
}

/// Probes a drag delta against an offset-limit rectangle.
///
/// `current` and `start` are the current and gesture-start touch points;
/// their difference is the raw drag delta. For each axis, the leading edge
/// of the image for that drag direction (top/bottom extreme for y, left or
/// right extreme for x, selected per rotation quadrant) is moved by the
/// delta and checked against `limit`. The returned component is `0` when
/// the probe point stays inside `limit`, and the raw delta when it leaves.
///
/// This is a caller-invoked building block for limiting how far an image
/// may be dragged off screen; the engine itself does not consult it.
#[must_use]
pub fn drag_delta_within_bounds(
    current: Point,
    start: Point,
    transform: Affine,
    image_size: Size,
    limit: Rect,
) -> Vec2 {
    let points = map_corners(transform, image_size);
    let angle = rotation_angle(transform);

    let dx = current.x - start.x;
    let dy = current.y - start.y;

    let top_y = min_y_of_top_points(&points, angle);
    let bottom_y = max_y_of_bottom_points(&points, angle);
    let contains_height = if dy > 0.0 {
        limit.contains(Point::new(limit.x0, top_y + dy))
    } else {
        limit.contains(Point::new(limit.x0, bottom_y + dy))
    };

    let left_x = if first_or_third_quadrant(angle) {
        min_x_of_bottom_points(&points, angle)
    } else {
        min_x_of_top_points(&points, angle)
    };
    let right_x = if first_or_third_quadrant(angle) {
        max_x_of_top_points(&points, angle)
    } else {
        max_x_of_bottom_points(&points, angle)
    };
    let contains_width = if dx > 0.0 {
        limit.contains(Point::new(left_x + dx, limit.y0))
    } else {
        limit.contains(Point::new(right_x + dx, limit.y0))
    };

    Vec2::new(
        if contains_width { 0.0 } else { dx },
        if contains_height { 0.0 } else { dy },
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size, Vec2};

    use super::{centering_delta, corner_offset_from_origin, drag_delta_within_bounds};

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    #[test]
    fn offset_of_untransformed_image_is_origin() {
        let offset = corner_offset_from_origin(Affine::IDENTITY, Size::new(100.0, 50.0));
        assert_eq!(offset, Point::new(0.0, 0.0));
    }

    #[test]
    fn offset_follows_translation() {
        let transform = Affine::translate(Vec2::new(25.0, -10.0));
        let offset = corner_offset_from_origin(transform, Size::new(100.0, 50.0));
        assert_eq!(offset, Point::new(25.0, -10.0));
    }

    #[test]
    fn offset_of_quarter_rotated_image() {
        // 4x2 image rotated 90° about the origin occupies [-2, 0] x [0, 4].
        let transform = Affine::rotate(core::f64::consts::FRAC_PI_2);
        let offset = corner_offset_from_origin(transform, Size::new(4.0, 2.0));
        assert!((offset.x - -2.0).abs() < 1e-9);
        assert!((offset.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn offset_of_negative_quarter_rotated_image() {
        // 4x2 image rotated -90° about the origin occupies [0, 2] x [-4, 0].
        let transform = Affine::rotate(-core::f64::consts::FRAC_PI_2);
        let offset = corner_offset_from_origin(transform, Size::new(4.0, 2.0));
        assert!((offset.x - 0.0).abs() < 1e-9);
        assert!((offset.y - -4.0).abs() < 1e-9);
    }

    #[test]
    fn offset_of_half_rotated_image() {
        // 4x2 image rotated 180° about the origin occupies [-4, 0] x [-2, 0].
        let transform = Affine::rotate(core::f64::consts::PI);
        let offset = corner_offset_from_origin(transform, Size::new(4.0, 2.0));
        assert!((offset.x - -4.0).abs() < 1e-9);
        assert!((offset.y - -2.0).abs() < 1e-9);
    }

    #[test]
    fn small_image_is_centered_on_both_axes() {
        let transform = Affine::translate(Vec2::new(30.0, 40.0));
        let delta = centering_delta(transform, Size::new(100.0, 50.0), VIEWPORT);
        assert_eq!(delta, Vec2::new(320.0, 235.0));
    }

    #[test]
    fn overflowing_image_past_near_edge_is_pulled_back_to_zero() {
        let transform = Affine::translate(Vec2::new(50.0, -20.0));
        let delta = centering_delta(transform, Size::new(1000.0, 800.0), VIEWPORT);
        assert_eq!(delta, Vec2::new(-50.0, 0.0));
    }

    #[test]
    fn overflowing_image_with_far_edge_inside_is_aligned_flush() {
        let transform = Affine::translate(Vec2::new(-400.0, -300.0));
        let delta = centering_delta(transform, Size::new(1000.0, 800.0), VIEWPORT);
        assert_eq!(delta, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn image_covering_the_viewport_is_left_unmoved() {
        let transform = Affine::translate(Vec2::new(-100.0, -100.0));
        let delta = centering_delta(transform, Size::new(1000.0, 800.0), VIEWPORT);
        assert_eq!(delta, Vec2::ZERO);
    }

    #[test]
    fn centering_respects_scaled_extent() {
        // 100x50 image at 2x occupies 200x100 and still fits the viewport.
        let transform = Affine::scale(2.0);
        let delta = centering_delta(transform, Size::new(100.0, 50.0), VIEWPORT);
        assert_eq!(delta, Vec2::new(300.0, 250.0));
    }

    #[test]
    fn drag_probe_inside_limit_returns_zero() {
        let limit = Rect::new(0.0, 0.0, 800.0, 600.0);
        let delta = drag_delta_within_bounds(
            Point::new(60.0, 70.0),
            Point::new(50.0, 50.0),
            Affine::IDENTITY,
            Size::new(100.0, 100.0),
            limit,
        );
        assert_eq!(delta, Vec2::ZERO);
    }

    #[test]
    fn drag_probe_leaving_limit_returns_raw_delta() {
        let limit = Rect::new(0.0, 0.0, 800.0, 600.0);
        let delta = drag_delta_within_bounds(
            Point::new(980.0, 50.0),
            Point::new(50.0, 50.0),
            Affine::IDENTITY,
            Size::new(100.0, 100.0),
            limit,
        );
        assert_eq!(delta, Vec2::new(930.0, 0.0));
    }

    #[test]
    fn drag_probe_at_quarter_rotation_uses_the_swapped_right_table() {
        let limit = Rect::new(0.0, 0.0, 800.0, 600.0);
        // 100x100 image rotated 90° and moved to [100, 200] x [50, 150].
        // At this quadrant the rightward probe reads the bottom-labeled
        // corners, which sit at the visual *left* edge (x = 100), so a left
        // drag of 150 already reports the limit as left.
        let transform = Affine::translate(Vec2::new(200.0, 50.0))
            * Affine::rotate(core::f64::consts::FRAC_PI_2);
        let delta = drag_delta_within_bounds(
            Point::new(-100.0, 50.0),
            Point::new(50.0, 50.0),
            transform,
            Size::new(100.0, 100.0),
            limit,
        );
        assert_eq!(delta, Vec2::new(-150.0, 0.0));
    }

    #[test]
    fn drag_probe_at_half_rotation_uses_the_flipped_labels() {
        let limit = Rect::new(0.0, 0.0, 800.0, 600.0);
        // 100x100 image rotated 180° and moved to [200, 300] x [200, 300];
        // the leftward extreme now comes from the bottom-labeled corners.
        let transform =
            Affine::translate(Vec2::new(300.0, 300.0)) * Affine::rotate(core::f64::consts::PI);
        let delta = drag_delta_within_bounds(
            Point::new(900.0, 250.0),
            Point::new(250.0, 250.0),
            transform,
            Size::new(100.0, 100.0),
            limit,
        );
        assert_eq!(delta, Vec2::new(650.0, 0.0));
    }

    #[test]
    fn vertical_drag_probe_leaving_limit_returns_raw_delta() {
        let limit = Rect::new(0.0, 0.0, 800.0, 600.0);
        // 100x100 image rotated -90° and moved to [100, 200] x [300, 400].
        // An upward drag probes the bottom extreme (y = 400); 800 up puts it
        // far above the limit.
        let transform = Affine::translate(Vec2::new(100.0, 400.0))
            * Affine::rotate(-core::f64::consts::FRAC_PI_2);
        let size = Size::new(100.0, 100.0);
        let delta = drag_delta_within_bounds(
            Point::new(150.0, -450.0),
            Point::new(150.0, 350.0),
            transform,
            size,
            limit,
        );
        assert_eq!(delta, Vec2::new(0.0, -800.0));

        // A downward drag probes the top extreme (y = 300) instead.
        let delta = drag_delta_within_bounds(
            Point::new(150.0, 700.0),
            Point::new(150.0, 350.0),
            transform,
            size,
            limit,
        );
        assert_eq!(delta, Vec2::new(0.0, 350.0));
    }

    #[test]
    fn drag_probe_checks_trailing_edge_for_negative_deltas() {
        let limit = Rect::new(0.0, 0.0, 800.0, 600.0);
        // Image right edge at 100; dragging left by 150 puts the probe at
        // -50, outside the limit.
        let delta = drag_delta_within_bounds(
            Point::new(-100.0, 50.0),
            Point::new(50.0, 50.0),
            Affine::IDENTITY,
            Size::new(100.0, 100.0),
            limit,
        );
        assert_eq!(delta, Vec2::new(-150.0, 0.0));
    }
}
