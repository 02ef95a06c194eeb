// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`, `atan2`, `round`
use kurbo::{Affine, Point, Rect, Size};

/// Returns the effective uniform scale factor of `transform`.
///
/// Computed as `sqrt(scale_x² + skew_x²)` over the matrix coefficients, so
/// the result is invariant under composing the transform with any pure
/// rotation: rotation moves energy between the scale and skew components
/// without changing their combined magnitude.
#[must_use]
pub fn uniform_scale(transform: Affine) -> f64 {
    let [scale_x, _, skew_x, ..] = transform.as_coeffs();
    (scale_x * scale_x + skew_x * skew_x).sqrt()
}

/// Returns the rotation angle of `transform` in degrees, in `(-180, 180]`.
///
/// Computed as `-round(degrees(atan2(skew_x, scale_x)))`. The sign
/// convention makes `rotation_angle(Affine::rotate(th))` equal to
/// `round(th.to_degrees())`, i.e. positive angles are visually clockwise in
/// y-down view coordinates. The rounding to whole degrees and the exact sign
/// are relied upon by the quadrant branching in `touchscene_bounds`, which
/// compares against the 90° boundaries inclusively.
#[must_use]
pub fn rotation_angle(transform: Affine) -> f64 {
    let [scale_x, _, skew_x, ..] = transform.as_coeffs();
    -skew_x.atan2(scale_x).to_degrees().round()
}

/// Maps the four corners of an axis-aligned `size` rectangle anchored at the
/// origin through `transform`.
///
/// The corners are returned in the fixed pre-transform label order top-left,
/// top-right, bottom-right, bottom-left. The labels do not rotate with the
/// image: after a 180° rotation the "top-left" entry is visually the
/// bottom-right point. Callers that need true visual extremes must re-derive
/// them per rotation quadrant (see `touchscene_bounds`).
#[must_use]
pub fn map_corners(transform: Affine, size: Size) -> [Point; 4] {
    [
        transform * Point::ZERO,
        transform * Point::new(size.width, 0.0),
        transform * Point::new(size.width, size.height),
        transform * Point::new(0.0, size.height),
    ]
}

/// Returns the axis-aligned bounding rectangle of a `size` rectangle
/// anchored at the origin and mapped through `transform`.
#[must_use]
pub fn image_rect(transform: Affine, size: Size) -> Rect {
    transform.transform_rect_bbox(Rect::from_origin_size(Point::ZERO, size))
}
