// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

/// Number of values in a serialized scene transform.
const SNAPSHOT_LEN: usize = 9;

/// An immutable serialized scene transform: the nine values of the 3x3
/// matrix in row-major order.
///
/// The layout is `[scale_x, skew_x, trans_x, skew_y, scale_y, trans_y,
/// 0, 0, 1]`, with the bottom row always the identity row (the transform is
/// affine, never projective). Snapshots are created by the gesture engine's
/// export path and consumed verbatim on restore; equality is exact
/// nine-value equality, so `Affine -> SceneSnapshot -> Affine` round-trips
/// bit-for-bit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSnapshot([f64; SNAPSHOT_LEN]);

impl SceneSnapshot {
    /// Creates a snapshot from raw row-major matrix values.
    #[must_use]
    pub const fn new(values: [f64; SNAPSHOT_LEN]) -> Self {
        Self(values)
    }

    /// Returns the row-major matrix values.
    #[must_use]
    pub const fn values(&self) -> [f64; SNAPSHOT_LEN] {
        self.0
    }
}

impl From<Affine> for SceneSnapshot {
    fn from(transform: Affine) -> Self {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        // Column-major coefficients to row-major matrix values.
        Self([a, c, e, b, d, f, 0.0, 0.0, 1.0])
    }
}

impl From<SceneSnapshot> for Affine {
    fn from(snapshot: SceneSnapshot) -> Self {
        let [scale_x, skew_x, trans_x, skew_y, scale_y, trans_y, ..] = snapshot.0;
        Self::new([scale_x, skew_y, skew_x, scale_y, trans_x, trans_y])
    }
}
