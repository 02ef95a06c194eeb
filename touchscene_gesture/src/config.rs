// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Runtime-mutable gesture settings, consulted on every gesture step.
///
/// No cross-validation is performed: callers are responsible for keeping
/// `min_zoom <= max_zoom`. An inverted range degrades gracefully (the lower
/// bound wins) rather than panicking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Whether pinch gestures zoom the image.
    pub zoom: bool,
    /// Whether single-contact drags translate the image.
    pub translate: bool,
    /// Whether multi-contact gestures rotate the image.
    pub rotate: bool,
    /// Whether double taps are interpreted. Not consulted yet.
    // TODO: interpret double taps as a zoom toggle.
    pub double_tap: bool,
    /// Minimum zoom factor, relative to the fitted baseline scale.
    pub min_zoom: f64,
    /// Maximum zoom factor, relative to the fitted baseline scale.
    pub max_zoom: f64,
    /// Minimum spacing between two contacts for a pinch to engage, in view
    /// units. Pairs closer than this keep the gesture in drag mode.
    pub min_multitouch_distance: f64,
    /// Maximum distance the image may leave the viewport before being pulled
    /// back; negative disables the limit. Not consulted yet.
    pub max_screen_offset: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom: true,
            translate: false,
            rotate: false,
            double_tap: false,
            min_zoom: 0.9,
            max_zoom: 3.0,
            min_multitouch_distance: 10.0,
            max_screen_offset: -1.0,
        }
    }
}
