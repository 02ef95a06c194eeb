// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};
use touchscene_geometry::{SceneSnapshot, angle, midpoint, rotation_angle, spacing, uniform_scale};

use crate::config::GestureConfig;
use crate::event::{GestureEvent, Update};

/// Scales at or below this are treated as degenerate when normalizing the
/// zoom step bounds, to keep infinities out of the clamp.
const SCALE_EPSILON: f64 = 1e-5;

/// The current gesture mode, as visible to hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchPhase {
    /// No contact is being tracked.
    #[default]
    Idle,
    /// A single contact is dragging the image.
    Drag,
    /// Two or more contacts are pinching/rotating the image.
    MultiTouch,
}

/// Per-gesture data for a single-contact drag.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Transform snapshot taken when the contact landed.
    saved: Affine,
    /// Position of the contact when it landed.
    start: Point,
}

/// Per-gesture data for a two-or-more-contact pinch.
#[derive(Clone, Copy, Debug)]
struct PinchSession {
    /// Transform snapshot taken when the extra contact landed.
    saved: Affine,
    /// Midpoint of the first two contacts when the pinch engaged; zoom and
    /// rotation pivot about this point for the rest of the gesture.
    midpoint: Point,
    /// Spacing of the first two contacts, recorded at the latest
    /// extra-contact landing. Zoom ratios are computed against this value;
    /// moves never refresh it.
    start_spacing: f64,
    /// Inter-contact angle recorded at the latest extra-contact landing.
    /// Rotation is applied as the delta against this value; moves never
    /// refresh it.
    start_angle: f64,
}

/// Gesture state as a tagged variant carrying exactly the session data
/// valid for that state, so stale fields cannot be read in the wrong mode.
/// Rotation is only reachable in [`GestureState::Pinch`], which is only
/// entered by an extra contact landing; leaving the state suppresses
/// rotation again without a separate flag.
#[derive(Clone, Copy, Debug)]
enum GestureState {
    Idle,
    Drag(DragSession),
    Pinch(PinchSession),
}

/// Headless engine converting pointer events into an image transform.
///
/// The engine tracks the live scene transform, the image and viewport
/// extents, and the baseline scale established when the image was last
/// fitted to the viewport. It is single-threaded and synchronous: one event
/// is fully processed per [`GestureEngine::process`] call, and the updated
/// transform is returned as an owned value.
#[derive(Clone, Debug)]
pub struct GestureEngine {
    config: GestureConfig,
    transform: Affine,
    state: GestureState,
    image_size: Size,
    viewport: Size,
    /// Scale of the transform produced by the last fit; zoom bounds are
    /// expressed relative to it so they adapt to images larger or smaller
    /// than the viewport.
    init_scale: f64,
    /// Whether the image has been fitted to the viewport at least once.
    fitted: bool,
    /// Snapshot restored before the first fit, applied by the next
    /// [`GestureEngine::reset`].
    pending_restore: Option<SceneSnapshot>,
}

impl GestureEngine {
    /// Creates an engine with default configuration, an identity transform,
    /// and no image or viewport extents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GestureConfig::default(),
            transform: Affine::IDENTITY,
            state: GestureState::Idle,
            image_size: Size::ZERO,
            viewport: Size::ZERO,
            init_scale: 1.0,
            fitted: false,
            pending_restore: None,
        }
    }

    /// Returns the current gesture settings.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the gesture settings for mutation; changes take effect on
    /// the next gesture step.
    pub fn config_mut(&mut self) -> &mut GestureConfig {
        &mut self.config
    }

    /// Returns the current scene transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the current gesture mode.
    #[must_use]
    pub fn phase(&self) -> TouchPhase {
        match self.state {
            GestureState::Idle => TouchPhase::Idle,
            GestureState::Drag(_) => TouchPhase::Drag,
            GestureState::Pinch(_) => TouchPhase::MultiTouch,
        }
    }

    /// Returns the effective uniform scale of the current transform.
    #[must_use]
    pub fn scale(&self) -> f64 {
        uniform_scale(self.transform)
    }

    /// Returns the rotation of the current transform in whole degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        rotation_angle(self.transform)
    }

    /// Returns the baseline scale established by the last fit.
    #[must_use]
    pub fn init_scale(&self) -> f64 {
        self.init_scale
    }

    /// Sets the viewport extents in view units.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Sets the displayed image's extents in view units.
    ///
    /// After the first fit, swapping in a new image resets the scene for it.
    pub fn set_image_size(&mut self, image_size: Size) -> Update {
        self.image_size = image_size;
        if self.fitted {
            self.reset()
        } else {
            self.ignored()
        }
    }

    /// Fits the image into the viewport and establishes the zoom baseline.
    ///
    /// The image rectangle is scaled uniformly to fit entirely inside the
    /// viewport and centered on both axes; `init_scale` is decomposed from
    /// the fitted transform. A snapshot restored before this call takes
    /// precedence over the fitted placement (the baseline still comes from
    /// the fit). No-op while either extent is empty.
    pub fn reset(&mut self) -> Update {
        if self.image_size.width <= 0.0
            || self.image_size.height <= 0.0
            || self.viewport.width <= 0.0
            || self.viewport.height <= 0.0
        {
            return self.ignored();
        }

        let sx = self.viewport.width / self.image_size.width;
        let sy = self.viewport.height / self.image_size.height;
        let fit_scale = sx.min(sy);
        let offset = Vec2::new(
            (self.viewport.width - self.image_size.width * fit_scale) / 2.0,
            (self.viewport.height - self.image_size.height * fit_scale) / 2.0,
        );
        self.transform = Affine::translate(offset) * Affine::scale(fit_scale);
        self.init_scale = uniform_scale(self.transform);

        // A restore that arrived before the first fit wins over the fitted
        // placement.
        if let Some(snapshot) = self.pending_restore.take() {
            self.transform = snapshot.into();
        }
        self.fitted = true;

        Update {
            transform: self.transform,
            redraw: true,
        }
    }

    /// Exports the current transform for host-side persistence.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        self.transform.into()
    }

    /// Restores a previously exported transform verbatim.
    ///
    /// A restore arriving before the first fit is deferred and applied by
    /// the next [`GestureEngine::reset`].
    pub fn restore(&mut self, snapshot: SceneSnapshot) -> Update {
        if self.fitted {
            self.transform = snapshot.into();
            Update {
                transform: self.transform,
                redraw: true,
            }
        } else {
            self.pending_restore = Some(snapshot);
            self.ignored()
        }
    }

    /// Returns the offset of the image relative to the viewport origin, or
    /// zero while no image extents are set.
    #[must_use]
    pub fn translation_offset(&self) -> Point {
        if self.image_size.width <= 0.0 || self.image_size.height <= 0.0 {
            Point::ZERO
        } else {
            touchscene_bounds::corner_offset_from_origin(self.transform, self.image_size)
        }
    }

    /// Returns the delta that would center the image or pull it flush with
    /// the viewport edges. Not applied automatically; see
    /// [`touchscene_bounds::centering_delta`].
    #[must_use]
    pub fn centering_delta(&self) -> Vec2 {
        touchscene_bounds::centering_delta(self.transform, self.image_size, self.viewport)
    }

    /// Processes one pointer event and returns the resulting transform
    /// along with an explicit redraw request.
    ///
    /// Out-of-sequence input (a move with no preceding down, pinch data
    /// with fewer than two contacts) produces no transform change and no
    /// redraw request.
    pub fn process(&mut self, event: GestureEvent<'_>) -> Update {
        match event {
            GestureEvent::Down { pos } => self.on_down(pos),
            GestureEvent::PointerDown { pointers } => self.on_extra_down(pointers),
            GestureEvent::Move { pointers } => self.on_move(pointers),
            GestureEvent::Up => self.on_up(),
        }
    }

    fn on_down(&mut self, pos: Point) -> Update {
        self.state = GestureState::Drag(DragSession {
            saved: self.transform,
            start: pos,
        });
        self.accepted()
    }

    fn on_extra_down(&mut self, pointers: &[Point]) -> Update {
        // The pinch always pivots on the first two contacts, however many
        // are active.
        let (Some(&p0), Some(&p1)) = (pointers.first(), pointers.get(1)) else {
            return self.ignored();
        };
        let start_spacing = spacing(p0, p1);
        let start_angle = angle(p0, p1);
        if start_spacing > self.config.min_multitouch_distance {
            self.state = GestureState::Pinch(PinchSession {
                saved: self.transform,
                midpoint: midpoint(p0, p1),
                start_spacing,
                start_angle,
            });
        } else if let GestureState::Pinch(session) = &mut self.state {
            // Spacing and angle are recorded regardless of the threshold;
            // an already-engaged pinch keeps its snapshot and midpoint but
            // rebases both, so later zoom ratios start from the new pair.
            session.start_spacing = start_spacing;
            session.start_angle = start_angle;
        }
        self.accepted()
    }

    fn on_move(&mut self, pointers: &[Point]) -> Update {
        match self.state {
            GestureState::Idle => self.ignored(),
            GestureState::Drag(session) => {
                let Some(&pos) = pointers.first() else {
                    return self.ignored();
                };
                // Replay from the gesture-start snapshot so the translation
                // is always start-relative and never drifts.
                self.transform = session.saved;
                if self.config.translate {
                    self.transform = Affine::translate(pos - session.start) * self.transform;
                }
                self.accepted()
            }
            GestureState::Pinch(session) => {
                let (Some(&p0), Some(&p1)) = (pointers.first(), pointers.get(1)) else {
                    return self.ignored();
                };

                let new_spacing = spacing(p0, p1);
                if new_spacing > self.config.min_multitouch_distance {
                    self.transform = session.saved;
                    if self.config.zoom {
                        let step = self.clamped_zoom_step(new_spacing / session.start_spacing);
                        self.transform =
                            Affine::scale_about(step, session.midpoint) * self.transform;
                    }
                }

                // Rotation is a delta against the angle recorded at the
                // extra-contact landing. When the spacing collapses below
                // the threshold the restore above is skipped, so rotation
                // accumulates across moves; inherited behavior, kept as is.
                if self.config.rotate && (pointers.len() == 2 || pointers.len() == 3) {
                    let delta = angle(p0, p1) - session.start_angle;
                    self.transform =
                        Affine::rotate_about(delta.to_radians(), session.midpoint) * self.transform;
                }
                self.accepted()
            }
        }
    }

    fn on_up(&mut self) -> Update {
        self.state = GestureState::Idle;
        self.accepted()
    }

    /// Clamps a raw pinch ratio into the per-step zoom bounds.
    ///
    /// The bounds are the configured zoom range normalized by the scale of
    /// the (already restored) transform and re-anchored to the fitted
    /// baseline. This bounds the step applied in this move, not the
    /// absolute resulting zoom. The lower bound wins on an inverted
    /// configured range.
    fn clamped_zoom_step(&self, ratio: f64) -> f64 {
        let curr_scale = uniform_scale(self.transform);
        let (min_step, max_step) = if curr_scale > SCALE_EPSILON {
            (
                self.config.min_zoom / curr_scale * self.init_scale,
                self.config.max_zoom / curr_scale * self.init_scale,
            )
        } else {
            (
                self.config.min_zoom * self.init_scale,
                self.config.max_zoom * self.init_scale,
            )
        };
        ratio.min(max_step).max(min_step)
    }

    fn accepted(&self) -> Update {
        Update {
            transform: self.transform,
            redraw: true,
        }
    }

    fn ignored(&self) -> Update {
        Update {
            transform: self.transform,
            redraw: false,
        }
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}
