// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchscene Gesture: a headless engine turning pointer events into an
//! image transform.
//!
//! [`GestureEngine`] owns a 2D affine transform describing how an image sits
//! inside a fixed-size viewport, and updates it in response to a stream of
//! pointer samples: a single moving contact pans the image, two contacts
//! pinch-zoom about their midpoint (with per-step zoom clamping) and rotate
//! by the change of the inter-contact angle. The engine is synchronous and
//! callback-free: every [`GestureEngine::process`] call returns an
//! [`Update`] carrying the resulting transform and an explicit redraw
//! request, so hosts decide themselves when to repaint.
//!
//! The engine does not own any rendering surface or event loop. Callers are
//! expected to:
//! - Translate their host's touch events into [`GestureEvent`] values and
//!   feed them in arrival order.
//! - Apply the returned transform when painting the image.
//! - Optionally apply [`GestureEngine::centering_delta`] on gesture end to
//!   snap the image back into the viewport.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size, Vec2};
//! use touchscene_gesture::{GestureEngine, GestureEvent};
//!
//! let mut engine = GestureEngine::new();
//! engine.config_mut().translate = true;
//!
//! // Fit a 200x100 image into an 800x600 viewport.
//! engine.set_viewport(Size::new(800.0, 600.0));
//! engine.set_image_size(Size::new(200.0, 100.0));
//! engine.reset();
//!
//! // Drag by (20, 5).
//! engine.process(GestureEvent::Down { pos: Point::new(10.0, 10.0) });
//! let update = engine.process(GestureEvent::Move { pointers: &[Point::new(30.0, 15.0)] });
//! assert!(update.redraw);
//! let expected = Affine::translate(Vec2::new(20.0, 5.0)) * Affine::scale(4.0)
//!     * Affine::translate(Vec2::new(0.0, 25.0));
//! assert_eq!(update.transform.as_coeffs(), expected.as_coeffs());
//! ```
//!
//! ## Design notes
//!
//! - Pan and zoom are replayed from the transform snapshot taken at gesture
//!   start on every move, so they never accumulate drift. Rotation is
//!   applied as a delta against the angle recorded when the extra contact
//!   landed; the asymmetry is inherited behavior and deliberately kept.
//! - The per-move zoom clamp bounds the step ratio, not the resulting
//!   absolute zoom.
//! - Out-of-sequence input (a move with no preceding down, pinch data with a
//!   single contact) is ignored rather than treated as an error.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod event;

pub use config::GestureConfig;
pub use engine::{GestureEngine, TouchPhase};
pub use event::{GestureEvent, Update};
