// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchscene Geometry: affine decomposition and pointer-pair helpers.
//!
//! This crate holds the pure-function leaf layer of Touchscene:
//! - Decomposition of a [`kurbo::Affine`] into an effective uniform scale and
//!   a rounded rotation angle ([`uniform_scale`], [`rotation_angle`]).
//! - Mapping of an image's corner points and bounding rectangle through a
//!   transform ([`map_corners`], [`image_rect`]).
//! - Geometry of a pair of concurrent touch contacts ([`spacing`],
//!   [`midpoint`], [`angle`]).
//! - [`SceneSnapshot`], a 9-value serialized transform for save/restore.
//!
//! It owns no state and makes no policy decisions; the gesture engine in
//! `touchscene_gesture` and the placement policies in `touchscene_bounds`
//! are built on top of these functions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size};
//! use touchscene_geometry::{map_corners, rotation_angle, uniform_scale};
//!
//! let transform = Affine::scale(2.0) * Affine::rotate(30_f64.to_radians());
//! assert!((uniform_scale(transform) - 2.0).abs() < 1e-9);
//! assert!((rotation_angle(transform) - 30.0).abs() < 1e-9);
//!
//! let corners = map_corners(Affine::IDENTITY, Size::new(4.0, 3.0));
//! assert_eq!(corners[2], Point::new(4.0, 3.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod decompose;
mod pointers;
mod snapshot;

pub use decompose::{image_rect, map_corners, rotation_angle, uniform_scale};
pub use pointers::{angle, midpoint, spacing};
pub use snapshot::SceneSnapshot;
