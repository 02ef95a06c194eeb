// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// A discrete pointer sample delivered by the host event source.
///
/// Events must arrive in the host's delivery order; the engine performs no
/// buffering or reordering. `pointers` slices hold the positions of all
/// currently active contacts in a stable order — the engine only ever reads
/// the first two (plus the slice length for the rotation contact-count
/// gate).
#[derive(Clone, Copy, Debug)]
pub enum GestureEvent<'a> {
    /// The first contact landed.
    Down {
        /// Position of the new contact.
        pos: Point,
    },
    /// An additional contact landed while at least one was already active.
    PointerDown {
        /// Positions of all active contacts, including the new one.
        pointers: &'a [Point],
    },
    /// One or more active contacts moved.
    Move {
        /// Positions of all active contacts.
        pointers: &'a [Point],
    },
    /// A contact lifted, leaving zero or one contact active.
    Up,
}

/// The outcome of processing one gesture event.
///
/// The transform is returned by value on every call so hosts never read a
/// half-updated shared matrix, and the redraw request is an explicit signal
/// instead of a callback into the host.
#[derive(Clone, Copy, Debug)]
pub struct Update {
    /// The scene transform after the event.
    pub transform: Affine,
    /// Whether the host should repaint. `false` only for defensively
    /// ignored out-of-sequence input.
    pub redraw: bool,
}
