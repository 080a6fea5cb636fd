// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_callout --heading-base-level=0

//! Understory Callout: placement of directional call-out images.
//!
//! A call-out is an annotation image with a visual arrow that points at a
//! highlighted control. Given the image size, the control's bounding box, the
//! compass direction the arrow points in, and optionally the arrow's tip in the
//! image's own coordinates, this crate computes where the image's top-left
//! corner must go so that the tip lands on the anchor implied by the direction.
//!
//! The computation is a pure function of its inputs: no scene tree, no
//! measurement, no rendering. Hosts measure the control however they like
//! (for example via `understory_box_tree` world bounds) and hand in a
//! [`kurbo::Rect`].
//!
//! ## Directions
//!
//! [`ArrowDirection`] names the side of the control the arrow points *at*:
//!
//! - [`ArrowDirection::N`]: the arrow points up, the image sits below the control.
//! - [`ArrowDirection::S`]: the arrow points down, the image sits above the control.
//! - [`ArrowDirection::E`]: the arrow points right, the image sits left of the control.
//! - [`ArrowDirection::W`]: the arrow points left, the image sits right of the control.
//! - The diagonals anchor to a corner/edge pair of the control and do not apply
//!   the spacing gap.
//!
//! Passing `None` for the direction disables relative placement: the tip
//! coordinate (or the origin) is returned verbatim as an absolute position.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_callout::{ArrowDirection, DEFAULT_SPACING, callout_origin};
//!
//! let control = Rect::new(100.0, 50.0, 300.0, 90.0);
//! let image = Size::new(60.0, 30.0);
//!
//! // Arrow pointing up at the control from below, tip at the image's top-center.
//! let origin = callout_origin(image, Some(control), Some(ArrowDirection::N), None, DEFAULT_SPACING);
//! assert_eq!(origin, Point::new(170.0, 110.0));
//!
//! // No direction: the supplied coordinate is an absolute position.
//! let origin = callout_origin(image, Some(control), None, Some(Point::new(15.0, 25.0)), DEFAULT_SPACING);
//! assert_eq!(origin, Point::new(15.0, 25.0));
//! ```
//!
//! ## Unresolved controls
//!
//! When the host cannot measure the control, pass `None`. Every edge is then
//! anchored at `(0, 0)` and placement still succeeds.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` through `kurbo`.
//!
//! This crate is `no_std`.

#![no_std]

mod direction;
mod placement;

pub use direction::{ArrowDirection, ParseDirectionError};
pub use placement::{Callout, DEFAULT_SPACING, callout_origin};
