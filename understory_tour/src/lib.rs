// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tour --heading-base-level=0

//! Understory Tour: a host-agnostic guided tour state machine.
//!
//! ## Overview
//!
//! A tour walks the user through a UI one control at a time. Each [`Step`]
//! highlights a control and optionally shows a call-out image whose arrow points
//! at it. Clicking the overlay advances; an optional [`ExitAffordance`] lets the
//! user leave early.
//!
//! This crate does not draw anything. A [`TourHost`] resolves selectors,
//! measures controls, creates the overlay and image elements, and runs fades.
//! The [`Sequence`] decides what happens and when, and the call-out position
//! comes from [`understory_callout`].
//!
//! ## Workflow
//!
//! 1) Build a [`Sequence`], optionally [`with_exit`](Sequence::with_exit) and
//!    [`with_config`](Sequence::with_config), and [`add_step`](Sequence::add_step)
//!    in display order.
//! 2) Call [`Sequence::start`] with your host. The overlay fades in and the first
//!    step is presented.
//! 3) Forward host events:
//!    - overlay clicks to [`Sequence::on_overlay_click`],
//!    - exit clicks to [`Sequence::on_exit_click`],
//!    - viewport resizes to [`Sequence::on_resize`],
//!    - finished animations to [`Sequence::on_transition_end`].
//! 4) Each entry point returns a [`Reaction`]; the tour is over once
//!    [`Sequence::state`] is [`TourState::Closed`].
//!
//! ## Ordering
//!
//! Animations are continuation points. The next step's image is configured only
//! after the previous image has fully faded out, and the advance and resize
//! handlers are bound only after the overlay has faded in. Input that arrives
//! while a fade the tour depends on is in flight is ignored, so at most one
//! step is ever current and advancing is strictly serialized.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_tour::{ArrowDirection, ExitAffordance, ImageDescriptor, Sequence, Step, TourState};
//!
//! let exit = ExitAffordance::new(ImageDescriptor::new("tour/close.png", 24.0, 24.0))
//!     .at(Point::new(16.0, 16.0));
//! let mut tour: Sequence<u32> = Sequence::with_exit(exit);
//! tour.add_step(
//!     Step::new("#new-file")
//!         .with_image(ImageDescriptor::new("tour/new.png", 240.0, 90.0))
//!         .pointing(ArrowDirection::N),
//! );
//! tour.add_step(Step::new("#toolbar"));
//!
//! assert_eq!(tour.state(), TourState::Idle);
//! assert_eq!(tour.remaining(), 2);
//! ```
//!
//! ## Logging
//!
//! Lifecycle transitions are reported through the [`log`] facade at `debug`
//! level; ignored events and call-out geometry at `trace` level.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `understory_callout`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod host;
mod sequence;
mod step;

#[cfg(test)]
mod test_host;

pub use config::TourConfig;
pub use error::TourError;
pub use host::{ClickTarget, TourHost, TransitionId};
pub use sequence::{Reaction, Sequence, TourState};
pub use step::{ExitAffordance, ImageDescriptor, Step};

pub use understory_callout::ArrowDirection;
