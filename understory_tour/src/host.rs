// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering host a tour drives.
//!
//! A [`TourHost`] owns everything visual: resolving selectors to controls,
//! measuring them, drawing the overlay and images, and running fades. The
//! tour core only decides *what* should happen and in which order.
//!
//! ## Completion signals
//!
//! Every fade request carries a [`TransitionId`]. The host must report each id
//! exactly once, when the fade has finished, by calling
//! [`Sequence::on_transition_end`](crate::Sequence::on_transition_end). The
//! sequence does not mutate visible state that depends on a fade until its id
//! comes back, and it ignores ids it is no longer waiting for.
//!
//! ## Event routing
//!
//! [`TourHost::bind_click`] and [`TourHost::bind_resize`] tell the host which
//! events to start forwarding:
//!
//! - clicks on an element bound with [`ClickTarget::Overlay`] go to
//!   [`Sequence::on_overlay_click`](crate::Sequence::on_overlay_click);
//! - clicks on an element bound with [`ClickTarget::Exit`] go to
//!   [`Sequence::on_exit_click`](crate::Sequence::on_exit_click) and must not
//!   also reach the overlay (the exit image sits inside it);
//! - viewport resizes go to [`Sequence::on_resize`](crate::Sequence::on_resize)
//!   until [`TourHost::unbind_resize`] is called.
//!
//! Forwarding an event that was never bound is harmless: the sequence ignores
//! events that do not apply to its current phase.

use core::time::Duration;

use kurbo::{Point, Rect};

use crate::ImageDescriptor;

/// Token identifying one requested fade or opacity animation.
///
/// Minted by the sequence and handed to the host; the host gives it back when
/// the animation completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub(crate) u32);

impl TransitionId {
    /// Raw value, useful for host-side bookkeeping and diagnostics.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Role of a clickable tour element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The overlay surface; clicking it advances the tour.
    Overlay,
    /// The exit affordance; clicking it abandons the tour.
    Exit,
}

/// Rendering and animation surface used by a tour.
///
/// All coordinates are in the host's logical pixel space.
pub trait TourHost {
    /// Handle to a resolved control.
    type Control;
    /// Handle to an element created for the tour (overlay or image).
    type Element;

    /// Resolve a selector to a control. If several controls match, the first wins.
    fn resolve_control(&self, selector: &str) -> Option<Self::Control>;

    /// Measure a control's bounding box, or `None` if it has no position.
    fn measure_box(&self, control: &Self::Control) -> Option<Rect>;

    /// Mark a control as highlighted. Highlighting twice is a no-op.
    fn highlight(&mut self, control: &Self::Control);

    /// Remove the highlight from a control. Unhighlighting twice is a no-op.
    fn unhighlight(&mut self, control: &Self::Control);

    /// Create the overlay surface covering the view.
    fn create_overlay(&mut self) -> Self::Element;

    /// Create an image element inside `parent`.
    fn create_image_element(&mut self, parent: &Self::Element) -> Self::Element;

    /// Set an image element's source and rendered size.
    fn set_image(&mut self, element: &Self::Element, image: &ImageDescriptor);

    /// Move an element's top-left corner to `origin`.
    fn set_position(&mut self, element: &Self::Element, origin: Point);

    /// Show or hide an element immediately.
    fn set_visible(&mut self, element: &Self::Element, visible: bool);

    /// Fade an element in over `duration`, then report `done`.
    fn fade_in(&mut self, element: &Self::Element, duration: Duration, done: TransitionId);

    /// Fade an element out over `duration`, leave it hidden, then report `done`.
    fn fade_out(&mut self, element: &Self::Element, duration: Duration, done: TransitionId);

    /// Animate an element's opacity to `target` over `duration`, then report `done`.
    fn animate_opacity(
        &mut self,
        element: &Self::Element,
        target: f64,
        duration: Duration,
        done: TransitionId,
    );

    /// Start forwarding clicks on `element` to the sequence as `target`.
    fn bind_click(&mut self, element: &Self::Element, target: ClickTarget);

    /// Start forwarding viewport resizes to the sequence.
    fn bind_resize(&mut self);

    /// Stop forwarding viewport resizes.
    fn unbind_resize(&mut self);

    /// Keep the user from dragging `element` around.
    fn prevent_drag(&mut self, element: &Self::Element);
}
