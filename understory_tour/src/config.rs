// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and spacing parameters for a tour session.

use core::time::Duration;

use understory_callout::DEFAULT_SPACING;

/// Parameters controlling call-out spacing and fade durations.
///
/// The defaults match the timings tours have always used: an 800ms overlay
/// fade, 300ms image cross-fades, and a 20px gap for cardinal call-outs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourConfig {
    /// Gap between a control and a cardinal call-out, in host logical pixels.
    pub spacing: f64,
    /// Duration of the overlay fade-in when the tour opens and fade-out when it closes.
    pub overlay_fade: Duration,
    /// Duration of the call-out image fade-in and the fade-out between steps.
    pub image_fade: Duration,
    /// Duration of the exit affordance fading to transparent after the first step.
    pub exit_fade: Duration,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            overlay_fade: Duration::from_millis(800),
            image_fade: Duration::from_millis(300),
            exit_fade: Duration::from_millis(300),
        }
    }
}
