// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tour sequence state machine.
//!
//! A [`Sequence`] owns a queue of [`Step`]s and drives one overlay session:
//!
//! ```text
//! Idle ──start──▶ Opening ──overlay faded in──▶ Presenting ◀──image faded out── Swapping
//!                    │                             │   └───────overlay click────────▲
//!                    │                             │ overlay click on last step
//!                    └──────── exit click ─────────┴──────────────▶ Closed
//! ```
//!
//! Every transition that depends on an animation waits for the host to report
//! the animation's [`TransitionId`]. Clicks and resizes that arrive while the
//! sequence is waiting are ignored, so advancing is strictly serialized.

use alloc::collections::VecDeque;

use crate::{ClickTarget, ExitAffordance, Step, TourConfig, TourError, TourHost, TransitionId};

/// Coarse lifecycle state of a [`Sequence`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TourState {
    /// Constructed but not started (or started with no steps).
    Idle,
    /// The overlay is open and a step is current.
    Presenting,
    /// The tour has finished or was exited. Terminal.
    Closed,
}

/// What a [`Sequence`] did in response to an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// The event did not apply to the current phase and changed nothing.
    Ignored,
    /// The overlay finished fading in; click and resize handlers are now bound.
    Opened,
    /// The current step's image finished fading in; the tour accepts clicks again.
    Revealed,
    /// The current step was dismissed and the image is fading out before the next step.
    Advanced,
    /// The next step was presented after the previous image faded out.
    Presented,
    /// The current step was presented again against new geometry.
    Repositioned,
    /// The exit affordance finished fading and was hidden.
    ExitHidden,
    /// The last step was dismissed and the overlay is fading out.
    Finished,
    /// The user exited; remaining steps were discarded and the overlay is fading out.
    Exited,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Overlay fading in. Nothing but the exit affordance reacts yet.
    Opening {
        overlay: TransitionId,
        reveal: Option<TransitionId>,
    },
    /// A step is current; clicks advance once `reveal` has completed.
    Presenting { reveal: Option<TransitionId> },
    /// Image fading out; `current` is the next step, not yet presented.
    Swapping { fade: TransitionId },
    Closed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ExitState {
    Shown,
    Hiding(TransitionId),
    Hidden,
}

/// Elements owned for the duration of one open session.
#[derive(Debug)]
struct Session<E> {
    overlay: E,
    image: E,
    exit: Option<(E, ExitState)>,
    resize_bound: bool,
}

/// An ordered, one-shot guided tour.
///
/// Steps are shown in insertion order and consumed as the tour advances. A
/// sequence runs exactly one session: once it has closed it cannot be
/// restarted.
///
/// `E` is the host's element handle type ([`TourHost::Element`]).
///
/// ```
/// use understory_tour::{Sequence, Step};
///
/// let mut tour: Sequence<u32> = Sequence::new();
/// tour.add_step(Step::new("#open"));
/// tour.add_step(Step::new("#save"));
///
/// assert_eq!(tour.next_step().map(|s| s.selector().to_owned()), Some("#open".into()));
/// assert!(tour.has_next_step());
/// assert_eq!(tour.next_step().map(|s| s.selector().to_owned()), Some("#save".into()));
/// assert!(tour.next_step().is_none());
/// ```
#[derive(Debug)]
pub struct Sequence<E> {
    steps: VecDeque<Step>,
    exit: Option<ExitAffordance>,
    config: TourConfig,
    phase: Phase,
    current: Option<Step>,
    session: Option<Session<E>>,
    next_transition: u32,
}

impl<E> Default for Sequence<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn mint(next: &mut u32) -> TransitionId {
    let id = TransitionId(*next);
    *next = next.wrapping_add(1);
    id
}

impl<E> Sequence<E> {
    /// Create an empty tour without an exit affordance.
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
            exit: None,
            config: TourConfig::default(),
            phase: Phase::Idle,
            current: None,
            session: None,
            next_transition: 0,
        }
    }

    /// Create an empty tour with an exit affordance.
    pub fn with_exit(exit: ExitAffordance) -> Self {
        Self {
            exit: Some(exit),
            ..Self::new()
        }
    }

    /// Replace the spacing and fade timings.
    pub fn with_config(mut self, config: TourConfig) -> Self {
        self.config = config;
        self
    }

    /// Spacing and fade timings in use.
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Exit affordance, if configured.
    pub fn exit(&self) -> Option<&ExitAffordance> {
        self.exit.as_ref()
    }

    /// Append a step to the end of the tour.
    pub fn add_step(&mut self, step: Step) {
        self.steps.push_back(step);
    }

    /// Remove and return the next queued step, or `None` when the queue is empty.
    pub fn next_step(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }

    /// Whether any steps remain queued.
    pub fn has_next_step(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of steps still queued, not counting the current one.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// The step currently shown (or about to be shown after a fade-out).
    pub fn current_step(&self) -> Option<&Step> {
        self.current.as_ref()
    }

    /// Coarse lifecycle state.
    pub fn state(&self) -> TourState {
        match self.phase {
            Phase::Idle => TourState::Idle,
            Phase::Opening { .. } | Phase::Presenting { .. } | Phase::Swapping { .. } => {
                TourState::Presenting
            }
            Phase::Closed => TourState::Closed,
        }
    }

    /// Open the overlay and present the first step.
    ///
    /// Does nothing when no steps are queued. The overlay starts fading in;
    /// advance and resize handlers are bound only once that fade completes.
    /// If an exit affordance is configured it is shown and its click is bound
    /// immediately.
    pub fn start<H: TourHost<Element = E>>(&mut self, host: &mut H) -> Result<(), TourError> {
        match self.phase {
            Phase::Idle => {}
            Phase::Closed => return Err(TourError::Closed),
            _ => return Err(TourError::AlreadyStarted),
        }
        let Some(first) = self.steps.pop_front() else {
            log::trace!("tour has no steps, not starting");
            return Ok(());
        };
        log::debug!("starting tour with {} steps", self.steps.len() + 1);

        let overlay = host.create_overlay();
        let image = host.create_image_element(&overlay);
        host.set_visible(&image, false);
        host.prevent_drag(&image);

        let exit = self.exit.as_ref().map(|exit| {
            let element = host.create_image_element(&overlay);
            host.set_image(&element, exit.image());
            host.set_position(&element, exit.offset());
            host.set_visible(&element, true);
            host.prevent_drag(&element);
            host.bind_click(&element, ClickTarget::Exit);
            (element, ExitState::Shown)
        });

        let reveal = mint(&mut self.next_transition);
        let reveal = first
            .present(host, &image, &self.config, reveal)
            .then_some(reveal);
        let opened = mint(&mut self.next_transition);
        host.fade_in(&overlay, self.config.overlay_fade, opened);

        self.current = Some(first);
        self.session = Some(Session {
            overlay,
            image,
            exit,
            resize_bound: false,
        });
        self.phase = Phase::Opening {
            overlay: opened,
            reveal,
        };
        Ok(())
    }

    /// Handle a click on the overlay: advance to the next step, or finish the
    /// tour after the last one.
    ///
    /// Ignored until the overlay has faded in, and while any step fade is in
    /// flight.
    pub fn on_overlay_click<H: TourHost<Element = E>>(&mut self, host: &mut H) -> Reaction {
        if self.phase != (Phase::Presenting { reveal: None }) {
            log::trace!("overlay click ignored in {:?}", self.phase);
            return Reaction::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return Reaction::Ignored;
        };

        let Some(next) = self.steps.pop_front() else {
            log::debug!("last tour step dismissed");
            self.close(host);
            return Reaction::Finished;
        };

        let keep_exit = self
            .exit
            .as_ref()
            .is_some_and(ExitAffordance::is_visible_after_first_step);
        if let Some((element, state)) = &mut session.exit
            && *state == ExitState::Shown
            && !keep_exit
        {
            let id = mint(&mut self.next_transition);
            host.animate_opacity(element, 0.0, self.config.exit_fade, id);
            *state = ExitState::Hiding(id);
        }

        if let Some(current) = self.current.take() {
            current.dismiss(host);
        }
        let fade = mint(&mut self.next_transition);
        host.fade_out(&session.image, self.config.image_fade, fade);

        log::debug!("advancing tour to {:?}", next.selector());
        self.current = Some(next);
        self.phase = Phase::Swapping { fade };
        Reaction::Advanced
    }

    /// Handle a click on the exit affordance: discard the remaining steps and
    /// close the tour.
    pub fn on_exit_click<H: TourHost<Element = E>>(&mut self, host: &mut H) -> Reaction {
        if matches!(self.phase, Phase::Idle | Phase::Closed) {
            return Reaction::Ignored;
        }
        let clickable = self
            .session
            .as_ref()
            .and_then(|s| s.exit.as_ref())
            .is_some_and(|(_, state)| *state != ExitState::Hidden);
        if !clickable {
            log::trace!("exit click ignored, no visible exit affordance");
            return Reaction::Ignored;
        }
        log::debug!("tour exited with {} steps left", self.steps.len());
        self.close(host);
        Reaction::Exited
    }

    /// Handle a viewport resize: present the current step again so its
    /// call-out follows the control. Never advances.
    ///
    /// Ignored until the overlay has faded in and while the image is fading
    /// out between steps.
    pub fn on_resize<H: TourHost<Element = E>>(&mut self, host: &mut H) -> Reaction {
        if !matches!(self.phase, Phase::Presenting { .. }) {
            return Reaction::Ignored;
        }
        let (Some(session), Some(step)) = (self.session.as_ref(), self.current.as_ref()) else {
            return Reaction::Ignored;
        };
        // This fade-in targets an already visible image, so it does not gate clicks.
        let id = mint(&mut self.next_transition);
        step.present(host, &session.image, &self.config, id);
        Reaction::Repositioned
    }

    /// Handle the host reporting that the animation `id` has completed.
    pub fn on_transition_end<H: TourHost<Element = E>>(
        &mut self,
        host: &mut H,
        id: TransitionId,
    ) -> Reaction {
        let Some(session) = self.session.as_mut() else {
            return Reaction::Ignored;
        };

        if let Some((element, state)) = &mut session.exit
            && *state == ExitState::Hiding(id)
        {
            host.set_visible(element, false);
            *state = ExitState::Hidden;
            return Reaction::ExitHidden;
        }

        match self.phase {
            Phase::Opening { overlay, reveal } if overlay == id => {
                host.bind_click(&session.overlay, ClickTarget::Overlay);
                host.bind_resize();
                session.resize_bound = true;
                log::debug!("tour overlay open");
                self.phase = Phase::Presenting { reveal };
                Reaction::Opened
            }
            Phase::Opening { overlay, reveal } if reveal == Some(id) => {
                self.phase = Phase::Opening {
                    overlay,
                    reveal: None,
                };
                Reaction::Revealed
            }
            Phase::Presenting { reveal } if reveal == Some(id) => {
                self.phase = Phase::Presenting { reveal: None };
                Reaction::Revealed
            }
            Phase::Swapping { fade } if fade == id => {
                let reveal = mint(&mut self.next_transition);
                let reveal = self.current.as_ref().and_then(|step| {
                    step.present(host, &session.image, &self.config, reveal)
                        .then_some(reveal)
                });
                self.phase = Phase::Presenting { reveal };
                Reaction::Presented
            }
            _ => {
                log::trace!("transition {} ignored in {:?}", id.get(), self.phase);
                Reaction::Ignored
            }
        }
    }

    /// Dismiss the current step, drop the queue, and fade the overlay out.
    fn close<H: TourHost<Element = E>>(&mut self, host: &mut H) {
        if let Some(step) = self.current.take() {
            step.dismiss(host);
        }
        self.steps.clear();
        if let Some(session) = self.session.take() {
            if session.resize_bound {
                host.unbind_resize();
            }
            let id = mint(&mut self.next_transition);
            host.fade_out(&session.overlay, self.config.overlay_fade, id);
        }
        self.phase = Phase::Closed;
    }
}
