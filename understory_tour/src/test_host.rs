// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host that records every call, for state machine tests.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect};

use crate::{ClickTarget, ImageDescriptor, Reaction, Sequence, TourHost, TransitionId};

/// Element ids in creation order for a tour that opens normally.
pub(crate) const OVERLAY: u32 = 0;
pub(crate) const IMAGE: u32 = 1;
pub(crate) const EXIT: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Highlight(usize),
    Unhighlight(usize),
    CreateOverlay,
    CreateImage(u32),
    SetImage(u32, String),
    SetPosition(u32, Point),
    SetVisible(u32, bool),
    FadeIn(u32, TransitionId),
    FadeOut(u32, TransitionId),
    AnimateOpacity(u32, f64, TransitionId),
    BindClick(u32, ClickTarget),
    BindResize,
    UnbindResize,
    PreventDrag(u32),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) controls: Vec<(String, Option<Rect>)>,
    pub(crate) calls: Vec<Call>,
    pub(crate) pending: VecDeque<TransitionId>,
    pub(crate) durations: Vec<Duration>,
    next_element: u32,
}

impl RecordingHost {
    pub(crate) fn new(controls: &[(&str, Option<Rect>)]) -> Self {
        Self {
            controls: controls
                .iter()
                .map(|(selector, rect)| (String::from(*selector), *rect))
                .collect(),
            ..Self::default()
        }
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Complete the oldest pending transition.
    pub(crate) fn finish_one(&mut self, tour: &mut Sequence<u32>) -> Option<Reaction> {
        let id = self.pending.pop_front()?;
        Some(tour.on_transition_end(self, id))
    }

    /// Complete pending transitions, including ones they start, until none remain.
    pub(crate) fn settle(&mut self, tour: &mut Sequence<u32>) -> Vec<Reaction> {
        let mut reactions = Vec::new();
        while let Some(reaction) = self.finish_one(tour) {
            reactions.push(reaction);
        }
        reactions
    }

    fn element(&mut self) -> u32 {
        let id = self.next_element;
        self.next_element += 1;
        id
    }
}

impl TourHost for RecordingHost {
    type Control = usize;
    type Element = u32;

    fn resolve_control(&self, selector: &str) -> Option<usize> {
        self.controls.iter().position(|(s, _)| s == selector)
    }

    fn measure_box(&self, control: &usize) -> Option<Rect> {
        self.controls.get(*control).and_then(|(_, rect)| *rect)
    }

    fn highlight(&mut self, control: &usize) {
        self.calls.push(Call::Highlight(*control));
    }

    fn unhighlight(&mut self, control: &usize) {
        self.calls.push(Call::Unhighlight(*control));
    }

    fn create_overlay(&mut self) -> u32 {
        self.calls.push(Call::CreateOverlay);
        self.element()
    }

    fn create_image_element(&mut self, parent: &u32) -> u32 {
        self.calls.push(Call::CreateImage(*parent));
        self.element()
    }

    fn set_image(&mut self, element: &u32, image: &ImageDescriptor) {
        self.calls.push(Call::SetImage(*element, image.path.clone()));
    }

    fn set_position(&mut self, element: &u32, origin: Point) {
        self.calls.push(Call::SetPosition(*element, origin));
    }

    fn set_visible(&mut self, element: &u32, visible: bool) {
        self.calls.push(Call::SetVisible(*element, visible));
    }

    fn fade_in(&mut self, element: &u32, duration: Duration, done: TransitionId) {
        self.calls.push(Call::FadeIn(*element, done));
        self.durations.push(duration);
        self.pending.push_back(done);
    }

    fn fade_out(&mut self, element: &u32, duration: Duration, done: TransitionId) {
        self.calls.push(Call::FadeOut(*element, done));
        self.durations.push(duration);
        self.pending.push_back(done);
    }

    fn animate_opacity(&mut self, element: &u32, target: f64, duration: Duration, done: TransitionId) {
        self.calls.push(Call::AnimateOpacity(*element, target, done));
        self.durations.push(duration);
        self.pending.push_back(done);
    }

    fn bind_click(&mut self, element: &u32, target: ClickTarget) {
        self.calls.push(Call::BindClick(*element, target));
    }

    fn bind_resize(&mut self) {
        self.calls.push(Call::BindResize);
    }

    fn unbind_resize(&mut self) {
        self.calls.push(Call::UnbindResize);
    }

    fn prevent_drag(&mut self, element: &u32) {
        self.calls.push(Call::PreventDrag(*element));
    }
}
