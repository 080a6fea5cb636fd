// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour steps and the exit affordance.

use alloc::string::String;

use kurbo::{Point, Size};
use understory_callout::{ArrowDirection, Callout, callout_origin};

use crate::{TourConfig, TourHost, TransitionId};

/// An annotation image and the size it is rendered at.
///
/// The size is supplied up front rather than measured from the asset, so
/// placement does not have to wait for the image to load.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageDescriptor {
    /// Host-interpreted image source (path or URL).
    pub path: String,
    /// Rendered size in host logical pixels.
    pub size: Size,
}

impl ImageDescriptor {
    /// Create a descriptor for `path` rendered at `width` × `height`.
    pub fn new(path: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            path: path.into(),
            size: Size::new(width, height),
        }
    }
}

/// One point in a tour: a control to highlight and an optional call-out.
///
/// ```
/// use kurbo::Point;
/// use understory_tour::{ArrowDirection, ImageDescriptor, Step};
///
/// let step = Step::new("#save")
///     .with_image(ImageDescriptor::new("tour/save.png", 240.0, 120.0))
///     .pointing(ArrowDirection::NE)
///     .with_tip(Point::new(230.0, 4.0));
/// assert_eq!(step.selector(), "#save");
/// assert_eq!(step.direction(), Some(ArrowDirection::NE));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    selector: String,
    image: Option<ImageDescriptor>,
    direction: Option<ArrowDirection>,
    tip: Option<Point>,
}

impl Step {
    /// Create a step that highlights the control matching `selector` and shows no image.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            image: None,
            direction: None,
            tip: None,
        }
    }

    /// Show `image` as the call-out for this step.
    pub fn with_image(mut self, image: ImageDescriptor) -> Self {
        self.image = Some(image);
        self
    }

    /// Place the call-out relative to the control, with its arrow pointing in `direction`.
    ///
    /// Without a direction the tip coordinate is used as an absolute position.
    pub fn pointing(mut self, direction: ArrowDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the arrow tip in image coordinates (or the absolute position when
    /// no direction is set).
    pub fn with_tip(mut self, tip: Point) -> Self {
        self.tip = Some(tip);
        self
    }

    /// Selector of the control this step highlights.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Call-out image, if any.
    pub fn image(&self) -> Option<&ImageDescriptor> {
        self.image.as_ref()
    }

    /// Arrow direction, if any.
    pub fn direction(&self) -> Option<ArrowDirection> {
        self.direction
    }

    /// Arrow tip or absolute position, if any.
    pub fn tip(&self) -> Option<Point> {
        self.tip
    }

    /// The call-out geometry of this step, if it has an image.
    pub fn callout(&self) -> Option<Callout> {
        self.image.as_ref().map(|image| Callout {
            size: image.size,
            direction: self.direction,
            tip: self.tip,
        })
    }

    /// Highlight the control and, if this step has an image, place and fade in
    /// the shared call-out element.
    ///
    /// The image fade-in is requested under `fade`; returns whether it was.
    /// Presenting never removes another step's highlight.
    pub fn present<H: TourHost>(
        &self,
        host: &mut H,
        image_element: &H::Element,
        config: &TourConfig,
        fade: TransitionId,
    ) -> bool {
        let control = host.resolve_control(&self.selector);
        match &control {
            Some(control) => host.highlight(control),
            None => log::debug!("no control matches {:?}", self.selector),
        }

        let Some(image) = &self.image else {
            return false;
        };

        host.set_image(image_element, image);
        let bounds = control.as_ref().and_then(|c| host.measure_box(c));
        let origin = callout_origin(image.size, bounds, self.direction, self.tip, config.spacing);
        log::trace!(
            "call-out for {:?} at ({}, {}) against {bounds:?}",
            self.selector,
            origin.x,
            origin.y
        );
        host.set_position(image_element, origin);
        host.fade_in(image_element, config.image_fade, fade);
        true
    }

    /// Remove the highlight from this step's control.
    pub fn dismiss<H: TourHost>(&self, host: &mut H) {
        if let Some(control) = host.resolve_control(&self.selector) {
            host.unhighlight(&control);
        }
    }
}

/// A close control that lets the user abandon the tour.
///
/// The exit image is placed at a fixed offset in overlay coordinates and shown
/// when the tour opens. Unless it is marked visible after the first step, it
/// fades away on the first advance.
#[derive(Clone, Debug, PartialEq)]
pub struct ExitAffordance {
    image: ImageDescriptor,
    offset: Point,
    visible_after_first_step: bool,
}

impl ExitAffordance {
    /// Create an exit affordance at the overlay origin, hidden after the first step.
    pub fn new(image: ImageDescriptor) -> Self {
        Self {
            image,
            offset: Point::ZERO,
            visible_after_first_step: false,
        }
    }

    /// Place the exit image at `offset`.
    pub fn at(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Keep the exit image for the whole tour instead of only the first step.
    pub fn visible_after_first_step(mut self, visible: bool) -> Self {
        self.visible_after_first_step = visible;
        self
    }

    /// Exit image.
    pub fn image(&self) -> &ImageDescriptor {
        &self.image
    }

    /// Position of the exit image.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Whether the exit image stays after the first advance.
    pub fn is_visible_after_first_step(&self) -> bool {
        self.visible_after_first_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::{Call, IMAGE, RecordingHost};
    use kurbo::Rect;

    fn config() -> TourConfig {
        TourConfig::default()
    }

    #[test]
    fn present_places_image_next_to_control() {
        let mut host = RecordingHost::new(&[("#save", Some(Rect::new(100.0, 50.0, 300.0, 90.0)))]);
        let step = Step::new("#save")
            .with_image(ImageDescriptor::new("save.png", 60.0, 30.0))
            .pointing(ArrowDirection::N);

        assert!(step.present(&mut host, &IMAGE, &config(), TransitionId(7)));
        assert_eq!(
            host.calls,
            [
                Call::Highlight(0),
                Call::SetImage(IMAGE, "save.png".into()),
                Call::SetPosition(IMAGE, Point::new(170.0, 110.0)),
                Call::FadeIn(IMAGE, TransitionId(7)),
            ]
        );
    }

    #[test]
    fn present_without_image_only_highlights() {
        let mut host = RecordingHost::new(&[("#menu", Some(Rect::new(0.0, 0.0, 10.0, 10.0)))]);
        let step = Step::new("#menu").pointing(ArrowDirection::S);

        assert!(!step.present(&mut host, &IMAGE, &config(), TransitionId(0)));
        assert_eq!(host.calls, [Call::Highlight(0)]);
    }

    #[test]
    fn present_with_unknown_control_anchors_at_origin() {
        let mut host = RecordingHost::new(&[]);
        let step = Step::new("#missing")
            .with_image(ImageDescriptor::new("x.png", 60.0, 30.0))
            .pointing(ArrowDirection::N);

        assert!(step.present(&mut host, &IMAGE, &config(), TransitionId(1)));
        assert!(host.calls.contains(&Call::SetPosition(IMAGE, Point::new(-30.0, 20.0))));
        assert!(!host.calls.iter().any(|c| matches!(c, Call::Highlight(_))));
    }

    #[test]
    fn present_with_unmeasurable_control_still_highlights() {
        let mut host = RecordingHost::new(&[("#hidden", None)]);
        let step = Step::new("#hidden")
            .with_image(ImageDescriptor::new("x.png", 60.0, 30.0))
            .pointing(ArrowDirection::W);

        assert!(step.present(&mut host, &IMAGE, &config(), TransitionId(1)));
        assert_eq!(host.calls[0], Call::Highlight(0));
        assert!(host.calls.contains(&Call::SetPosition(IMAGE, Point::new(20.0, -15.0))));
    }

    #[test]
    fn first_matching_control_wins() {
        let mut host = RecordingHost::new(&[
            (".btn", Some(Rect::new(0.0, 0.0, 10.0, 10.0))),
            (".btn", Some(Rect::new(50.0, 50.0, 60.0, 60.0))),
        ]);
        Step::new(".btn").present(&mut host, &IMAGE, &config(), TransitionId(0));
        Step::new(".btn").dismiss(&mut host);
        assert_eq!(host.calls, [Call::Highlight(0), Call::Unhighlight(0)]);
    }

    #[test]
    fn absolute_step_uses_tip_as_position() {
        let mut host = RecordingHost::new(&[("#a", Some(Rect::new(100.0, 100.0, 200.0, 200.0)))]);
        let step = Step::new("#a")
            .with_image(ImageDescriptor::new("a.png", 10.0, 10.0))
            .with_tip(Point::new(15.0, 25.0));
        step.present(&mut host, &IMAGE, &config(), TransitionId(0));
        assert!(host.calls.contains(&Call::SetPosition(IMAGE, Point::new(15.0, 25.0))));
    }

    #[test]
    fn callout_mirrors_step_fields() {
        let step = Step::new("#a")
            .with_image(ImageDescriptor::new("a.png", 60.0, 30.0))
            .pointing(ArrowDirection::E)
            .with_tip(Point::new(1.0, 2.0));
        let callout = step.callout().unwrap();
        assert_eq!(callout.size, Size::new(60.0, 30.0));
        assert_eq!(callout.direction, Some(ArrowDirection::E));
        assert_eq!(callout.tip, Some(Point::new(1.0, 2.0)));
        assert!(Step::new("#b").callout().is_none());
    }

    #[test]
    fn exit_affordance_defaults() {
        let exit = ExitAffordance::new(ImageDescriptor::new("close.png", 16.0, 16.0));
        assert_eq!(exit.offset(), Point::ZERO);
        assert!(!exit.is_visible_after_first_step());

        let exit = exit.at(Point::new(8.0, 8.0)).visible_after_first_step(true);
        assert_eq!(exit.offset(), Point::new(8.0, 8.0));
        assert!(exit.is_visible_after_first_step());
        assert_eq!(exit.image().path, "close.png");
    }
}
