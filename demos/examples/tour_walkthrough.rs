// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full tour driven against a console host.
//!
//! This example shows how to:
//! - implement `understory_tour::TourHost` for a toy scene of named controls,
//! - forward clicks, resizes, and finished animations to the `Sequence`,
//! - observe how input during fades is dropped.
//!
//! Animations "finish" when the script issues a `Tick`, oldest first.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example tour_walkthrough`

use std::collections::VecDeque;
use std::time::Duration;

use kurbo::{Point, Rect};
use understory_tour::{
    ArrowDirection, ClickTarget, ExitAffordance, ImageDescriptor, Reaction, Sequence, Step,
    TourHost, TransitionId,
};

/// Scene with named controls and a queue of running animations.
#[derive(Debug, Default)]
struct ConsoleHost {
    controls: Vec<(&'static str, Rect)>,
    next_element: u32,
    running: VecDeque<TransitionId>,
}

impl ConsoleHost {
    fn element(&mut self, what: &str) -> u32 {
        let id = self.next_element;
        self.next_element += 1;
        println!("  create {what} #{id}");
        id
    }

    fn animate(&mut self, what: &str, element: u32, duration: Duration, done: TransitionId) {
        println!(
            "  {what} #{element} over {}ms (transition {})",
            duration.as_millis(),
            done.get()
        );
        self.running.push_back(done);
    }
}

impl TourHost for ConsoleHost {
    type Control = usize;
    type Element = u32;

    fn resolve_control(&self, selector: &str) -> Option<usize> {
        self.controls.iter().position(|(name, _)| *name == selector)
    }

    fn measure_box(&self, control: &usize) -> Option<Rect> {
        self.controls.get(*control).map(|(_, rect)| *rect)
    }

    fn highlight(&mut self, control: &usize) {
        println!("  highlight {}", self.controls[*control].0);
    }

    fn unhighlight(&mut self, control: &usize) {
        println!("  unhighlight {}", self.controls[*control].0);
    }

    fn create_overlay(&mut self) -> u32 {
        self.element("overlay")
    }

    fn create_image_element(&mut self, parent: &u32) -> u32 {
        self.element(&format!("image in #{parent}"))
    }

    fn set_image(&mut self, element: &u32, image: &ImageDescriptor) {
        println!(
            "  #{element} src={} size={}x{}",
            image.path, image.size.width, image.size.height
        );
    }

    fn set_position(&mut self, element: &u32, origin: Point) {
        println!("  #{element} at ({:.1}, {:.1})", origin.x, origin.y);
    }

    fn set_visible(&mut self, element: &u32, visible: bool) {
        println!("  #{element} visible={visible}");
    }

    fn fade_in(&mut self, element: &u32, duration: Duration, done: TransitionId) {
        self.animate("fade in", *element, duration, done);
    }

    fn fade_out(&mut self, element: &u32, duration: Duration, done: TransitionId) {
        self.animate("fade out", *element, duration, done);
    }

    fn animate_opacity(&mut self, element: &u32, target: f64, duration: Duration, done: TransitionId) {
        self.animate(&format!("opacity -> {target}"), *element, duration, done);
    }

    fn bind_click(&mut self, element: &u32, target: ClickTarget) {
        println!("  route clicks on #{element} as {target:?}");
    }

    fn bind_resize(&mut self) {
        println!("  route resize");
    }

    fn unbind_resize(&mut self) {
        println!("  stop routing resize");
    }

    fn prevent_drag(&mut self, element: &u32) {
        println!("  #{element} not draggable");
    }
}

/// Scripted user and animation input.
#[derive(Clone, Copy, Debug)]
enum Input {
    Tick,
    Click(ClickTarget),
    Resize(Rect),
}

fn main() {
    env_logger::init();

    let mut host = ConsoleHost {
        controls: vec![
            ("#new-file", Rect::new(10.0, 10.0, 42.0, 42.0)),
            ("#search", Rect::new(400.0, 10.0, 600.0, 40.0)),
            ("#status", Rect::new(0.0, 560.0, 800.0, 600.0)),
        ],
        ..ConsoleHost::default()
    };

    let exit = ExitAffordance::new(ImageDescriptor::new("tour/close.png", 24.0, 24.0))
        .at(Point::new(760.0, 16.0))
        .visible_after_first_step(true);
    let mut tour = Sequence::with_exit(exit);

    let steps = [
        Step::new("#new-file")
            .with_image(ImageDescriptor::new("tour/new-file.png", 220.0, 80.0))
            .pointing(ArrowDirection::NW),
        Step::new("#search")
            .with_image(ImageDescriptor::new("tour/search.png", 260.0, 90.0))
            .pointing(ArrowDirection::N),
        Step::new("#status")
            .with_image(ImageDescriptor::new("tour/status.png", 300.0, 70.0))
            .pointing(ArrowDirection::S)
            .with_tip(Point::new(150.0, 70.0)),
        Step::new("#missing-control"),
    ];

    println!("== plan ==");
    let spacing = tour.config().spacing;
    for step in steps {
        let control = host
            .resolve_control(step.selector())
            .and_then(|c| host.measure_box(&c));
        match step.callout() {
            Some(callout) => println!(
                "  {} -> image bounds {:?}",
                step.selector(),
                callout.bounds(control, spacing)
            ),
            None => println!("  {} -> highlight only", step.selector()),
        }
        tour.add_step(step);
    }
    if let Some(exit) = tour.exit() {
        println!(
            "  exit {} at {:?}, kept after first step: {}",
            exit.image().path,
            exit.offset(),
            exit.is_visible_after_first_step()
        );
    }

    println!("== start ==");
    if let Err(err) = tour.start(&mut host) {
        eprintln!("could not start tour: {err}");
        return;
    }

    let script = [
        Input::Click(ClickTarget::Overlay), // before the overlay is open
        Input::Tick,
        Input::Tick,
        Input::Click(ClickTarget::Overlay),
        Input::Click(ClickTarget::Overlay), // mid fade-out
        Input::Tick,
        Input::Tick,
        Input::Tick,
        Input::Resize(Rect::new(300.0, 10.0, 500.0, 40.0)),
        Input::Click(ClickTarget::Overlay),
        Input::Tick,
        Input::Tick,
        Input::Click(ClickTarget::Exit),
        Input::Tick,
        Input::Click(ClickTarget::Overlay), // after close
    ];

    for input in script {
        println!("== {input:?} ==");
        let reaction = match input {
            Input::Tick => match host.running.pop_front() {
                Some(id) => tour.on_transition_end(&mut host, id),
                None => Reaction::Ignored,
            },
            Input::Click(ClickTarget::Overlay) => tour.on_overlay_click(&mut host),
            Input::Click(ClickTarget::Exit) => tour.on_exit_click(&mut host),
            Input::Resize(rect) => {
                host.controls[1].1 = rect;
                tour.on_resize(&mut host)
            }
        };
        println!("  -> {reaction:?} ({:?}, {} queued)", tour.state(), tour.remaining());
    }
}
