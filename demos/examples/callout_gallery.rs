// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a call-out lands for every arrow direction.
//!
//! Places the same image around one control in all eight directions and
//! prints the resulting image bounds, plus the absolute (direction-less) case
//! and the degraded case where the control cannot be measured.
//!
//! Run:
//! - `cargo run -p understory_demos --example callout_gallery`

use kurbo::{Point, Rect, Size};
use understory_callout::{ArrowDirection, Callout, DEFAULT_SPACING};

fn main() {
    let control = Rect::new(300.0, 200.0, 420.0, 240.0);
    let image = Size::new(160.0, 60.0);
    println!("control {control:?}, image {image:?}, spacing {DEFAULT_SPACING}");

    for direction in ArrowDirection::ALL {
        let callout = Callout::new(image, Some(direction));
        let bounds = callout.bounds(Some(control), DEFAULT_SPACING);
        let tip = direction.default_tip(image, control);
        println!(
            "{direction:>2}: image at ({:>6.1}, {:>6.1})..({:>6.1}, {:>6.1}), tip ({:.1}, {:.1})",
            bounds.x0, bounds.y0, bounds.x1, bounds.y1, tip.x, tip.y
        );
    }

    let pinned = Callout::new(image, None).with_tip(Point::new(24.0, 24.0));
    println!("pinned: {:?}", pinned.origin(Some(control), DEFAULT_SPACING));

    let unmeasured = Callout::new(image, Some(ArrowDirection::N));
    println!("unmeasured N: {:?}", unmeasured.origin(None, DEFAULT_SPACING));
}
