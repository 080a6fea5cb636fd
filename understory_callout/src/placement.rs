// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-out origin computation.

use kurbo::{Point, Rect, Size};

use crate::ArrowDirection;

/// Gap between a control and a cardinal call-out when none is specified.
pub const DEFAULT_SPACING: f64 = 20.0;

/// Compute the top-left position of a call-out image.
///
/// - `image`: rendered size of the call-out image.
/// - `control`: bounding box of the highlighted control, or `None` when the
///   host could not measure it. `None` anchors every edge at `(0, 0)`.
/// - `direction`: where the arrow points, or `None` for absolute placement.
/// - `tip`: the arrow tip in image coordinates. When `None`, the direction's
///   [`default_tip`](ArrowDirection::default_tip) is used.
/// - `spacing`: gap applied to cardinal directions only.
///
/// With `l, r, t, b` the control edges, `xm, ym` its center, `w, h` the image
/// size and `(px, py)` the tip:
///
/// | Direction | left | top |
/// | --- | --- | --- |
/// | `N`  | `xm - px` | `b - py + spacing` |
/// | `S`  | `xm - px` | `t - h + py - spacing` |
/// | `E`  | `l - px - spacing` | `ym - py` |
/// | `W`  | `r - px + spacing` | `ym - py` |
/// | `NE` | `l - px` | `b - py / 2` |
/// | `NW` | `l + w + px` | `b - py / 2` |
/// | `SE` | `l - px` | `t - h + py / 2` |
/// | `SW` | `r + w + px` | `t - h + py / 2` |
/// | `None` | `tip.x` or `0` | `tip.y` or `0` |
///
/// The diagonal rows do not apply `spacing`, and `NW`/`SW` add the tip's x
/// where `NE`/`SE` subtract it. Existing call-out artwork is laid out against
/// exactly these formulas, so they are kept as-is.
pub fn callout_origin(
    image: Size,
    control: Option<Rect>,
    direction: Option<ArrowDirection>,
    tip: Option<Point>,
    spacing: f64,
) -> Point {
    let Some(direction) = direction else {
        return tip.unwrap_or(Point::ZERO);
    };

    let control = control.unwrap_or(Rect::ZERO);
    let (left, right, top, bottom) = (control.x0, control.x1, control.y0, control.y1);
    let mid = control.center();
    let (w, h) = (image.width, image.height);
    let tip = tip.unwrap_or_else(|| direction.default_tip(image, control));

    match direction {
        ArrowDirection::N => Point::new(mid.x - tip.x, bottom - tip.y + spacing),
        ArrowDirection::S => Point::new(mid.x - tip.x, top - h + tip.y - spacing),
        ArrowDirection::E => Point::new(left - tip.x - spacing, mid.y - tip.y),
        ArrowDirection::W => Point::new(right - tip.x + spacing, mid.y - tip.y),
        ArrowDirection::NE => Point::new(left - tip.x, bottom - tip.y / 2.0),
        ArrowDirection::NW => Point::new(left + w + tip.x, bottom - tip.y / 2.0),
        ArrowDirection::SE => Point::new(left - tip.x, top - h + tip.y / 2.0),
        ArrowDirection::SW => Point::new(right + w + tip.x, top - h + tip.y / 2.0),
    }
}

/// A call-out image description independent of any control.
///
/// Bundles the inputs of [`callout_origin`] that belong to the image itself,
/// so the same call-out can be placed against different controls or re-placed
/// after the control moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Callout {
    /// Rendered image size.
    pub size: Size,
    /// Arrow direction, or `None` for absolute placement at `tip`.
    pub direction: Option<ArrowDirection>,
    /// Arrow tip in image coordinates.
    pub tip: Option<Point>,
}

impl Callout {
    /// Create a call-out of the given size pointing in `direction`.
    pub const fn new(size: Size, direction: Option<ArrowDirection>) -> Self {
        Self {
            size,
            direction,
            tip: None,
        }
    }

    /// Set an explicit arrow tip.
    pub const fn with_tip(mut self, tip: Point) -> Self {
        self.tip = Some(tip);
        self
    }

    /// Top-left position of the image next to `control`.
    pub fn origin(&self, control: Option<Rect>, spacing: f64) -> Point {
        callout_origin(self.size, control, self.direction, self.tip, spacing)
    }

    /// Area covered by the placed image.
    pub fn bounds(&self, control: Option<Rect>, spacing: f64) -> Rect {
        Rect::from_origin_size(self.origin(control, spacing), self.size)
    }
}
