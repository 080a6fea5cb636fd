// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compass directions for call-out arrows and their default tip positions.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};
use thiserror::Error;

/// Compass direction a call-out arrow points in.
///
/// The direction also decides which edge or corner of the control the image
/// is anchored to. See [`callout_origin`](crate::callout_origin) for the exact
/// placement per direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    /// Points up; image below the control, horizontally centered.
    N,
    /// Points up and right; image below-left of the control.
    NE,
    /// Points right; image left of the control, vertically centered.
    E,
    /// Points down and right; image above-left of the control.
    SE,
    /// Points down; image above the control, horizontally centered.
    S,
    /// Points down and left; image above-right of the control.
    SW,
    /// Points left; image right of the control, vertically centered.
    W,
    /// Points up and left; image below-right of the control.
    NW,
}

impl ArrowDirection {
    /// All eight directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Compass name of the direction (`"N"`, `"NE"`, …).
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Tip position assumed when the caller does not supply one.
    ///
    /// The result is in the image's own coordinates, except for [`Self::S`]
    /// whose vertical default is the control's bottom edge. Hosts that draw the
    /// arrow themselves can use this to put the tip where placement expects it.
    pub fn default_tip(self, image: Size, control: Rect) -> Point {
        let (w, h) = (image.width, image.height);
        match self {
            Self::N => Point::new(w / 2.0, 0.0),
            Self::S => Point::new(w / 2.0, control.y1),
            Self::E => Point::new(w, h / 2.0),
            Self::W => Point::new(0.0, h / 2.0),
            Self::NE => Point::new(w, 0.0),
            Self::NW => Point::ZERO,
            Self::SE => Point::new(w, h),
            Self::SW => Point::new(0.0, h),
        }
    }
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a string is not a compass direction name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("expected one of N, NE, E, SE, S, SW, W, NW")]
pub struct ParseDirectionError;

impl FromStr for ArrowDirection {
    type Err = ParseDirectionError;

    /// Parse a compass name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseDirectionError)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("ne".parse::<ArrowDirection>(), Ok(ArrowDirection::NE));
        assert_eq!(" Sw ".parse::<ArrowDirection>(), Ok(ArrowDirection::SW));
        assert_eq!("W".parse::<ArrowDirection>(), Ok(ArrowDirection::W));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!("north".parse::<ArrowDirection>(), Err(ParseDirectionError));
        assert_eq!("".parse::<ArrowDirection>(), Err(ParseDirectionError));
    }

    #[test]
    fn parse_error_lists_valid_names() {
        let err = "up".parse::<ArrowDirection>().unwrap_err();
        assert_eq!(err.to_string(), "expected one of N, NE, E, SE, S, SW, W, NW");
        let err: &dyn core::error::Error = &err;
        assert!(err.source().is_none());
    }

    #[test]
    fn name_matches_parse() {
        for d in ArrowDirection::ALL {
            assert_eq!(d.name().parse::<ArrowDirection>(), Ok(d));
        }
    }

    #[test]
    fn south_default_tip_uses_control_bottom() {
        let image = Size::new(60.0, 30.0);
        let control = Rect::new(100.0, 50.0, 300.0, 90.0);
        assert_eq!(
            ArrowDirection::S.default_tip(image, control),
            Point::new(30.0, 90.0)
        );
        assert_eq!(
            ArrowDirection::SE.default_tip(image, control),
            Point::new(60.0, 30.0)
        );
    }
}
