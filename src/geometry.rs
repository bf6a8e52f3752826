use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Tolerance below which an overlap extent or a forwarded delta is treated as zero.
pub const EPSILON: f64 = 1e-6;

/// A rectangle given by its center and extents.
///
/// The center is relative to the center of the owning panel, not world space.
/// The same type describes a face's full extent and the overlap band on it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rect from a `[x, y, w, h]` slice, as passed over the WASM boundary.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            [x, y, w, h] => Some(Self::new(*x, *y, *w, *h)),
            _ => None,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.w, self.h]
    }
}

/// Geometric direction in a panel's local frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The edge of a panel's rectangular boundary a face lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl FaceSide {
    pub const ALL: [FaceSide; 4] = [
        FaceSide::Left,
        FaceSide::Right,
        FaceSide::Top,
        FaceSide::Bottom,
    ];

    pub fn opposite(self) -> FaceSide {
        match self {
            FaceSide::Left => FaceSide::Right,
            FaceSide::Right => FaceSide::Left,
            FaceSide::Top => FaceSide::Bottom,
            FaceSide::Bottom => FaceSide::Top,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FaceSide::Left => "left",
            FaceSide::Right => "right",
            FaceSide::Top => "top",
            FaceSide::Bottom => "bottom",
        }
    }
}

impl fmt::Display for FaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown face side: {0:?}")]
pub struct ParseFaceSideError(pub String);

impl FromStr for FaceSide {
    type Err = ParseFaceSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(FaceSide::Left),
            "right" => Ok(FaceSide::Right),
            "top" => Ok(FaceSide::Top),
            "bottom" => Ok(FaceSide::Bottom),
            other => Err(ParseFaceSideError(other.to_string())),
        }
    }
}

/// Axis along which the overlap on a face of this side varies.
///
/// Left and right faces are perpendicular to the horizontal axis, so their
/// overlap runs vertically. Top and bottom faces run horizontally.
pub fn axis_for_side(side: FaceSide) -> Axis {
    match side {
        FaceSide::Left | FaceSide::Right => Axis::Vertical,
        FaceSide::Top | FaceSide::Bottom => Axis::Horizontal,
    }
}

/// Extent of `rect` along `axis`: `w` for horizontal, `h` for vertical.
pub fn length_along(rect: &Rect, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => rect.w,
        Axis::Vertical => rect.h,
    }
}

/// Grows (or shrinks) the extent of `rect` along `axis` by `delta`, in place.
pub fn resize_along(rect: &mut Rect, axis: Axis, delta: f64) {
    match axis {
        Axis::Horizontal => rect.w += delta,
        Axis::Vertical => rect.h += delta,
    }
}

/// Scale factor translating a delta on `self_rect` into a delta on `other_rect`.
///
/// A degenerate self extent (a butt joint with no measurable overlap band)
/// yields `1.0` so the delta passes through unscaled.
pub fn compute_ratio(self_rect: &Rect, other_rect: &Rect, axis: Axis) -> f64 {
    let length_self = length_along(self_rect, axis);
    let length_other = length_along(other_rect, axis);
    if length_self.abs() < EPSILON {
        return 1.0;
    }
    length_other / length_self
}
