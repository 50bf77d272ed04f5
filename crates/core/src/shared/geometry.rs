/// An integer pixel coordinate. May lie outside the image for landmarks
/// a detector extrapolated past the frame edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Midpoint with floor division on each axis, rounding toward negative
    /// infinity for negative sums. The result may sit up to one pixel
    /// left of / above the exact average.
    pub fn floored_midpoint(a: Point, b: Point) -> Point {
        Point {
            x: floored_half_sum(a.x, b.x),
            y: floored_half_sum(a.y, b.y),
        }
    }
}

/// Floor of `(a + b) / 2`, summed in `i64` so extreme coordinates cannot overflow.
fn floored_half_sum(a: i32, b: i32) -> i32 {
    (a as i64 + b as i64).div_euclid(2) as i32
}

/// Face bounding box in `(top, right, bottom, left)` pixel coordinates.
///
/// `right` and `bottom` are exclusive when cropping and inclusive when
/// outlining.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceBox {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl FaceBox {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Builds a box from corner coordinates, rounding and clamping to the frame.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64, width: u32, height: u32) -> Self {
        let clamp = |v: f64, max: u32| v.round().clamp(0.0, max as f64) as i32;
        Self {
            top: clamp(y1, height),
            right: clamp(x2, width),
            bottom: clamp(y2, height),
            left: clamp(x1, width),
        }
    }
}
