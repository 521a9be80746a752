//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate type
//--------------------------------------------------------------------

use super::*;
use std::ops::Range;
use CoordM::consts::PI;

pub const TWO_PI: Coord = 2.0 * PI;
pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

// Some utility functions for Coord
// trait used only for implementation
pub trait Geometry where Self: Sized {
    fn wrap_angle(self) -> Self;
    fn step_up(self) -> Self;

    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
    fn roughly_equals(self, other: Self) -> bool;
}

impl Geometry for Coord {
    fn wrap_angle(self) -> Coord { self + TWO_PI * (-self / TWO_PI).round() }

    // The smallest representable value greater than self
    fn step_up(self) -> Coord {
        if self.is_nan() || self == CoordM::INFINITY { return self; }
        if self == 0.0 { return Coord::from_bits(1); }

        let bits = self.to_bits();
        Coord::from_bits(if self > 0.0 { bits + 1 } else { bits - 1 })
    }

    fn roughly_zero(self) -> bool { self > -EPSILON && self < EPSILON }
    fn roughly_zero_squared(self) -> bool { self > -EPSILON2 && self < EPSILON2 }
    fn roughly_equals(self, other: Self) -> bool { (self - other).roughly_zero() }
}

pub fn lerp(a: Coord, b: Coord, t: Coord) -> Coord { a + (b - a) * t }

pub fn clamp(v: Coord, lo: Coord, hi: Coord) -> Coord {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Maps `v` from the `from` interval onto the `to` interval. The value is not
/// clamped, so points outside `from` extrapolate linearly.
pub fn linear_map(v: Coord, from: Range<Coord>, to: Range<Coord>) -> Coord {
    let t = (v - from.start) / (from.end - from.start);
    lerp(to.start, to.end, t)
}

pub fn deg_to_rad(deg: Coord) -> Coord { deg * PI / 180.0 }
pub fn rad_to_deg(rad: Coord) -> Coord { rad * 180.0 / PI }
