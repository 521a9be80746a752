//--------------------------------------------------------------------
// point.rs
//--------------------------------------------------------------------
// Provides a two-dimensional point class
//--------------------------------------------------------------------

use crate::derive_more::*;
use approx::{AbsDiffEq, RelativeEq};

use super::*;

// Point
#[derive(Copy, Clone, Add, Sub, Mul, Div, AddAssign, SubAssign, Neg, PartialEq,
    MulAssign, DivAssign, From, Into, Display, Constructor, Default)]
#[display(fmt = "({},{})", x, y)]
pub struct Point { pub x: Coord, pub y: Coord }

impl Point {
    pub fn zero() -> Point { Point { x: 0.0, y: 0.0 } }
    pub fn from_angle(angle: Coord) -> Point { Point::new(angle.cos(), angle.sin()) }

    pub fn is_zero(&self) -> bool { self.x == 0.0 && self.y == 0.0 }

    pub fn dot(&self, other: Point) -> Coord { self.x * other.x + self.y * other.y }
    pub fn cross(&self, other: Point) -> Coord { self.x * other.y - self.y * other.x }

    pub fn length_sq(&self) -> Coord { self.dot(*self) }
    pub fn length(&self) -> Coord { self.length_sq().sqrt() }
    pub fn distance(&self, other: Point) -> Coord { (other - *self).length() }

    pub fn angle(&self) -> Coord { self.y.atan2(self.x) }
    pub fn angle_facing(&self, other: Point) -> Coord { (other - *self).angle() }

    pub fn min(&self, other: Point) -> Point { Point::new(self.x.min(other.x), self.y.min(other.y)) }
    pub fn max(&self, other: Point) -> Point { Point::new(self.x.max(other.x), self.y.max(other.y)) }

    pub fn roughly_equals(&self, other: Point) -> bool { (*self - other).length_sq().roughly_zero_squared() }
}

// Implement scalar * mul as required
impl core::ops::Mul<Point> for Coord {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point { Point::new(self * rhs.x, self * rhs.y) }
}

// Displacing a point by a size moves it towards the opposite corner
impl core::ops::Add<Size> for Point {
    type Output = Point;
    fn add(self, rhs: Size) -> Point { Point::new(self.x + rhs.width, self.y + rhs.height) }
}

impl core::ops::Sub<Size> for Point {
    type Output = Point;
    fn sub(self, rhs: Size) -> Point { Point::new(self.x - rhs.width, self.y - rhs.height) }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Point, epsilon: Coord) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Point, epsilon: Coord, max_relative: Coord) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
