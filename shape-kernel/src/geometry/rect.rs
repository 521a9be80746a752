//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides a rectangle class
//--------------------------------------------------------------------

use approx::{AbsDiffEq, RelativeEq};

use super::*;
use CoordM::INFINITY;

/// An axis-aligned rectangle described by its origin corner and its size.
///
/// The size may be negative on either axis, in which case the rectangle
/// extends from the origin towards the negative direction; see
/// [`Rect::standardize`].
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Rect { pub origin: Point, pub size: Size }

impl Rect {
    pub fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Rect {
        Rect { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Rect { Rect { origin, size } }

    // Shared by every constructor that works with two opposite corners
    pub(crate) fn from_min_max(min: Point, max: Point) -> Rect {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn width(&self) -> Coord { self.size.width }
    pub fn height(&self) -> Coord { self.size.height }

    pub fn min(&self) -> Point { self.origin }
    pub fn max(&self) -> Point { self.origin + self.size }

    pub fn center(&self) -> Point { self.origin + self.size / 2.0 }

    /// Moves the rectangle so that its center lands on `center`, keeping the size.
    pub fn set_center(&mut self, center: Point) { self.origin = center - self.size / 2.0; }

    pub fn with_center(mut self, center: Point) -> Rect {
        self.set_center(center);
        self
    }

    pub fn corners(&self) -> [Point; 4] {
        let max = self.max();
        [self.origin, Point::new(max.x, self.origin.y), max, Point::new(self.origin.x, max.y)]
    }

    pub fn is_standard(&self) -> bool { self.size.width >= 0.0 && self.size.height >= 0.0 }
    pub fn has_area(&self) -> bool { self.size.width > 0.0 && self.size.height > 0.0 }

    pub fn enclosing(pts: impl Iterator<Item = Point>) -> Option<Rect> {
        let mut x1 = INFINITY;
        let mut x2 = -INFINITY;
        let mut y1 = INFINITY;
        let mut y2 = -INFINITY;

        let mut empty = true;
        for pt in pts {
            if x1 > pt.x { x1 = pt.x; }
            if x2 < pt.x { x2 = pt.x; }
            if y1 > pt.y { y1 = pt.y; }
            if y2 < pt.y { y2 = pt.y; }
            empty = false;
        }

        if empty { None } else { Some(Rect::from_min_max(Point::new(x1, y1), Point::new(x2, y2))) }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x={}, y={}, width={}, height={})",
            self.origin.x, self.origin.y, self.size.width, self.size.height)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Rect, epsilon: Coord) -> bool {
        self.origin.abs_diff_eq(&other.origin, epsilon) && self.size.abs_diff_eq(&other.size, epsilon)
    }
}

impl RelativeEq for Rect {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Rect, epsilon: Coord, max_relative: Coord) -> bool {
        self.origin.relative_eq(&other.origin, epsilon, max_relative)
            && self.size.relative_eq(&other.size, epsilon, max_relative)
    }
}
