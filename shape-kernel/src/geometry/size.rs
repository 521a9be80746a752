//--------------------------------------------------------------------
// size.rs
//--------------------------------------------------------------------
// Provides a two-dimensional extent class
//--------------------------------------------------------------------

use crate::derive_more::*;
use approx::{AbsDiffEq, RelativeEq};

use super::*;

// Size. Negative extents are allowed; they mark a rectangle that grows
// towards the negative axes until it is standardized.
#[derive(Copy, Clone, Add, Sub, Mul, Div, AddAssign, SubAssign, PartialEq,
    MulAssign, DivAssign, From, Into, Display, Constructor, Default)]
#[display(fmt = "({}x{})", width, height)]
pub struct Size { pub width: Coord, pub height: Coord }

impl Size {
    pub fn zero() -> Size { Size { width: 0.0, height: 0.0 } }
    pub fn is_zero(&self) -> bool { self.width == 0.0 && self.height == 0.0 }

    pub fn area(&self) -> Coord { self.width * self.height }
    pub fn abs(&self) -> Size { Size::new(self.width.abs(), self.height.abs()) }
}

// The vector spanned by a size
impl From<Size> for Point {
    fn from(s: Size) -> Point { Point::new(s.width, s.height) }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl AbsDiffEq for Size {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Size, epsilon: Coord) -> bool {
        self.width.abs_diff_eq(&other.width, epsilon) && self.height.abs_diff_eq(&other.height, epsilon)
    }
}

impl RelativeEq for Size {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Size, epsilon: Coord, max_relative: Coord) -> bool {
        self.width.relative_eq(&other.width, epsilon, max_relative)
            && self.height.relative_eq(&other.height, epsilon, max_relative)
    }
}
