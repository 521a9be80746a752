//--------------------------------------------------------------------
// geometry.rs
//--------------------------------------------------------------------
// Provides the geometric value types and the rectangle algebra
//--------------------------------------------------------------------

mod coord_utils;
mod point;
mod size;
mod rect;
mod rect_algebra;
mod polygon;

pub type Coord = f64;
pub use std::f64 as CoordM;

pub use coord_utils::*;
pub use point::*;
pub use size::*;
pub use rect::*;
pub use polygon::*;
