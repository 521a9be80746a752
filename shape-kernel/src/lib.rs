//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;

mod geometry;
mod path;

pub use geometry::*;
pub use path::*;
