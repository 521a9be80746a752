//------------------------------------------------------------------------------
// mod.rs
//------------------------------------------------------------------------------
// Provides the Path data structure, which is just a container for PathCommands,
// and the polygon paths handed over to a renderer
//------------------------------------------------------------------------------

mod polygon_path;
mod regular_polygon;

pub use polygon_path::*;
pub use regular_polygon::*;

use std::fmt::*;

use crate::geometry::*;

// The PathCommand enum
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ClosePath
}

// Implementing the display
impl Display for PathCommand {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PathCommand::MoveTo(target) => write!(f, "MoveTo({})", target),
            PathCommand::LineTo(target) => write!(f, "LineTo({})", target),
            PathCommand::ClosePath => write!(f, "ClosePath()"),
        }
    }
}

// The Path is just a vector of path commands
pub type Path = Vec<PathCommand>;
