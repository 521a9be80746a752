//------------------------------------------------------------------------------
// regular_polygon.rs
//------------------------------------------------------------------------------
// Provides the regular polygon inscribed in a bounding rectangle
//------------------------------------------------------------------------------

use super::*;
use tracing::{debug, trace};

/// Builds the vertices of a regular polygon inscribed in `bounds`.
///
/// The bounds are first inset by `line_width` on every side so that a stroke
/// of that width stays within them. Vertex `i` sits at angle
/// `phase + i * 2π / sides` on the ellipse inscribed in the inset rectangle.
///
/// The result is empty when `sides` is zero or when the inset rectangle has
/// no width or height left.
pub fn regular_polygon(bounds: Rect, line_width: Coord, sides: usize, phase: Coord) -> PolygonPath {
    let rect = bounds.inset(line_width, line_width);
    let rx = rect.size.width / 2.0;
    let ry = rect.size.height / 2.0;
    if sides == 0 || rx <= 0.0 || ry <= 0.0 {
        debug!(%bounds, line_width, sides, "regular polygon has no usable area, path left empty");
        return PolygonPath::empty();
    }

    let center = rect.center();
    let delta = TWO_PI / sides as Coord;

    let vertices = (0..sides)
        .map(|i| phase + delta * i as Coord)
        .map(|angle| Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin()))
        .collect();

    PolygonPath::closed(vertices)
}

/// The parameters that shape a [`RegularPolygon`] inside its bounds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PolygonStyle {
    pub sides: usize,
    /// Angle of the first vertex, in radians.
    pub phase: Coord,
    pub line_width: Coord
}

impl Default for PolygonStyle {
    fn default() -> Self { PolygonStyle { sides: 3, phase: 0.0, line_width: 1.0 } }
}

/// A regular polygon shape that owns its parameters and caches the derived path.
///
/// Changing any parameter only marks the path as stale. The path is rebuilt
/// either explicitly with [`RegularPolygon::rebuild`] or on the next read
/// through [`RegularPolygon::path`].
#[derive(Clone, Debug)]
pub struct RegularPolygon {
    bounds: Rect,
    style: PolygonStyle,
    path: PolygonPath,
    stale: bool
}

impl RegularPolygon {
    pub fn new(bounds: Rect) -> RegularPolygon { RegularPolygon::with_style(bounds, PolygonStyle::default()) }

    pub fn with_style(bounds: Rect, style: PolygonStyle) -> RegularPolygon {
        RegularPolygon { bounds, style, path: PolygonPath::empty(), stale: true }
    }

    pub fn bounds(&self) -> Rect { self.bounds }
    pub fn style(&self) -> PolygonStyle { self.style }
    pub fn sides(&self) -> usize { self.style.sides }
    pub fn phase(&self) -> Coord { self.style.phase }
    pub fn line_width(&self) -> Coord { self.style.line_width }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.stale = true;
    }

    pub fn set_style(&mut self, style: PolygonStyle) {
        self.style = style;
        self.stale = true;
    }

    pub fn set_sides(&mut self, sides: usize) {
        self.style.sides = sides;
        self.stale = true;
    }

    pub fn set_phase(&mut self, phase: Coord) {
        self.style.phase = phase;
        self.stale = true;
    }

    pub fn set_line_width(&mut self, line_width: Coord) {
        self.style.line_width = line_width;
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool { self.stale }

    pub fn rebuild(&mut self) {
        let PolygonStyle { sides, phase, line_width } = self.style;
        self.path = regular_polygon(self.bounds, line_width, sides, phase);
        self.stale = false;
        trace!(sides, phase, vertices = self.path.len(), "rebuilt regular polygon path");
    }

    /// The current path, rebuilt first if a parameter changed since the last build.
    pub fn path(&mut self) -> &PolygonPath {
        if self.stale { self.rebuild(); }
        &self.path
    }
}
