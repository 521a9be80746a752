//------------------------------------------------------------------------------
// polygon_path.rs
//------------------------------------------------------------------------------
// Provides the ordered vertex sequence that a renderer strokes or fills
//------------------------------------------------------------------------------

use super::*;

/// An ordered sequence of vertices joined by straight edges.
///
/// A closed path has an implicit final edge from the last vertex back to the
/// first. An empty path has nothing to draw.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PolygonPath {
    vertices: Vec<Point>,
    closed: bool
}

impl PolygonPath {
    pub fn empty() -> PolygonPath { PolygonPath { vertices: Vec::new(), closed: false } }
    pub fn closed(vertices: Vec<Point>) -> PolygonPath { PolygonPath { vertices, closed: true } }
    pub fn open(vertices: Vec<Point>) -> PolygonPath { PolygonPath { vertices, closed: false } }

    pub fn triangle(pts: [Point; 3]) -> PolygonPath { PolygonPath::closed(pts.to_vec()) }

    pub fn len(&self) -> usize { self.vertices.len() }
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }
    pub fn is_closed(&self) -> bool { self.closed }
    pub fn is_triangle(&self) -> bool { self.closed && self.vertices.len() == 3 }

    pub fn vertices(&self) -> &[Point] { &self.vertices }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.vertices.iter() }
    pub fn into_vertices(self) -> Vec<Point> { self.vertices }

    pub fn edges(&self) -> PolygonEdges<'_> { PolygonEdges { path: self, index: 0 } }

    pub fn bounding_rect(&self) -> Option<Rect> { Rect::enclosing(self.iter().copied()) }

    pub fn signed_area(&self) -> Coord {
        if self.closed { polygon_signed_area(&self.vertices) } else { 0.0 }
    }

    pub fn contains_point(&self, pt: Point) -> bool {
        self.closed && polygon_contains_point(&self.vertices, pt)
    }

    /// The path as MoveTo/LineTo commands, terminated by ClosePath when the
    /// path is closed.
    pub fn to_commands(&self) -> Path {
        let mut path = Vec::with_capacity(self.vertices.len() + 1);
        for (i, &pt) in self.vertices.iter().enumerate() {
            if i == 0 { path.push(PathCommand::MoveTo(pt)); }
            else { path.push(PathCommand::LineTo(pt)); }
        }

        if self.closed && !path.is_empty() { path.push(PathCommand::ClosePath); }
        path
    }
}

impl<'a> IntoIterator for &'a PolygonPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// Iterates over the segments of a polygon path, including the closing one
pub struct PolygonEdges<'a> {
    path: &'a PolygonPath,
    index: usize
}

impl<'a> Iterator for PolygonEdges<'a> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let vertices = &self.path.vertices;
        let count = if self.path.closed && vertices.len() > 1 { vertices.len() }
            else { vertices.len().saturating_sub(1) };

        if self.index >= count { return None; }

        let i = self.index;
        self.index += 1;
        Some((vertices[i], vertices[(i + 1) % vertices.len()]))
    }
}
