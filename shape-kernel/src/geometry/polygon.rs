//--------------------------------------------------------------------
// polygon.rs
//--------------------------------------------------------------------
// Provides the area and hit-testing rules used by closed polygon
// paths, with the last vertex implicitly joined back to the first
//--------------------------------------------------------------------

use crate::geometry::*;

// Shoelace area over the closing edge included; positive when the
// vertices turn counterclockwise in a y-up frame
pub fn polygon_signed_area(poly: &[Point]) -> Coord {
    let n = poly.len();
    (0..n).map(|i| poly[i].cross(poly[(i + 1) % n])).sum::<Coord>() / 2.0
}

// Even-odd rule: a point is inside when a ray cast towards +x crosses the
// outline an odd number of times. Each edge counts as half-open in y so a
// ray through a shared vertex is counted once.
pub fn polygon_contains_point(poly: &[Point], p: Point) -> bool {
    let n = poly.len();
    let mut inside = false;

    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        if (a.y > p.y) == (b.y > p.y) { continue; }

        let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
        if p.x < x { inside = !inside; }
    }

    inside
}
