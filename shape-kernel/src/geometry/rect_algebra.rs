//--------------------------------------------------------------------
// rect_algebra.rs
//--------------------------------------------------------------------
// Provides the containment, intersection and normalization operations
// over rectangles
//--------------------------------------------------------------------

use super::*;

// Containment is boundary-inclusive while intersection requires a strictly
// positive overlap on both axes. Edge-touching rectangles are therefore not
// intersecting even though each contains the shared edge.
impl Rect {
    pub fn contains_rect(&self, other: Rect) -> bool {
        let (max, other_max) = (self.max(), other.max());
        other.origin.x >= self.origin.x && other.origin.y >= self.origin.y &&
            other_max.x <= max.x && other_max.y <= max.y
    }

    pub fn contains_point(&self, pt: Point) -> bool {
        let max = self.max();
        self.origin.x <= pt.x && self.origin.y <= pt.y && max.x >= pt.x && max.y >= pt.y
    }

    pub fn intersects(&self, other: Rect) -> bool {
        let (max, other_max) = (self.max(), other.max());
        self.origin.x < other_max.x && other.origin.x < max.x &&
            self.origin.y < other_max.y && other.origin.y < max.y
    }

    /// The overlapping region of both rectangles. When they do not
    /// [intersect](Rect::intersects) the result has a non-positive width or
    /// height.
    pub fn intersection(&self, other: Rect) -> Rect {
        Rect::from_min_max(self.origin.max(other.origin), self.max().min(other.max()))
    }

    /// The smallest rectangle covering both rectangles.
    pub fn union(&self, other: Rect) -> Rect {
        let max = self.max().max(other.max());
        let mut rect = Rect::from_min_max(self.origin.min(other.origin), max);

        // origin + (max - origin) can round below max; widen by single ulps
        // until the far corner is reached again
        while rect.origin.x + rect.size.width < max.x { rect.size.width = rect.size.width.step_up(); }
        while rect.origin.y + rect.size.height < max.y { rect.size.height = rect.size.height.step_up(); }
        rect
    }

    /// Flips negative extents so the same region is described with a
    /// non-negative size.
    pub fn standardize(&self) -> Rect {
        let mut rect = *self;
        if rect.size.width < 0.0 {
            rect.origin.x += rect.size.width;
            rect.size.width = -rect.size.width;
        }
        if rect.size.height < 0.0 {
            rect.origin.y += rect.size.height;
            rect.size.height = -rect.size.height;
        }
        rect
    }

    /// Expands the rectangle outwards to the nearest integer-aligned bounds.
    pub fn integral(&self) -> Rect {
        let max = self.max();
        Rect::from_min_max(Point::new(self.origin.x.floor(), self.origin.y.floor()),
            Point::new(max.x.ceil(), max.y.ceil()))
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top
    /// and bottom. Negative amounts grow it.
    pub fn inset(&self, dx: Coord, dy: Coord) -> Rect {
        Rect::from_origin_size(self.origin + Point::new(dx, dy),
            self.size - Size::new(2.0 * dx, 2.0 * dy))
    }

    pub fn offset(&self, dx: Coord, dy: Coord) -> Rect {
        Rect::from_origin_size(self.origin + Point::new(dx, dy), self.size)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let c = Rect::new(100.0, 100.0, 100.0, 100.0);
        assert!(a.intersects(b), "a and b intersect");
        assert!(!a.intersects(c), "a and c only share a corner");
        assert!(!a.intersects(Rect::new(100.0, 0.0, 10.0, 100.0)), "a and its right neighbour share an edge");
    }

    #[test]
    fn test_contains_rect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 50.0, 50.0);
        let c = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.contains_rect(b), "a should contain b");
        assert!(c.contains_rect(b), "c should contain b");
        assert!(!a.contains_rect(c), "a should not contain c");
        assert!(a.contains_rect(a));
    }

    #[test]
    fn test_contains_point() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(25.0, 25.0, 50.0, 50.0);
        let c = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.contains_point(b.center()), "a should contain the center of b");
        assert!(b.contains_point(c.origin), "b should contain the origin of c");
        assert!(!c.contains_point(b.origin), "c should not contain the origin of b");
        assert!(a.contains_point(a.max()), "the far corner lies on the boundary");
    }

    #[test]
    fn test_intersection() {
        for (w0, h0, w1, h1) in [(90.0, 20.0, 45.0, 80.0), (10.0, 10.0, 99.0, 12.0), (55.0, 55.0, 30.0, 30.0)].iter().copied() {
            let a = Rect::new(0.0, 0.0, w0, h0);
            let b = Rect::new(10.0, 10.0, w1, h1);
            let c = a.intersection(b);

            let x = if b.max().x < a.max().x { b.max().x } else { a.max().x };
            let y = if b.max().y < a.max().y { b.max().y } else { a.max().y };
            assert_eq!(c, Rect::new(b.origin.x, b.origin.y, x - b.origin.x, y - b.origin.y));
        }
    }

    #[test]
    fn test_disjoint_intersection_is_degenerate() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(b));
        assert!(!a.intersection(b).has_area());
        assert_eq!(a.intersection(b), Rect::new(20.0, 0.0, -10.0, 10.0));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(12.0, 40.0, 31.0, 8.0);
        let b = Rect::new(3.0, 55.0, 90.0, 2.0);
        let o = Point::new(a.origin.x.min(b.origin.x), a.origin.y.min(b.origin.y));
        let s = Size::new(a.max().x.max(b.max().x) - o.x, a.max().y.max(b.max().y) - o.y);
        assert_eq!(a.union(b), Rect::from_origin_size(o, s));
        assert_eq!(a.union(b), Rect::new(3.0, 40.0, 90.0, 17.0));
    }

    #[test]
    fn test_union_covers_inexact_far_corner() {
        // max - origin rounds down here, so the naive far corner falls one ulp short
        let a = Rect::new(-542.4755574590947, 0.0, 472.63534777696117, 1.0);
        let b = Rect::new(802.8549152229671, -124.22481269885589, 15.294991516776768, 247.90612069092532);
        let c = Rect::new(-533.8310994848548, 0.0, 115.43327077049214, 1.0);
        let u = a.union(b).union(c);

        assert!(u.max().x >= b.max().x);
        assert!(u.contains_rect(a), "{} does not contain {}", u, a);
        assert!(u.contains_rect(b), "{} does not contain {}", u, b);
        assert!(u.contains_rect(c), "{} does not contain {}", u, c);
        assert_eq!(u.origin, Point::new(a.origin.x, b.origin.y));
    }

    #[test]
    fn test_integral() {
        assert_eq!(Rect::new(0.1, 0.9, 9.9, 9.1).integral(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(Rect::new(-0.5, 2.0, 1.0, 1.0).integral(), Rect::new(-1.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn test_standardize() {
        assert_eq!(Rect::new(0.0, 0.0, -10.0, -10.0).standardize(), Rect::new(-10.0, -10.0, 10.0, 10.0));
        assert_eq!(Rect::new(5.0, 5.0, -2.0, 3.0).standardize(), Rect::new(3.0, 5.0, 2.0, 3.0));

        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.standardize(), r);
    }

    #[test]
    fn test_inset() {
        let a = Rect::new(14.0, 63.0, 51.0, 38.0);
        assert_eq!(a.inset(7.0, 2.0), Rect::new(21.0, 65.0, 37.0, 34.0));
        assert_eq!(a.inset(7.0, 2.0).center(), a.center());
        assert_eq!(a.inset(-1.0, -1.0), Rect::new(13.0, 62.0, 53.0, 40.0));
        assert!(!a.inset(30.0, 0.0).has_area(), "over-insetting collapses the width");
    }

    #[test]
    fn test_offset() {
        let a = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert_eq!(a.offset(3.0, -1.0), Rect::new(4.0, 0.0, 2.0, 2.0));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0, 0.0f64..500.0, 0.0f64..500.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    fn any_sign_rect_strategy() -> impl Strategy<Value = Rect> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0, -500.0f64..500.0, -500.0f64..500.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(a in any_sign_rect_strategy(), b in any_sign_rect_strategy()) {
            prop_assert_eq!(a.intersects(b), b.intersects(a));
        }

        #[test]
        fn union_covers_both(a in rect_strategy(), b in rect_strategy()) {
            let u = a.union(b);
            prop_assert!(u.contains_rect(a), "{} does not contain {}", u, a);
            prop_assert!(u.contains_rect(b), "{} does not contain {}", u, b);
        }

        #[test]
        fn union_covers_both_with_any_sign(a in any_sign_rect_strategy(), b in any_sign_rect_strategy()) {
            let u = a.union(b);
            prop_assert!(u.contains_rect(a), "{} does not contain {}", u, a);
            prop_assert!(u.contains_rect(b), "{} does not contain {}", u, b);
        }

        #[test]
        fn intersection_has_area_iff_intersects(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.intersection(b).has_area(), a.intersects(b));
        }

        #[test]
        fn contains_is_reflexive(a in rect_strategy()) {
            prop_assert!(a.contains_rect(a));
        }

        #[test]
        fn standardize_is_standard_and_idempotent(a in any_sign_rect_strategy()) {
            let s = a.standardize();
            prop_assert!(s.is_standard());
            prop_assert_eq!(s.standardize(), s);
        }

        #[test]
        fn integral_contains_input(a in rect_strategy()) {
            let i = a.integral();
            prop_assert!(i.contains_rect(a));
            prop_assert_eq!(i.origin.x.fract(), 0.0);
            prop_assert_eq!(i.origin.y.fract(), 0.0);
            prop_assert_eq!(i.max().x.fract(), 0.0);
            prop_assert_eq!(i.max().y.fract(), 0.0);
        }
    }
}
