#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::bounds;

/// An ordered pair of endpoints. The order only matters where documented:
/// [`Segment::intersect`] treats `self` as the reference segment for the
/// vertical special cases, and [`Segment::intersect_rect`] orders its results
/// by distance from `start`.
#[derive(Copy, Clone, Debug, PartialEq, bincode::Encode, bincode::Decode)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) / 2.0
    }

    /// Exact comparison on purpose: the vertical branch of [`intersect`]
    /// (Segment::intersect) keys off representation-exact verticality, and an
    /// epsilon here would reroute nearly-vertical segments into it.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// The intersection point of two finite segments, if any.
    ///
    /// The general path rejects parallel segments up front (zero cross
    /// product), then solves the parametric line equations with the perp-dot
    /// product and accepts the candidate only if it lies within both segments'
    /// parameter ranges.
    ///
    /// A vertical `self` has no slope for the general formula, so it takes a
    /// separate path: a collinear vertical `other` with overlapping y-range
    /// reports a representative point of the overlap, and any other segment is
    /// tested by interpolating its height at `self`'s x-coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide2d::core::prelude::*;
    ///
    /// let a = Segment::new(Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 10.0, y: 10.0 });
    /// let b = Segment::new(Vec2 { x: 0.0, y: 10.0 }, Vec2 { x: 10.0, y: 0.0 });
    /// assert_eq!(a.intersect(&b), Some(Vec2 { x: 5.0, y: 5.0 }));
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Segment) -> Option<Vec2> {
        if self.is_vertical() {
            return self.intersect_vertical(other);
        }

        let e = self.delta();
        let f = other.delta();
        if e.cross(f) == 0.0 {
            // Parallel or degenerate: the perp-dot denominator below is the
            // negated cross product, so it would be zero too.
            return None;
        }
        let p = e.orthog();
        let h = (self.start - other.start).dot(p) / f.dot(p);
        if (0.0..=1.0).contains(&h) {
            let candidate = other.start + h * f;
            let h2 = (candidate.x - self.start.x) / (self.end.x - self.start.x);
            if (0.0..=1.0).contains(&h2) {
                return Some(candidate);
            }
        }
        None
    }

    // Intersection where self is vertical (undefined slope). Kept as its own
    // code path with dedicated tests; the collinear-overlap subcase in
    // particular has intricate tie-breaking.
    fn intersect_vertical(&self, other: &Segment) -> Option<Vec2> {
        let x = self.start.x;
        if other.is_vertical() {
            // Collinear overlap: report one of other's endpoints if it falls
            // strictly within self's y-range, else other strictly contains
            // self and the midpoint of self stands in.
            if other.start.x == x
                && bounds::intersect_inclusive(other.start.y, other.end.y, self.start.y, self.end.y)
            {
                if bounds::within(self.start.y, self.end.y, other.start.y) {
                    return Some(other.start);
                }
                if bounds::within(self.start.y, self.end.y, other.end.y) {
                    return Some(other.end);
                }
                return Some(self.midpoint());
            }
            return None;
        }

        if bounds::within(other.start.x, other.end.x, x) {
            let f = other.delta();
            let height = f.y / f.x * (x - other.start.x) + other.start.y;
            if (self.start.y <= height && height <= self.end.y)
                || (self.end.y <= height && height <= self.start.y)
            {
                return Some(Vec2 { x, y: height });
            }
        }
        None
    }

    /// Intersects this segment against the four edges of a rectangle.
    ///
    /// Edges are tested in fixed order: top, right, bottom, left. The first
    /// two hits in that order are kept (further degenerate collinear hits are
    /// dropped), then the pair is sorted so the first point is the closer one
    /// to `self.start`, giving an enter/exit ordering along the segment.
    ///
    /// The second point can only be `Some` if the first one is.
    #[must_use]
    pub fn intersect_rect(&self, rect: &Rect) -> (Option<Vec2>, Option<Vec2>) {
        let corners = [
            rect.top_left(),
            rect.top_right(),
            rect.bottom_right(),
            rect.bottom_left(),
        ];
        let mut first = None;
        let mut second = None;
        for (a, b) in corners.iter().circular_tuple_windows() {
            // The edge is the reference segment: the rect's left/right edges
            // are the vertical-reference cases.
            let edge = Segment::new(*a, *b);
            if let Some(point) = edge.intersect(self) {
                if first.is_none() {
                    first = Some(point);
                } else if second.is_none() {
                    second = Some(point);
                }
            }
        }

        if let (Some(p1), Some(p2)) = (first, second) {
            if self.start.dist(p1) > self.start.dist(p2) {
                return (Some(p2), Some(p1));
            }
        }
        (first, second)
    }
}
