//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A directed line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> F {
        self.direction().magnitude()
    }

    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Point at parameter `t`; 0 is `start`, 1 is `end`.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns `true` when both endpoints coincide exactly.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Parameter of the orthogonal projection of `p` onto the supporting
    /// line, unclamped. Zero for a degenerate segment.
    pub fn project(self, p: Point2<F>) -> F {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        if len_sq == F::zero() {
            return F::zero();
        }
        (p - self.start).dot(v) / len_sq
    }

    /// Closest point on the segment to `p`, with its clamped parameter.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let t = self.project(p).max(F::zero()).min(F::one());
        if t == F::zero() {
            (self.start, t)
        } else if t == F::one() {
            (self.end, t)
        } else {
            (self.point_at(t), t)
        }
    }

    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.closest_point(p).0)
    }

    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }

    /// Closest pair of points between two segments that do not intersect.
    ///
    /// The minimum is attained at an endpoint of one of the segments, so the
    /// four endpoint projections are compared. Returns `(on_self, on_other)`.
    pub fn closest_points_disjoint(self, other: Self) -> (Point2<F>, Point2<F>) {
        let candidates = [
            (self.start, other.closest_point(self.start).0),
            (self.end, other.closest_point(self.end).0),
            (self.closest_point(other.start).0, other.start),
            (self.closest_point(other.end).0, other.end),
        ];

        let mut best = candidates[0];
        let mut best_dist = best.0.distance_squared(best.1);
        for &(a, b) in &candidates[1..] {
            let d = a.distance_squared(b);
            if d < best_dist {
                best = (a, b);
                best_dist = d;
            }
        }
        best
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
