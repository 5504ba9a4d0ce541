//! Orientation and segment-intersection predicates.
//!
//! Orientation uses adaptive-precision arithmetic from the `robust` crate, so
//! the sign is exact for every finite input. Intersection points are computed
//! in plain floating point and then snapped to nearby endpoints within an
//! explicit tolerance.

use crate::primitives::{Coord, Segment2};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` lies to the left of `a -> b`.
    CounterClockwise,
    /// `c` lies to the right of `a -> b`.
    Clockwise,
    /// The three points are exactly collinear.
    Collinear,
}

/// Exact orientation of the triangle `a, b, c`.
#[inline]
pub fn orient2d(a: Coord, b: Coord, c: Coord) -> Orientation {
    let det = robust::orient2d(
        robust::Coord { x: a.x, y: a.y },
        robust::Coord { x: b.x, y: b.y },
        robust::Coord { x: c.x, y: c.y },
    );
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `p` lies within `tolerance` of the segment.
#[inline]
pub fn point_on_segment(p: Coord, segment: Segment2<f64>, tolerance: f64) -> bool {
    segment.distance_squared_to_point(p) <= tolerance * tolerance
}

/// How two segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments are disjoint.
    None,
    /// The segments share exactly one point.
    Point(Coord),
    /// The segments are collinear and share a sub-segment.
    Overlapping {
        /// Start of the shared part, ordered along the first segment.
        start: Coord,
        /// End of the shared part.
        end: Coord,
    },
}

/// Exact classification of how two segments meet.
///
/// The crossing point of two properly crossing segments is computed in
/// floating point and clamped into both segments' envelopes.
pub fn segments_intersect(s1: Segment2<f64>, s2: Segment2<f64>) -> SegmentIntersection {
    let o1 = orient2d(s1.start, s1.end, s2.start);
    let o2 = orient2d(s1.start, s1.end, s2.end);
    let o3 = orient2d(s2.start, s2.end, s1.start);
    let o4 = orient2d(s2.start, s2.end, s1.end);

    use Orientation::Collinear;

    if o1 == Collinear && o2 == Collinear && o3 == Collinear && o4 == Collinear {
        return collinear_overlap(s1, s2);
    }

    if (o1 != Collinear && o1 == o2) || (o3 != Collinear && o3 == o4) {
        return SegmentIntersection::None;
    }

    // Touching configurations: an endpoint lies exactly on the other segment.
    if o1 == Collinear && within_box(s2.start, s1) {
        return SegmentIntersection::Point(s2.start);
    }
    if o2 == Collinear && within_box(s2.end, s1) {
        return SegmentIntersection::Point(s2.end);
    }
    if o3 == Collinear && within_box(s1.start, s2) {
        return SegmentIntersection::Point(s1.start);
    }
    if o4 == Collinear && within_box(s1.end, s2) {
        return SegmentIntersection::Point(s1.end);
    }
    if o1 == Collinear || o2 == Collinear || o3 == Collinear || o4 == Collinear {
        return SegmentIntersection::None;
    }

    SegmentIntersection::Point(crossing_point(s1, s2))
}

/// Floating-point crossing point of two segments known to cross properly.
///
/// The result is clamped into the intersection of both envelopes, which keeps
/// it on the right side of every endpoint even when rounding is poor.
pub fn crossing_point(s1: Segment2<f64>, s2: Segment2<f64>) -> Coord {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let denom = d1.cross(d2);
    if denom == 0.0 {
        return s1.midpoint();
    }

    let t = (s2.start - s1.start).cross(d2) / denom;
    let raw = s1.point_at(t);

    let min_x = s1.start.x.min(s1.end.x).max(s2.start.x.min(s2.end.x));
    let max_x = s1.start.x.max(s1.end.x).min(s2.start.x.max(s2.end.x));
    let min_y = s1.start.y.min(s1.end.y).max(s2.start.y.min(s2.end.y));
    let max_y = s1.start.y.max(s1.end.y).min(s2.start.y.max(s2.end.y));

    Coord::new(raw.x.max(min_x).min(max_x), raw.y.max(min_y).min(max_y))
}

fn within_box(p: Coord, s: Segment2<f64>) -> bool {
    p.x >= s.start.x.min(s.end.x)
        && p.x <= s.start.x.max(s.end.x)
        && p.y >= s.start.y.min(s.end.y)
        && p.y <= s.start.y.max(s.end.y)
}

fn collinear_overlap(s1: Segment2<f64>, s2: Segment2<f64>) -> SegmentIntersection {
    let mut inside: Vec<Coord> = Vec::with_capacity(4);
    for p in [s2.start, s2.end] {
        if within_box(p, s1) {
            inside.push(p);
        }
    }
    for p in [s1.start, s1.end] {
        if within_box(p, s2) && !inside.contains(&p) {
            inside.push(p);
        }
    }

    match inside.len() {
        0 => SegmentIntersection::None,
        1 => SegmentIntersection::Point(inside[0]),
        _ => {
            inside.sort_by(|a, b| {
                s1.project(*a)
                    .partial_cmp(&s1.project(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let start = inside[0];
            let end = inside[inside.len() - 1];
            if start == end {
                SegmentIntersection::Point(start)
            } else {
                SegmentIntersection::Overlapping { start, end }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::from_coords(x1, y1, x2, y2)
    }

    #[test]
    fn test_orient2d() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(1.0, 0.0);
        assert_eq!(orient2d(a, b, Coord::new(0.5, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, Coord::new(0.5, -1.0)), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, Coord::new(7.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn test_orient2d_is_exact_for_tiny_offsets() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(1.0, 0.0);
        let c = Coord::new(0.5, 1e-300);
        assert_eq!(orient2d(a, b, c), Orientation::CounterClockwise);
    }

    #[test]
    fn test_point_on_segment() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert!(point_on_segment(Coord::new(5.0, 0.0), s, 0.0));
        assert!(point_on_segment(Coord::new(5.0, 0.4), s, 0.5));
        assert!(!point_on_segment(Coord::new(11.0, 0.0), s, 0.5));
    }

    #[test]
    fn test_proper_crossing() {
        let result = segments_intersect(seg(0.0, 0.0, 2.0, 2.0), seg(0.0, 2.0, 2.0, 0.0));
        assert_eq!(result, SegmentIntersection::Point(Coord::new(1.0, 1.0)));
    }

    #[test]
    fn test_disjoint() {
        let result = segments_intersect(seg(0.0, 0.0, 1.0, 0.0), seg(0.0, 1.0, 1.0, 1.0));
        assert_eq!(result, SegmentIntersection::None);

        let result = segments_intersect(seg(0.0, 0.0, 1.0, 1.0), seg(2.0, 0.0, 3.0, -5.0));
        assert_eq!(result, SegmentIntersection::None);
    }

    #[test]
    fn test_touching_endpoint() {
        let result = segments_intersect(seg(0.0, 0.0, 2.0, 0.0), seg(1.0, 0.0, 1.0, 3.0));
        assert_eq!(result, SegmentIntersection::Point(Coord::new(1.0, 0.0)));
    }

    #[test]
    fn test_collinear_overlap() {
        let result = segments_intersect(seg(0.0, 0.0, 4.0, 0.0), seg(3.0, 0.0, 1.0, 0.0));
        assert_eq!(
            result,
            SegmentIntersection::Overlapping {
                start: Coord::new(1.0, 0.0),
                end: Coord::new(3.0, 0.0),
            }
        );
    }

    #[test]
    fn test_collinear_disjoint_and_touching() {
        let result = segments_intersect(seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 0.0, 3.0, 0.0));
        assert_eq!(result, SegmentIntersection::None);

        let result = segments_intersect(seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 3.0, 0.0));
        assert_eq!(result, SegmentIntersection::Point(Coord::new(1.0, 0.0)));
    }

    #[test]
    fn test_crossing_point_is_clamped() {
        let s1 = seg(0.0, 0.0, 1.0, 1e-17);
        let s2 = seg(0.5, -1.0, 0.5, 1.0);
        let p = crossing_point(s1, s2);
        assert_eq!(p.x, 0.5);
        assert!(p.y >= 0.0 && p.y <= 1e-17);
    }
}
