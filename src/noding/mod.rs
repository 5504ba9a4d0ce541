//! Iterated snapping noder.
//!
//! Turns an arbitrary set of segments into a planar arrangement: after
//! noding, two segments meet only at shared endpoints, and no two distinct
//! vertices lie closer than the snap tolerance.
//!
//! Each pass finds candidate pairs with a sort-and-sweep over segment
//! envelopes, records every crossing, touching and overlap point as a split
//! site, splits the segments, and then merges vertex clusters. Splitting and
//! merging can move segments slightly, so passes repeat until one finds
//! nothing to do.

use std::collections::HashMap;

use crate::bounds::{overlapping_pairs, Envelope};
use crate::error::{GeometryError, OverlayFailure};
use crate::primitives::{Coord, Segment2};
use crate::tolerance::{segments_intersect, SegmentIntersection};

/// Passes allowed before noding is reported as non-convergent.
pub const MAX_NODING_PASSES: usize = 10;

/// What an input segment bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentKind {
    /// Part of a polygon ring, interior on the left.
    Area,
    /// Part of a line string.
    Line,
}

/// A segment tagged with the input it came from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceSegment {
    pub seg: Segment2<f64>,
    pub input: usize,
    pub kind: SegmentKind,
}

/// What a standalone vertex marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointRole {
    /// An input point.
    Point,
    /// An endpoint of an input line string.
    LineEnd,
}

/// A vertex that must survive noding as a graph node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourcePoint {
    pub coord: Coord,
    pub input: usize,
    pub role: PointRole,
}

/// The planar arrangement produced by [`node`].
#[derive(Debug, Default)]
pub(crate) struct Arrangement {
    pub segments: Vec<SourceSegment>,
    pub points: Vec<SourcePoint>,
}

/// Nodes `segments` and `points` until the arrangement is planar.
///
/// Points act as split sites, so a point lying on a segment splits it. Both
/// points and segment endpoints are snapped to shared representatives.
pub(crate) fn node(
    segments: Vec<SourceSegment>,
    points: Vec<SourcePoint>,
    tolerance: f64,
) -> Result<Arrangement, GeometryError> {
    let mut arrangement = Arrangement { segments, points };
    arrangement.segments.retain(|s| s.seg.start != s.seg.end);

    for pass in 1..=MAX_NODING_PASSES {
        let splits = split_segments(&mut arrangement, tolerance);
        let moved = snap_vertices(&mut arrangement, tolerance);
        log::trace!(
            "noding pass {pass}: {splits} splits, {moved} snapped vertices, {} segments",
            arrangement.segments.len()
        );
        if splits == 0 && moved == 0 {
            log::debug!(
                "noded {} segments and {} points in {pass} passes",
                arrangement.segments.len(),
                arrangement.points.len()
            );
            return Ok(arrangement);
        }
    }

    log::warn!(
        "noding did not converge after {MAX_NODING_PASSES} passes ({} segments)",
        arrangement.segments.len()
    );
    Err(GeometryError::overlay(OverlayFailure::NodingDidNotConverge {
        iterations: MAX_NODING_PASSES,
    }))
}

/// Adds `p` as a split site of `seg` unless it is within `tolerance` of an
/// endpoint; snapping takes care of those.
fn push_site(sites: &mut Vec<Coord>, seg: Segment2<f64>, p: Coord, tolerance: f64) {
    if p.distance(seg.start) > tolerance && p.distance(seg.end) > tolerance {
        sites.push(p);
    }
}

/// One splitting round. Returns the number of split sites applied.
fn split_segments(arrangement: &mut Arrangement, tolerance: f64) -> usize {
    let segments = &arrangement.segments;
    let n = segments.len();

    let mut boxes: Vec<Envelope> = segments
        .iter()
        .map(|s| Envelope::from_corners(s.seg.start, s.seg.end))
        .collect();
    boxes.extend(arrangement.points.iter().map(|p| Envelope::from_coord(p.coord)));

    let mut sites: Vec<Vec<Coord>> = vec![Vec::new(); n];
    for (i, j) in overlapping_pairs(&boxes, tolerance) {
        if j >= n {
            if i < n {
                let seg = segments[i].seg;
                let p = arrangement.points[j - n].coord;
                if seg.distance_to_point(p) <= tolerance {
                    push_site(&mut sites[i], seg, p, tolerance);
                }
            }
            continue;
        }

        let (a, b) = (segments[i].seg, segments[j].seg);
        match segments_intersect(a, b) {
            SegmentIntersection::None => {}
            SegmentIntersection::Point(p) => {
                push_site(&mut sites[i], a, p, tolerance);
                push_site(&mut sites[j], b, p, tolerance);
            }
            SegmentIntersection::Overlapping { start, end } => {
                for p in [start, end] {
                    push_site(&mut sites[i], a, p, tolerance);
                    push_site(&mut sites[j], b, p, tolerance);
                }
            }
        }

        // Near misses: an endpoint within tolerance of the other segment.
        for p in [b.start, b.end] {
            if a.distance_to_point(p) <= tolerance {
                push_site(&mut sites[i], a, p, tolerance);
            }
        }
        for p in [a.start, a.end] {
            if b.distance_to_point(p) <= tolerance {
                push_site(&mut sites[j], b, p, tolerance);
            }
        }
    }

    let total: usize = sites.iter().map(Vec::len).sum();
    if total == 0 {
        return 0;
    }

    let mut out = Vec::with_capacity(n + total);
    for (source, mut cuts) in arrangement.segments.iter().zip(sites) {
        if cuts.is_empty() {
            out.push(*source);
            continue;
        }
        let seg = source.seg;
        cuts.sort_by(|p, q| seg.project(*p).total_cmp(&seg.project(*q)));
        cuts.dedup();

        let mut from = seg.start;
        for cut in cuts.into_iter().chain(std::iter::once(seg.end)) {
            if cut != from {
                out.push(SourceSegment {
                    seg: Segment2::new(from, cut),
                    ..*source
                });
                from = cut;
            }
        }
    }
    arrangement.segments = out;
    total
}

/// Merges vertices closer than `tolerance`. Returns how many moved.
///
/// Each cluster collapses onto its earliest member, so vertices taken from
/// the input keep their exact coordinates whenever possible.
fn snap_vertices(arrangement: &mut Arrangement, tolerance: f64) -> usize {
    let mut vertices: Vec<Coord> = Vec::new();
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut intern = |c: Coord| -> usize {
        *index.entry(coord_key(c)).or_insert_with(|| {
            vertices.push(c);
            vertices.len() - 1
        })
    };

    let seg_ids: Vec<(usize, usize)> = arrangement
        .segments
        .iter()
        .map(|s| (intern(s.seg.start), intern(s.seg.end)))
        .collect();
    let point_ids: Vec<usize> = arrangement.points.iter().map(|p| intern(p.coord)).collect();

    let mut sets = DisjointSets::new(vertices.len());
    let mut order: Vec<usize> = (0..vertices.len()).collect();
    order.sort_by(|&a, &b| vertices[a].x.total_cmp(&vertices[b].x));
    for (pos, &i) in order.iter().enumerate() {
        for &j in &order[pos + 1..] {
            if vertices[j].x - vertices[i].x > tolerance {
                break;
            }
            if vertices[i].distance(vertices[j]) <= tolerance {
                sets.union(i, j);
            }
        }
    }

    let target: Vec<Coord> = (0..vertices.len()).map(|v| vertices[sets.find(v)]).collect();
    let moved = (0..vertices.len()).filter(|&v| target[v] != vertices[v]).count();
    if moved == 0 {
        return 0;
    }

    for (source, (a, b)) in arrangement.segments.iter_mut().zip(seg_ids) {
        source.seg = Segment2::new(target[a], target[b]);
    }
    arrangement.segments.retain(|s| s.seg.start != s.seg.end);
    for (point, id) in arrangement.points.iter_mut().zip(point_ids) {
        point.coord = target[id];
    }
    moved
}

/// Hash key for a coordinate, with `-0.0` folded onto `0.0`.
pub(crate) fn coord_key(c: Coord) -> (u64, u64) {
    ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits())
}

/// Union-find whose representative is always the smallest member.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            self.parent[v] = self.parent[self.parent[v]];
            v = self.parent[v];
        }
        v
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(input: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> SourceSegment {
        SourceSegment {
            seg: Segment2::from_coords(x1, y1, x2, y2),
            input,
            kind: SegmentKind::Line,
        }
    }

    fn has_segment(a: &Arrangement, s: Coord, e: Coord) -> bool {
        a.segments
            .iter()
            .any(|x| (x.seg.start == s && x.seg.end == e) || (x.seg.start == e && x.seg.end == s))
    }

    #[test]
    fn test_crossing_segments_split() {
        let noded = node(
            vec![line(0, 0.0, 0.0, 2.0, 2.0), line(1, 0.0, 2.0, 2.0, 0.0)],
            vec![],
            1e-10,
        )
        .unwrap();
        assert_eq!(noded.segments.len(), 4);
        let centre = Coord::new(1.0, 1.0);
        assert!(has_segment(&noded, Coord::new(0.0, 0.0), centre));
        assert!(has_segment(&noded, centre, Coord::new(2.0, 0.0)));
    }

    #[test]
    fn test_direction_and_origin_preserved() {
        let noded = node(
            vec![line(0, 2.0, 0.0, 0.0, 0.0), line(1, 1.0, -1.0, 1.0, 1.0)],
            vec![],
            1e-10,
        )
        .unwrap();
        for s in noded.segments.iter().filter(|s| s.input == 0) {
            assert!(s.seg.start.x > s.seg.end.x);
        }
    }

    #[test]
    fn test_collinear_overlap() {
        let noded = node(
            vec![line(0, 0.0, 0.0, 3.0, 0.0), line(1, 1.0, 0.0, 4.0, 0.0)],
            vec![],
            1e-10,
        )
        .unwrap();
        // [0,1] [1,3] from the first, [1,3] [3,4] from the second.
        assert_eq!(noded.segments.len(), 4);
        let shared = noded
            .segments
            .iter()
            .filter(|s| s.seg.start == Coord::new(1.0, 0.0) && s.seg.end == Coord::new(3.0, 0.0))
            .count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn test_point_splits_segment() {
        let noded = node(
            vec![line(0, 0.0, 0.0, 2.0, 0.0)],
            vec![SourcePoint {
                coord: Coord::new(1.0, 0.0),
                input: 1,
                role: PointRole::Point,
            }],
            1e-10,
        )
        .unwrap();
        assert_eq!(noded.segments.len(), 2);
    }

    #[test]
    fn test_near_vertices_snap() {
        let noded = node(
            vec![line(0, 0.0, 0.0, 1.0, 0.0), line(1, 1.0 + 1e-12, 0.0, 1.0, 1.0)],
            vec![],
            1e-9,
        )
        .unwrap();
        assert_eq!(noded.segments.len(), 2);
        assert!(noded
            .segments
            .iter()
            .all(|s| s.seg.start == Coord::new(1.0, 0.0) || s.seg.end == Coord::new(1.0, 0.0)));
    }

    #[test]
    fn test_coord_key_folds_negative_zero() {
        assert_eq!(coord_key(Coord::new(-0.0, 1.0)), coord_key(Coord::new(0.0, 1.0)));
    }
}
