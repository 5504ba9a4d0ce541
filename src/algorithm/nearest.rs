//! Closest pair of points between two geometries.
//!
//! A brute-force scan over every pair of facets (vertices of puntal parts,
//! edges of linear and areal parts). Areal interiors never hold the closest
//! point unless one geometry reaches inside the other, and that case is
//! detected up front so the result is a genuine shared point at distance
//! zero.

use crate::error::GeometryError;
use crate::geometry::{Geometry, Location};
use crate::graph::InputGeometry;
use crate::primitives::{Coord, Segment2};
use crate::tolerance::{segments_intersect, SegmentIntersection};

/// Facets of one operand.
struct Facets {
    points: Vec<Coord>,
    segments: Vec<Segment2<f64>>,
}

impl Facets {
    fn new(input: &InputGeometry) -> Self {
        let mut segments = Vec::new();
        let rings = input.polygons.iter().flat_map(|p| p.rings().map(|r| r.coords()));
        for coords in input.lines.iter().map(Vec::as_slice).chain(rings) {
            segments.extend(coords.windows(2).map(|w| Segment2::new(w[0], w[1])));
        }
        Self {
            points: input.points.clone(),
            segments,
        }
    }
}

/// One coordinate from each component, used to detect containment.
fn representatives(input: &InputGeometry) -> impl Iterator<Item = Coord> + '_ {
    let lines = input.lines.iter().filter_map(|l| l.first().copied());
    let shells = input
        .polygons
        .iter()
        .filter_map(|p| p.exterior().coords().first().copied());
    input.points.iter().copied().chain(lines).chain(shells)
}

fn contained_point(outer: &InputGeometry, inner: &InputGeometry) -> Option<Coord> {
    if outer.polygons.is_empty() {
        return None;
    }
    representatives(inner).find(|&c| outer.area_location(c, 0.0) != Location::Exterior)
}

/// Running minimum over candidate pairs.
struct Closest {
    pair: Option<[Coord; 2]>,
    dist_sq: f64,
}

impl Closest {
    fn offer(&mut self, a: Coord, b: Coord) {
        let d = a.distance_squared(b);
        if self.pair.is_none() || d < self.dist_sq {
            self.pair = Some([a, b]);
            self.dist_sq = d;
        }
    }

    fn is_zero(&self) -> bool {
        self.pair.is_some() && self.dist_sq == 0.0
    }
}

/// The pair `[on_a, on_b]` minimising the Euclidean distance between `a`
/// and `b`.
///
/// Returns `Ok(None)` when either input is empty. When the geometries
/// intersect, both coordinates are the same shared point.
///
/// # Example
///
/// ```
/// use planum::algorithm::nearest_points;
/// use planum::geometry::{Geometry, Point};
/// use planum::Coord;
///
/// let a = Geometry::from(Point::new(0.0, 0.0));
/// let b = Geometry::from(Point::new(3.0, 4.0));
/// let pair = nearest_points(&a, &b).unwrap();
/// assert_eq!(pair, Some([Coord::new(0.0, 0.0), Coord::new(3.0, 4.0)]));
/// ```
pub fn nearest_points(a: &Geometry, b: &Geometry) -> Result<Option<[Coord; 2]>, GeometryError> {
    let a = InputGeometry::new(a)?;
    let b = InputGeometry::new(b)?;
    if a.is_empty() || b.is_empty() {
        return Ok(None);
    }

    if let Some(c) = contained_point(&a, &b).or_else(|| contained_point(&b, &a)) {
        return Ok(Some([c, c]));
    }

    let (fa, fb) = (Facets::new(&a), Facets::new(&b));
    let mut best = Closest {
        pair: None,
        dist_sq: f64::INFINITY,
    };

    for &p in &fa.points {
        for &q in &fb.points {
            best.offer(p, q);
        }
        for s in &fb.segments {
            best.offer(p, s.closest_point(p).0);
        }
        if best.is_zero() {
            return Ok(best.pair);
        }
    }

    for s in &fa.segments {
        for &q in &fb.points {
            best.offer(s.closest_point(q).0, q);
        }
        for &t in &fb.segments {
            match segments_intersect(*s, t) {
                SegmentIntersection::Point(c) => best.offer(c, c),
                SegmentIntersection::Overlapping { start, .. } => best.offer(start, start),
                SegmentIntersection::None => {
                    let (p, q) = s.closest_points_disjoint(t);
                    best.offer(p, q);
                }
            }
        }
        if best.is_zero() {
            break;
        }
    }

    log::trace!(
        "nearest points over {}x{} facets",
        fa.points.len() + fa.segments.len(),
        fb.points.len() + fb.segments.len()
    );
    Ok(best.pair)
}

/// Minimum Euclidean distance between `a` and `b`, or `None` when either is
/// empty.
pub fn distance(a: &Geometry, b: &Geometry) -> Result<Option<f64>, GeometryError> {
    Ok(nearest_points(a, b)?.map(|[p, q]| p.distance(q)))
}
