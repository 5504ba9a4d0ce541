//! Point-in-geometry location.
//!
//! Area containment uses the winding number with exact orientation tests,
//! so it is insensitive to ring orientation and to vertices lying exactly on
//! the query's horizontal. Boundary membership is exact, optionally widened
//! by a distance tolerance.

use crate::geometry::{Location, Polygon};
use crate::primitives::{Coord, Segment2};
use crate::tolerance::{orient2d, point_on_segment, Orientation};

/// Winding number of a closed coordinate sequence around `p`.
///
/// Counter-clockwise rings give `+1` for interior points, clockwise rings
/// `-1`. Undefined for points on the ring itself.
pub fn winding_number(ring: &[Coord], p: Coord) -> i32 {
    let mut wn = 0;
    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        if a.y <= p.y {
            if b.y > p.y && orient2d(a, b, p) == Orientation::CounterClockwise {
                wn += 1;
            }
        } else if b.y <= p.y && orient2d(a, b, p) == Orientation::Clockwise {
            wn -= 1;
        }
    }
    wn
}

/// Returns `true` if `p` lies on the segment exactly, or within `tolerance`.
pub fn on_segment(p: Coord, seg: Segment2<f64>, tolerance: f64) -> bool {
    let (a, b) = (seg.start, seg.end);
    let in_box = p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y);
    if in_box && orient2d(a, b, p) == Orientation::Collinear {
        return true;
    }
    tolerance > 0.0 && point_on_segment(p, seg, tolerance)
}

/// Returns `true` if `p` lies on any edge of the coordinate sequence.
pub fn on_linework(coords: &[Coord], p: Coord, tolerance: f64) -> bool {
    if coords.len() == 1 {
        return coords[0].distance(p) <= tolerance;
    }
    coords
        .windows(2)
        .any(|w| on_segment(p, Segment2::new(w[0], w[1]), tolerance))
}

/// Location of `p` relative to the area bounded by a single ring.
pub fn locate_in_ring(ring: &[Coord], p: Coord, tolerance: f64) -> Location {
    if on_linework(ring, p, tolerance) {
        Location::Boundary
    } else if winding_number(ring, p) != 0 {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Location of `p` relative to a polygon with holes.
pub fn locate_in_polygon(polygon: &Polygon, p: Coord, tolerance: f64) -> Location {
    if polygon.is_empty() {
        return Location::Exterior;
    }
    if let Some(env) = polygon.envelope() {
        if !env.expand_by(tolerance).contains(p) {
            return Location::Exterior;
        }
    }

    match locate_in_ring(polygon.exterior().coords(), p, tolerance) {
        Location::Interior => {}
        other => return other,
    }
    for hole in polygon.interiors() {
        match locate_in_ring(hole.coords(), p, tolerance) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
        }
    }
    Location::Interior
}
