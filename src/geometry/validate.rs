//! Eager validity checks.
//!
//! Every engine validates its inputs before building any working state, so
//! malformed rings surface as [`GeometryError::InvalidGeometry`] rather than
//! as wrong output.

use super::{signed_area, Geometry, LinearRing, Polygon};
use crate::algorithm::locate::locate_in_ring;
use crate::bounds::{overlapping_pairs, Envelope};
use crate::error::{GeometryError, InvalidReason};
use crate::geometry::Location;
use crate::primitives::{Coord, Segment2};
use crate::tolerance::{segments_intersect, SegmentIntersection};

/// How strictly ring orientation is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Any winding is accepted; engines normalise orientation themselves.
    #[default]
    Lenient,
    /// Exterior rings must be counter-clockwise and holes clockwise.
    Strict,
}

impl Geometry {
    /// Checks the structural and topological invariants of the model.
    ///
    /// Rings must be simple and enclose area. Holes must lie inside their
    /// shell and outside each other, and rings of one polygon may touch only
    /// at points.
    pub fn validate(&self, mode: ValidationMode) -> Result<(), GeometryError> {
        match self {
            Geometry::Point(p) => check_coords(p.coord().as_slice()),
            Geometry::LineString(ls) => check_coords(ls.coords()),
            Geometry::LinearRing(ring) => {
                if ring.is_empty() {
                    Ok(())
                } else {
                    check_ring(ring.coords())
                }
            }
            Geometry::Polygon(p) => validate_polygon(p, mode),
            Geometry::MultiPoint(mp) => mp
                .0
                .iter()
                .try_for_each(|p| check_coords(p.coord().as_slice())),
            Geometry::MultiLineString(mls) => mls.0.iter().try_for_each(|l| check_coords(l.coords())),
            Geometry::MultiPolygon(mp) => mp.0.iter().try_for_each(|p| validate_polygon(p, mode)),
            Geometry::GeometryCollection(gc) => gc.0.iter().try_for_each(|g| g.validate(mode)),
        }
    }

    /// Lenient validity.
    pub fn is_valid(&self) -> bool {
        self.validate(ValidationMode::Lenient).is_ok()
    }
}

fn check_coords(coords: &[Coord]) -> Result<(), GeometryError> {
    match coords.iter().find(|c| !c.is_finite()) {
        Some(&c) => Err(GeometryError::invalid(InvalidReason::NonFiniteCoordinate(c))),
        None => Ok(()),
    }
}

/// Validates one polygon.
pub(crate) fn validate_polygon(polygon: &Polygon, mode: ValidationMode) -> Result<(), GeometryError> {
    if polygon.is_empty() {
        if polygon.interiors().iter().any(|r| !r.is_empty()) {
            return Err(GeometryError::invalid(InvalidReason::HoleOutsideShell));
        }
        return Ok(());
    }

    for ring in polygon.rings() {
        check_coords(ring.coords())?;
        check_ring(ring.coords())?;
    }

    if mode == ValidationMode::Strict {
        if polygon.exterior().signed_area() < 0.0 {
            return Err(GeometryError::invalid(InvalidReason::WrongOrientation {
                ring: "exterior",
            }));
        }
        if polygon.interiors().iter().any(|r| r.signed_area() > 0.0) {
            return Err(GeometryError::invalid(InvalidReason::WrongOrientation {
                ring: "interior",
            }));
        }
    }

    if !polygon.interiors().is_empty() {
        check_rings_disjoint(polygon)?;
        let shell = polygon.exterior().coords();
        for hole in polygon.interiors() {
            let outside = hole
                .coords()
                .iter()
                .any(|&c| locate_in_ring(shell, c, 0.0) == Location::Exterior);
            if outside {
                return Err(GeometryError::invalid(InvalidReason::HoleOutsideShell));
            }
        }
        check_holes_not_nested(polygon.interiors())?;
    }
    Ok(())
}

/// Holes must not contain one another. Rings are already known not to
/// cross, so one probe point per hole that is off the other hole's
/// boundary decides containment.
fn check_holes_not_nested(holes: &[LinearRing]) -> Result<(), GeometryError> {
    for (i, inner) in holes.iter().enumerate() {
        for (j, outer) in holes.iter().enumerate() {
            if i == j {
                continue;
            }
            let probe = ring_probes(inner.coords())
                .map(|c| (c, locate_in_ring(outer.coords(), c, 0.0)))
                .find(|&(_, location)| location != Location::Boundary);
            if let Some((c, Location::Interior)) = probe {
                return Err(GeometryError::invalid(InvalidReason::NestedHoles(c)));
            }
        }
    }
    Ok(())
}

/// Vertices of a ring followed by its edge midpoints.
fn ring_probes(coords: &[Coord]) -> impl Iterator<Item = Coord> + '_ {
    coords
        .iter()
        .copied()
        .chain(coords.windows(2).map(|w| w[0].midpoint(w[1])))
}

/// Ring edges with zero-length segments removed.
fn ring_edges(coords: &[Coord]) -> Vec<Segment2<f64>> {
    coords
        .windows(2)
        .filter(|w| w[0] != w[1])
        .map(|w| Segment2::new(w[0], w[1]))
        .collect()
}

fn edge_envelope(s: &Segment2<f64>) -> Envelope {
    Envelope::from_corners(s.start, s.end)
}

/// A ring must enclose area and must not touch itself except at the
/// shared vertex of consecutive edges.
fn check_ring(coords: &[Coord]) -> Result<(), GeometryError> {
    let edges = ring_edges(coords);
    if edges.len() < 3 || signed_area(coords) == 0.0 {
        return Err(GeometryError::invalid(InvalidReason::ZeroAreaRing));
    }

    let n = edges.len();
    let boxes: Vec<Envelope> = edges.iter().map(edge_envelope).collect();
    for (i, j) in overlapping_pairs(&boxes, 0.0) {
        let adjacent = j == i + 1 || (i == 0 && j == n - 1);
        match segments_intersect(edges[i], edges[j]) {
            SegmentIntersection::None => {}
            SegmentIntersection::Point(p) => {
                if !adjacent {
                    return Err(GeometryError::invalid(InvalidReason::RingSelfIntersection(p)));
                }
            }
            SegmentIntersection::Overlapping { start, .. } => {
                return Err(GeometryError::invalid(InvalidReason::RingSelfIntersection(start)));
            }
        }
    }
    Ok(())
}

/// Rings of one polygon may touch at isolated points but never cross or
/// share an edge.
fn check_rings_disjoint(polygon: &Polygon) -> Result<(), GeometryError> {
    let mut edges: Vec<(usize, Segment2<f64>)> = Vec::new();
    for (ring_id, ring) in polygon.rings().enumerate() {
        edges.extend(ring_edges(ring.coords()).into_iter().map(|e| (ring_id, e)));
    }

    let boxes: Vec<Envelope> = edges.iter().map(|(_, e)| edge_envelope(e)).collect();
    for (i, j) in overlapping_pairs(&boxes, 0.0) {
        let (ring_a, a) = edges[i];
        let (ring_b, b) = edges[j];
        if ring_a == ring_b {
            continue;
        }
        match segments_intersect(a, b) {
            SegmentIntersection::None => {}
            SegmentIntersection::Point(p) => {
                let at_vertex = p == a.start || p == a.end || p == b.start || p == b.end;
                if !at_vertex {
                    return Err(GeometryError::invalid(InvalidReason::RingsCross(p)));
                }
            }
            SegmentIntersection::Overlapping { start, .. } => {
                return Err(GeometryError::invalid(InvalidReason::RingsCross(start)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, LinearRing, MultiPolygon};

    fn ring(vertices: &[(f64, f64)]) -> LinearRing {
        LinearRing::from_vertices(vertices.iter().map(|&(x, y)| Coord::new(x, y)).collect()).unwrap()
    }

    fn invalid_reason(g: &Geometry, mode: ValidationMode) -> InvalidReason {
        match g.validate(mode) {
            Err(GeometryError::InvalidGeometry { reason }) => reason,
            other => panic!("expected invalid geometry, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_square() {
        let g = Geometry::from(Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)));
        assert!(g.validate(ValidationMode::Strict).is_ok());
    }

    #[test]
    fn test_bowtie_is_invalid() {
        let bowtie = Polygon::new(ring(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 3.0)]), vec![]);
        let reason = invalid_reason(&bowtie.into(), ValidationMode::Lenient);
        assert!(matches!(reason, InvalidReason::RingSelfIntersection(_)));
    }

    #[test]
    fn test_spike_is_invalid() {
        let spike = Polygon::new(
            ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (2.0, 3.0), (2.0, 2.0), (0.0, 2.0)]),
            vec![],
        );
        assert!(!Geometry::from(spike).is_valid());
    }

    #[test]
    fn test_zero_area_ring() {
        let flat = Polygon::new(ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]), vec![]);
        let reason = invalid_reason(&flat.into(), ValidationMode::Lenient);
        assert_eq!(reason, InvalidReason::ZeroAreaRing);
    }

    #[test]
    fn test_strict_orientation() {
        let cw = Polygon::new(ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]), vec![]);
        let g = Geometry::from(cw);
        assert!(g.validate(ValidationMode::Lenient).is_ok());
        assert_eq!(
            invalid_reason(&g, ValidationMode::Strict),
            InvalidReason::WrongOrientation { ring: "exterior" }
        );
    }

    #[test]
    fn test_hole_outside_shell() {
        let poly = Polygon::new(
            ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0)])],
        );
        assert_eq!(
            invalid_reason(&poly.into(), ValidationMode::Lenient),
            InvalidReason::HoleOutsideShell
        );
    }

    #[test]
    fn test_nested_holes_rejected() {
        let shell = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let outer_hole = ring(&[(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)]);
        let inner_hole = ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]);
        let nested: Geometry = Polygon::new(shell.clone(), vec![outer_hole, inner_hole]).into();
        assert_eq!(
            invalid_reason(&nested, ValidationMode::Lenient),
            InvalidReason::NestedHoles(Coord::new(4.0, 4.0))
        );
        assert!(nested.intersection(&nested).is_err());

        let side_by_side: Geometry = Polygon::new(
            shell,
            vec![
                ring(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]),
                ring(&[(4.0, 4.0), (8.0, 4.0), (8.0, 8.0), (4.0, 8.0)]),
            ],
        )
        .into();
        assert!(side_by_side.is_valid());
    }

    #[test]
    fn test_hole_crossing_shell() {
        let poly = Polygon::new(
            ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![ring(&[(1.0, 1.0), (5.0, 1.0), (5.0, 2.0), (1.0, 2.0)])],
        );
        assert!(matches!(
            invalid_reason(&poly.into(), ValidationMode::Lenient),
            InvalidReason::RingsCross(_)
        ));
    }

    #[test]
    fn test_hole_touching_shell_at_vertex_is_valid() {
        let poly = Polygon::new(
            ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![ring(&[(0.0, 2.0), (2.0, 1.0), (2.0, 3.0)])],
        );
        assert!(Geometry::from(poly).is_valid());
    }

    #[test]
    fn test_multipolygon_and_lines() {
        let mp = MultiPolygon(vec![
            Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)),
            Polygon::new(ring(&[(5.0, 5.0), (7.0, 7.0), (7.0, 5.0), (5.0, 7.0)]), vec![]),
        ]);
        assert!(!Geometry::from(mp).is_valid());

        let line = LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)]).unwrap();
        assert!(Geometry::from(line).is_valid());
    }
}
