//! Boolean overlay of planar geometries.
//!
//! Both operands are noded into one [`TopologyGraph`](crate::graph). Each
//! face side of each edge knows which operands cover it, so the result of a
//! boolean operation is decided per face side with one rule:
//!
//! | operation | a face is in the result when |
//! |---|---|
//! | intersection | every operand covers it |
//! | union | at least one operand covers it |
//! | difference | the first operand covers it and no other does |
//! | symmetric difference | an odd number of operands cover it |
//!
//! Edges whose two sides disagree bound the result area and are traced into
//! rings. Edges covered by the operands but with no result area on either
//! side become lines, and nodes selected by the same rule but touched by no
//! result edge become points. Lower-dimensional leftovers, such as the
//! shared edge of two touching squares, are therefore kept.
//!
//! # Example
//!
//! ```
//! use planum::geometry::{Geometry, Polygon};
//! use planum::overlay::{overlay, OverlayOp};
//! use planum::Coord;
//!
//! let a: Geometry = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)).into();
//! let b: Geometry = Polygon::rectangle(Coord::new(0.5, 0.5), Coord::new(1.5, 1.5)).into();
//!
//! let inter = overlay(&a, &b, OverlayOp::Intersection).unwrap();
//! assert!((inter.area() - 0.25).abs() < 1e-12);
//!
//! let union = overlay(&a, &b, OverlayOp::Union).unwrap();
//! assert!((union.area() - 1.75).abs() < 1e-12);
//! ```

mod lines;
mod rings;

use crate::error::GeometryError;
use crate::geometry::{Dimension, Geometry, Location, Point};
use crate::graph::{InputGeometry, TopologyGraph};

/// A boolean set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayOp {
    Intersection,
    Union,
    Difference,
    SymDifference,
}

impl OverlayOp {
    /// Applies the operation to per-operand membership flags, first operand
    /// first.
    pub fn apply<I: IntoIterator<Item = bool>>(self, flags: I) -> bool {
        let mut flags = flags.into_iter();
        match self {
            OverlayOp::Intersection => {
                let mut seen = false;
                for f in flags {
                    if !f {
                        return false;
                    }
                    seen = true;
                }
                seen
            }
            OverlayOp::Union => flags.any(|f| f),
            OverlayOp::Difference => flags.next().unwrap_or(false) && !flags.any(|f| f),
            OverlayOp::SymDifference => flags.filter(|&f| f).count() % 2 == 1,
        }
    }

    /// Dimension of the empty geometry returned when nothing survives.
    fn empty_dimension(self, a: Dimension, b: Dimension) -> Dimension {
        match self {
            OverlayOp::Intersection => a.min(b),
            OverlayOp::Union | OverlayOp::SymDifference => a.max(b),
            OverlayOp::Difference => a,
        }
    }
}

/// Computes `a op b`.
///
/// # Errors
///
/// [`GeometryError::InvalidGeometry`] when an operand is invalid, and
/// [`GeometryError::Overlay`] when no consistent planar graph could be
/// built.
pub fn overlay(a: &Geometry, b: &Geometry, op: OverlayOp) -> Result<Geometry, GeometryError> {
    let inputs = vec![InputGeometry::new(a)?, InputGeometry::new(b)?];
    let empty_dimension = op.empty_dimension(a.dimension(), b.dimension());
    if op == OverlayOp::Intersection && inputs.iter().any(InputGeometry::is_empty) {
        return Ok(Geometry::empty(empty_dimension));
    }
    overlay_inputs(inputs, op, empty_dimension)
}

/// Dissolves every component of `geometry` into a minimal non-overlapping
/// set, noding all components against each other in a single pass.
pub fn unary_union(geometry: &Geometry) -> Result<Geometry, GeometryError> {
    let input = InputGeometry::new(geometry)?;
    overlay_inputs(vec![input], OverlayOp::Union, geometry.dimension())
}

/// Overlays prepared operands.
pub(crate) fn overlay_inputs(
    inputs: Vec<InputGeometry>,
    op: OverlayOp,
    empty_dimension: Dimension,
) -> Result<Geometry, GeometryError> {
    let graph = TopologyGraph::build(inputs)?;
    let selection = Selection::compute(&graph, op);

    let polygons = rings::build_polygons(&graph, &selection.area)?;
    let lines = lines::build_lines(&graph, &selection.line);
    let points = select_points(&graph, &selection, op);

    log::debug!(
        "{op:?} overlay: {} polygons, {} lines, {} points",
        polygons.len(),
        lines.len(),
        points.len()
    );
    Ok(Geometry::assemble(polygons, lines, points, empty_dimension))
}

/// Per-edge outcome of an operation.
struct Selection {
    /// `Some(true)` when the edge bounds the result with the result on its
    /// left as traversed `from -> to`; `Some(false)` when on its right.
    area: Vec<Option<bool>>,
    /// The edge is a lower-dimensional part of the result.
    line: Vec<bool>,
    /// Result area on either side.
    covered: Vec<bool>,
}

impl Selection {
    fn compute(graph: &TopologyGraph, op: OverlayOp) -> Self {
        let n = graph.edges.len();
        let mut selection = Self {
            area: vec![None; n],
            line: vec![false; n],
            covered: vec![false; n],
        };
        for (e, edge) in graph.edges.iter().enumerate() {
            let left = op.apply(edge.labels.iter().map(|l| l.left));
            let right = op.apply(edge.labels.iter().map(|l| l.right));
            if left != right {
                selection.area[e] = Some(left);
            } else if !left && op.apply(edge.labels.iter().map(|l| l.covers())) {
                selection.line[e] = true;
            }
            selection.covered[e] = left || right;
        }
        selection
    }
}

fn select_points(graph: &TopologyGraph, selection: &Selection, op: OverlayOp) -> Vec<Point> {
    let inputs = graph.inputs.len();
    let mut points = Vec::new();
    for (n, node) in graph.nodes.iter().enumerate() {
        let touched = node
            .star
            .iter()
            .any(|&e| selection.area[e].is_some() || selection.line[e] || selection.covered[e]);
        if touched {
            continue;
        }
        if !op.apply((0..inputs).map(|i| graph.node_location(n, i) != Location::Exterior)) {
            continue;
        }
        if node.star.is_empty() && op.apply((0..inputs).map(|i| graph.node_in_area(n, i))) {
            continue;
        }
        points.push(Point::from(node.coord));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryCollection, LineString, MultiPolygon, Polygon};
    use crate::primitives::Coord;
    use approx::assert_relative_eq;

    fn square(x: f64, y: f64, size: f64) -> Geometry {
        Polygon::rectangle(Coord::new(x, y), Coord::new(x + size, y + size)).into()
    }

    fn line(coords: &[(f64, f64)]) -> Geometry {
        LineString::new(coords.iter().map(|&(x, y)| Coord::new(x, y)).collect())
            .unwrap()
            .into()
    }

    #[test]
    fn test_apply_rules() {
        use OverlayOp::*;
        assert!(Intersection.apply([true, true]));
        assert!(!Intersection.apply([true, false]));
        assert!(!Intersection.apply([]));
        assert!(Union.apply([false, true]));
        assert!(Difference.apply([true, false]));
        assert!(!Difference.apply([true, true]));
        assert!(!Difference.apply([false, true]));
        assert!(SymDifference.apply([true, false]));
        assert!(!SymDifference.apply([true, true]));
    }

    #[test]
    fn test_intersection_overlapping_squares() {
        let result = overlay(&square(0.0, 0.0, 1.0), &square(0.5, 0.5, 1.0), OverlayOp::Intersection).unwrap();
        assert!(matches!(result, Geometry::Polygon(_)));
        assert_relative_eq!(result.area(), 0.25, epsilon = 1e-12);
        let env = result.bounds().unwrap();
        assert_eq!(env.min, Coord::new(0.5, 0.5));
        assert_eq!(env.max, Coord::new(1.0, 1.0));
    }

    #[test]
    fn test_union_overlapping_squares() {
        let result = overlay(&square(0.0, 0.0, 1.0), &square(0.5, 0.5, 1.0), OverlayOp::Union).unwrap();
        match &result {
            Geometry::Polygon(p) => {
                assert!(p.interiors().is_empty());
                assert_eq!(p.exterior().coords().len(), 9);
            }
            other => panic!("expected polygon, got {other}"),
        }
        assert_relative_eq!(result.area(), 1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_difference_and_sym_difference() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, 0.5, 1.0);
        let diff = overlay(&a, &b, OverlayOp::Difference).unwrap();
        assert_relative_eq!(diff.area(), 0.75, epsilon = 1e-12);

        let sym = overlay(&a, &b, OverlayOp::SymDifference).unwrap();
        assert!(matches!(sym, Geometry::MultiPolygon(ref mp) if mp.0.len() == 2));
        assert_relative_eq!(sym.area(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_difference_with_itself_is_empty() {
        let a = square(0.0, 0.0, 3.0);
        let result = overlay(&a, &a, OverlayOp::Difference).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.dimension(), Dimension::Area);
    }

    #[test]
    fn test_contained_square_makes_hole() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(2.0, 2.0, 3.0);
        let result = overlay(&outer, &inner, OverlayOp::Difference).unwrap();
        match &result {
            Geometry::Polygon(p) => {
                assert_eq!(p.interiors().len(), 1);
                assert!(p.exterior().is_ccw());
                assert!(!p.interiors()[0].is_ccw());
            }
            other => panic!("expected polygon with hole, got {other}"),
        }
        assert_relative_eq!(result.area(), 91.0, epsilon = 1e-12);
    }

    #[test]
    fn test_touching_squares_keep_shared_edge() {
        let result = overlay(&square(0.0, 0.0, 1.0), &square(1.0, 0.0, 1.0), OverlayOp::Intersection).unwrap();
        match result {
            Geometry::LineString(ls) => {
                assert_eq!(ls.coords().len(), 2);
                assert_relative_eq!(ls.length(), 1.0);
            }
            other => panic!("expected line, got {other}"),
        }
    }

    #[test]
    fn test_corner_touch_yields_point() {
        let result = overlay(&square(0.0, 0.0, 1.0), &square(1.0, 1.0, 1.0), OverlayOp::Intersection).unwrap();
        assert_eq!(result, Geometry::from(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_disjoint_intersection_is_typed_empty() {
        let result = overlay(&square(0.0, 0.0, 1.0), &line(&[(5.0, 5.0), (6.0, 6.0)]), OverlayOp::Intersection)
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.type_name(), "LINESTRING");
    }

    #[test]
    fn test_line_clipped_by_polygon() {
        let l = line(&[(-1.0, 0.5), (2.0, 0.5)]);
        let sq = square(0.0, 0.0, 1.0);

        let inside = overlay(&l, &sq, OverlayOp::Intersection).unwrap();
        assert_relative_eq!(inside.length(), 1.0, epsilon = 1e-12);

        let outside = overlay(&l, &sq, OverlayOp::Difference).unwrap();
        assert!(matches!(outside, Geometry::MultiLineString(ref m) if m.0.len() == 2));
        assert_relative_eq!(outside.length(), 2.0, epsilon = 1e-12);

        let merged = overlay(&sq, &l, OverlayOp::Union).unwrap();
        assert!(matches!(merged, Geometry::GeometryCollection(_)));
        assert_relative_eq!(merged.area(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_direction_preserved() {
        let l = line(&[(3.0, 0.5), (-1.0, 0.5)]);
        let result = overlay(&l, &square(0.0, 0.0, 1.0), OverlayOp::Intersection).unwrap();
        match result {
            Geometry::LineString(ls) => {
                assert_eq!(ls.start(), Some(Coord::new(1.0, 0.5)));
                assert_eq!(ls.end(), Some(Coord::new(0.0, 0.5)));
            }
            other => panic!("expected line, got {other}"),
        }
    }

    #[test]
    fn test_crossing_lines_intersect_at_point() {
        let a = line(&[(0.0, 0.0), (2.0, 2.0)]);
        let b = line(&[(0.0, 2.0), (2.0, 0.0)]);
        let result = overlay(&a, &b, OverlayOp::Intersection).unwrap();
        assert_eq!(result, Geometry::from(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_point_inside_polygon() {
        let p: Geometry = Point::new(0.5, 0.5).into();
        let sq = square(0.0, 0.0, 1.0);
        assert_eq!(overlay(&p, &sq, OverlayOp::Intersection).unwrap(), p);
        assert!(overlay(&p, &sq, OverlayOp::Difference).unwrap().is_empty());
        assert!(matches!(overlay(&sq, &p, OverlayOp::Union).unwrap(), Geometry::Polygon(_)));
    }

    #[test]
    fn test_unary_union_dissolves() {
        let gc: Geometry = GeometryCollection(vec![
            square(0.0, 0.0, 2.0),
            square(1.0, 0.0, 2.0),
            square(2.0, 0.0, 2.0),
            square(10.0, 0.0, 1.0),
        ])
        .into();
        let result = unary_union(&gc).unwrap();
        match &result {
            Geometry::MultiPolygon(MultiPolygon(parts)) => assert_eq!(parts.len(), 2),
            other => panic!("expected two parts, got {other}"),
        }
        assert_relative_eq!(result.area(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unary_union_fills_hole() {
        let shell = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(4.0, 4.0));
        let hole = Polygon::rectangle(Coord::new(1.0, 1.0), Coord::new(3.0, 3.0));
        let donut = Polygon::new(shell.exterior().clone(), vec![hole.exterior().reversed()]);
        let gc: Geometry = GeometryCollection(vec![donut.into(), hole.into()]).into();
        let result = unary_union(&gc).unwrap();
        match &result {
            Geometry::Polygon(p) => assert!(p.interiors().is_empty()),
            other => panic!("expected polygon, got {other}"),
        }
        assert_relative_eq!(result.area(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_operand_rejected() {
        let bowtie: Geometry = Polygon::new(
            crate::geometry::LinearRing::from_vertices(vec![
                Coord::new(0.0, 0.0),
                Coord::new(2.0, 2.0),
                Coord::new(2.0, 0.0),
                Coord::new(0.0, 3.0),
            ])
            .unwrap(),
            vec![],
        )
        .into();
        let err = overlay(&bowtie, &square(0.0, 0.0, 1.0), OverlayOp::Union).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry { .. }));
    }
}
