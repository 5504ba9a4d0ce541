//! DE-9IM relationships.
//!
//! Both geometries are noded into one topology graph. Every edge, every
//! face side and every node then has a known location relative to each
//! geometry, and contributes its own dimension (1, 2 and 0 respectively) to
//! the matrix cell of that pair of locations.
//!
//! # Example
//!
//! ```
//! use planum::geometry::{Geometry, Polygon};
//! use planum::relate::relate;
//! use planum::Coord;
//!
//! let a: Geometry = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)).into();
//! let b: Geometry = Polygon::rectangle(Coord::new(5.0, 5.0), Coord::new(6.0, 6.0)).into();
//!
//! let matrix = relate(&a, &b).unwrap();
//! assert_eq!(matrix.to_string(), "FF2FF1212");
//! assert!(matrix.is_disjoint());
//! ```

mod matrix;

pub use matrix::IntersectionMatrix;

use crate::error::GeometryError;
use crate::geometry::{Dimension, Geometry, Location};
use crate::graph::{InputGeometry, TopologyGraph};

/// Computes the intersection matrix of `a` and `b`.
///
/// An empty operand is related like any other point set: only cells
/// involving its exterior can be non-empty.
pub fn relate(a: &Geometry, b: &Geometry) -> Result<IntersectionMatrix, GeometryError> {
    let inputs = vec![InputGeometry::new(a)?, InputGeometry::new(b)?];
    let mut matrix = IntersectionMatrix::default();

    if inputs[0].is_empty() || inputs[1].is_empty() {
        relate_exterior(&mut matrix, &inputs[0], true);
        relate_exterior(&mut matrix, &inputs[1], false);
        return Ok(matrix);
    }

    let graph = TopologyGraph::build(inputs)?;

    for edge in &graph.edges {
        let (la, lb) = (&edge.labels[0], &edge.labels[1]);
        matrix.set_at_least(la.location(), lb.location(), Dimension::Line);
        for (a_in, b_in) in [(la.left, lb.left), (la.right, lb.right)] {
            matrix.set_at_least(face(a_in), face(b_in), Dimension::Area);
        }
    }
    for n in 0..graph.nodes.len() {
        matrix.set_at_least(graph.node_location(n, 0), graph.node_location(n, 1), Dimension::Point);
    }

    log::trace!("relate matrix {matrix}");
    Ok(matrix)
}

/// Tests the relationship of `a` and `b` against a DE-9IM pattern.
pub fn relate_pattern(a: &Geometry, b: &Geometry, pattern: &str) -> Result<bool, GeometryError> {
    relate(a, b)?.matches(pattern)
}

#[inline]
fn face(inside: bool) -> Location {
    if inside {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Fills the cells pairing `input` with the exterior of an empty operand.
fn relate_exterior(matrix: &mut IntersectionMatrix, input: &InputGeometry, first: bool) {
    let interior = input.dimension();
    let boundary = if !input.polygons.is_empty() {
        Dimension::Line
    } else if !input.line_boundary().is_empty() {
        Dimension::Point
    } else {
        Dimension::Empty
    };

    for (location, dim) in [(Location::Interior, interior), (Location::Boundary, boundary)] {
        if first {
            matrix.set_at_least(location, Location::Exterior, dim);
        } else {
            matrix.set_at_least(Location::Exterior, location, dim);
        }
    }
}
