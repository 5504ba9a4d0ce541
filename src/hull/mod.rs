//! Convex hull.
//!
//! Andrew's monotone chain over every coordinate of every component, with
//! exact orientation tests, so collinear points never survive on the hull.
//!
//! # Example
//!
//! ```
//! use planum::geometry::{Geometry, MultiPoint, Point};
//! use planum::hull::convex_hull;
//!
//! let points: Geometry = MultiPoint(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.5, 0.5), // interior
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ])
//! .into();
//!
//! let hull = convex_hull(&points).unwrap();
//! assert_eq!(hull.area(), 1.0);
//! assert_eq!(hull.num_points(), 5);
//! ```

use crate::error::GeometryError;
use crate::geometry::{Geometry, LineString, LinearRing, Point, Polygon, ValidationMode};
use crate::primitives::Coord;
use crate::tolerance::{orient2d, Orientation};

/// Smallest convex geometry containing every coordinate of `geometry`.
///
/// The result is a `Polygon` (counter-clockwise, starting from the lowest
/// leftmost vertex) when the coordinates span an area, a two-point
/// `LineString` when they are collinear, a `Point` when they all coincide,
/// and an empty `Polygon` when there are none.
pub fn convex_hull(geometry: &Geometry) -> Result<Geometry, GeometryError> {
    geometry.validate(ValidationMode::Lenient)?;
    let hull = hull_vertices(&geometry.coords());

    Ok(match hull.len() {
        0 => Polygon::empty().into(),
        1 => Point::from(hull[0]).into(),
        2 => LineString::from_coords_unchecked(hull).into(),
        _ => {
            let mut ring = hull;
            ring.push(ring[0]);
            Polygon::new(LinearRing::from_coords_unchecked(ring), Vec::new()).into()
        }
    })
}

/// Hull vertices in counter-clockwise order, not closed.
///
/// Duplicates are removed first. A single distinct point gives one vertex
/// and collinear input gives its two extreme points.
pub fn hull_vertices(points: &[Coord]) -> Vec<Coord> {
    let mut sorted: Vec<Coord> = points.to_vec();
    sorted.sort_by(Coord::cmp_xy);
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Coord> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && !turns_left(lower[lower.len() - 2], lower[lower.len() - 1], p) {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Coord> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && !turns_left(upper[upper.len() - 2], upper[upper.len() - 1], p) {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[inline]
fn turns_left(a: Coord, b: Coord, c: Coord) -> bool {
    orient2d(a, b, c) == Orientation::CounterClockwise
}
