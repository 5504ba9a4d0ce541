//! planum - Planar topology for vector geometries
//!
//! Boolean overlay, buffering, convex hull and DE-9IM relate over points,
//! lines, polygons and their collections. Orientation tests are exact; the
//! only tolerance is the snapping distance the noder uses to merge
//! constructed intersection points with nearby vertices.
//!
//! Every operation is a pure function of its inputs and returns a new
//! geometry. Invalid input is rejected up front with a [`GeometryError`];
//! an empty result is an empty geometry, not an error.
//!
//! # Example
//!
//! ```
//! use planum::{Coord, Geometry, Polygon};
//!
//! let a: Geometry = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)).into();
//! let b: Geometry = Polygon::rectangle(Coord::new(0.5, 0.5), Coord::new(1.5, 1.5)).into();
//!
//! let shared = a.intersection(&b).unwrap();
//! assert!((shared.area() - 0.25).abs() < 1e-12);
//! assert_eq!(a.relate(&b).unwrap().to_string(), "212101212");
//!
//! let grown = a.buffer(0.5).unwrap();
//! assert!(!grown.contains(&b).unwrap());
//! assert!(grown.area() > 3.0);
//! ```

pub mod algorithm;
pub mod bounds;
pub mod buffer;
pub mod error;
pub mod geometry;
mod graph;
pub mod hull;
mod noding;
mod ops;
pub mod overlay;
pub mod primitives;
pub mod relate;
pub mod tolerance;

pub use buffer::{BufferParams, CapStyle, JoinStyle};
pub use error::{GeometryError, InvalidReason, OverlayFailure};
pub use geometry::{
    Dimension, Geometry, GeometryCollection, LineString, LinearRing, Location, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, ValidationMode,
};
pub use noding::MAX_NODING_PASSES;
pub use overlay::OverlayOp;
pub use primitives::{Coord, Point2, Segment2, Vec2};
pub use relate::IntersectionMatrix;
pub use tolerance::{orient2d, Orientation};
