//! Derived geometries and measures.
//!
//! Boundary, envelope, centroid, interior point and nearest points. Each
//! result is a new geometry; inputs are never modified.

mod boundary;
mod centroid;
mod envelope;
mod interior_point;
pub mod locate;
mod nearest;

pub use boundary::boundary;
pub use centroid::centroid;
pub use envelope::envelope;
pub use interior_point::interior_point;
pub use nearest::{distance, nearest_points};
