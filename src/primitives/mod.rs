//! Floating-point geometric primitives.
//!
//! The primitives are generic over `num_traits::Float`; the geometry model
//! and the topology engines are built on the double-precision [`Coord`].

mod point2;
mod segment2;
mod vec2;

pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;

/// A double-precision planar coordinate.
pub type Coord = Point2<f64>;
