use super::linestring::LinearRing;
use crate::bounds::Envelope;
use crate::primitives::Coord;

/// An area bounded by one exterior ring and zero or more holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    exterior: LinearRing,
    interiors: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon. Structural checks (holes inside the shell, rings
    /// simple) are performed by [`Geometry::validate`](super::Geometry::validate)
    /// and at the start of every engine operation.
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Axis-aligned rectangle with corners `a` and `b`, counter-clockwise
    /// from the minimum corner.
    pub fn rectangle(a: Coord, b: Coord) -> Self {
        let env = Envelope::from_corners(a, b);
        let ring = LinearRing::from_coords_unchecked(vec![
            env.min,
            Coord::new(env.max.x, env.min.y),
            env.max,
            Coord::new(env.min.x, env.max.y),
            env.min,
        ]);
        Self::new(ring, Vec::new())
    }

    #[inline]
    pub fn exterior(&self) -> &LinearRing {
        &self.exterior
    }

    #[inline]
    pub fn interiors(&self) -> &[LinearRing] {
        &self.interiors
    }

    /// Exterior ring followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Enclosed area: the shell minus the holes, independent of winding.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.interiors.iter().map(|r| r.signed_area().abs()).sum();
        self.exterior.signed_area().abs() - holes
    }

    /// Total length of all rings.
    pub fn perimeter(&self) -> f64 {
        self.rings().map(LinearRing::length).sum()
    }

    pub fn envelope(&self) -> Option<Envelope> {
        self.exterior.envelope()
    }

    /// Copy with a counter-clockwise shell and clockwise holes, so the
    /// interior always lies to the left of every ring edge.
    pub fn oriented(&self) -> Self {
        let exterior = if self.exterior.signed_area() < 0.0 {
            self.exterior.reversed()
        } else {
            self.exterior.clone()
        };
        let interiors = self
            .interiors
            .iter()
            .map(|r| if r.signed_area() > 0.0 { r.reversed() } else { r.clone() })
            .collect();
        Self::new(exterior, interiors)
    }
}
