//! The engine operations as methods on [`Geometry`].
//!
//! Every method here forwards to the module that implements it. Operations
//! that can fail on invalid input return a `Result`; empty results are
//! ordinary empty geometries.

use crate::algorithm;
use crate::buffer::{self, BufferParams};
use crate::error::GeometryError;
use crate::geometry::{Geometry, Point};
use crate::hull;
use crate::overlay::{self, OverlayOp};
use crate::primitives::Coord;
use crate::relate::{self, IntersectionMatrix};

impl Geometry {
    /// Area within `distance` of this geometry, with round joins and caps.
    ///
    /// See [`buffer::buffer`].
    pub fn buffer(&self, distance: f64) -> Result<Geometry, GeometryError> {
        buffer::buffer(self, distance)
    }

    pub fn buffer_with_params(
        &self,
        distance: f64,
        params: &BufferParams,
    ) -> Result<Geometry, GeometryError> {
        buffer::buffer_with_params(self, distance, params)
    }

    /// Smallest convex geometry containing every coordinate.
    pub fn convex_hull(&self) -> Result<Geometry, GeometryError> {
        hull::convex_hull(self)
    }

    pub fn intersection(&self, other: &Geometry) -> Result<Geometry, GeometryError> {
        overlay::overlay(self, other, OverlayOp::Intersection)
    }

    pub fn union(&self, other: &Geometry) -> Result<Geometry, GeometryError> {
        overlay::overlay(self, other, OverlayOp::Union)
    }

    /// Dissolves the components of a collection into one geometry.
    pub fn unary_union(&self) -> Result<Geometry, GeometryError> {
        overlay::unary_union(self)
    }

    pub fn difference(&self, other: &Geometry) -> Result<Geometry, GeometryError> {
        overlay::overlay(self, other, OverlayOp::Difference)
    }

    pub fn sym_difference(&self, other: &Geometry) -> Result<Geometry, GeometryError> {
        overlay::overlay(self, other, OverlayOp::SymDifference)
    }

    pub fn boundary(&self) -> Result<Geometry, GeometryError> {
        algorithm::boundary(self)
    }

    pub fn envelope(&self) -> Result<Geometry, GeometryError> {
        algorithm::envelope(self)
    }

    pub fn centroid(&self) -> Result<Point, GeometryError> {
        algorithm::centroid(self)
    }

    /// A point inside the geometry, or on it when it has no interior.
    pub fn point_on_surface(&self) -> Result<Point, GeometryError> {
        algorithm::interior_point(self)
    }

    /// The point of `self` closest to `other`.
    pub fn nearest_point(&self, other: &Geometry) -> Result<Option<Coord>, GeometryError> {
        Ok(algorithm::nearest_points(self, other)?.map(|[p, _]| p))
    }

    pub fn nearest_points(&self, other: &Geometry) -> Result<Option<[Coord; 2]>, GeometryError> {
        algorithm::nearest_points(self, other)
    }

    pub fn distance(&self, other: &Geometry) -> Result<Option<f64>, GeometryError> {
        algorithm::distance(self, other)
    }

    /// DE-9IM matrix of `self` against `other`.
    pub fn relate(&self, other: &Geometry) -> Result<IntersectionMatrix, GeometryError> {
        relate::relate(self, other)
    }

    pub fn relate_pattern(&self, other: &Geometry, pattern: &str) -> Result<bool, GeometryError> {
        relate::relate_pattern(self, other, pattern)
    }

    pub fn intersects(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.relate(other)?.is_intersects())
    }

    pub fn disjoint(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.relate(other)?.is_disjoint())
    }

    pub fn contains(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.relate(other)?.is_contains())
    }

    pub fn within(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.relate(other)?.is_within())
    }

    pub fn covers(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.relate(other)?.is_covers())
    }

    pub fn covered_by(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.relate(other)?.is_covered_by())
    }

    pub fn touches(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self
            .relate(other)?
            .is_touches(self.dimension(), other.dimension()))
    }

    pub fn crosses(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self
            .relate(other)?
            .is_crosses(self.dimension(), other.dimension()))
    }

    pub fn overlaps(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self
            .relate(other)?
            .is_overlaps(self.dimension(), other.dimension()))
    }

    /// Point-set equality, regardless of vertex order or redundant vertices.
    pub fn equals_topo(&self, other: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.relate(other)?.is_equals())
    }
}
