use super::{Geometry, LineString, Point, Polygon};

/// An ordered set of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(pub Vec<Point>);

/// An ordered set of line strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

/// An ordered set of polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

/// A heterogeneous, possibly nested, ordered set of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl MultiPoint {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Point::is_empty)
    }
}

impl MultiLineString {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(LineString::is_empty)
    }
}

impl MultiPolygon {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Polygon::is_empty)
    }
}

impl GeometryCollection {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Geometry::is_empty)
    }
}
