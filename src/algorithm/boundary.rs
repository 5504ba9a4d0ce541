use crate::error::GeometryError;
use crate::geometry::{
    Dimension, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, Point, Polygon,
    ValidationMode,
};
use crate::graph::InputGeometry;
use crate::overlay::{overlay_inputs, OverlayOp};

/// Combinatorial boundary of `geometry`.
///
/// * points have no boundary (`GEOMETRYCOLLECTION EMPTY`);
/// * lines are bounded by the endpoints shared by an odd number of line
///   ends, so closed lines have an empty boundary (`MULTIPOINT`);
/// * polygons are bounded by their rings, exterior first
///   (`MULTILINESTRING`);
/// * multi-polygons and collections dissolve their polygons first so that
///   edges shared by adjacent polygons cancel out; line endpoints in a
///   collection follow the odd-count rule.
pub fn boundary(geometry: &Geometry) -> Result<Geometry, GeometryError> {
    geometry.validate(ValidationMode::Lenient)?;
    Ok(match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => Geometry::empty(Dimension::Empty),
        Geometry::LineString(_) | Geometry::LinearRing(_) | Geometry::MultiLineString(_) => {
            let input = InputGeometry::new(geometry)?;
            MultiPoint(input.line_boundary().into_iter().map(Point::from).collect()).into()
        }
        Geometry::Polygon(p) => MultiLineString(rings_of(std::slice::from_ref(p))).into(),
        Geometry::MultiPolygon(mp) => MultiLineString(dissolved_rings(mp.0.clone())?).into(),
        Geometry::GeometryCollection(_) => collection_boundary(geometry)?,
    })
}

fn rings_of(polygons: &[Polygon]) -> Vec<LineString> {
    polygons
        .iter()
        .filter(|p| !p.is_empty())
        .flat_map(Polygon::rings)
        .map(|r| r.to_line_string())
        .collect()
}

/// Rings of the union of `polygons`. A single polygon is returned as is.
fn dissolved_rings(polygons: Vec<Polygon>) -> Result<Vec<LineString>, GeometryError> {
    if polygons.iter().filter(|p| !p.is_empty()).count() < 2 {
        return Ok(rings_of(&polygons));
    }
    let areal = InputGeometry::from_parts(polygons, Vec::new(), Vec::new());
    let dissolved = overlay_inputs(vec![areal], OverlayOp::Union, Dimension::Area)?;
    let parts: Vec<Polygon> = dissolved.parts().polygons.into_iter().cloned().collect();
    Ok(rings_of(&parts))
}

fn collection_boundary(geometry: &Geometry) -> Result<Geometry, GeometryError> {
    let input = InputGeometry::new(geometry)?;
    let ends: Vec<Point> = input.line_boundary().into_iter().map(Point::from).collect();

    let rings = dissolved_rings(input.polygons)?;

    if rings.is_empty() && ends.is_empty() {
        return Ok(GeometryCollection::default().into());
    }
    Ok(Geometry::assemble(Vec::new(), rings, ends, Dimension::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LinearRing, MultiPolygon};
    use crate::primitives::Coord;

    fn line(coords: &[(f64, f64)]) -> LineString {
        LineString::new(coords.iter().map(|&(x, y)| Coord::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_point_boundary_is_empty() {
        let b = boundary(&Point::new(1.0, 1.0).into()).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn test_line_boundary() {
        let open = boundary(&line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).into()).unwrap();
        assert_eq!(open.to_string(), "MULTIPOINT ((0 0), (1 1))");

        let closed = boundary(&line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).into()).unwrap();
        assert!(closed.is_empty());

        let joined: Geometry = MultiLineString(vec![
            line(&[(0.0, 0.0), (1.0, 0.0)]),
            line(&[(1.0, 0.0), (2.0, 0.0)]),
        ])
        .into();
        assert_eq!(boundary(&joined).unwrap().to_string(), "MULTIPOINT ((0 0), (2 0))");
    }

    #[test]
    fn test_polygon_boundary_is_multilinestring() {
        let shell = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(4.0, 4.0));
        let hole = LinearRing::from_vertices(vec![
            Coord::new(1.0, 1.0),
            Coord::new(1.0, 2.0),
            Coord::new(2.0, 2.0),
        ])
        .unwrap();
        let p = Polygon::new(shell.exterior().clone(), vec![hole]);
        match boundary(&p.into()).unwrap() {
            Geometry::MultiLineString(mls) => {
                assert_eq!(mls.0.len(), 2);
                assert!(mls.0.iter().all(LineString::is_closed));
                assert_eq!(mls.0[0].length(), 16.0);
            }
            other => panic!("expected multilinestring, got {other}"),
        }

        let single = boundary(&shell.into()).unwrap();
        assert!(matches!(single, Geometry::MultiLineString(ref m) if m.0.len() == 1));
    }

    #[test]
    fn test_collection_shared_edges_cancel() {
        let gc: Geometry = GeometryCollection(vec![
            Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)).into(),
            Polygon::rectangle(Coord::new(1.0, 0.0), Coord::new(2.0, 1.0)).into(),
        ])
        .into();
        let b = boundary(&gc).unwrap();
        assert!(matches!(b, Geometry::LineString(_)));
        assert_eq!(b.length(), 6.0);
    }

    #[test]
    fn test_multipolygon_shared_edges_cancel() {
        let adjacent: Geometry = MultiPolygon(vec![
            Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)),
            Polygon::rectangle(Coord::new(1.0, 0.0), Coord::new(2.0, 1.0)),
        ])
        .into();
        match boundary(&adjacent).unwrap() {
            Geometry::MultiLineString(mls) => {
                assert_eq!(mls.0.len(), 1);
                assert_eq!(mls.0[0].length(), 6.0);
            }
            other => panic!("expected multilinestring, got {other}"),
        }

        let apart: Geometry = MultiPolygon(vec![
            Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)),
            Polygon::rectangle(Coord::new(3.0, 0.0), Coord::new(4.0, 1.0)),
        ])
        .into();
        assert_eq!(boundary(&apart).unwrap().length(), 8.0);
    }
}
