use crate::error::GeometryError;
use crate::geometry::{Geometry, Point, Polygon, ValidationMode};
use crate::primitives::{Coord, Vec2};

/// Centre of mass of the highest-dimensional part of `geometry`.
///
/// Polygons are weighted by area, lines by length and points count equally.
/// Lower-dimensional parts are ignored when a higher one is present. Empty
/// input gives an empty point.
///
/// # Errors
///
/// [`GeometryError::InvalidGeometry`] when `geometry` is invalid.
///
/// # Example
///
/// ```
/// use planum::algorithm::centroid;
/// use planum::geometry::{Geometry, Polygon};
/// use planum::Coord;
///
/// let square: Geometry = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(2.0, 4.0)).into();
/// assert_eq!(centroid(&square).unwrap().coord(), Some(Coord::new(1.0, 2.0)));
/// ```
pub fn centroid(geometry: &Geometry) -> Result<Point, GeometryError> {
    geometry.validate(ValidationMode::Lenient)?;
    let parts = geometry.parts();
    let point = area_centroid(&parts.polygons)
        .or_else(|| {
            let mut lines: Vec<&[Coord]> = parts.lines.clone();
            for polygon in &parts.polygons {
                lines.extend(polygon.rings().map(|r| r.coords()));
            }
            line_centroid(&lines)
        })
        .or_else(|| {
            let mut coords = parts.points.clone();
            coords.extend(parts.lines.iter().flat_map(|l| l.iter().copied()));
            point_centroid(&coords)
        });
    Ok(Point::from(point))
}

/// Area-weighted centroid, summing signed triangles fanned from a common
/// base. Returns `None` when the total area is zero.
fn area_centroid(polygons: &[&Polygon]) -> Option<Coord> {
    let base = polygons.first()?.exterior().coords().first().copied()?;
    let mut area = 0.0;
    let mut moment = Vec2::new(0.0, 0.0);

    for polygon in polygons {
        let oriented = polygon.oriented();
        for ring in oriented.rings() {
            for w in ring.coords().windows(2) {
                let (a, b) = (w[0] - base, w[1] - base);
                let twice = a.cross(b);
                area += twice;
                moment = moment + (a + b) * twice;
            }
        }
    }

    (area != 0.0).then(|| base + moment / (3.0 * area))
}

/// Length-weighted centroid of segment midpoints.
fn line_centroid(lines: &[&[Coord]]) -> Option<Coord> {
    let base = lines.first()?.first().copied()?;
    let mut length = 0.0;
    let mut moment = Vec2::new(0.0, 0.0);

    for line in lines {
        for w in line.windows(2) {
            let len = w[0].distance(w[1]);
            length += len;
            moment = moment + ((w[0] - base) + (w[1] - base)) * (0.5 * len);
        }
    }

    (length > 0.0).then(|| base + moment / length)
}

fn point_centroid(coords: &[Coord]) -> Option<Coord> {
    let base = coords.first().copied()?;
    let sum = coords
        .iter()
        .fold(Vec2::new(0.0, 0.0), |acc, &c| acc + (c - base));
    Some(base + sum / coords.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryCollection, LineString, LinearRing, MultiPoint};
    use approx::assert_relative_eq;

    fn coord_of(g: &Geometry) -> Coord {
        centroid(g).unwrap().coord().unwrap()
    }

    #[test]
    fn test_polygon_with_hole() {
        let shell = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(4.0, 4.0));
        let quarter = LinearRing::from_vertices(vec![
            Coord::new(2.0, 1.0),
            Coord::new(3.0, 1.0),
            Coord::new(3.0, 3.0),
            Coord::new(2.0, 3.0),
        ])
        .unwrap();
        let p: Geometry = Polygon::new(shell.exterior().clone(), vec![quarter]).into();
        let c = coord_of(&p);
        // 16 at x=2 minus 2 at x=2.5 over 14.
        assert_relative_eq!(c.x, (16.0 * 2.0 - 2.0 * 2.5) / 14.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_centroid() {
        let l: Geometry = LineString::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(2.0, 0.0),
            Coord::new(2.0, 1.0),
        ])
        .unwrap()
        .into();
        let c = coord_of(&l);
        assert_relative_eq!(c.x, (2.0 * 1.0 + 1.0 * 2.0) / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_points_and_dimension_priority() {
        let pts: Geometry = MultiPoint(vec![Point::new(0.0, 0.0), Point::new(2.0, 4.0)]).into();
        assert_eq!(coord_of(&pts), Coord::new(1.0, 2.0));

        let mixed: Geometry = GeometryCollection(vec![
            Point::new(100.0, 100.0).into(),
            Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(2.0, 2.0)).into(),
        ])
        .into();
        assert_eq!(coord_of(&mixed), Coord::new(1.0, 1.0));
    }

    #[test]
    fn test_empty_centroid() {
        assert!(centroid(&Geometry::from(MultiPoint(vec![]))).unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_rejected() {
        let bad: Geometry = Point::new(f64::NAN, 0.0).into();
        assert!(matches!(
            centroid(&bad),
            Err(GeometryError::InvalidGeometry { .. })
        ));
    }
}
