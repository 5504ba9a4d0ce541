use super::centroid::centroid;
use crate::error::GeometryError;
use crate::geometry::{Geometry, Point, Polygon};
use crate::primitives::Coord;

/// A point guaranteed to lie in the interior of `geometry`, or on its
/// boundary when it has no interior.
///
/// Areal input is cut by a horizontal scan line placed between the two
/// vertex heights closest to the middle of the bounding box; the midpoint of
/// the widest interior interval is returned. Linear input yields the inner
/// vertex closest to the centroid, falling back to the closest segment
/// midpoint for lines without inner vertices. Puntal input yields the point
/// closest to the centroid. Empty input gives an empty point.
///
/// # Errors
///
/// [`GeometryError::InvalidGeometry`] when `geometry` is invalid.
pub fn interior_point(geometry: &Geometry) -> Result<Point, GeometryError> {
    let Some(center) = centroid(geometry)?.coord() else {
        return Ok(Point::empty());
    };

    let parts = geometry.parts();
    if !parts.polygons.is_empty() {
        if let Some(c) = areal_interior_point(&parts.polygons) {
            return Ok(c.into());
        }
    }

    if !parts.lines.is_empty() {
        let inner = parts
            .lines
            .iter()
            .flat_map(|l| l.iter().skip(1).take(l.len().saturating_sub(2)).copied());
        let midpoints = parts
            .lines
            .iter()
            .flat_map(|l| l.windows(2).map(|w| w[0].midpoint(w[1])));
        return Ok(Point::from(closest(inner, center).or_else(|| closest(midpoints, center))));
    }

    let mut candidates = parts.points;
    for polygon in &parts.polygons {
        candidates.extend(polygon.exterior().coords().first().copied());
    }
    Ok(Point::from(closest(candidates, center)))
}

fn closest<I: IntoIterator<Item = Coord>>(coords: I, target: Coord) -> Option<Coord> {
    coords.into_iter().min_by(|a, b| {
        a.distance_squared(target)
            .total_cmp(&b.distance_squared(target))
    })
}

fn areal_interior_point(polygons: &[&Polygon]) -> Option<Coord> {
    let mut best: Option<(f64, Coord)> = None;
    for polygon in polygons {
        let Some(y) = scan_line(polygon) else {
            continue;
        };
        let mut crossings: Vec<f64> = polygon
            .rings()
            .flat_map(|r| r.coords().windows(2))
            .filter_map(|w| crossing_x(w[0], w[1], y))
            .collect();
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let width = pair[1] - pair[0];
            if width > 0.0 && best.map_or(true, |(w, _)| width > w) {
                best = Some((width, Coord::new(0.5 * (pair[0] + pair[1]), y)));
            }
        }
    }
    best.map(|(_, c)| c)
}

/// Height halfway between the nearest vertex at or below the centre of the
/// envelope and the nearest vertex above it.
fn scan_line(polygon: &Polygon) -> Option<f64> {
    let env = polygon.envelope()?;
    let mid = env.center().y;
    let (mut lo, mut hi) = (env.min.y, env.max.y);
    for c in polygon.rings().flat_map(|r| r.coords().iter()) {
        if c.y <= mid && c.y > lo {
            lo = c.y;
        } else if c.y > mid && c.y < hi {
            hi = c.y;
        }
    }
    Some(0.5 * (lo + hi))
}

/// X at which edge `a`-`b` crosses height `y`, counting each crossing once
/// (half-open in y).
fn crossing_x(a: Coord, b: Coord, y: f64) -> Option<f64> {
    if (a.y <= y) == (b.y <= y) {
        return None;
    }
    let t = (y - a.y) / (b.y - a.y);
    Some(a.x + t * (b.x - a.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::locate::locate_in_polygon;
    use crate::geometry::{Dimension, LineString, LinearRing, Location, MultiPoint};

    #[test]
    fn test_square_center() {
        let square: Geometry = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(4.0, 2.0)).into();
        assert_eq!(interior_point(&square).unwrap().coord(), Some(Coord::new(2.0, 1.0)));
    }

    #[test]
    fn test_u_shape_point_is_inside() {
        // Centroid falls in the notch.
        let ring = LinearRing::from_vertices(vec![
            Coord::new(0.0, 0.0),
            Coord::new(6.0, 0.0),
            Coord::new(6.0, 6.0),
            Coord::new(4.0, 6.0),
            Coord::new(4.0, 1.0),
            Coord::new(2.0, 1.0),
            Coord::new(2.0, 6.0),
            Coord::new(0.0, 6.0),
        ])
        .unwrap();
        let polygon = Polygon::new(ring, vec![]);
        let c = interior_point(&polygon.clone().into()).unwrap().coord().unwrap();
        assert_eq!(locate_in_polygon(&polygon, c, 0.0), Location::Interior);

        let center = centroid(&polygon.clone().into()).unwrap().coord().unwrap();
        assert_ne!(locate_in_polygon(&polygon, center, 0.0), Location::Interior);
    }

    #[test]
    fn test_hole_is_avoided() {
        let shell = Polygon::rectangle(Coord::new(0.0, 0.0), Coord::new(10.0, 10.0));
        let hole = LinearRing::from_vertices(vec![
            Coord::new(2.0, 2.0),
            Coord::new(8.0, 2.0),
            Coord::new(8.0, 8.0),
            Coord::new(2.0, 8.0),
        ])
        .unwrap();
        let polygon = Polygon::new(shell.exterior().clone(), vec![hole]);
        let c = interior_point(&polygon.clone().into()).unwrap().coord().unwrap();
        assert_eq!(locate_in_polygon(&polygon, c, 0.0), Location::Interior);
    }

    #[test]
    fn test_line_and_points() {
        let line: Geometry = LineString::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(5.0, 0.0),
        ])
        .unwrap()
        .into();
        assert_eq!(interior_point(&line).unwrap().coord(), Some(Coord::new(1.0, 0.0)));

        let segment: Geometry = LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(2.0, 0.0)])
            .unwrap()
            .into();
        let on_segment = interior_point(&segment).unwrap();
        assert_eq!(on_segment.coord(), Some(Coord::new(1.0, 0.0)));
        let m = Geometry::from(on_segment).relate(&segment).unwrap();
        assert_eq!(m.get(Location::Interior, Location::Interior), Dimension::Point);

        let points: Geometry = MultiPoint(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
        ])
        .into();
        assert_eq!(interior_point(&points).unwrap().coord(), Some(Coord::new(1.0, 1.0)));
    }

    #[test]
    fn test_empty() {
        assert!(interior_point(&Geometry::from(Polygon::empty())).unwrap().is_empty());
        let bad: Geometry = Point::new(0.0, f64::INFINITY).into();
        assert!(interior_point(&bad).is_err());
    }
}
