use crate::error::GeometryError;
use crate::geometry::{Geometry, LineString, Point, Polygon, ValidationMode};

/// Axis-aligned bounding box of `geometry` as a geometry.
///
/// Empty input gives an empty `Polygon`; a box of zero width and height a
/// `Point`; zero width or height a two-point `LineString` from the minimum
/// to the maximum corner; anything else a rectangle, counter-clockwise from
/// the minimum corner.
///
/// # Errors
///
/// [`GeometryError::InvalidGeometry`] when `geometry` is invalid.
pub fn envelope(geometry: &Geometry) -> Result<Geometry, GeometryError> {
    geometry.validate(ValidationMode::Lenient)?;
    let Some(env) = geometry.bounds() else {
        return Ok(Polygon::empty().into());
    };
    Ok(if env.width() == 0.0 && env.height() == 0.0 {
        Point::from(env.min).into()
    } else if env.width() == 0.0 || env.height() == 0.0 {
        LineString::from_coords_unchecked(vec![env.min, env.max]).into()
    } else {
        Polygon::rectangle(env.min, env.max).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MultiPoint;
    use crate::primitives::Coord;

    #[test]
    fn test_envelope_cases() {
        assert_eq!(envelope(&Point::empty().into()).unwrap(), Geometry::from(Polygon::empty()));
        assert_eq!(
            envelope(&Point::new(2.0, 3.0).into()).unwrap(),
            Geometry::from(Point::new(2.0, 3.0))
        );

        let vertical: Geometry = MultiPoint(vec![Point::new(1.0, 0.0), Point::new(1.0, 5.0)]).into();
        assert_eq!(envelope(&vertical).unwrap().to_string(), "LINESTRING (1 0, 1 5)");

        let scattered: Geometry = MultiPoint(vec![
            Point::new(3.0, -1.0),
            Point::new(0.0, 2.0),
            Point::new(1.0, 1.0),
        ])
        .into();
        let env = envelope(&scattered).unwrap();
        assert_eq!(env.to_string(), "POLYGON ((0 -1, 3 -1, 3 2, 0 2, 0 -1))");
        assert_eq!(env.area(), 9.0);
        assert_eq!(env.bounds().map(|e| e.min), Some(Coord::new(0.0, -1.0)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let bad: Geometry = Point::new(f64::NAN, 0.0).into();
        assert!(matches!(envelope(&bad), Err(GeometryError::InvalidGeometry { .. })));
    }
}
