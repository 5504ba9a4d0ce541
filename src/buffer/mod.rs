//! Buffering: the region within a distance of a geometry.
//!
//! A positive distance grows the geometry by the union of elementary pieces
//! (segment rectangles, corner wedges, end caps and point discs) together
//! with the original polygons. A negative distance erodes the polygonal
//! part by subtracting the same pieces built around its rings. Concave
//! corners, overlapping pieces and self-intersecting offsets are all
//! resolved by the overlay engine, so the result is always a valid polygon
//! or multi-polygon.
//!
//! # Example
//!
//! ```
//! use planum::buffer::{buffer_with_params, BufferParams};
//! use planum::geometry::{Geometry, Point};
//! use std::f64::consts::PI;
//!
//! let origin: Geometry = Point::new(0.0, 0.0).into();
//!
//! let coarse = buffer_with_params(&origin, 1.0, &BufferParams::default().with_quadrant_segments(2)).unwrap();
//! let fine = buffer_with_params(&origin, 1.0, &BufferParams::default().with_quadrant_segments(16)).unwrap();
//!
//! assert!(coarse.area() < fine.area());
//! assert!(fine.area() < PI);
//! ```

mod params;
mod pieces;

pub use params::{BufferParams, CapStyle, JoinStyle};

use pieces::Pieces;

use crate::error::GeometryError;
use crate::geometry::{Dimension, Geometry, MultiPolygon, Polygon};
use crate::graph::InputGeometry;
use crate::overlay::{overlay_inputs, OverlayOp};

/// Buffers `geometry` by `distance` with default parameters.
pub fn buffer(geometry: &Geometry, distance: f64) -> Result<Geometry, GeometryError> {
    buffer_with_params(geometry, distance, &BufferParams::default())
}

/// Buffers `geometry` by `distance`.
///
/// The result is always polygonal: a `Polygon`, a `MultiPolygon`, or an
/// empty `Polygon` when nothing remains (for example a polygon eroded by
/// more than half its width, or a line buffered by a non-positive
/// distance).
///
/// # Errors
///
/// [`GeometryError::InvalidArgument`] for a non-finite distance, and the
/// validation and overlay errors of the underlying engines.
pub fn buffer_with_params(
    geometry: &Geometry,
    distance: f64,
    params: &BufferParams,
) -> Result<Geometry, GeometryError> {
    if !distance.is_finite() {
        return Err(GeometryError::InvalidArgument {
            name: "distance",
            message: format!("must be finite, got {distance}"),
        });
    }
    if !params.mitre_limit.is_finite() || params.mitre_limit <= 0.0 {
        return Err(GeometryError::InvalidArgument {
            name: "mitre_limit",
            message: format!("must be positive, got {}", params.mitre_limit),
        });
    }

    let input = InputGeometry::new(geometry)?;
    let width = distance.abs();
    log::debug!(
        "buffer {} by {distance} ({} polygons, {} lines, {} points)",
        geometry.type_name(),
        input.polygons.len(),
        input.lines.len(),
        input.points.len()
    );

    let result = if distance == 0.0 {
        if input.polygons.is_empty() {
            return Ok(Geometry::empty(Dimension::Area));
        }
        let areal = InputGeometry::from_parts(input.polygons, Vec::new(), Vec::new());
        overlay_inputs(vec![areal], OverlayOp::Union, Dimension::Area)?
    } else if distance > 0.0 {
        if input.is_empty() {
            return Ok(Geometry::empty(Dimension::Area));
        }
        let mut pieces = Pieces::new(width, params);
        for polygon in &input.polygons {
            for ring in polygon.rings() {
                pieces.add_ring(ring.coords());
            }
        }
        for line in &input.lines {
            pieces.add_line(line);
        }
        for &p in &input.points {
            pieces.add_point(p);
        }
        let mut polygons = input.polygons;
        polygons.extend(pieces.polygons);
        let grown = InputGeometry::from_parts(polygons, Vec::new(), Vec::new());
        overlay_inputs(vec![grown], OverlayOp::Union, Dimension::Area)?
    } else {
        if input.polygons.is_empty() {
            return Ok(Geometry::empty(Dimension::Area));
        }
        let mut pieces = Pieces::new(width, params);
        for polygon in &input.polygons {
            for ring in polygon.rings() {
                pieces.add_ring(ring.coords());
            }
        }
        let areal = InputGeometry::from_parts(input.polygons, Vec::new(), Vec::new());
        let band = InputGeometry::from_parts(pieces.polygons, Vec::new(), Vec::new());
        overlay_inputs(vec![areal, band], OverlayOp::Difference, Dimension::Area)?
    };

    Ok(polygonal_part(result))
}

/// Keeps only the polygons of an overlay result.
fn polygonal_part(geometry: Geometry) -> Geometry {
    let mut polygons: Vec<Polygon> = geometry.parts().polygons.into_iter().cloned().collect();
    match polygons.len() {
        0 => Geometry::empty(Dimension::Area),
        1 => polygons.remove(0).into(),
        _ => MultiPolygon(polygons).into(),
    }
}
