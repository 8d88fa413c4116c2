//! Geometry dispatch and the public buffer entry points.
//!
//! Each supported geometry type is decomposed into candidate polygons by the
//! builder modules below, the candidates from every part are pooled into one
//! flat list, and [`union::merge`] reconciles them in a single pass.

pub mod line;
pub mod point;
pub mod polygon;
pub mod segment;

use crate::errors::BufferError;
use crate::float_types::{Real, Units};
use crate::maybe_rayon::*;
use crate::union;
use geo::{Geometry, MultiPolygon, Polygon};
use geojson::Feature;

/// Angular samples used to approximate a full circle when unspecified.
pub const DEFAULT_RESOLUTION: u32 = 36;

/// Parameters of a buffer request.
///
/// `radius` is expressed in `units` and normalized to meters before it
/// reaches the geodesic math. `resolution` is the number of angular samples
/// approximating a full circle; each semicircular end cap gets
/// `resolution / 2` of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferParams {
    pub radius: Real,
    pub units: Units,
    pub resolution: u32,
}

impl BufferParams {
    /// Buffer request with the default resolution of [`DEFAULT_RESOLUTION`].
    pub const fn new(radius: Real, units: Units) -> Self {
        BufferParams {
            radius,
            units,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Overrides the angular resolution.
    pub const fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    fn radius_meters(&self) -> Real {
        self.units.to_meters(self.radius)
    }
}

/// Buffers a GeoJSON feature, returning a feature whose geometry is the
/// `Polygon` (or `MultiPolygon`, when the buffer has disjoint components)
/// covering every point within the configured radius of the input geometry.
///
/// `id`, `properties`, and foreign members pass through untouched; any input
/// bbox is dropped since it no longer bounds the result.
pub fn buffer(feature: &Feature, params: &BufferParams) -> Result<Feature, BufferError> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or(BufferError::MissingGeometry)?;
    if let geojson::Value::GeometryCollection(_) = geometry.value {
        return Err(BufferError::UnsupportedGeometry("GeometryCollection"));
    }
    let geometry: Geometry<Real> = Geometry::try_from(geometry.value.clone())
        .map_err(|e| BufferError::InvalidGeoJson(e.to_string()))?;

    let buffered = buffer_geometry(&geometry, params)?;

    Ok(Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(&buffered))),
        id: feature.id.clone(),
        properties: feature.properties.clone(),
        foreign_members: feature.foreign_members.clone(),
    })
}

/// Buffers a bare `geo` geometry. See [`buffer`] for the feature-level entry
/// point.
///
/// A non-positive radius produces an empty `MultiPolygon` by definition, and
/// so does a geometry with no segments to buffer (e.g. a `MultiLineString`
/// of single-coordinate lines). Geometry types outside the GeoJSON buffer
/// set fail with [`BufferError::UnsupportedGeometry`].
pub fn buffer_geometry(
    geometry: &Geometry<Real>,
    params: &BufferParams,
) -> Result<Geometry<Real>, BufferError> {
    let radius = params.radius_meters();
    if radius <= 0.0 {
        return Ok(Geometry::MultiPolygon(MultiPolygon::new(Vec::new())));
    }
    let resolution = params.resolution;

    match geometry {
        // A single disc needs no union pass.
        Geometry::Point(p) => Ok(Geometry::Polygon(point::point_buffer(
            p.0, radius, resolution,
        ))),
        Geometry::MultiPoint(points) => {
            let discs: Vec<Polygon<Real>> = (&points.0)
                .into_par_iter()
                .map(|p| point::point_buffer(p.0, radius, resolution))
                .collect();
            Ok(union::merge(discs))
        },
        Geometry::LineString(line) => {
            Ok(union::merge(line::line_buffer(line, radius, resolution)))
        },
        Geometry::MultiLineString(lines) => {
            let capsules: Vec<Polygon<Real>> = (&lines.0)
                .into_par_iter()
                .flat_map(|line| line::line_buffer(line, radius, resolution))
                .collect();
            Ok(union::merge(capsules))
        },
        Geometry::Polygon(poly) => Ok(union::merge(polygon::polygon_buffer(
            poly, radius, resolution,
        ))),
        Geometry::MultiPolygon(polys) => {
            let candidates: Vec<Polygon<Real>> = (&polys.0)
                .into_par_iter()
                .flat_map(|poly| polygon::polygon_buffer(poly, radius, resolution))
                .collect();
            Ok(union::merge(candidates))
        },
        unsupported => Err(BufferError::UnsupportedGeometry(geometry_type(unsupported))),
    }
}

/// GeoJSON-style name of a `geo` geometry variant.
fn geometry_type(geometry: &Geometry<Real>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
