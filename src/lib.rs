//! Geodesic **buffering** of GeoJSON features: the region containing every
//! point within a given radius of a feature's geometry, returned as a single
//! polygonal feature.
//!
//! Each input geometry is decomposed into elementary shapes — discs around
//! points, capsules around line segments — whose circular arcs are sampled on
//! the haversine sphere at a configurable angular resolution. The resulting
//! candidate polygons overlap freely; a single cascaded planar union merges
//! them into one `Polygon` or `MultiPolygon`.
//!
//! Supported inputs: `Point`, `MultiPoint`, `LineString`, `MultiLineString`,
//! `Polygon`, `MultiPolygon`.
//!
//! ```
//! use geobuffer::{buffer_geometry, BufferParams, Units};
//! use geo::{Geometry, point};
//!
//! let geom = Geometry::Point(point! { x: 13.4, y: 52.5 });
//! let params = BufferParams::new(2.5, Units::Kilometers);
//! let buffered = buffer_geometry(&geom, &params).unwrap();
//! ```
//!
//! # Features
//! - **parallel**: use rayon for per-segment and per-part fan-out

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod buffer;
pub mod errors;
pub mod float_types;
pub mod geodesic;
pub mod union;

mod maybe_rayon;

pub use buffer::{BufferParams, DEFAULT_RESOLUTION, buffer, buffer_geometry};
pub use errors::BufferError;
pub use float_types::{Real, Units};
