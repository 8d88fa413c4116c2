//! Buffering errors

use std::fmt::Display;

/// All the ways a buffer request can fail
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// (UnsupportedGeometry) No buffer strategy exists for this geometry type
    UnsupportedGeometry(&'static str),
    /// (MissingGeometry) The feature carries no geometry member
    MissingGeometry,
    /// (InvalidGeoJson) The geometry member could not be decoded into coordinates
    InvalidGeoJson(String),
}

impl Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::UnsupportedGeometry(geometry_type) => write!(
                f,
                "(UnsupportedGeometry) cannot buffer geometry of type: {}",
                geometry_type
            ),
            BufferError::MissingGeometry => {
                write!(f, "(MissingGeometry) the feature carries no geometry member")
            },
            BufferError::InvalidGeoJson(reason) => {
                write!(f, "(InvalidGeoJson) malformed geometry: {}", reason)
            },
        }
    }
}
