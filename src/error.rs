use std::path::PathBuf;

use gpx::errors::GpxError;
use thiserror::Error;

/// Everything that can go wrong while turning one input file into an image.
///
/// These are all per-file failures: the batch driver reports them and moves
/// on to the next file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("malformed GPX document: {0}")]
    MalformedDocument(String),
    #[error("missing required metadata: {0}")]
    MissingMetadata(&'static str),
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    #[error("no parser accepts {0}")]
    UnsupportedInput(PathBuf),
    #[error("rendering failed: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<GpxError> for ConvertError {
    fn from(err: GpxError) -> Self {
        ConvertError::MalformedDocument(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
