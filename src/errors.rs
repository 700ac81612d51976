use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for the thumbnail batch.
///
/// Each variant carries the path and the step that failed, so the
/// message printed when the run aborts names the offending file.
#[derive(Error, Debug)]
pub enum CropError {
    #[error("Filesystem error: {operation} failed for {path:?}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Image processing error: {operation} failed (file: {path})")]
    ImageProcessing {
        path: String,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {field} {reason}")]
    Validation { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CropError>;

/// Pixel helpers in `thumbnail` report failures through anyhow.
impl From<anyhow::Error> for CropError {
    fn from(err: anyhow::Error) -> Self {
        Self::ImageProcessing {
            path: "unknown".to_string(),
            operation: "pixel operation".to_string(),
            source: err.into(),
        }
    }
}
