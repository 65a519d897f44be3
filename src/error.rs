//! Error types for the planner.  Generating, scaling and serializing layouts never fails; only
//! the boundaries which touch files or external formats return these.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or exporting layouts
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document (e.g. the prompt config) could not be parsed or produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The SVG preview could not be turned into a PNG
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// The caller asked for an idea which wasn't generated
    #[error("Idea {index} is out of range (only {len} ideas were generated)")]
    IdeaOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Helper to attach the offending path to an [`std::io::Error`]
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
