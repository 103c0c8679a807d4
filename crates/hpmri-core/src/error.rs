//! Error types for acquisition processing.
//!
//! Each failure mode a caller may branch on gets its own variant. Numeric
//! edge cases (flat slices, non-positive contrast) are handled inside the
//! pipeline with defined fallbacks and never surface here; a magnet without
//! spectroscopic capability answers with an empty series, not an error.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

/// Failure modes of the acquisition processing core.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Magnet discriminator not one of the recognized set.
    /// Client error, reported before any file I/O is attempted.
    #[error("invalid magnet type: {0:?}")]
    InvalidMagnet(String),

    /// No acquisition file corresponds to the requested frame index.
    #[error("no acquisition file for index {index}: {}", path.display())]
    NotFound { index: usize, path: PathBuf },

    /// The acquisition file exists but could not be parsed.
    #[error("failed to decode {}: {detail}", path.display())]
    Decode { path: PathBuf, detail: String },

    /// Encoding the rendered raster into an image artifact failed.
    #[error("failed to encode image artifact: {0}")]
    Encode(String),

    /// Filesystem error outside decoding (e.g. storing an upload).
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
