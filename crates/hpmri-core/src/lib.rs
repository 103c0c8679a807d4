//! HP-MRI Core Library
//!
//! Core functionality for the hyperpolarized-MRI slice viewer: locating and
//! decoding acquisition files for each magnet backend (HUPC, Clinical,
//! MR Solutions), normalizing and enhancing image slices for display, and
//! thresholding EPSI spectral data for plotting.
//!
//! The request-handling layer (HTTP or otherwise) is an external
//! collaborator; it invokes the operations in [`viewer`] and maps their
//! results and errors onto a transport.

pub mod config;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod magnets;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod viewer;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::{AcquisitionConfig, ConfigHandle, FilePattern, StoreLayout};
pub use decoders::SliceImage;
pub use error::{ProcessingError, Result};
pub use magnets::{store_for, AcquisitionStore, MagnetType};
pub use models::ProcessingParams;
pub use pipeline::RenderedSlice;
pub use storage::store_acquisition;
pub use viewer::{frame_count, render_picture, thresholded_spectrum};
