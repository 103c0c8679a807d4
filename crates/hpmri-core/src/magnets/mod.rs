//! Per-magnet acquisition store adapters
//!
//! Each magnet backend (HUPC, Clinical, MR Solutions) owns its own
//! file-naming and indexing convention; the adapter is the only place that
//! convention is encoded. All adapters present the same three-operation
//! contract, so the dispatcher routes by magnet type without caring which
//! hardware produced the data. Adding a backend means adding a variant and
//! an adapter, not growing a conditional chain.

mod clinical;
mod hupc;
mod mr_solutions;


pub use clinical::ClinicalStore;
pub use hupc::HupcStore;
pub use mr_solutions::MrSolutionsStore;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::{AcquisitionConfig, FilePattern};
use crate::decoders::SliceImage;
use crate::error::{ProcessingError, Result};

/// Magnet hardware backend discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnetType {
    #[default]
    Hupc,
    Clinical,
    MrSolutions,
}

impl MagnetType {
    /// Wire name used by viewing clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            MagnetType::Hupc => "HUPC",
            MagnetType::Clinical => "Clinical",
            MagnetType::MrSolutions => "MR Solutions",
        }
    }
}

impl FromStr for MagnetType {
    type Err = ProcessingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "HUPC" => Ok(MagnetType::Hupc),
            "Clinical" => Ok(MagnetType::Clinical),
            "MR Solutions" => Ok(MagnetType::MrSolutions),
            other => Err(ProcessingError::InvalidMagnet(other.to_string())),
        }
    }
}

/// Uniform contract over one magnet's acquisition store.
///
/// Acquisition files are written by export tooling outside this system and
/// are read-only here; adapters hold no mutable state, so one store may
/// serve any number of concurrent requests.
pub trait AcquisitionStore {
    /// Decode the raw intensity matrix of the image frame at `index`.
    fn decode_image(&self, index: usize) -> Result<SliceImage>;

    /// Decode the raw EPSI spectral series for dataset `index`.
    ///
    /// Magnets without spectroscopic capability return an empty series;
    /// callers treat absence as a valid answer, not an error.
    fn decode_spectrum(&self, index: usize) -> Result<Vec<f32>>;

    /// Number of available frames. Zero means "no data", never an error.
    fn count(&self) -> usize;
}

/// Select the store adapter for a magnet type.
pub fn store_for(magnet: MagnetType, config: &AcquisitionConfig) -> Box<dyn AcquisitionStore> {
    match magnet {
        MagnetType::Hupc => Box::new(HupcStore::new(config.hupc.clone())),
        MagnetType::Clinical => Box::new(ClinicalStore::new(config.clinical.clone())),
        MagnetType::MrSolutions => Box::new(MrSolutionsStore::new(config.mr_solutions.clone())),
    }
}

/// Resolve an indexed file against a store; absent file is NotFound.
pub(crate) fn resolve_frame(root: &Path, pattern: &FilePattern, index: usize) -> Result<PathBuf> {
    let path = root.join(pattern.filename(index));
    if path.is_file() {
        Ok(path)
    } else {
        Err(ProcessingError::NotFound { index, path })
    }
}

/// Count files in `root` carrying the pattern's extension.
///
/// A missing or unreadable store root counts as zero frames: the store may
/// simply not be provisioned for this magnet yet.
pub(crate) fn count_frames(root: &Path, pattern: &FilePattern) -> usize {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("acquisition store {} is unreadable: {}", root.display(), e);
            return 0;
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(pattern.extension()))
                .unwrap_or(false)
        })
        .count()
}
