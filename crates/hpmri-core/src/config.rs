//! Acquisition store configuration.
//!
//! Every adapter receives an explicit layout at construction: a store root
//! plus the file-naming pattern that magnet's export tooling uses; nothing
//! else in the crate knows where acquisition files live.
//! Configuration is loaded from a YAML file when one is found, falling back
//! to built-in defaults; load problems are collected as warnings and never
//! abort a request.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Candidate config file names searched in the working directory.
const CONFIG_FILENAMES: &[&str] = &["acquisition.yml", "acquisition.yaml"];

/// Zero-padded file-naming convention: `{prefix}{index:0width}{suffix}`.
///
/// e.g. HUPC proton frames are `slice003image001echo001.dcm` for index 3.
#[derive(Debug, Clone, Deserialize)]
pub struct FilePattern {
    pub prefix: String,
    pub index_width: usize,
    /// Remainder of the name after the index, including the extension.
    pub suffix: String,
}

impl FilePattern {
    pub fn new(prefix: &str, index_width: usize, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            index_width,
            suffix: suffix.to_string(),
        }
    }

    /// File name for a frame index.
    pub fn filename(&self, index: usize) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            self.suffix,
            width = self.index_width
        )
    }

    /// Extension (without the dot) used when counting files in a store.
    pub fn extension(&self) -> &str {
        self.suffix.rsplit('.').next().unwrap_or("")
    }
}

/// Layout of one magnet's acquisition store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreLayout {
    /// Directory holding this magnet's acquisition files.
    pub root: PathBuf,
    /// Naming convention for image frames.
    pub images: FilePattern,
    /// Naming convention for EPSI spectral datasets.
    /// Unused by magnets without spectroscopic capability.
    pub spectra: FilePattern,
}

/// Complete acquisition store configuration, one layout per magnet.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    pub hupc: StoreLayout,
    pub clinical: StoreLayout,
    pub mr_solutions: StoreLayout,
    /// Destination directory for raw acquisition uploads.
    pub upload_dir: PathBuf,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            hupc: StoreLayout {
                root: PathBuf::from("data/hupc/proton"),
                images: FilePattern::new("slice", 3, "image001echo001.dcm"),
                spectra: FilePattern::new("epsi_", 5, ".csv"),
            },
            clinical: StoreLayout {
                root: PathBuf::from("data/clinical/proton"),
                images: FilePattern::new("clinical_", 5, ".dcm"),
                spectra: FilePattern::new("epsi_", 5, ".csv"),
            },
            mr_solutions: StoreLayout {
                root: PathBuf::from("data/mrs/proton/1"),
                images: FilePattern::new("5091_", 5, ".dcm"),
                spectra: FilePattern::new("epsi_", 5, ".csv"),
            },
            upload_dir: PathBuf::from("data/uploads"),
        }
    }
}

/// Loaded configuration with its source path and any warnings raised
/// while reading it.
pub struct ConfigHandle {
    pub config: AcquisitionConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Candidates are tried in order; the first file that parses wins. When no
/// candidate parses, built-in defaults are returned together with warnings
/// describing what went wrong.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.is_file() {
            if custom_path == Some(candidate.as_path()) {
                warnings.push(format!(
                    "Config file {} does not exist",
                    candidate.display()
                ));
            }
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<AcquisitionConfig>(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ConfigHandle {
                        config,
                        source: Some(source),
                        warnings,
                    };
                }
                Err(e) => {
                    warnings.push(format!("Failed to parse {}: {}", candidate.display(), e));
                }
            },
            Err(e) => {
                warnings.push(format!("Failed to read {}: {}", candidate.display(), e));
            }
        }
    }

    ConfigHandle {
        config: AcquisitionConfig::default(),
        source: None,
        warnings,
    }
}

fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }
    for name in CONFIG_FILENAMES {
        candidates.push(PathBuf::from(name));
    }
    candidates
}
