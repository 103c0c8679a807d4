//! Raw acquisition upload pass-through
//!
//! Stores uploaded acquisition files under the configured upload directory.
//! This is a collaborator convenience, not core processing: the file is
//! written as-is and becomes visible to the magnet adapters only if it lands
//! in a store root with a matching naming convention.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::AcquisitionConfig;
use crate::error::{ProcessingError, Result};

/// Store an uploaded acquisition file under the upload directory.
///
/// The target name is reduced to its final path component so a client
/// cannot write outside the upload root.
pub fn store_acquisition(
    config: &AcquisitionConfig,
    name: &str,
    contents: &[u8],
) -> Result<PathBuf> {
    let filename = sanitize_name(name).ok_or_else(|| ProcessingError::Io {
        path: config.upload_dir.clone(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("unusable upload name: {:?}", name),
        ),
    })?;

    fs::create_dir_all(&config.upload_dir).map_err(|e| ProcessingError::Io {
        path: config.upload_dir.clone(),
        source: e,
    })?;

    let path = config.upload_dir.join(filename);
    fs::write(&path, contents).map_err(|e| ProcessingError::Io {
        path: path.clone(),
        source: e,
    })?;

    log::info!("stored acquisition file {}", path.display());
    Ok(path)
}

/// Final normal path component of `name`, or None when nothing usable
/// remains (empty names, bare separators, `..`).
fn sanitize_name(name: &str) -> Option<String> {
    Path::new(name)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .next_back()
        .map(|s| s.to_string())
}
