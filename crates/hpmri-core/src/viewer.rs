//! Viewer-facing operations
//!
//! The logical operations a request-handling layer invokes: render a frame,
//! count available frames, and fetch thresholded EPSI data (plus
//! [`crate::storage::store_acquisition`] for uploads). Each call dispatches
//! to the magnet's store adapter, processes request-local buffers, and
//! returns a transient artifact; nothing is cached or retried, since
//! acquisition files are static and a failure cannot change on retry.

use crate::config::AcquisitionConfig;
use crate::error::Result;
use crate::exporters;
use crate::magnets::{store_for, MagnetType};
use crate::models::ProcessingParams;
use crate::pipeline::{apply_threshold, render_slice};

/// Render the frame at `index` as an 8-bit grayscale PNG byte stream.
pub fn render_picture(
    config: &AcquisitionConfig,
    magnet: MagnetType,
    index: usize,
    params: &ProcessingParams,
) -> Result<Vec<u8>> {
    let store = store_for(magnet, config);
    let image = store.decode_image(index)?;
    log::debug!(
        "rendering {} frame {} ({}x{}, contrast {})",
        magnet.as_str(),
        index,
        image.width,
        image.height,
        params.contrast
    );
    let rendered = render_slice(image, params);
    exporters::encode_png(&rendered)
}

/// Number of frames available for a magnet; zero means "no data".
pub fn frame_count(config: &AcquisitionConfig, magnet: MagnetType) -> usize {
    store_for(magnet, config).count()
}

/// Thresholded EPSI series for dataset `index`.
///
/// Magnets without spectroscopic capability yield an empty series.
pub fn thresholded_spectrum(
    config: &AcquisitionConfig,
    magnet: MagnetType,
    index: usize,
    params: &ProcessingParams,
) -> Result<Vec<f32>> {
    let store = store_for(magnet, config);
    let series = store.decode_spectrum(index)?;
    Ok(apply_threshold(&series, params.threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::error::ProcessingError;
    use crate::test_utils::{config_with_hupc_root, write_test_dicom};

    #[test]
    fn render_valid_frame_returns_png_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_hupc_root(dir.path());
        let pixels: Vec<u16> = (0..256).collect();
        write_test_dicom(
            &dir.path().join(config.hupc.images.filename(3)),
            16,
            16,
            &pixels,
        );

        let png = render_picture(
            &config,
            MagnetType::Hupc,
            3,
            &ProcessingParams::default(),
        )
        .unwrap();
        assert_eq!(&png[..4], b"\x89PNG");

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn render_missing_frame_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_hupc_root(dir.path());

        let result = render_picture(
            &config,
            MagnetType::Hupc,
            15,
            &ProcessingParams::default(),
        );
        assert!(matches!(
            result,
            Err(ProcessingError::NotFound { index: 15, .. })
        ));
    }

    #[test]
    fn frame_count_of_empty_store_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_hupc_root(dir.path());
        assert_eq!(frame_count(&config, MagnetType::Hupc), 0);
    }

    #[test]
    fn clinical_spectrum_request_yields_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_hupc_root(dir.path());
        let series = thresholded_spectrum(
            &config,
            MagnetType::Clinical,
            0,
            &ProcessingParams::default(),
        )
        .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn hupc_spectrum_is_thresholded() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_hupc_root(dir.path());
        fs::write(
            dir.path().join(config.hupc.spectra.filename(0)),
            "0.1\n0.25\n0.4\n0.9\n",
        )
        .unwrap();

        // 0.25 survives the default threshold but not the requested one
        let params = ProcessingParams {
            threshold: 0.3,
            ..Default::default()
        };
        let series = thresholded_spectrum(&config, MagnetType::Hupc, 0, &params).unwrap();
        assert_eq!(series, vec![0.0, 0.0, 0.4, 0.9]);
    }
}
