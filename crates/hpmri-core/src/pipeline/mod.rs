//! Slice processing pipeline
//!
//! Numeric processing between a decoded acquisition and its display
//! artifact. The image path runs denoise → min-max normalization → CLAHE →
//! floor re-application and yields an 8-bit single-channel raster; the
//! spectral path applies the operator's dynamic threshold.
//!
//! Everything here operates on freshly decoded, request-local buffers, so
//! concurrent requests need no coordination.

mod clahe;
mod normalize;
mod threshold;

#[cfg(test)]
mod tests;

pub use clahe::enhance_slice;
pub use normalize::{normalize_slice, NOISE_FLOOR_RAW, NOISE_FLOOR_RELATIVE};
pub use threshold::apply_threshold;

use crate::decoders::SliceImage;
use crate::models::ProcessingParams;

/// Result of rendering one acquisition frame
#[derive(Debug, Clone)]
pub struct RenderedSlice {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Row-major single-channel 8-bit values
    pub pixels: Vec<u8>,
}

/// Run the full image pipeline over a decoded slice.
pub fn render_slice(image: SliceImage, params: &ProcessingParams) -> RenderedSlice {
    let normalized = normalize_slice(&image.data);
    let pixels = enhance_slice(&normalized, image.width, image.height, params.contrast);
    RenderedSlice {
        width: image.width,
        height: image.height,
        pixels,
    }
}
