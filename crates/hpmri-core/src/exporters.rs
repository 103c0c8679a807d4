//! Artifact encoders
//!
//! Rendered slices leave the core as encoded PNG byte streams, produced
//! fresh per request and never cached.

use std::io::Cursor;

use image::{GrayImage, ImageFormat};

use crate::error::{ProcessingError, Result};
use crate::pipeline::RenderedSlice;

/// Encode a rendered slice as an 8-bit grayscale PNG byte stream.
pub fn encode_png(slice: &RenderedSlice) -> Result<Vec<u8>> {
    let image =
        GrayImage::from_raw(slice.width, slice.height, slice.pixels.clone()).ok_or_else(|| {
            ProcessingError::Encode(format!(
                "pixel buffer does not match {}x{} raster",
                slice.width, slice.height
            ))
        })?;

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| ProcessingError::Encode(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_round_trips_dimensions() {
        let slice = RenderedSlice {
            width: 3,
            height: 2,
            pixels: vec![0, 64, 128, 192, 255, 13],
        };

        let bytes = encode_png(&slice).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn encode_png_rejects_mismatched_buffer() {
        let slice = RenderedSlice {
            width: 4,
            height: 4,
            pixels: vec![0; 3],
        };
        assert!(matches!(
            encode_png(&slice),
            Err(ProcessingError::Encode(_))
        ));
    }
}
