//! DICOM slice decoder
//!
//! Reads the tags needed to interpret PixelData as a 2-D intensity matrix:
//! Rows, Columns, BitsAllocated, PixelRepresentation. Modality rescale
//! (slope/intercept) is not applied; raw stored values feed the normalizer,
//! which rescales against the slice's own observed range anyway.

use std::path::Path;

use dicom::core::Tag;
use dicom::dictionary_std::tags;
use dicom::object::DefaultDicomObject;

use super::SliceImage;
use crate::error::{ProcessingError, Result};

pub(crate) fn decode_dicom<P: AsRef<Path>>(path: P) -> Result<SliceImage> {
    let path = path.as_ref();
    let obj = dicom::object::open_file(path)
        .map_err(|e| decode_err(path, format!("DICOM parse error: {}", e)))?;

    let height = tag_u32(&obj, path, tags::ROWS)?;
    let width = tag_u32(&obj, path, tags::COLUMNS)?;
    let bits_allocated = tag_u32(&obj, path, tags::BITS_ALLOCATED)?;
    // 0 = unsigned, 1 = two's complement; some exports omit the tag
    let signed = tag_u32(&obj, path, tags::PIXEL_REPRESENTATION).unwrap_or(0) == 1;

    let pixel_count = width as usize * height as usize;
    if pixel_count == 0 {
        return Err(decode_err(path, "zero-sized image".to_string()));
    }

    let element = obj
        .element(tags::PIXEL_DATA)
        .map_err(|_| decode_err(path, "no PixelData element".to_string()))?;
    let bytes = element
        .to_bytes()
        .map_err(|e| decode_err(path, format!("unreadable PixelData: {}", e)))?;

    let data: Vec<f32> = match bits_allocated {
        8 => {
            if bytes.len() < pixel_count {
                return Err(short_pixel_data(path, bytes.len(), pixel_count));
            }
            bytes[..pixel_count].iter().map(|&b| b as f32).collect()
        }
        16 => {
            if bytes.len() < pixel_count * 2 {
                return Err(short_pixel_data(path, bytes.len(), pixel_count * 2));
            }
            bytes[..pixel_count * 2]
                .chunks_exact(2)
                .map(|pair| {
                    let raw = u16::from_le_bytes([pair[0], pair[1]]);
                    if signed {
                        raw as i16 as f32
                    } else {
                        raw as f32
                    }
                })
                .collect()
        }
        other => {
            return Err(decode_err(
                path,
                format!("unsupported BitsAllocated: {}", other),
            ))
        }
    };

    log::debug!(
        "decoded DICOM slice {}: {}x{}, {} bits",
        path.display(),
        width,
        height,
        bits_allocated
    );

    Ok(SliceImage {
        width,
        height,
        data,
    })
}

fn tag_u32(obj: &DefaultDicomObject, path: &Path, tag: Tag) -> Result<u32> {
    let element = obj
        .element(tag)
        .map_err(|_| decode_err(path, format!("tag {} not found", tag)))?;
    element
        .to_int::<u32>()
        .map_err(|e| decode_err(path, format!("tag {} not an integer: {}", tag, e)))
}

fn short_pixel_data(path: &Path, got: usize, expected: usize) -> ProcessingError {
    decode_err(
        path,
        format!("PixelData too short: {} bytes, expected {}", got, expected),
    )
}

fn decode_err(path: &Path, detail: String) -> ProcessingError {
    ProcessingError::Decode {
        path: path.to_path_buf(),
        detail,
    }
}
