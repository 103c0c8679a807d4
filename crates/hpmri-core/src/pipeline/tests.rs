//! Tests for the slice processing pipeline

use super::*;
use approx::assert_relative_eq;
use crate::decoders::SliceImage;
use crate::models::ProcessingParams;

// ========================================================================
// Normalization
// ========================================================================

#[test]
fn flat_slice_normalizes_to_all_zero() {
    let out = normalize_slice(&[7.0; 16]);
    assert_eq!(out.len(), 16);
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn all_noise_slice_normalizes_to_all_zero() {
    // Everything below the raw noise floor collapses to a flat zero slice
    let out = normalize_slice(&[1.0, 2.0, 3.0, 4.9]);
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn empty_slice_normalizes_to_empty() {
    assert!(normalize_slice(&[]).is_empty());
}

#[test]
fn normalization_maps_observed_range_to_unit_interval() {
    let out = normalize_slice(&[0.0, 128.0, 255.0]);
    assert_eq!(out[0], 0.0);
    assert_relative_eq!(out[1], 128.0 / 255.0, epsilon = 1e-6);
    assert_eq!(out[2], 1.0);
}

#[test]
fn relative_floor_suppresses_residual_noise() {
    // 10/255 ≈ 0.039 is above the raw floor but below the relative floor
    let out = normalize_slice(&[0.0, 10.0, 255.0]);
    assert_eq!(out[1], 0.0);
}

#[test]
fn raw_floor_applies_before_rescaling() {
    // The post-suppression minimum (0 after clipping 3.0) maps to 0,
    // so the surviving value maps by v/max rather than (v-min)/(max-min)
    let out = normalize_slice(&[3.0, 100.0, 200.0]);
    assert_eq!(out[0], 0.0);
    assert_relative_eq!(out[1], 0.5, epsilon = 1e-6);
    assert_eq!(out[2], 1.0);
}

// ========================================================================
// Threshold filter
// ========================================================================

#[test]
fn threshold_zeroes_samples_strictly_below() {
    let out = apply_threshold(&[0.1, 0.2, 0.19999, 0.5], 0.2);
    assert_eq!(out, vec![0.0, 0.2, 0.0, 0.5]);
}

#[test]
fn threshold_is_idempotent() {
    let series = [0.05, 0.2, 0.31, 0.0, 0.9];
    let once = apply_threshold(&series, 0.3);
    let twice = apply_threshold(&once, 0.3);
    assert_eq!(once, twice);
}

#[test]
fn threshold_is_monotonic_in_t() {
    let series = [0.1, 0.25, 0.4, 0.55, 0.7, 0.85];
    let mut previous_nonzero = usize::MAX;
    for t in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
        let nonzero = apply_threshold(&series, t)
            .iter()
            .filter(|&&v| v != 0.0)
            .count();
        assert!(nonzero <= previous_nonzero);
        previous_nonzero = nonzero;
    }
}

// ========================================================================
// Contrast enhancement
// ========================================================================

fn gradient(width: usize, height: usize) -> Vec<f32> {
    (0..width * height).map(|i| (i % 256) as f32).collect()
}

#[test]
fn zero_contrast_is_exact_passthrough() {
    let normalized = normalize_slice(&gradient(32, 32));
    let expected: Vec<u8> = normalized
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();
    assert_eq!(enhance_slice(&normalized, 32, 32, 0.0), expected);
    assert_eq!(enhance_slice(&normalized, 32, 32, -1.0), expected);
}

#[test]
fn enhancement_does_not_resurrect_suppressed_noise() {
    let normalized = normalize_slice(&gradient(32, 32));
    let enhanced = enhance_slice(&normalized, 32, 32, 2.0);
    // Every output pixel is either zero or at/above both floors
    let floor_8bit = (NOISE_FLOOR_RELATIVE * 255.0).ceil() as u8;
    assert!(enhanced.iter().all(|&p| p == 0 || p >= floor_8bit));
}

#[test]
fn enhancement_preserves_dimensions() {
    let normalized = normalize_slice(&gradient(40, 24));
    let enhanced = enhance_slice(&normalized, 40, 24, 1.0);
    assert_eq!(enhanced.len(), 40 * 24);
}

#[test]
fn identical_rows_equalize_identically_on_uneven_dimensions() {
    // 49 rows split into 7-row tiles occupy only 7 grid rows; an 8th,
    // empty tile row must not bleed a zero CDF into the bottom border
    let width = 49usize;
    let height = 49usize;
    let row: Vec<f32> = (0..width).map(|c| c as f32 / (width - 1) as f32).collect();
    let normalized: Vec<f32> = (0..height).flat_map(|_| row.iter().copied()).collect();

    let enhanced = enhance_slice(&normalized, width as u32, height as u32, 2.0);

    let mid = &enhanced[(height / 2) * width..(height / 2 + 1) * width];
    assert_eq!(&enhanced[..width], mid);
    assert_eq!(&enhanced[(height - 1) * width..], mid);
}

#[test]
fn enhancement_handles_all_zero_slice() {
    let enhanced = enhance_slice(&[0.0; 64], 8, 8, 1.0);
    assert!(enhanced.iter().all(|&p| p == 0));
}

// ========================================================================
// Full pipeline
// ========================================================================

#[test]
fn render_slice_produces_8bit_raster() {
    let image = SliceImage {
        width: 16,
        height: 16,
        data: gradient(16, 16),
    };
    let rendered = render_slice(image, &ProcessingParams::default());
    assert_eq!(rendered.width, 16);
    assert_eq!(rendered.height, 16);
    assert_eq!(rendered.pixels.len(), 256);
}

#[test]
fn render_slice_of_flat_acquisition_is_black() {
    let image = SliceImage {
        width: 8,
        height: 8,
        data: vec![42.0; 64],
    };
    let rendered = render_slice(image, &ProcessingParams::default());
    assert!(rendered.pixels.iter().all(|&p| p == 0));
}
