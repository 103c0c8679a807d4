//! Contrast-limited adaptive histogram equalization
//!
//! Localized contrast enhancement over a fixed 8×8 tile grid with 256 bins.
//! Per-tile histograms are clipped at a limit proportional to the operator's
//! contrast strength, the clipped excess is redistributed uniformly, and
//! each pixel samples the four neighboring tile CDFs with bilinear
//! interpolation.
//!
//! A non-positive contrast strength disables enhancement entirely and
//! passes the quantized normalized image through unchanged; a zero clip
//! limit would degrade the equalization into hard banding.

use rayon::prelude::*;

use super::normalize::{NOISE_FLOOR_RELATIVE, PARALLEL_THRESHOLD};

const TILES_X: usize = 8;
const TILES_Y: usize = 8;
const NUM_BINS: usize = 256;

/// Absolute floor re-applied on the 8-bit scale after equalization.
const NOISE_FLOOR_8BIT: u8 = 5;

/// Enhance a normalized [0,1] slice into a displayable 8-bit raster.
///
/// Equalization can resurrect noise that normalization suppressed, so both
/// floors (absolute on the 8-bit scale, then relative after rescale back to
/// [0,1]) are applied again on the way out.
pub fn enhance_slice(normalized: &[f32], width: u32, height: u32, contrast: f32) -> Vec<u8> {
    let quantized: Vec<u8> = normalized
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();

    if contrast <= 0.0 {
        // No-enhancement pass-through
        return quantized;
    }
    if quantized.iter().all(|&v| v == 0) {
        // Flat or fully suppressed slice: no signal to amplify, and
        // equalizing it would lift the background to mid-gray
        return quantized;
    }

    let equalized = clahe(&quantized, width as usize, height as usize, contrast);

    equalized
        .into_iter()
        .map(|v| {
            let v = if v < NOISE_FLOOR_8BIT { 0 } else { v };
            if (v as f32 / 255.0) < NOISE_FLOOR_RELATIVE {
                0
            } else {
                v
            }
        })
        .collect()
}

/// CLAHE over an 8-bit image.
///
/// `clip_limit` is a multiplier of the average per-bin count of each tile's
/// histogram.
fn clahe(pixels: &[u8], cols: usize, rows: usize, clip_limit: f32) -> Vec<u8> {
    if rows == 0 || cols == 0 || pixels.len() != rows * cols {
        return pixels.to_vec();
    }

    let tile_h = rows.div_ceil(TILES_Y);
    let tile_w = cols.div_ceil(TILES_X);

    // Ceiling-sized tiles can leave the last grid row or column empty
    // (e.g. 49 rows split into 7-row tiles fill only 7 of 8). An empty
    // tile has an all-zero CDF, and interpolating border pixels against
    // it darkens the image edge, so the grid only counts occupied tiles.
    let tiles_y = rows.div_ceil(tile_h);
    let tiles_x = cols.div_ceil(tile_w);

    // Per-tile clipped CDFs, normalized to [0,1]
    let mut cdfs: Vec<Vec<f32>> = vec![vec![0.0; NUM_BINS]; tiles_x * tiles_y];

    for ty in 0..tiles_y {
        let r0 = ty * tile_h;
        let r1 = ((ty + 1) * tile_h).min(rows);
        for tx in 0..tiles_x {
            let c0 = tx * tile_w;
            let c1 = ((tx + 1) * tile_w).min(cols);

            let mut hist = vec![0u32; NUM_BINS];
            for r in r0..r1 {
                for c in c0..c1 {
                    hist[pixels[r * cols + c] as usize] += 1;
                }
            }

            let tile_pixels = r1.saturating_sub(r0) * c1.saturating_sub(c0);
            clip_histogram(&mut hist, clip_limit, tile_pixels);

            let total: f32 = hist.iter().map(|&h| h as f32).sum::<f32>().max(1.0);
            let mut acc = 0.0f32;
            let cdf = &mut cdfs[ty * tiles_x + tx];
            for (bin, &count) in hist.iter().enumerate() {
                acc += count as f32;
                cdf[bin] = (acc / total).clamp(0.0, 1.0);
            }
        }
    }

    let equalize_row = |r: usize, row_out: &mut [u8]| {
        let rf = r as f32 / tile_h as f32 - 0.5;
        let ty0f = rf.floor();
        let dy = (rf - ty0f).clamp(0.0, 1.0);
        let ty0 = (ty0f as isize).clamp(0, tiles_y as isize - 1) as usize;
        let ty1 = (ty0f as isize + 1).clamp(0, tiles_y as isize - 1) as usize;

        for (c, out) in row_out.iter_mut().enumerate() {
            let cf = c as f32 / tile_w as f32 - 0.5;
            let tx0f = cf.floor();
            let dx = (cf - tx0f).clamp(0.0, 1.0);
            let tx0 = (tx0f as isize).clamp(0, tiles_x as isize - 1) as usize;
            let tx1 = (tx0f as isize + 1).clamp(0, tiles_x as isize - 1) as usize;

            let bin = pixels[r * cols + c] as usize;
            let cdf00 = cdfs[ty0 * tiles_x + tx0][bin];
            let cdf01 = cdfs[ty0 * tiles_x + tx1][bin];
            let cdf10 = cdfs[ty1 * tiles_x + tx0][bin];
            let cdf11 = cdfs[ty1 * tiles_x + tx1][bin];

            let top = cdf00 * (1.0 - dx) + cdf01 * dx;
            let bottom = cdf10 * (1.0 - dx) + cdf11 * dx;
            let value = top * (1.0 - dy) + bottom * dy;

            *out = (value * 255.0).round() as u8;
        }
    };

    let mut out = vec![0u8; pixels.len()];
    if pixels.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, row)| equalize_row(r, row));
    } else {
        for (r, row) in out.chunks_mut(cols).enumerate() {
            equalize_row(r, row);
        }
    }

    out
}

/// Clip a tile histogram at `clip_limit` times the average per-bin count
/// and redistribute the excess uniformly across all bins.
fn clip_histogram(hist: &mut [u32], clip_limit: f32, tile_pixels: usize) {
    let average = tile_pixels as f32 / NUM_BINS as f32;
    let threshold = (clip_limit * average).max(1.0);

    let mut excess = 0.0f32;
    for count in hist.iter_mut() {
        if (*count as f32) > threshold {
            excess += *count as f32 - threshold;
            *count = threshold as u32;
        }
    }

    if excess <= 0.0 {
        return;
    }

    let add_per_bin = (excess / NUM_BINS as f32).floor();
    let mut remainder = (excess - add_per_bin * NUM_BINS as f32).round() as usize;
    for count in hist.iter_mut() {
        *count += add_per_bin as u32;
    }
    let mut bin = 0;
    while remainder > 0 {
        hist[bin] += 1;
        bin = (bin + 1) % NUM_BINS;
        remainder -= 1;
    }
}
