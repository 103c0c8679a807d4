//! Slice normalization
//!
//! Maps raw scanner intensities into [0,1]: sub-noise-floor values are
//! zeroed, the remaining range is rescaled so the observed minimum lands on
//! 0 and the maximum on 1, and a relative floor removes residual low-level
//! noise. A flat slice (min == max) normalizes to all zeros rather than
//! dividing by zero: a valid, if uninformative, acquisition state.

use rayon::prelude::*;

/// Raw intensities below this are treated as scanner noise.
pub const NOISE_FLOOR_RAW: f32 = 5.0;

/// Normalized values below this are suppressed.
pub const NOISE_FLOOR_RELATIVE: f32 = 0.05;

/// Use parallel pixel maps above this pixel count.
pub(crate) const PARALLEL_THRESHOLD: usize = 100_000;

/// Normalize a raw intensity matrix to [0,1].
pub fn normalize_slice(data: &[f32]) -> Vec<f32> {
    let mut out: Vec<f32> = data
        .iter()
        .map(|&v| if v < NOISE_FLOOR_RAW { 0.0 } else { v })
        .collect();

    let (min, max) = min_max(&out);
    if min >= max {
        // Flat slice: defined as all-zero output
        for value in out.iter_mut() {
            *value = 0.0;
        }
        return out;
    }

    let range = max - min;
    let rescale = move |v: f32| {
        let normalized = (v - min) / range;
        if normalized < NOISE_FLOOR_RELATIVE {
            0.0
        } else {
            normalized
        }
    };

    if out.len() >= PARALLEL_THRESHOLD {
        out.par_iter_mut().for_each(|v| *v = rescale(*v));
    } else {
        for value in out.iter_mut() {
            *value = rescale(*value);
        }
    }

    out
}

fn min_max(data: &[f32]) -> (f32, f32) {
    if data.is_empty() {
        return (0.0, 0.0);
    }

    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for &value in data {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}
