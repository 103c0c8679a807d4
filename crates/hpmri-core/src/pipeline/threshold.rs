//! Dynamic EPSI threshold filter
//!
//! The threshold is operator-adjustable per view, so the filter is applied
//! fresh on every request against the unmodified decoded series; the stored
//! data is never mutated.

/// Zero every sample strictly below `threshold`; samples at or above it
/// pass through unchanged, which makes the filter idempotent.
pub fn apply_threshold(series: &[f32], threshold: f32) -> Vec<f32> {
    series
        .iter()
        .map(|&v| if v < threshold { 0.0 } else { v })
        .collect()
}
