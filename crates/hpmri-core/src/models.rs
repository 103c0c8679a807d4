//! Request-scoped processing parameters
//!
//! Parameters arrive with each viewing request (typically parsed from JSON
//! by the transport collaborator) and carry no state between requests.

use serde::Deserialize;

/// Per-request processing parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    /// CLAHE clip limit; larger means a stronger local contrast boost.
    /// Non-positive disables enhancement.
    pub contrast: f32,

    /// EPSI display threshold; samples strictly below it are suppressed.
    pub threshold: f32,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            threshold: 0.2,
        }
    }
}
