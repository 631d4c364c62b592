#![warn(missing_docs)]
use crate::error::{OptiResult, OptiSimError};
use serde::{Deserialize, Serialize};

/// Default minimum distance between two elements (or an element and the light source) on the axis.
pub const DEFAULT_MIN_SEPARATION: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Structure handling system wide settings
pub struct SystemSettings {
    min_separation: f64,
}
impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }
}
impl SystemSettings {
    /// Creates new [`SystemSettings`] with the given minimum separation.
    ///
    /// # Errors
    ///
    /// This function returns an error if `min_separation` is negative or not finite.
    pub fn new(min_separation: f64) -> OptiResult<Self> {
        if min_separation.is_finite() && min_separation >= 0.0 {
            Ok(Self { min_separation })
        } else {
            Err(OptiSimError::Configuration(format!(
                "minimum separation must be >= 0.0 and finite, got {min_separation}"
            )))
        }
    }
    /// Returns the minimum separation of these [`SystemSettings`].
    #[must_use]
    pub const fn min_separation(&self) -> f64 {
        self.min_separation
    }
    /// Returns `true` if two axial positions are closer than the minimum separation.
    #[must_use]
    pub fn collide(&self, x1: f64, x2: f64) -> bool {
        (x1 - x2).abs() < self.min_separation
    }
}
