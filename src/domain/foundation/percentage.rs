//! Percentage value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A share between 0 and 100 inclusive.
///
/// Balance math works in floating point, so this carries an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Fifty percent, the neutral share.
    pub const HALF: Self = Self(50.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Percentage, clamping to valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Builds the share `part / total`, or None when total is zero.
    ///
    /// Divides before scaling: `100 × (part / total)` rather than
    /// `(100 × part) / total`. The two can differ in the last bit, and this
    /// order keeps `part == total / 2` at exactly 50.
    pub fn of(part: f64, total: f64) -> Option<Self> {
        if total > 0.0 {
            Some(Self::new(100.0 * (part / total)))
        } else {
            None
        }
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the remaining share (100 - self).
    pub fn complement(&self) -> Self {
        Self::new(100.0 - self.0)
    }

    /// Absolute distance from the even 50% split.
    pub fn distance_from_even(&self) -> f64 {
        (self.0 - 50.0).abs()
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
