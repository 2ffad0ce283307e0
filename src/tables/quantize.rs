//! Truncation of growth factors to fixed-denominator rationals

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

/// Denominator shared by every table entry (six decimal digits)
pub const DENOMINATOR: u128 = 1_000_000;

/// `numerator / DENOMINATOR`, with the numerator floored from a float
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RationalApprox {
    numerator: u128,
    denominator: u128,
}

impl RationalApprox {
    /// Quantize `value` as `floor(value * 1_000_000) / 1_000_000`
    ///
    /// Returns `None` when the scaled value is negative, not finite, or does
    /// not fit in a `u128`.
    pub fn from_f64(value: f64) -> Option<Self> {
        let scaled = (value * DENOMINATOR as f64).floor();
        // u128::MAX rounds up to exactly 2^128
        if !scaled.is_finite() || scaled < 0.0 || scaled >= u128::MAX as f64 {
            return None;
        }
        Some(Self {
            numerator: scaled as u128,
            denominator: DENOMINATOR,
        })
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Unreduced ratio, matching the `new_raw` literal the renderer emits
    pub fn to_ratio(&self) -> Ratio<u128> {
        Ratio::new_raw(self.numerator, self.denominator)
    }
}
