//! Generator parameters
//!
//! The annual factor always comes from [`DEFAULT_ANNUAL_FACTOR`] in the shipped
//! binaries; the remaining fields only affect how literals are spelled.

use super::{GrowthFactors, DEFAULT_ANNUAL_FACTOR};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Parameters for generating and rendering the tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Annual growth factor (1.1 = +10%/year)
    #[serde(default = "default_annual_factor")]
    pub annual_factor: f64,

    /// Element type written into each array declaration
    #[serde(default = "default_ratio_type")]
    pub ratio_type: String,

    /// Constructor called with `(numerator, denominator)` for each element
    #[serde(default = "default_ratio_constructor")]
    pub ratio_constructor: String,
}

fn default_annual_factor() -> f64 { DEFAULT_ANNUAL_FACTOR }
fn default_ratio_type() -> String { "Ratio<u128>".to_string() }
fn default_ratio_constructor() -> String { "Ratio::new_raw".to_string() }

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            annual_factor: default_annual_factor(),
            ratio_type: default_ratio_type(),
            ratio_constructor: default_ratio_constructor(),
        }
    }
}

impl GeneratorParams {
    /// Check the annual factor and derive the growth factors from it
    pub fn validate(&self) -> Result<GrowthFactors> {
        GrowthFactors::from_annual(self.annual_factor)
    }
}
