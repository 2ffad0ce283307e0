//! Per-day, per-month and per-year growth factors derived from one annual factor

use super::{DAYS_PER_MONTH, DAYS_PER_YEAR, DEFAULT_ANNUAL_FACTOR};
use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};

/// Multiplicative growth over one day, one 30-day month and one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthFactors {
    /// Growth over one year (the input factor)
    pub annual: f64,
    /// `annual^(1/365)`
    pub daily: f64,
    /// `daily^30`
    pub monthly: f64,
}

impl GrowthFactors {
    /// Derive daily and monthly factors from an annual factor
    ///
    /// Fails fast unless `annual` is finite and strictly positive.
    pub fn from_annual(annual: f64) -> Result<Self> {
        if !annual.is_finite() || annual <= 0.0 {
            return Err(TableError::InvalidAnnualFactor { value: annual });
        }

        let factors = Self::derive(annual);
        log::debug!(
            "Derived growth factors: annual={} daily={} monthly={}",
            factors.annual,
            factors.daily,
            factors.monthly
        );
        Ok(factors)
    }

    fn derive(annual: f64) -> Self {
        let daily = annual.powf(1.0 / DAYS_PER_YEAR as f64);
        Self {
            annual,
            daily,
            monthly: daily.powf(DAYS_PER_MONTH as f64),
        }
    }
}

impl Default for GrowthFactors {
    fn default() -> Self {
        Self::derive(DEFAULT_ANNUAL_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_daily_factor_compounds_back_to_annual() {
        let factors = GrowthFactors::default();
        assert_abs_diff_eq!(factors.daily.powi(365), 1.1, epsilon = 1e-6);
    }

    #[test]
    fn test_twelve_months_cover_360_days() {
        let factors = GrowthFactors::default();
        assert_abs_diff_eq!(
            factors.monthly.powi(12),
            factors.daily.powi(360),
            epsilon = 1e-12
        );

        // Five days short of a full year
        let shortfall = factors.annual - factors.monthly.powi(12);
        assert!(shortfall > 0.0);
        assert!(shortfall < 2e-3);
    }

    #[test]
    fn test_default_matches_from_annual() {
        let derived = GrowthFactors::from_annual(DEFAULT_ANNUAL_FACTOR).unwrap();
        assert_eq!(derived, GrowthFactors::default());
    }

    #[test]
    fn test_other_annual_factor() {
        let factors = GrowthFactors::from_annual(1.05).unwrap();
        assert_abs_diff_eq!(factors.daily.powi(365), 1.05, epsilon = 1e-6);
        assert_abs_diff_eq!(factors.monthly, factors.daily.powi(30), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_annual_factor() {
        assert!(GrowthFactors::from_annual(0.0).is_err());
        assert!(GrowthFactors::from_annual(-1.1).is_err());
        assert!(GrowthFactors::from_annual(f64::NAN).is_err());
        assert!(GrowthFactors::from_annual(f64::INFINITY).is_err());
    }

    #[test]
    fn test_unit_factor_is_flat() {
        let factors = GrowthFactors::from_annual(1.0).unwrap();
        assert_eq!(factors.daily, 1.0);
        assert_eq!(factors.monthly, 1.0);
    }
}
