//! Growth factor derivation and generator parameters

mod factors;
pub mod params;

pub use factors::GrowthFactors;
pub use params::GeneratorParams;

// ============================================================================
// Default Growth Assumptions
// ============================================================================
// The annual factor is fixed at build time. Daily growth is the 365th root of
// the annual factor; a month is always 30 days of daily growth.

/// Default annual growth factor (APY multiplier, 1.1 = +10%/year)
pub const DEFAULT_ANNUAL_FACTOR: f64 = 1.1;

/// Days over which the annual factor compounds
pub const DAYS_PER_YEAR: u32 = 365;

/// Days in one compounding month
pub const DAYS_PER_MONTH: u32 = 30;
