//! Interest table generator
//!
//! Derives daily and monthly growth factors from a fixed annual factor,
//! compounds them into day (30), month (12) and year (100) tables, truncates
//! every entry to a rational with denominator 1,000,000 and renders the tables
//! as Rust constant declarations.

pub mod accrual;
pub mod error;
pub mod rates;
pub mod tables;

pub use error::{Result, TableError};
pub use rates::{GeneratorParams, GrowthFactors, DEFAULT_ANNUAL_FACTOR};
pub use tables::{InterestTable, InterestTables, RationalApprox, TableKind, DENOMINATOR};
