//! Applying interest tables to a balance over whole elapsed days
//!
//! Elapsed days are split into years (365 days), 30-day months and remaining
//! days. The balance is multiplied by the matching year, month and day entries
//! in that order, flooring to an integer after each step.

use crate::error::{Result, TableError};
use crate::rates::{DAYS_PER_MONTH, DAYS_PER_YEAR};
use crate::tables::{InterestTable, InterestTables};
use num_rational::Ratio;
use num_traits::CheckedMul;

/// Nanoseconds in one day of a nanosecond timestamp
pub const NANOS_PER_DAY: u64 = 24 * 60 * 60 * 1_000_000_000;

/// Elapsed time split into table periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSplit {
    pub years: u64,
    pub months: u64,
    pub days: u64,
}

impl PeriodSplit {
    pub fn from_days(total_days: u64) -> Self {
        let years = total_days / DAYS_PER_YEAR as u64;
        let rest = total_days % DAYS_PER_YEAR as u64;
        Self {
            years,
            months: rest / DAYS_PER_MONTH as u64,
            days: rest % DAYS_PER_MONTH as u64,
        }
    }
}

/// Result of accruing since a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accrued {
    pub balance: u128,
    /// Previous timestamp advanced by the whole days applied
    pub paid_at_ns: u64,
    pub days: u64,
}

impl InterestTables {
    /// Grow `balance` by `days` whole days of compounding
    pub fn accrue(&self, balance: u128, days: u64) -> Result<u128> {
        if balance == 0 {
            return Ok(0);
        }
        let split = PeriodSplit::from_days(days);
        let mut balance = apply_periods(balance, split.years, &self.year)?;
        balance = apply_periods(balance, split.months, &self.month)?;
        balance = apply_periods(balance, split.days, &self.day)?;
        Ok(balance)
    }

    /// Accrue the whole days between `paid_at_ns` and `now_ns`
    ///
    /// Returns `None` if less than a full day has elapsed.
    pub fn accrue_since(&self, balance: u128, paid_at_ns: u64, now_ns: u64) -> Result<Option<Accrued>> {
        let days = now_ns.saturating_sub(paid_at_ns) / NANOS_PER_DAY;
        if days == 0 {
            log::debug!("Less than a day since {}, nothing to accrue", paid_at_ns);
            return Ok(None);
        }

        let new_balance = self.accrue(balance, days)?;
        log::debug!("Accrued {} days: {} -> {}", days, balance, new_balance);

        Ok(Some(Accrued {
            balance: new_balance,
            paid_at_ns: paid_at_ns + days * NANOS_PER_DAY,
            days,
        }))
    }
}

/// Multiply by `table[periods]`, in chunks of the last index when `periods`
/// runs past the table
///
/// Once a full chunk leaves the balance unchanged, the remaining full chunks
/// are skipped.
fn apply_periods(mut balance: u128, mut periods: u64, table: &InterestTable) -> Result<u128> {
    let max_step = table.len().saturating_sub(1) as u64;
    if max_step == 0 {
        return Ok(balance);
    }

    while periods > 0 {
        let step = periods.min(max_step);
        let index = step as usize;
        let factor = table.entries()[index].to_ratio();

        let next = Ratio::from_integer(balance)
            .checked_mul(&factor)
            .ok_or(TableError::AccrualOverflow {
                balance,
                table: table.name(),
                index,
            })?
            .to_integer();
        periods -= step;
        if next == balance && step == max_step {
            periods %= max_step;
        }
        balance = next;
    }
    Ok(balance)
}
