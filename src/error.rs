//! Error types for table generation and accrual

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Annual growth factor must be finite and positive, got {value}")]
    InvalidAnnualFactor { value: f64 },

    #[error("{table}[{index}] = {value} does not fit a u128 numerator")]
    NumeratorOverflow {
        table: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Balance {balance} overflowed while applying {table}[{index}]")]
    AccrualOverflow {
        balance: u128,
        table: &'static str,
        index: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
