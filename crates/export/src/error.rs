//! Export pipeline errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(
        "Reshape mismatch: {records} market-step records do not fill {market_count} markets x {total_ticks} ticks"
    )]
    ReshapeMismatch {
        records: usize,
        market_count: usize,
        total_ticks: u64,
    },

    #[error("Price matrix has {actual} columns, expected {expected}")]
    ColumnMismatch { expected: u64, actual: usize },

    #[error("Invalid offset {offset}: must be smaller than the run duration {total_ticks}")]
    InvalidOffset { offset: u64, total_ticks: u64 },

    #[error("Non-finite price {price} in row {row} at tick {tick}")]
    NonFinitePrice { row: usize, tick: u64, price: f64 },

    #[error("Cohort size must be positive")]
    InvalidCohortSize,

    #[error("Index leg row {leg} is outside the {rows}-row price matrix")]
    InvalidIndexLeg { leg: usize, rows: usize },

    #[error("Composite index needs exactly two underlying markets, got {0}")]
    UnsupportedIndexTopology(usize),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
