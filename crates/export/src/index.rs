//! Index Synthesizer
//!
//! Appends a composite index row: the equal-weighted mean of two underlying
//! spot rows. Only the two-leg average is supported; any other topology has
//! to be configured explicitly and is rejected here.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::matrix::{PriceMatrix, round_decimal, round_price, to_decimal};

/// Row positions of the two markets feeding the composite index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeIndex {
    legs: (usize, usize),
}

impl Default for CompositeIndex {
    fn default() -> Self {
        Self { legs: (0, 1) }
    }
}

impl CompositeIndex {
    pub fn new(first: usize, second: usize) -> Self {
        Self {
            legs: (first, second),
        }
    }

    /// Build from an underlying market list; exactly two legs are accepted
    pub fn from_legs(legs: &[usize]) -> Result<Self> {
        match legs {
            [first, second] => Ok(Self::new(*first, *second)),
            _ => Err(ExportError::UnsupportedIndexTopology(legs.len())),
        }
    }

    pub fn legs(&self) -> (usize, usize) {
        self.legs
    }
}

fn mean_price(a: f64, b: f64) -> f64 {
    to_decimal(a)
        .zip(to_decimal(b))
        .map(|(a, b)| round_decimal((a + b) / Decimal::TWO))
        .and_then(|mean| mean.to_f64())
        .unwrap_or_else(|| round_price((a + b) / 2.0))
}

/// Append the composite row to the matrix
pub fn synthesize_index(mut matrix: PriceMatrix, index: &CompositeIndex) -> Result<PriceMatrix> {
    let rows = matrix.row_count();
    let (first, second) = index.legs;

    let leg = |row: usize| {
        matrix
            .row(row)
            .ok_or(ExportError::InvalidIndexLeg { leg: row, rows })
    };
    let composite: Vec<f64> = leg(first)?
        .iter()
        .zip(leg(second)?)
        .map(|(a, b)| mean_price(*a, *b))
        .collect();

    matrix.push_row(composite);
    Ok(matrix)
}
