//! Price matrix: one row per market, one column per tick.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places kept in exported prices
pub const PRICE_DECIMALS: u32 = 3;

/// Convert a price to decimal for exact arithmetic
pub(crate) fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Round a decimal price to the exported precision (half to even)
pub(crate) fn round_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointNearestEven)
}

/// Round a price to 3 decimal places, half to even.
///
/// Non-finite values cannot be represented as decimals and pass through
/// unchanged.
pub fn round_price(value: f64) -> f64 {
    to_decimal(value)
        .map(round_decimal)
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Row-major `markets × ticks` matrix of prices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceMatrix {
    rows: Vec<Vec<f64>>,
}

impl PriceMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of tick columns (rows are always equally long)
    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Every price in the matrix, row by row
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub(crate) fn push_row(&mut self, row: Vec<f64>) {
        debug_assert!(self.rows.is_empty() || row.len() == self.columns());
        self.rows.push(row);
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_price() {
        assert_eq!(to_decimal(round_price(300.12345)), Some(dec!(300.123)));
        assert_eq!(to_decimal(round_price(299.9996)), Some(dec!(300.000)));
        assert_eq!(round_price(15.0), 15.0);
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round_decimal(dec!(1.0005)), dec!(1.000));
        assert_eq!(round_decimal(dec!(1.0015)), dec!(1.002));
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(round_price(f64::NAN).is_nan());
        assert_eq!(round_price(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_shape() {
        let matrix = PriceMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.columns(), 2);
        assert_eq!(matrix.row(1), Some(&[3.0, 4.0][..]));
        assert_eq!(matrix.values().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(PriceMatrix::default().columns(), 0);
    }

    #[test]
    fn test_serializes_as_nested_lists() {
        let matrix = PriceMatrix::from_rows(vec![vec![1.5], vec![2.25]]);
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[1.5],[2.25]]");
    }
}
