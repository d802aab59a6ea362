//! Offset Trimmer & Summarizer
//!
//! Drops the warm-up ticks from the front of the price matrix and computes
//! the global price bounds of what remains.

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::matrix::PriceMatrix;

/// Price matrix after the warm-up offset was removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimmedPrices {
    pub prices: PriceMatrix,
    /// `total_ticks - offset`
    pub duration: u64,
    pub min_price: f64,
    pub max_price: f64,
}

/// An offset must leave at least one tick
pub fn validate_offset(offset: u64, total_ticks: u64) -> Result<()> {
    if offset >= total_ticks {
        return Err(ExportError::InvalidOffset {
            offset,
            total_ticks,
        });
    }
    Ok(())
}

/// Drop the first `offset` columns and summarize the remaining prices.
///
/// A NaN or infinite price in the retained window is rejected rather than
/// folded into the bounds.
pub fn trim_and_summarize(
    mut matrix: PriceMatrix,
    total_ticks: u64,
    offset: u64,
) -> Result<TrimmedPrices> {
    validate_offset(offset, total_ticks)?;
    if matrix.row_count() == 0 || matrix.columns() as u64 != total_ticks {
        return Err(ExportError::ColumnMismatch {
            expected: total_ticks,
            actual: matrix.columns(),
        });
    }

    let offset = offset as usize;
    for row in matrix.rows_mut() {
        row.drain(..offset);
    }

    for (row, prices) in matrix.rows().iter().enumerate() {
        if let Some(col) = prices.iter().position(|p| !p.is_finite()) {
            return Err(ExportError::NonFinitePrice {
                row,
                tick: (offset + col) as u64,
                price: prices[col],
            });
        }
    }

    let (min_price, max_price) = matrix
        .values()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        });

    Ok(TrimmedPrices {
        duration: total_ticks - offset as u64,
        prices: matrix,
        min_price,
        max_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> PriceMatrix {
        PriceMatrix::from_rows(vec![
            vec![1.0, 10.0, 11.0, 12.0],
            vec![500.0, 20.0, 21.0, 9.5],
            vec![250.5, 15.0, 16.0, 10.75],
        ])
    }

    #[test]
    fn test_trim_drops_leading_columns() {
        let trimmed = trim_and_summarize(matrix(), 4, 1).unwrap();

        assert_eq!(trimmed.duration, 3);
        assert_eq!(trimmed.prices.columns(), 3);
        assert_eq!(trimmed.prices.row(0), Some(&[10.0, 11.0, 12.0][..]));
    }

    #[test]
    fn test_bounds_ignore_trimmed_ticks() {
        let trimmed = trim_and_summarize(matrix(), 4, 1).unwrap();

        assert_eq!(trimmed.min_price, 9.5);
        assert_eq!(trimmed.max_price, 21.0);
    }

    #[test]
    fn test_zero_offset_keeps_everything() {
        let trimmed = trim_and_summarize(matrix(), 4, 0).unwrap();

        assert_eq!(trimmed.duration, 4);
        assert_eq!(trimmed.min_price, 1.0);
        assert_eq!(trimmed.max_price, 500.0);
    }

    #[test]
    fn test_offset_equal_to_duration_rejected() {
        assert!(matches!(
            trim_and_summarize(matrix(), 4, 4),
            Err(ExportError::InvalidOffset {
                offset: 4,
                total_ticks: 4
            })
        ));
        assert!(validate_offset(5, 4).is_err());
        assert!(validate_offset(3, 4).is_ok());
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let mut rows = matrix().rows().to_vec();
        rows[1][2] = f64::NAN;

        assert!(matches!(
            trim_and_summarize(PriceMatrix::from_rows(rows), 4, 1),
            Err(ExportError::NonFinitePrice { row: 1, tick: 2, .. })
        ));
    }

    #[test]
    fn test_non_finite_price_in_trimmed_ticks_ignored() {
        let mut rows = matrix().rows().to_vec();
        rows[0][0] = f64::INFINITY;

        let trimmed = trim_and_summarize(PriceMatrix::from_rows(rows), 4, 1).unwrap();
        assert_eq!(trimmed.max_price, 21.0);
    }

    #[test]
    fn test_column_count_must_match() {
        assert!(matches!(
            trim_and_summarize(matrix(), 5, 1),
            Err(ExportError::ColumnMismatch {
                expected: 5,
                actual: 4
            })
        ));
    }
}
