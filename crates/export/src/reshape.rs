//! Temporal Reshaper
//!
//! The runner emits one step-end snapshot per market per tick, tick-major:
//! every market of tick 0, then every market of tick 1, and so on. The
//! reshaper trusts that emission order. Record `k` lands in row `k % M`,
//! column `k / M`; the `market_id` and `market_time` fields are not consulted.

use agora_core::MarketStepRecord;

use crate::error::{ExportError, Result};
use crate::matrix::{PriceMatrix, round_price};

/// Reshape the flat step sequence into a `market_count × total_ticks` matrix
/// of prices rounded to 3 decimals.
pub fn reshape_prices(
    steps: &[MarketStepRecord],
    market_count: usize,
    total_ticks: u64,
) -> Result<PriceMatrix> {
    let mismatch = || ExportError::ReshapeMismatch {
        records: steps.len(),
        market_count,
        total_ticks,
    };

    if market_count == 0 || steps.len() % market_count != 0 {
        return Err(mismatch());
    }
    let ticks = usize::try_from(total_ticks).map_err(|_| mismatch())?;
    if ticks.checked_mul(market_count) != Some(steps.len()) {
        return Err(mismatch());
    }

    let mut rows = vec![Vec::with_capacity(ticks); market_count];
    for (k, step) in steps.iter().enumerate() {
        rows[k % market_count].push(round_price(step.market_price));
    }

    log::debug!(
        "Reshaped {} step records into {} markets x {} ticks",
        steps.len(),
        market_count,
        ticks
    );
    Ok(PriceMatrix::from_rows(rows))
}
