//! Exporter - runs the post-run stages in order
//!
//! 1. Validate the offset (before any work is done)
//! 2. Reshape step prices into `markets × ticks`
//! 3. Append the composite index row
//! 4. Extract participation over `[offset, total_ticks)`
//! 5. Trim the offset and summarize min/max

use agora_core::{MarketStepRecord, OrderRecord};
use agora_recorder::RecordedRun;
use serde::{Deserialize, Serialize};

use crate::bundle::{ExportBundle, ExportSummary};
use crate::error::Result;
use crate::index::{CompositeIndex, synthesize_index};
use crate::participation::{CohortLayout, extract_participation};
use crate::reshape::reshape_prices;
use crate::trim::{trim_and_summarize, validate_offset};

/// Everything the pipeline needs to know about the run's topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Market names in runner order
    pub markets: Vec<String>,
    /// Sum of all session lengths
    pub total_ticks: u64,
    /// Leading ticks to discard
    pub offset: u64,
    pub cohort: CohortLayout,
    pub index: CompositeIndex,
}

impl ExportConfig {
    pub fn new(markets: Vec<String>, total_ticks: u64) -> Self {
        Self {
            markets,
            total_ticks,
            offset: 0,
            cohort: CohortLayout::default(),
            index: CompositeIndex::default(),
        }
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_cohort(mut self, cohort: CohortLayout) -> Self {
        self.cohort = cohort;
        self
    }

    pub fn with_index(mut self, index: CompositeIndex) -> Self {
        self.index = index;
        self
    }

    pub fn market_count(&self) -> usize {
        self.markets.len()
    }
}

/// Builds an [`ExportBundle`] from a recorded run
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn export(&self, run: &RecordedRun) -> Result<ExportBundle> {
        self.export_records(run.orders(), run.market_steps())
    }

    pub fn export_records(
        &self,
        orders: &[OrderRecord],
        steps: &[MarketStepRecord],
    ) -> Result<ExportBundle> {
        let ExportConfig {
            markets,
            total_ticks,
            offset,
            cohort,
            index,
        } = &self.config;

        validate_offset(*offset, *total_ticks)?;

        let prices = reshape_prices(steps, markets.len(), *total_ticks)?;
        let prices = synthesize_index(prices, index)?;
        let trades = extract_participation(orders, *offset..*total_ticks, markets.len(), cohort);
        let trimmed = trim_and_summarize(prices, *total_ticks, *offset)?;

        log::info!(
            "Exported {} ticks x {} markets (+index), offset {}, price range [{}, {}]",
            trimmed.duration,
            markets.len(),
            offset,
            trimmed.min_price,
            trimmed.max_price
        );

        Ok(ExportBundle {
            trades,
            prices: trimmed.prices,
            config: ExportSummary {
                markets: markets.clone(),
                duration: trimmed.duration,
                min_price: trimmed.min_price,
                max_price: trimmed.max_price,
            },
        })
    }
}
