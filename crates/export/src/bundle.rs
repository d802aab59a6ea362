//! Export bundle - the single JSON document produced by a run
//!
//! ```json
//! {
//!   "trades": [ [ [buyList, sellList], ... markets ], ... ticks ],
//!   "prices": [ [p0, p1, ...], ... markets, index ],
//!   "config": { "markets": [...], "duration": 520, "minPrice": 201.3, "maxPrice": 312.9 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::PriceMatrix;
use crate::participation::TickParticipation;

/// Run-level metadata stored under `config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    /// Named markets, in price-row order (the index row is not named)
    pub markets: Vec<String>,
    /// Exported tick count
    pub duration: u64,
    pub min_price: f64,
    pub max_price: f64,
}

/// Analysis-ready export of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    /// tick → market → [buy, sell] → [cohort, local index]
    pub trades: Vec<TickParticipation>,
    /// market rows plus the composite index row, one column per tick
    pub prices: PriceMatrix,
    pub config: ExportSummary,
}

impl ExportBundle {
    pub fn duration(&self) -> u64 {
        self.config.duration
    }

    pub fn markets(&self) -> &[String] {
        &self.config.markets
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the bundle as a single JSON document
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Export written to {}", path.display());
        Ok(())
    }
}
