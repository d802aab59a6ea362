use agora_core::{MarketId, MarketStepRecord, OrderRecord};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of everything recorded during one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedRun {
    orders: Vec<OrderRecord>,
    market_steps: Vec<MarketStepRecord>,
}

impl RecordedRun {
    pub fn new(orders: Vec<OrderRecord>, market_steps: Vec<MarketStepRecord>) -> Self {
        Self {
            orders,
            market_steps,
        }
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn market_steps(&self) -> &[MarketStepRecord] {
        &self.market_steps
    }

    /// Step snapshots of a single market, in arrival order
    pub fn steps_for_market(&self, market_id: MarketId) -> impl Iterator<Item = &MarketStepRecord> {
        self.market_steps
            .iter()
            .filter(move |s| s.market_id == market_id)
    }
}
