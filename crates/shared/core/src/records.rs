//! Normalized records appended by the event sink.
//!
//! Records are immutable once created and retained for the whole run.

use serde::{Deserialize, Serialize};

use crate::entities::{AgentId, MarketId, OrderKind, Side, Tick};

/// One observed order event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: u64,
    pub market_id: MarketId,
    pub time: Tick,
    pub agent_id: AgentId,
    pub is_buy: bool,
    pub kind: OrderKind,
    pub price: Option<f64>,
    pub volume: u64,
    pub ttl: Option<u64>,
}

impl OrderRecord {
    pub fn side(&self) -> Side {
        Side::from_is_buy(self.is_buy)
    }
}

/// One end-of-step snapshot for one market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStepRecord {
    pub session_id: u64,
    pub market_time: Tick,
    pub market_id: MarketId,
    pub market_name: String,
    pub market_price: f64,
    pub fundamental_price: f64,
}
