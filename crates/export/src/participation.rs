//! Participation Extractor
//!
//! For every exported tick and every market, lists the agents that placed
//! buy and sell orders. Agents are reported as `(cohort, local index)` pairs
//! decomposed from their global id under a fixed cohort size; the runner
//! assigns ids contiguously per cohort in configuration order.
//!
//! Within a bucket participants keep arrival order and duplicates are kept:
//! an agent may legitimately place several orders in one tick.

use std::ops::Range;

use agora_core::{AgentId, OrderRecord, Participant, Side, Tick};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ExportError, Result};

/// Default number of agents per cohort
pub const DEFAULT_COHORT_SIZE: u64 = 500;

/// How global agent ids map onto cohorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortLayout {
    cohort_size: u64,
}

impl Default for CohortLayout {
    fn default() -> Self {
        Self {
            cohort_size: DEFAULT_COHORT_SIZE,
        }
    }
}

impl CohortLayout {
    pub fn new(cohort_size: u64) -> Result<Self> {
        if cohort_size == 0 {
            return Err(ExportError::InvalidCohortSize);
        }
        Ok(Self { cohort_size })
    }

    pub fn cohort_size(&self) -> u64 {
        self.cohort_size
    }

    pub fn decompose(&self, agent_id: AgentId) -> Participant {
        Participant::new(agent_id / self.cohort_size, agent_id % self.cohort_size)
    }

    pub fn compose(&self, participant: Participant) -> AgentId {
        participant.cohort * self.cohort_size + participant.local_index
    }
}

/// Buy and sell participants of one market in one tick.
///
/// Serialized as `[buyList, sellList]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "(Vec<Participant>, Vec<Participant>)")]
pub struct MarketParticipation {
    pub buy: Vec<Participant>,
    pub sell: Vec<Participant>,
}

impl MarketParticipation {
    pub fn side(&self, side: Side) -> &[Participant] {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }

    fn push(&mut self, side: Side, participant: Participant) {
        match side {
            Side::Buy => self.buy.push(participant),
            Side::Sell => self.sell.push(participant),
        }
    }
}

impl From<(Vec<Participant>, Vec<Participant>)> for MarketParticipation {
    fn from((buy, sell): (Vec<Participant>, Vec<Participant>)) -> Self {
        Self { buy, sell }
    }
}

impl Serialize for MarketParticipation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.buy)?;
        pair.serialize_element(&self.sell)?;
        pair.end()
    }
}

/// One entry per market, indexed by market id
pub type TickParticipation = Vec<MarketParticipation>;

/// Bucket orders by tick and market over `ticks`.
///
/// The result has one entry per tick in the range (entry 0 is `ticks.start`)
/// and `market_count` markets per entry. Orders outside the range or for an
/// unknown market are not exported.
pub fn extract_participation(
    orders: &[OrderRecord],
    ticks: Range<Tick>,
    market_count: usize,
    layout: &CohortLayout,
) -> Vec<TickParticipation> {
    let span = ticks.end.saturating_sub(ticks.start) as usize;
    let mut out = vec![vec![MarketParticipation::default(); market_count]; span];

    let mut skipped = 0usize;
    for order in orders {
        if !ticks.contains(&order.time) || order.market_id >= market_count {
            skipped += 1;
            continue;
        }
        let tick = (order.time - ticks.start) as usize;
        out[tick][order.market_id].push(order.side(), layout.decompose(order.agent_id));
    }

    if skipped > 0 {
        log::debug!(
            "{} of {} orders fall outside ticks {:?} or the {} configured markets",
            skipped,
            orders.len(),
            ticks,
            market_count
        );
    }
    out
}
