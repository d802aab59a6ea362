//! Simulation Events - payloads handed to the observer by the runner
//!
//! These mirror what the simulation runner knows at the moment it emits an
//! event. Required attributes are `Option` so the sink can tell a missing
//! attribute apart from a legitimate value; `price` and `ttl` are genuinely
//! nullable on the runner side.

use serde::{Deserialize, Serialize};

use crate::entities::{AgentId, MarketId, OrderKind, Tick};

/// One order placement, as observed by the runner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    #[serde(default)]
    pub order_id: Option<u64>,
    #[serde(default)]
    pub market_id: Option<MarketId>,
    #[serde(default)]
    pub time: Option<Tick>,
    #[serde(default)]
    pub agent_id: Option<AgentId>,
    #[serde(default)]
    pub is_buy: Option<bool>,
    #[serde(default)]
    pub kind: Option<OrderKind>,
    /// Absent for market orders
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub volume: Option<u64>,
    /// Order lifetime in ticks; absent means good until the session ends
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl OrderEvent {
    /// Fully populated limit order
    pub fn limit(
        order_id: u64,
        market_id: MarketId,
        time: Tick,
        agent_id: AgentId,
        is_buy: bool,
        price: f64,
        volume: u64,
    ) -> Self {
        Self {
            order_id: Some(order_id),
            market_id: Some(market_id),
            time: Some(time),
            agent_id: Some(agent_id),
            is_buy: Some(is_buy),
            kind: Some(OrderKind::Limit),
            price: Some(price),
            volume: Some(volume),
            ttl: None,
        }
    }

    /// Fully populated market order (no price)
    pub fn market(
        order_id: u64,
        market_id: MarketId,
        time: Tick,
        agent_id: AgentId,
        is_buy: bool,
        volume: u64,
    ) -> Self {
        Self {
            kind: Some(OrderKind::Market),
            price: None,
            ..Self::limit(order_id, market_id, time, agent_id, is_buy, 0.0, volume)
        }
    }

    pub fn with_ttl(mut self, ttl: u64) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Reference to the session the runner is currently executing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRef {
    pub session_id: u64,
}

/// The runner's view of one market at the end of a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub market_id: Option<MarketId>,
    #[serde(default)]
    pub name: Option<String>,
    /// Per-market clock
    #[serde(default)]
    pub time: Option<Tick>,
    #[serde(default)]
    pub market_price: Option<f64>,
    #[serde(default)]
    pub fundamental_price: Option<f64>,
}

impl MarketSnapshot {
    pub fn new(
        market_id: MarketId,
        name: impl Into<String>,
        time: Tick,
        market_price: f64,
        fundamental_price: f64,
    ) -> Self {
        Self {
            market_id: Some(market_id),
            name: Some(name.into()),
            time: Some(time),
            market_price: Some(market_price),
            fundamental_price: Some(fundamental_price),
        }
    }
}

/// End-of-step notification for one market
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketStepEndEvent {
    #[serde(default)]
    pub session: Option<SessionRef>,
    #[serde(default)]
    pub market: Option<MarketSnapshot>,
}

impl MarketStepEndEvent {
    pub fn new(session_id: u64, market: MarketSnapshot) -> Self {
        Self {
            session: Some(SessionRef { session_id }),
            market: Some(market),
        }
    }
}

/// Either event kind, as carried on a recorded event stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SimulationEvent {
    Order(OrderEvent),
    MarketStepEnd(MarketStepEndEvent),
}

impl From<OrderEvent> for SimulationEvent {
    fn from(event: OrderEvent) -> Self {
        SimulationEvent::Order(event)
    }
}

impl From<MarketStepEndEvent> for SimulationEvent {
    fn from(event: MarketStepEndEvent) -> Self {
        SimulationEvent::MarketStepEnd(event)
    }
}
