use agora_core::{MarketStepEndEvent, OrderEvent};

use crate::error::SinkResult;

/// Port for the callbacks a simulation runner invokes while it executes
///
/// Both hooks are called synchronously, in simulation order:
/// - `on_order` zero or more times per tick
/// - `on_market_step_end` exactly once per market per tick
///
/// An `Err` from either hook must abort the run.
pub trait SimulationObserver {
    /// An agent placed an order
    fn on_order(&mut self, event: &OrderEvent) -> SinkResult<()>;

    /// A market finished one step
    fn on_market_step_end(&mut self, event: &MarketStepEndEvent) -> SinkResult<()>;
}
