mod order_kind;
mod participant;
mod side;

pub use order_kind::OrderKind;
pub use participant::Participant;
pub use side::Side;

/// Index into the configured market list
pub type MarketId = usize;

/// Globally unique agent identifier (contiguous per cohort)
pub type AgentId = u64;

/// One discrete simulation time step
pub type Tick = u64;
