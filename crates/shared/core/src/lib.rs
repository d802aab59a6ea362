//! Agora Core Domain
//!
//! Pure domain types for the Agora simulation log exporter.
//! This crate contains no I/O and is 100% unit testable.
//!
//! Two families of types live here:
//!
//! - **Events**: payloads as the simulation runner emits them. Fields the
//!   runner is expected to fill are optional so that a malformed event can be
//!   detected instead of silently defaulted.
//! - **Records**: normalized, immutable rows appended by the event sink.

pub mod entities;
pub mod events;
pub mod records;

// Re-export commonly used types at crate root
pub use entities::{AgentId, MarketId, OrderKind, Participant, Side, Tick};
pub use events::{MarketSnapshot, MarketStepEndEvent, OrderEvent, SessionRef, SimulationEvent};
pub use records::{MarketStepRecord, OrderRecord};
