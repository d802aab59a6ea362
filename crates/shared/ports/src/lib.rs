//! Agora Ports
//!
//! Port definitions (traits) for the Agora export pipeline.
//! These define the boundary between the external simulation runner and the
//! observer that records what it emits.

mod error;
mod observer;
mod runner;

pub use error::{RunError, RunResult, SinkError, SinkResult};
pub use observer::SimulationObserver;
pub use runner::{RunSummary, SimulationRunner};
