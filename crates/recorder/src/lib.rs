//! Agora Recorder - Event sink for a single simulation run
//!
//! The runner drives an [`EventRecorder`] through the
//! [`SimulationObserver`](agora_ports::SimulationObserver) hooks. Each hook
//! appends exactly one normalized record, in call order. When the run is
//! over, [`EventRecorder::finish`] seals the two sequences into an immutable
//! [`RecordedRun`] that the export stages read.
//!
//! ```text
//!   runner ──on_order──────────▶ ┌───────────────┐
//!          ──on_market_step_end▶ │ EventRecorder │ ──finish()──▶ RecordedRun
//!                                └───────────────┘
//! ```

mod recorder;
mod run;

pub use recorder::EventRecorder;
pub use run::RecordedRun;
