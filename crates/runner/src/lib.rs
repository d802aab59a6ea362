//! Agora Runner - Export orchestration
//!
//! Wires a simulation runner to a fresh event recorder and hands the sealed
//! run to the exporter:
//!
//! - **Settings**: market list, session lengths and index legs from the
//!   simulator's configuration tree
//! - **Replay**: a [`SimulationRunner`](agora_ports::SimulationRunner) that
//!   re-emits a recorded JSON-lines event log
//! - **Session**: one run in, one [`ExportBundle`](agora_export::ExportBundle) out
//!
//! ## Flow
//!
//! ```text
//!  config.json ──▶ SimulationSettings ──▶ ExportSession
//!                                             │
//!  events.jsonl ──▶ ReplayRunner ──hooks──▶ EventRecorder ──finish──▶ RecordedRun
//!                                                                        │
//!                                         export.json ◀── Exporter ◀─────┘
//! ```

pub mod error;
pub mod replay;
pub mod session;
pub mod settings;

// Re-export main types
pub use error::{ConfigError, Result, SessionError};
pub use replay::ReplayRunner;
pub use session::{ExportOptions, ExportSession, SessionOutput};
pub use settings::{SessionSettings, SimulationSettings};
