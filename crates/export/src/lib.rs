//! Agora Export - Post-run transformation of a recorded simulation
//!
//! Turns the flat, tick-major event log captured by the recorder into an
//! analysis-ready bundle:
//!
//! - **Reshape**: market-step prices → `markets × ticks` matrix
//! - **Index**: composite row = mean of two underlying spot rows
//! - **Participation**: per tick, per market buy/sell `(cohort, index)` lists
//! - **Trim**: drop the warm-up offset, summarize min/max price
//!
//! ## Pipeline
//!
//! ```text
//!  RecordedRun ─┬─ market steps ──▶ reshape ──▶ index ──▶ trim ──┐
//!               │                                                ├──▶ ExportBundle
//!               └─ orders ───────▶ participation [offset, T) ────┘
//! ```

pub mod bundle;
pub mod chart;
pub mod error;
pub mod exporter;
pub mod index;
pub mod matrix;
pub mod participation;
pub mod reshape;
pub mod trim;

// Re-export main types
pub use bundle::{ExportBundle, ExportSummary};
pub use error::{ExportError, Result};
pub use exporter::{ExportConfig, Exporter};
pub use index::{CompositeIndex, synthesize_index};
pub use matrix::{PriceMatrix, round_price};
pub use participation::{
    CohortLayout, MarketParticipation, TickParticipation, extract_participation,
};
pub use reshape::reshape_prices;
pub use trim::{TrimmedPrices, trim_and_summarize, validate_offset};
