//! Export Session - one runner execution, one fresh recorder, one bundle

use std::path::Path;

use agora_export::{
    CohortLayout, ExportBundle, ExportConfig, Exporter, chart, participation, validate_offset,
};
use agora_ports::SimulationRunner;
use agora_recorder::{EventRecorder, RecordedRun};

use crate::error::Result;
use crate::settings::SimulationSettings;

/// User-facing export knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Leading warm-up ticks to drop
    pub offset: u64,
    /// Agents per cohort when splitting agent ids
    pub cohort_size: u64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            cohort_size: participation::DEFAULT_COHORT_SIZE,
        }
    }
}

/// Result of a session run
#[derive(Debug, Clone)]
pub struct SessionOutput {
    pub run: RecordedRun,
    pub bundle: ExportBundle,
}

impl SessionOutput {
    /// Write the export document
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.bundle.save(path)?;
        Ok(())
    }

    /// Write the price chart of the untrimmed run
    pub fn draw(&self, path: impl AsRef<Path>) -> Result<()> {
        chart::save_svg(&self.run, self.bundle.markets(), path)?;
        Ok(())
    }
}

/// Runs a simulation into a fresh recorder and exports the result
#[derive(Debug, Clone)]
pub struct ExportSession {
    exporter: Exporter,
}

impl ExportSession {
    /// Fails before any run if the options don't fit the settings
    pub fn new(settings: SimulationSettings, options: ExportOptions) -> Result<Self> {
        let total_ticks = settings.total_ticks();
        validate_offset(options.offset, total_ticks)?;
        let cohort = CohortLayout::new(options.cohort_size)?;

        let config = ExportConfig::new(settings.markets, total_ticks)
            .with_offset(options.offset)
            .with_cohort(cohort)
            .with_index(settings.index);

        Ok(Self {
            exporter: Exporter::new(config),
        })
    }

    pub fn config(&self) -> &ExportConfig {
        self.exporter.config()
    }

    pub fn run(&self, runner: &mut dyn SimulationRunner) -> Result<SessionOutput> {
        let mut recorder = EventRecorder::new();
        let summary = runner.run(&mut recorder)?;
        log::info!(
            "{} delivered {} orders and {} market steps",
            runner.name(),
            summary.orders,
            summary.market_steps
        );

        let run = recorder.finish();
        let bundle = self.exporter.export(&run)?;
        Ok(SessionOutput { run, bundle })
    }
}
