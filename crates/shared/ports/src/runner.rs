use crate::error::RunResult;
use crate::observer::SimulationObserver;

/// Event counts reported by a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub orders: usize,
    pub market_steps: usize,
}

/// Port for anything that can execute a simulation and report to an observer
///
/// Implementations execute every configured session to completion, or stop at
/// the first error (configuration, input, or observer failure).
pub trait SimulationRunner {
    fn run(&mut self, observer: &mut dyn SimulationObserver) -> RunResult<RunSummary>;

    /// Get the runner's name/identifier for debugging
    fn name(&self) -> &str {
        "SimulationRunner"
    }
}
