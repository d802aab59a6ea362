//! Replay Runner - drives an observer from a recorded event stream
//!
//! The external simulator writes one [`SimulationEvent`] per line as JSON.
//! Replaying the file calls the observer hooks in line order, which is the
//! order the simulator emitted them in.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use agora_core::SimulationEvent;
use agora_ports::{RunError, RunResult, RunSummary, SimulationObserver, SimulationRunner};

#[derive(Debug, Clone)]
enum EventSource {
    File(PathBuf),
    Events(Vec<SimulationEvent>),
}

/// A [`SimulationRunner`] that replays previously emitted events
#[derive(Debug, Clone)]
pub struct ReplayRunner {
    source: EventSource,
}

impl ReplayRunner {
    /// Replay a JSON-lines event log from disk; the file is read on `run`
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: EventSource::File(path.into()),
        }
    }

    pub fn from_events(events: Vec<SimulationEvent>) -> Self {
        Self {
            source: EventSource::Events(events),
        }
    }

    /// Parse an in-memory JSON-lines log up front
    pub fn from_jsonl(log: &str) -> RunResult<Self> {
        let mut events = Vec::new();
        for (number, line) in log.lines().enumerate() {
            if let Some(event) = parse_line(number + 1, line)? {
                events.push(event);
            }
        }
        Ok(Self::from_events(events))
    }

    fn replay_file(path: &Path, observer: &mut dyn SimulationObserver) -> RunResult<RunSummary> {
        log::info!("Replaying events from {}", path.display());
        let reader = BufReader::new(File::open(path)?);

        let mut summary = RunSummary::default();
        for (number, line) in reader.lines().enumerate() {
            if let Some(event) = parse_line(number + 1, &line?)? {
                dispatch(&event, observer, &mut summary)?;
            }
        }
        Ok(summary)
    }
}

/// `None` for blank lines
fn parse_line(line: usize, text: &str) -> RunResult<Option<SimulationEvent>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|source| RunError::Parse { line, source })
}

fn dispatch(
    event: &SimulationEvent,
    observer: &mut dyn SimulationObserver,
    summary: &mut RunSummary,
) -> RunResult<()> {
    match event {
        SimulationEvent::Order(order) => {
            observer.on_order(order)?;
            summary.orders += 1;
        }
        SimulationEvent::MarketStepEnd(step) => {
            observer.on_market_step_end(step)?;
            summary.market_steps += 1;
        }
    }
    Ok(())
}

impl SimulationRunner for ReplayRunner {
    fn run(&mut self, observer: &mut dyn SimulationObserver) -> RunResult<RunSummary> {
        let summary = match &self.source {
            EventSource::File(path) => Self::replay_file(path, observer)?,
            EventSource::Events(events) => {
                let mut summary = RunSummary::default();
                for event in events {
                    dispatch(event, observer, &mut summary)?;
                }
                summary
            }
        };

        log::debug!(
            "Replay finished: {} orders, {} market steps",
            summary.orders,
            summary.market_steps
        );
        Ok(summary)
    }

    fn name(&self) -> &str {
        "ReplayRunner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{MarketSnapshot, MarketStepEndEvent, OrderEvent};
    use agora_ports::{SinkError, SinkResult};

    /// Remembers the call order
    #[derive(Default)]
    struct CallLog {
        calls: Vec<&'static str>,
    }

    impl SimulationObserver for CallLog {
        fn on_order(&mut self, _event: &OrderEvent) -> SinkResult<()> {
            self.calls.push("order");
            Ok(())
        }

        fn on_market_step_end(&mut self, _event: &MarketStepEndEvent) -> SinkResult<()> {
            self.calls.push("step");
            Ok(())
        }
    }

    /// Rejects every order
    struct Rejecting;

    impl SimulationObserver for Rejecting {
        fn on_order(&mut self, _event: &OrderEvent) -> SinkResult<()> {
            Err(SinkError::MalformedEvent {
                event: "order",
                field: "agent_id",
            })
        }

        fn on_market_step_end(&mut self, _event: &MarketStepEndEvent) -> SinkResult<()> {
            Ok(())
        }
    }

    fn events() -> Vec<SimulationEvent> {
        vec![
            OrderEvent::limit(1, 0, 0, 7, true, 300.0, 1).into(),
            MarketStepEndEvent::new(0, MarketSnapshot::new(0, "A", 0, 300.0, 300.0)).into(),
            OrderEvent::market(2, 0, 1, 8, false, 1).into(),
        ]
    }

    #[test]
    fn test_events_dispatched_in_order() {
        let mut runner = ReplayRunner::from_events(events());
        let mut log = CallLog::default();

        let summary = runner.run(&mut log).unwrap();

        assert_eq!(log.calls, vec!["order", "step", "order"]);
        assert_eq!(
            summary,
            RunSummary {
                orders: 2,
                market_steps: 1
            }
        );
        assert_eq!(runner.name(), "ReplayRunner");
    }

    #[test]
    fn test_sink_failure_aborts() {
        let mut runner = ReplayRunner::from_events(events());

        assert!(matches!(
            runner.run(&mut Rejecting),
            Err(RunError::Sink(SinkError::MalformedEvent { field: "agent_id", .. }))
        ));
    }

    #[test]
    fn test_jsonl_skips_blank_lines() {
        let log = events()
            .iter()
            .map(|e| serde_json::to_string(e).unwrap())
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut runner = ReplayRunner::from_jsonl(&log).unwrap();
        let summary = runner.run(&mut CallLog::default()).unwrap();
        assert_eq!(summary.orders + summary.market_steps, 3);
    }

    #[test]
    fn test_jsonl_reports_bad_line() {
        let log = "{\"kind\":\"order\",\"data\":{}}\nnot json\n";

        assert!(matches!(
            ReplayRunner::from_jsonl(log),
            Err(RunError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut runner = ReplayRunner::from_path("/nonexistent/agora/events.jsonl");

        assert!(matches!(
            runner.run(&mut CallLog::default()),
            Err(RunError::Io(_))
        ));
    }
}
