//! Simulation settings
//!
//! Reads the parts of the simulator's configuration tree the exporter needs:
//! the ordered market list, the session lengths, and which markets feed the
//! composite index. `extends` inheritance belongs to the simulator and is not
//! resolved here; only keys written directly on an entry are consulted.

use std::path::Path;

use agora_export::CompositeIndex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Market class whose entry names the composite's underlying markets
const INDEX_MARKET_CLASS: &str = "IndexMarket";

/// Session length as written in the config; numeric strings are accepted
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StepCount {
    Count(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    #[serde(default)]
    session_name: Option<Value>,
    iteration_steps: StepCount,
}

#[derive(Debug, Deserialize)]
struct RawSimulation {
    markets: Vec<String>,
    sessions: Vec<RawSession>,
}

/// One timed phase of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub name: String,
    pub iteration_steps: u64,
}

/// Run topology derived from the simulator's configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    pub markets: Vec<String>,
    sessions: Vec<SessionSettings>,
    pub index: CompositeIndex,
    total_ticks: u64,
}

impl SimulationSettings {
    /// Load settings from a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let root: Value = serde_json::from_str(json)?;
        Self::from_value(&root)
    }

    /// The two-spot shock transfer setup shipped with the crate
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json_str(include_str!("../config/shock_transfer.json"))
    }

    pub fn from_value(root: &Value) -> Result<Self, ConfigError> {
        let simulation = root
            .get("simulation")
            .ok_or(ConfigError::MissingField("simulation"))?;
        let raw: RawSimulation = serde_json::from_value(simulation.clone())?;

        if raw.markets.is_empty() {
            return Err(ConfigError::InvalidField {
                field: "simulation.markets".into(),
                reason: "no markets configured".into(),
            });
        }
        if raw.sessions.is_empty() {
            return Err(ConfigError::InvalidField {
                field: "simulation.sessions".into(),
                reason: "no sessions configured".into(),
            });
        }

        let sessions = raw
            .sessions
            .into_iter()
            .enumerate()
            .map(|(i, s)| parse_session(i, s))
            .collect::<Result<Vec<_>, _>>()?;
        let total_ticks = sessions
            .iter()
            .try_fold(0u64, |total, s| total.checked_add(s.iteration_steps))
            .ok_or_else(|| ConfigError::InvalidField {
                field: "simulation.sessions".into(),
                reason: "total tick count overflows".into(),
            })?;
        let index = resolve_index(root, &raw.markets)?;

        let settings = Self {
            markets: raw.markets,
            sessions,
            index,
            total_ticks,
        };
        log::debug!(
            "Settings: {} markets, {} sessions, {} ticks, index legs {:?}",
            settings.markets.len(),
            settings.sessions.len(),
            settings.total_ticks(),
            settings.index.legs()
        );
        Ok(settings)
    }

    pub fn sessions(&self) -> &[SessionSettings] {
        &self.sessions
    }

    pub fn market_count(&self) -> usize {
        self.markets.len()
    }

    /// Sum of all session lengths
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}

fn parse_session(position: usize, raw: RawSession) -> Result<SessionSettings, ConfigError> {
    let field = || format!("simulation.sessions[{}].iterationSteps", position);
    let iteration_steps = match raw.iteration_steps {
        StepCount::Count(n) => n,
        StepCount::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidField {
                field: field(),
                reason: format!("not a tick count: {:?}", text),
            })?,
    };

    let name = match raw.session_name {
        Some(Value::String(name)) => name,
        Some(other) => other.to_string(),
        None => position.to_string(),
    };

    Ok(SessionSettings {
        name,
        iteration_steps,
    })
}

/// Find the first configured market of class `IndexMarket` and turn its
/// underlying market names into price-row positions.
fn resolve_index(root: &Value, markets: &[String]) -> Result<CompositeIndex, ConfigError> {
    let index_entry = markets.iter().find_map(|name| {
        let entry = root.get(name)?;
        (entry.get("class")?.as_str()? == INDEX_MARKET_CLASS)
            .then(|| entry.get("markets").and_then(Value::as_array))
            .flatten()
            .map(|legs| (name, legs))
    });

    let Some((index_name, legs)) = index_entry else {
        log::debug!("No index market configured, composite uses rows 0 and 1");
        return Ok(CompositeIndex::default());
    };

    let rows = legs
        .iter()
        .map(|leg| {
            let leg = leg.as_str().unwrap_or_default();
            markets
                .iter()
                .position(|m| m == leg)
                .ok_or_else(|| ConfigError::UnknownMarket {
                    index: index_name.clone(),
                    market: leg.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    CompositeIndex::from_legs(&rows).map_err(|_| ConfigError::UnsupportedIndexTopology {
        index: index_name.clone(),
        legs: rows.len(),
    })
}
