use thiserror::Error;

/// Errors raised by an observer while it ingests runner events
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The runner emitted an event without a required attribute
    #[error("Malformed {event} event: missing `{field}`")]
    MalformedEvent {
        event: &'static str,
        field: &'static str,
    },
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// Errors that abort a simulation run
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Observer rejected event: {0}")]
    Sink(#[from] SinkError),

    #[error("Unreadable event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RunResult<T> = std::result::Result<T, RunError>;
