//! Runner errors

use agora_export::ExportError;
use agora_ports::RunError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Missing config field: {0}")]
    MissingField(&'static str),

    #[error("Invalid config field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Index market {index} refers to unknown market {market}")]
    UnknownMarket { index: String, market: String },

    #[error(
        "Index market {index} lists {legs} underlying markets; only two-market composites are supported"
    )]
    UnsupportedIndexTopology { index: String, legs: usize },
}

/// Anything that can stop an export session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation run failed: {0}")]
    Run(#[from] RunError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
