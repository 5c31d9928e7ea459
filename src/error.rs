//! Error types for rule parsing, configuration, and the simulation lifecycle.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid rule format: {0:?} (expected B<digits>/S<digits>)")]
    InvalidRuleFormat(String),

    #[error("Invalid rule digits: {0:?} (expected numeric neighbor counts)")]
    InvalidRuleDigits(String),

    #[error("Invalid kernel size: {0} (must be odd and at least 3)")]
    InvalidKernelSize(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid state: cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
