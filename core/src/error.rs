use crate::types::AppConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("config error: {0}")]
    Config(#[from] AppConfigError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Failure of a single lookup.
///
/// Never fatal to the engine: a failed lookup degrades to an empty suggestion
/// list and is kept in the search state for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no async runtime available: {0}")]
    NoRuntime(String),
}
