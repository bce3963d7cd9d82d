use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the adapters around the game core.
///
/// The simulation itself never fails: collisions are ordinary terminal
/// states, not errors.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
