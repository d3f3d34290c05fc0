use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Board construction failure.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum BoardError {
    #[error("board must have at least one cell, got {width}x{height}")]
    Empty { width: u16, height: u16 },
}

/// Failure to load or validate runtime settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("tick interval {requested_ms} ms is below the {minimum_ms} ms minimum")]
    TickTooShort { requested_ms: u64, minimum_ms: u64 },
}
