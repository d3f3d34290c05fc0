use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{
    BoardMetric, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_INITIAL_GROWTH,
    DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use crate::error::SettingsError;

const APP_DIR_NAME: &str = "torus-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Runtime settings, read from JSON and overridable from the command line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_width: u16,
    pub board_height: u16,
    pub tick_interval_ms: u64,
    /// Segments grown onto the fresh snake before the first tick.
    pub initial_growth: usize,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            initial_growth: DEFAULT_INITIAL_GROWTH,
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from the platform config directory.
    ///
    /// A missing file yields defaults.
    pub fn load() -> Result<Self, SettingsError> {
        match settings_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads settings from `path`; a missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the values and returns the board they describe.
    pub fn validate(&self) -> Result<BoardMetric, SettingsError> {
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(SettingsError::TickTooShort {
                requested_ms: self.tick_interval_ms,
                minimum_ms: MIN_TICK_INTERVAL_MS,
            });
        }

        Ok(BoardMetric::new(self.board_width, self.board_height)?)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Returns the platform-correct settings file path.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
