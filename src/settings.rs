use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    GridSize, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS,
};

const APP_DIR_NAME: &str = "swipe-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Smallest playable grid edge; anything below makes the initial three
/// segment snake unplaceable or instantly dead.
const MIN_GRID_EDGE: u16 = 5;

/// Errors raised while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User preferences persisted between runs.
///
/// Only presentation and board parameters live here; scores are deliberately
/// not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_interval_ms: u64,
    pub theme: String,
    pub mouse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            theme: "classic".to_string(),
            mouse: true,
        }
    }
}

impl Settings {
    /// Returns the grid bounds, clamped to the playable minimum.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        GridSize {
            width: self.grid_width.max(MIN_GRID_EDGE),
            height: self.grid_height.max(MIN_GRID_EDGE),
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from disk.
///
/// Returns defaults when the file does not exist (first run). Returns `Err`
/// when the file exists but cannot be read or parsed, so the caller can
/// surface a warning before entering raw terminal mode.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Saves settings to disk, creating parent directories when needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn save_settings_to_path(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
