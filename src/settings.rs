//! Session settings, shared between the input core and its collaborators
//!
//! Settings are stored as a RON file next to the binary. A missing file
//! falls back to defaults; a broken file is reported and also falls back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a left click does to the terrain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainEditMode {
    #[default]
    Off,
    Raise,
    Lower,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub screen_width: u32,
    pub screen_height: u32,
    pub fullscreen: bool,
    /// Side length of the square terrain grid, in cells
    pub map_size: i32,
    /// Upper bound for cell elevation edits
    pub max_elevation_height: u32,
    /// Current terrain-edit interpretation of a left click
    #[serde(default)]
    pub terrain_edit_mode: TerrainEditMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            fullscreen: false,
            map_size: 128,
            max_elevation_height: 32,
            terrain_edit_mode: TerrainEditMode::Off,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no settings file at {:?}, using defaults", path);
                Self::default()
            }
            Err(err) => {
                log::warn!("could not load settings from {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
