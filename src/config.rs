use crate::constants::{DEFAULT_SCAN_INTERVAL_SECS, WINDOW_CAPTURE_KIND};
use crate::error::AppError;
use crate::models::OffsetSettings;
use crate::tracker::TrackerConfig;
use crate::validation::{validate_offsets, validate_scan_interval, validate_source_kind};
use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file contents.
///
/// Offsets sit at the top level under the host's property names, so the same
/// JSON shape is accepted here and in `settings` bridge messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub offsets: OffsetSettings,
    pub scan_interval_secs: f64,
    pub window_capture_kind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offsets: OffsetSettings::default(),
            scan_interval_secs: DEFAULT_SCAN_INTERVAL_SECS,
            window_capture_kind: WINDOW_CAPTURE_KIND.to_string(),
        }
    }
}

impl Config {
    /// Load and validate the config at `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config at `path`, writing defaults there first if it is missing.
    pub fn load_or_init(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.save(path)?;
        info!("Wrote default settings to {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_offsets(&self.offsets)?;
        validate_scan_interval(self.scan_interval_secs)?;
        validate_source_kind(&self.window_capture_kind)?;
        Ok(())
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            scan_interval_secs: self.scan_interval_secs,
            window_capture_kind: self.window_capture_kind.clone(),
        }
    }
}

/// Default settings file location in the platform config directory.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let proj_dirs =
        ProjectDirs::from("com", "wintrack", "WinTrack").ok_or(AppError::NoProjectDirs)?;
    Ok(proj_dirs.config_dir().join("settings.json"))
}
