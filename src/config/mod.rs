//! Engine settings: locale for message resolution and the display currency.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub locale: String,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
        }
    }
}

pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Result<Self, EngineError> {
        let base = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("progress_core");
        Self::from_base(&base)
    }

    pub fn with_base_dir(base: &Path) -> Result<Self, EngineError> {
        Self::from_base(base)
    }

    fn from_base(base: &Path) -> Result<Self, EngineError> {
        fs::create_dir_all(base)?;
        Ok(Self {
            path: base.join(SETTINGS_FILE),
        })
    }

    /// Loads saved settings, falling back to defaults when none exist.
    pub fn load(&self) -> Result<Settings, EngineError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, settings: &Settings) -> Result<(), EngineError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
