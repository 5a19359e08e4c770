//! Carousel settings - persisted as JSON in the platform config directory.

use crate::constants::{DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_TRANSITION_MS};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "pathway-carousel";
const SETTINGS_FILE: &str = "settings.json";

/// Default location of the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Start in autoplay mode. A reload that turns it off stops autoplay;
    /// turning it back on takes effect on the next launch.
    pub autoplay: bool,
    /// Period between automatic advances
    pub autoplay_interval_ms: u64,
    /// Duration of the slot transition animation
    pub transition_ms: u64,
    /// Listen for left/right arrow keys while mounted. Read once at mount.
    pub keyboard_navigation: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            keyboard_navigation: true,
        }
    }
}

impl CarouselSettings {
    #[inline]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    #[inline]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(SettingsError::ZeroInterval);
        }
        Ok(())
    }

    /// Load and validate settings from `path`.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the default path, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
