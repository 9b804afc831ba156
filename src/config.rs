use std::fs;
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::basket::SearchTab;
use crate::constants::DEFAULT_API_URL;

const CONFIG_DIR_NAME: &str = "basketlook";
const CONFIG_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub api_base_url: String,
    /// Search tab preselected on launch; updated to the last-used tab on
    /// quit.
    pub default_tab: SearchTab,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_tab: SearchTab::default(),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads settings from the platform config directory. A missing or
/// unreadable file falls back to defaults; that is not a fatal error.
pub fn load_settings() -> AppSettings {
    let Some(path) = settings_path() else {
        return AppSettings::default();
    };
    match fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), %e, "invalid settings file, using defaults");
                AppSettings::default()
            }
        },
        Err(_) => AppSettings::default(),
    }
}

/// Persists settings to the platform config directory.
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    let path = settings_path().ok_or_else(|| eyre!("no config directory on this platform"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(settings)?;
    fs::write(&path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_local_api() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
        assert_eq!(settings.default_tab, SearchTab::BtlRef);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = AppSettings {
            api_base_url: "http://cs.example.com".to_string(),
            default_tab: SearchTab::Email,
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        let parsed: AppSettings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.api_base_url, settings.api_base_url);
        assert_eq!(parsed.default_tab, SearchTab::Email);
    }
}
