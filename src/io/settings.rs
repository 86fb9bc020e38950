//! User preferences persisted in the OS config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ui::theme::ThemeMode;

const SETTINGS_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// `None` until the user picks a theme.
    pub theme: Option<ThemeMode>,
}

/// Where preferences live; `None` falls back to the working directory.
pub fn settings_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "Folio")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

/// Missing or unreadable files give the defaults.
pub fn load_settings(path: &Path) -> UserSettings {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!("No preferences at {}: {}", path.display(), e);
            return UserSettings::default();
        }
    };
    serde_json::from_str(&text).unwrap_or_else(|e| {
        warn!("Ignoring malformed preferences {}: {}", path.display(), e);
        UserSettings::default()
    })
}

pub fn save_settings(path: &Path, settings: &UserSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|e| format!("Serialization error: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
