//! Theme manager: owns the active [`ThemeMode`], persists it, and notifies
//! subscribers when it changes.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, warn};

use crate::io::settings::{load_settings, save_settings, UserSettings};
use crate::ui::theme::ThemeMode;

pub struct ThemeManager {
    mode: ThemeMode,
    subscribers: Vec<Sender<ThemeMode>>,
    /// `None` keeps the preference in memory only.
    settings_path: Option<PathBuf>,
}

impl ThemeManager {
    /// Start from the saved preference at `settings_path`, or `fallback` when
    /// the user has never chosen.
    pub fn load(settings_path: PathBuf, fallback: ThemeMode) -> Self {
        let mode = load_settings(&settings_path).theme.unwrap_or(fallback);
        debug!("Theme starts as {}", mode.label());
        Self {
            mode,
            subscribers: Vec::new(),
            settings_path: Some(settings_path),
        }
    }

    pub fn in_memory(mode: ThemeMode) -> Self {
        Self {
            mode,
            subscribers: Vec::new(),
            settings_path: None,
        }
    }

    // ── Getters ─────────────────────────────────────────────────

    pub fn get(&self) -> ThemeMode {
        self.mode
    }

    // ── Switching ───────────────────────────────────────────────

    /// Change the mode. Subscribers hear about actual changes only.
    pub fn set(&mut self, mode: ThemeMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.persist();
        self.subscribers.retain(|tx| tx.send(mode).is_ok());
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    /// A receiver that yields every future mode change. Dropping it
    /// unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<ThemeMode> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    // ── Persistence helpers ─────────────────────────────────────

    fn persist(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        let settings = UserSettings {
            theme: Some(self.mode),
        };
        if let Err(e) = save_settings(path, &settings) {
            warn!("Could not save theme preference: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_changes_only() {
        let mut themes = ThemeManager::in_memory(ThemeMode::Light);
        let rx = themes.subscribe();

        themes.set(ThemeMode::Light);
        assert!(rx.try_recv().is_err());

        assert_eq!(themes.toggle(), ThemeMode::Dark);
        assert_eq!(rx.try_recv(), Ok(ThemeMode::Dark));
        assert_eq!(themes.get(), ThemeMode::Dark);
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut themes = ThemeManager::in_memory(ThemeMode::Light);
        drop(themes.subscribe());
        let live = themes.subscribe();
        themes.toggle();
        assert_eq!(themes.subscribers.len(), 1);
        assert_eq!(live.try_recv(), Ok(ThemeMode::Dark));
    }

    #[test]
    fn preference_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut themes = ThemeManager::load(path.clone(), ThemeMode::Light);
        assert_eq!(themes.get(), ThemeMode::Light);
        themes.set(ThemeMode::Dark);

        let reloaded = ThemeManager::load(path, ThemeMode::Light);
        assert_eq!(reloaded.get(), ThemeMode::Dark);
    }
}
