//! UI preference persistence.
//!
//! Preferences are stored as JSON strings in eframe's persistent storage.
//! Only layout preferences go here; credential values are never written.

use crate::app::AppState;
use s2w::Tab;
use serde::{Deserialize, Serialize};

const SELECTED_TAB_KEY: &str = "selected_tab";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(storage) = storage else {
            return default;
        };
        let Some(json_str) = storage.get_string(key) else {
            return default;
        };

        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring stored setting '{}': {}", key, e);
                default
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!("Could not save setting '{}': {}", key, e),
        }
    }

    /// Restores the selected tab, defaulting to Credentials.
    pub fn load_selected_tab(storage: Option<&dyn eframe::Storage>) -> Tab {
        Self::load_setting_or(storage, SELECTED_TAB_KEY, Tab::default())
    }

    pub fn save_selected_tab(storage: &mut dyn eframe::Storage, tab: Tab) {
        Self::save_setting(storage, SELECTED_TAB_KEY, &tab);
    }

    /// Saves every persisted preference of `state`.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, state: &AppState) {
        Self::save_selected_tab(storage, state.tabs.selected());
    }
}
