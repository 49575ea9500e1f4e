//! App settings persistence, plus the settings-page draft autosave.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::storage::{keys, Storage};

/// User-tunable app settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub dark_mode: bool,
    pub page_size: i64,
    pub debug: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            page_size: 10,
            debug: false,
        }
    }
}

/// Settings service over a [`Storage`].
#[derive(Clone)]
pub struct Settings {
    storage: Storage,
}

impl Settings {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Returns the saved settings, or defaults when none were saved yet.
    pub fn load(&self) -> AppSettings {
        self.storage.get(keys::SETTINGS).unwrap_or_default()
    }

    pub fn save(&self, settings: &AppSettings) -> Result<(), ServiceError> {
        self.storage.set(keys::SETTINGS, settings)
    }

    /// Returns the auto-saved draft text, if any.
    pub fn draft(&self) -> Option<String> {
        self.storage.get(keys::DRAFT_SETTINGS)
    }

    pub fn save_draft(&self, text: &str) -> Result<(), ServiceError> {
        self.storage.set(keys::DRAFT_SETTINGS, &text)
    }

    pub fn clear_draft(&self) -> Result<(), ServiceError> {
        self.storage.remove(keys::DRAFT_SETTINGS)
    }
}
