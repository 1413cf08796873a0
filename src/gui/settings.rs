use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    i18n::Language,
    store::DeckStore,
};

/// Persisted user preferences, saved as `settings.json` in the app data dir.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub language: Language,
    pub store_url: String,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: Language::default(),
            store_url: DeckStore::DEFAULT_BASE_URL.to_string(),
        }
    }
}
