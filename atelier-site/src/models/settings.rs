use beacon_lib::storage::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};

/// Storage key for the persisted site settings.
pub const SETTINGS_KEY: &str = "siteSettings";

/// Site-wide preferences, persisted next to the content store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// "dark" or "light".
    pub theme: String,
    /// Master switch for the in-app notification toasts.
    pub notifications_enabled: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            notifications_enabled: true,
        }
    }
}

/// Load settings, falling back to defaults when absent or unreadable.
pub fn load(storage: &dyn KeyValueStore) -> SiteSettings {
    match storage.get(SETTINGS_KEY) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Discarding unreadable site settings: {}", e);
            SiteSettings::default()
        }),
        Ok(None) => SiteSettings::default(),
        Err(e) => {
            log::warn!("Failed to read site settings: {}", e);
            SiteSettings::default()
        }
    }
}

/// Persist settings.
pub fn save(storage: &dyn KeyValueStore, settings: &SiteSettings) -> Result<(), StorageError> {
    let json = serde_json::to_string(settings).map_err(|e| StorageError::Write {
        key: SETTINGS_KEY.to_string(),
        reason: e.to_string(),
    })?;
    storage.set(SETTINGS_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_lib::storage::MemoryStore;

    #[test]
    fn defaults_when_nothing_is_stored() {
        let storage = MemoryStore::new();
        let settings = load(&storage);
        assert_eq!(settings, SiteSettings::default());
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn roundtrips_through_storage() {
        let storage = MemoryStore::new();
        let settings = SiteSettings {
            theme: "light".to_string(),
            notifications_enabled: false,
        };
        save(&storage, &settings).unwrap();
        assert_eq!(load(&storage), settings);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let storage = MemoryStore::new();
        storage.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(load(&storage), SiteSettings::default());
    }
}
