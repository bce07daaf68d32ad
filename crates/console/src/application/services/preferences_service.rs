//! Preferences Service - persisted UI preferences
//!
//! Backed by the platform storage provider (localStorage in the browser,
//! a JSON file on desktop). Currently holds the color theme and an
//! optional API base URL override.

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Console color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Clone)]
pub struct PreferencesService<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> PreferencesService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn theme(&self) -> ThemeMode {
        self.storage
            .load(storage_keys::THEME)
            .map(|v| ThemeMode::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.storage.save(storage_keys::THEME, mode.as_str());
    }

    /// Flip the persisted theme and return the new mode.
    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    /// API base URL override, if the user saved one
    pub fn api_url(&self) -> Option<String> {
        self.storage
            .load(storage_keys::API_URL)
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl StorageProvider for MemoryStorage {
        fn save(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        fn load(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }

    #[test]
    fn theme_defaults_to_light_and_persists_toggles() {
        let service = PreferencesService::new(MemoryStorage::default());
        assert_eq!(service.theme(), ThemeMode::Light);
        assert_eq!(service.toggle_theme(), ThemeMode::Dark);
        assert_eq!(service.theme(), ThemeMode::Dark);
        assert_eq!(service.toggle_theme(), ThemeMode::Light);
    }

    #[test]
    fn empty_api_url_counts_as_unset() {
        let storage = MemoryStorage::default();
        storage.save(storage_keys::API_URL, "");
        let service = PreferencesService::new(storage);
        assert_eq!(service.api_url(), None);
    }
}
