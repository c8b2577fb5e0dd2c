//! Settings persistence for the demo.
//!
//! Thin typed wrapper over eframe's string storage. Values round-trip
//! through JSON so any serde type works; unreadable or missing values fall
//! back to the caller's default.

use serde::{Deserialize, Serialize};

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `default` when missing or invalid.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Serializes and saves a setting.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut storage = MockStorage {
            data: HashMap::new(),
        };

        SettingsCoordinator::save_setting(&mut storage, "mark_set", &2usize);
        let loaded: usize = SettingsCoordinator::load_setting_or(Some(&storage), "mark_set", 0);
        assert_eq!(loaded, 2);
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let storage = MockStorage {
            data: HashMap::new(),
        };
        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "dark_mode", true);
        assert!(loaded);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let mut storage = MockStorage {
            data: HashMap::new(),
        };
        storage.set_string("left_index", "not json".to_string());
        let loaded: usize = SettingsCoordinator::load_setting_or(Some(&storage), "left_index", 3);
        assert_eq!(loaded, 3);
    }
}
