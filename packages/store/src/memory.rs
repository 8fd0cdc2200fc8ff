use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::preferences::PreferenceStore;

/// In-memory PreferenceStore for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeStore};

    #[test]
    fn test_get_and_set() {
        let prefs = MemoryPreferences::new();
        assert!(prefs.get("darkMode").is_none());

        prefs.set("darkMode", "true");
        assert_eq!(prefs.get("darkMode").as_deref(), Some("true"));

        prefs.set("darkMode", "false");
        assert_eq!(prefs.get("darkMode").as_deref(), Some("false"));
    }

    #[test]
    fn test_clones_share_values() {
        let prefs = MemoryPreferences::new();
        let other = prefs.clone();
        prefs.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_theme_survives_new_store() {
        let prefs = MemoryPreferences::new();

        let store = ThemeStore::new(prefs.clone(), "darkMode");
        assert_eq!(store.read(), Theme::Light);
        store.persist(Theme::Dark);

        // Re-open over the same backing map
        let reopened = ThemeStore::new(prefs, "darkMode");
        assert_eq!(reopened.read(), Theme::Dark);
    }
}
