//! # Theme preference
//!
//! The directory has a single persisted preference: light or dark. [`Theme`] is
//! the in-memory value and [`ThemeStore`] reads and writes it through any
//! [`PreferenceStore`].
//!
//! The value is stored as the string `"true"` (dark) or `"false"` (light).
//! Anything else, including a missing key, reads as [`Theme::Light`].
//!
//! Persisting has no side effects beyond the store. How a theme looks is
//! decided by the UI from the value alone.

use crate::preferences::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// The other theme.
    pub fn toggle(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Stored representation.
    pub fn as_stored(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Parse a stored value. Unparseable values mean light.
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value.parse::<bool>().unwrap_or(false))
    }
}

/// Reads and persists the theme under a fixed key.
#[derive(Clone, Debug)]
pub struct ThemeStore<P> {
    prefs: P,
    key: String,
}

impl<P: PreferenceStore> ThemeStore<P> {
    pub fn new(prefs: P, key: impl Into<String>) -> Self {
        Self {
            prefs,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored theme, light when absent or unparseable.
    pub fn read(&self) -> Theme {
        self.prefs
            .get(&self.key)
            .map(|value| Theme::from_stored(&value))
            .unwrap_or_default()
    }

    pub fn toggle(current: Theme) -> Theme {
        current.toggle()
    }

    pub fn persist(&self, theme: Theme) {
        self.prefs.set(&self.key, theme.as_stored());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPreferences;

    #[test]
    fn test_read_defaults_to_light() {
        let store = ThemeStore::new(MemoryPreferences::new(), "darkMode");
        assert_eq!(store.read(), Theme::Light);
    }

    #[test]
    fn test_read_unparseable_is_light() {
        let prefs = MemoryPreferences::new();
        let store = ThemeStore::new(&prefs, "darkMode");

        for value in ["", "yes", "1", "TRUE ", "dark"] {
            prefs.set("darkMode", value);
            assert_eq!(store.read(), Theme::Light, "value {value:?}");
        }

        prefs.set("darkMode", "true");
        assert_eq!(store.read(), Theme::Dark);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(ThemeStore::<MemoryPreferences>::toggle(theme), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_persisted_value_matches_toggled_value() {
        let prefs = MemoryPreferences::new();
        let store = ThemeStore::new(&prefs, "darkMode");

        let mut theme = store.read();
        for _ in 0..3 {
            theme = theme.toggle();
            store.persist(theme);
            assert_eq!(store.read(), theme);
            assert_eq!(prefs.get("darkMode").as_deref(), Some(theme.as_stored()));
        }
    }

    #[test]
    fn test_keys_are_independent() {
        let prefs = MemoryPreferences::new();
        let a = ThemeStore::new(&prefs, "a");
        let b = ThemeStore::new(&prefs, "b");
        a.persist(Theme::Dark);
        assert_eq!(a.read(), Theme::Dark);
        assert_eq!(b.read(), Theme::Light);
        assert_eq!(b.key(), "b");
    }
}
