//! Shared preference constructor for all platforms.
//!
//! Returns the [`store::PreferenceStore`] appropriate for the target:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStorage`
//! - **Desktop** (native): one file per key via [`store::FilePreferences`]

use store::ThemeStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Preferences = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Preferences = store::FilePreferences;

/// Create the platform preference store.
pub fn make_preferences() -> Preferences {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("user-directory");
        store::FilePreferences::new(base)
    }
}

/// Theme store over the platform preferences.
pub fn make_theme_store(key: &str) -> ThemeStore<Preferences> {
    ThemeStore::new(make_preferences(), key)
}
