//! # Browser `localStorage` preferences
//!
//! [`LocalStorage`] is the [`PreferenceStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through [`web_sys::Storage`], so the
//! theme survives page reloads and browser restarts.
//!
//! ## Handle management
//!
//! `LocalStorage` is a zero-size struct that looks up the storage handle on
//! every call. `Storage` is not `Send`, and the lookup is a cheap property
//! access on `window`.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled by policy) or full.
//! Reads then return `None` and writes do nothing, so the theme falls back to
//! light instead of breaking the page.

use crate::preferences::PreferenceStore;

/// `window.localStorage`-backed PreferenceStore for web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
