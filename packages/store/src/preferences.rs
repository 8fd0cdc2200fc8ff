//! # Preference storage
//!
//! A [`PreferenceStore`] is a small string key-value store that survives
//! restarts. The theme store is written against this trait so the same logic
//! runs on every platform:
//!
//! | Implementation | Backing | Used by |
//! |----------------|---------|---------|
//! | [`crate::MemoryPreferences`] | in-process map | tests |
//! | [`crate::FilePreferences`] | one file per key | desktop |
//! | `crate::LocalStorage` | `window.localStorage` | web (`web` feature, wasm32) |
//!
//! Reads of missing or unreadable keys return `None`. Writes never fail from
//! the caller's point of view; backends drop errors.

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
