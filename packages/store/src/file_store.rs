//! # Filesystem-backed preferences
//!
//! [`FilePreferences`] is a [`PreferenceStore`] that keeps one small file per
//! key. It is used on desktop so the theme survives app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── prefs/
//!     └── <key>          # the stored value, e.g. "true"
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/user-directory/` |
//! | Linux | `~/.local/share/user-directory/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\user-directory\` |

use std::path::PathBuf;

use crate::preferences::PreferenceStore;

/// Filesystem-backed PreferenceStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FilePreferences {
    base: PathBuf,
}

impl FilePreferences {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn prefs_dir(&self) -> PathBuf {
        self.base.join("prefs")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.prefs_dir().join(key)
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.key_path(key)).ok()?;
        Some(content.trim().to_string())
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }
}
