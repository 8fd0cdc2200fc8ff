pub mod collate;
pub mod config;
pub mod directory;
pub mod load_more;
pub mod models;
pub mod preferences;
pub mod theme;

mod memory;
pub use memory::MemoryPreferences;

mod file_store;
pub use file_store::FilePreferences;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::{DirectoryConfig, SourceConfig, ThemeConfig, ViewConfig};
pub use directory::{DirectoryPage, DirectoryState};
pub use load_more::{LoadMore, LoadPhase};
pub use models::{SortKey, UserRecord};
pub use preferences::PreferenceStore;
pub use theme::{Theme, ThemeStore};
