use dioxus::prelude::*;
use store::DirectoryConfig;

const DIRECTORY_TOML: &str = include_str!("../directory.toml");

/// Parse the bundled `directory.toml`, falling back to defaults.
pub fn load_config() -> DirectoryConfig {
    match DirectoryConfig::from_toml(DIRECTORY_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Invalid {}, using defaults: {}",
                DirectoryConfig::filename(),
                e
            );
            DirectoryConfig::default()
        }
    }
}

/// Configuration provided by the app root.
pub fn use_config() -> DirectoryConfig {
    use_context::<DirectoryConfig>()
}
