//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::{load_config, use_config};

mod delay;

mod prefs;
pub use prefs::{make_preferences, make_theme_store, Preferences};

mod theme;
pub use theme::{use_theme, Palette, ThemeProvider, ThemeSignal, ThemeToggle};

mod toolbar;
pub use toolbar::{SearchInput, SortSelect};

mod user_card;
pub use user_card::UserCard;

mod load_more;
pub use load_more::use_load_more;

mod load_more_button;
pub use load_more_button::LoadMoreButton;

mod directory_view;
pub use directory_view::DirectoryView;
