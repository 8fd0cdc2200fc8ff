//! Theme context, toggle button and presentation palette.
//!
//! The theme is read from storage once, when [`ThemeProvider`] is created, and
//! written back on every toggle. Nothing outside the component tree is touched:
//! components ask [`Palette::for_theme`] for their classes instead.

use dioxus::prelude::*;
use store::{Theme, ThemeStore};

use crate::config::use_config;
use crate::icons::{FaMoon, FaSun};
use crate::prefs::{make_theme_store, Preferences};
use crate::Icon;

/// Current theme, shared through context.
pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Classes for every themed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub input: &'static str,
    pub toggle: &'static str,
    pub card: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        page: "theme-light",
        input: "control--light",
        toggle: "theme-toggle--light",
        card: "user-card--light",
    };

    pub const DARK: Palette = Palette {
        page: "theme-dark",
        input: "control--dark",
        toggle: "theme-toggle--dark",
        card: "user-card--dark",
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

/// Reads the stored theme and provides it to `children`.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let config = use_config();
    let theme = use_signal(|| {
        let theme = make_theme_store(&config.theme.storage_key).read();
        tracing::debug!("Loaded theme {:?}", theme);
        theme
    });

    use_context_provider(|| theme);

    rsx! {
        {children}
    }
}

/// Sun/moon button that flips and persists the theme.
#[component]
pub fn ThemeToggle() -> Element {
    let config = use_config();
    let mut theme = use_theme();
    let current = theme();
    let palette = Palette::for_theme(current);
    let storage_key = config.theme.storage_key;

    let onclick = move |_| {
        let next = ThemeStore::<Preferences>::toggle(theme());
        make_theme_store(&storage_key).persist(next);
        theme.set(next);
    };

    rsx! {
        button {
            class: "theme-toggle {palette.toggle}",
            title: "Toggle theme",
            onclick: onclick,
            if current.is_dark() {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), Palette::LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::DARK);
        assert_eq!(Palette::for_theme(Theme::Light.toggle()), Palette::DARK);
    }

    #[test]
    fn test_palettes_differ_everywhere() {
        let (light, dark) = (Palette::LIGHT, Palette::DARK);
        assert_ne!(light.page, dark.page);
        assert_ne!(light.input, dark.input);
        assert_ne!(light.toggle, dark.toggle);
        assert_ne!(light.card, dark.card);
    }
}
