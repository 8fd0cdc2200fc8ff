//! The user directory: toolbar, card grid and load-more control.
//!
//! [`DirectoryView`] owns a [`DirectoryState`] signal. The batch is fetched
//! once on mount; every interaction writes one field of the state and the
//! render re-derives the visible page from scratch.
//!
//! Load-more goes through [`use_load_more`], which delays the reveal and
//! cancels it if the view is dropped mid-delay.

use dioxus::prelude::*;
use store::{DirectoryState, SortKey, UserRecord};

use crate::config::use_config;
use crate::load_more::use_load_more;
use crate::load_more_button::LoadMoreButton;
use crate::theme::{use_theme, Palette, ThemeToggle};
use crate::toolbar::{SearchInput, SortSelect};
use crate::user_card::UserCard;

const DIRECTORY_CSS: Asset = asset!("/assets/styling/directory.css");

#[component]
pub fn DirectoryView() -> Element {
    let config = use_config();
    let theme = use_theme();
    let mut state = use_signal(|| DirectoryState::new(&config.view));

    // Fetch the batch on mount
    let source_config = config.source.clone();
    let _ = use_resource(move || {
        let source_config = source_config.clone();
        async move {
            let source = api::RandomUserSource::from_config(&source_config);
            if let Some(batch) = api::fetch_directory(&source, source_config.batch_size).await {
                state.write().set_records(batch);
            }
        }
    });

    let load_more = use_load_more(state, config.view.load_more_delay_ms);

    let palette = Palette::for_theme(theme());
    let (cards, has_more, loading, search_term, sort_key) = {
        let current = state.read();
        let page = current.page();
        let cards: Vec<UserRecord> = page.visible.into_iter().cloned().collect();
        (
            cards,
            page.has_more,
            current.is_loading(),
            current.search_term().to_string(),
            current.sort_key(),
        )
    };

    rsx! {
        document::Stylesheet { href: DIRECTORY_CSS }

        div {
            class: "directory {palette.page}",
            div {
                class: "directory-inner",

                div {
                    class: "directory-toolbar",
                    SearchInput {
                        value: search_term,
                        palette: palette,
                        on_input: move |term: String| state.write().set_search_term(term),
                    }
                    div {
                        class: "directory-controls",
                        SortSelect {
                            value: sort_key,
                            palette: palette,
                            on_change: move |key: SortKey| state.write().set_sort_key(key),
                        }
                        ThemeToggle {}
                    }
                }

                div {
                    class: "directory-grid",
                    for user in cards {
                        UserCard {
                            key: "{user.id}",
                            user: user,
                            palette: palette,
                        }
                    }
                }

                if has_more {
                    LoadMoreButton {
                        loading: loading,
                        on_click: load_more,
                    }
                }
            }
        }
    }
}
