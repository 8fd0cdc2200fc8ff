use dioxus::prelude::*;
use store::SortKey;

use crate::theme::Palette;

#[component]
pub fn SearchInput(value: String, palette: Palette, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "directory-search {palette.input}",
            r#type: "text",
            placeholder: "Search by name or phone...",
            value: "{value}",
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
        }
    }
}

#[component]
pub fn SortSelect(value: SortKey, palette: Palette, on_change: EventHandler<SortKey>) -> Element {
    rsx! {
        select {
            class: "directory-sort {palette.input}",
            onchange: move |evt: FormEvent| on_change.call(SortKey::from_value(&evt.value())),
            for key in SortKey::ALL {
                option {
                    key: "{key.as_value()}",
                    value: key.as_value(),
                    selected: key == value,
                    "{key.label()}"
                }
            }
        }
    }
}
