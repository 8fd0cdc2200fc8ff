use dioxus::prelude::*;

#[component]
pub fn Directory() -> Element {
    rsx! {
        ui::DirectoryView {}
    }
}
