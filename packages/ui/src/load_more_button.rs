use dioxus::prelude::*;

#[component]
pub fn LoadMoreButton(loading: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "load-more",
            button {
                class: "load-more-button",
                disabled: loading,
                onclick: move |_| on_click.call(()),
                if loading {
                    "Loading..."
                } else {
                    "Load More"
                }
            }
        }
    }
}
