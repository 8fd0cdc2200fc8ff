use dioxus::prelude::*;

use views::Directory;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Directory {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::load_config);

    rsx! {
        ui::ThemeProvider {
            Router::<Route> {}
        }
    }
}
