use dioxus::prelude::*;
use store::UserRecord;

use crate::theme::Palette;

/// Photo, name, gender and phone of one person.
#[component]
pub fn UserCard(user: UserRecord, palette: Palette) -> Element {
    rsx! {
        div {
            class: "user-card {palette.card}",
            div {
                class: "user-card-body",
                div {
                    class: "user-card-photo",
                    img {
                        src: "{user.picture}",
                        alt: "Profile",
                    }
                }
                div {
                    class: "user-card-details",
                    h3 { class: "user-card-name", "{user.first_name} {user.last_name}" }
                    p { class: "user-card-label", "Gender" }
                    p { class: "user-card-value user-card-gender", "{user.gender}" }
                    p { class: "user-card-label", "Phone Number" }
                    p { class: "user-card-value", "{user.phone}" }
                }
            }
        }
    }
}
