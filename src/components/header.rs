use dioxus::prelude::*;

use crate::view::APP_TITLE;

#[component]
pub fn Header(total: usize, remaining: usize) -> Element {
    rsx! {
        div { class: "header",
            h1 { class: "title", "{APP_TITLE}" }
            span { class: "meta", "{remaining} of {total} left" }
        }
    }
}
