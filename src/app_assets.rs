use dioxus::prelude::*;

use crate::view::APP_TITLE;

#[cfg(target_os = "android")]
const INLINE_CSS: &str = include_str!("../assets/main.css");
#[cfg(not(target_os = "android"))]
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Window title and stylesheet for the task list page.
#[component]
pub fn AppHead() -> Element {
    rsx! {
        document::Title { "{APP_TITLE}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        { stylesheet() }
    }
}

// the Android webview gets no asset server, so inline the css there
#[cfg(target_os = "android")]
fn stylesheet() -> Element {
    rsx! { style { "{INLINE_CSS}" } }
}

#[cfg(not(target_os = "android"))]
fn stylesheet() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: MAIN_CSS } }
}
