use dioxus::prelude::*;

use crate::models::Filter;

#[component]
pub fn FilterBar(active: Filter, on_select: EventHandler<Filter>) -> Element {
    rsx! {
        div { class: "filters",
            div { class: "tabs",
                for f in Filter::ALL {
                    button {
                        key: "{f.label()}",
                        class: if f == active { "tab active" } else { "tab" },
                        onclick: move |_| on_select.call(f),
                        "{f.label()}"
                    }
                }
            }
        }
    }
}
