use dioxus::events::Key;
use dioxus::prelude::*;

use crate::view::INPUT_PLACEHOLDER;

/// Draft input plus "Add" button. Enter in the input submits like the button.
#[component]
pub fn AddForm(draft: String, on_draft: EventHandler<String>, on_submit: EventHandler<()>) -> Element {
    rsx! {
        div { class: "add",
            input {
                class: "text",
                r#type: "text",
                placeholder: INPUT_PLACEHOLDER,
                value: "{draft}",
                oninput: move |e: FormEvent| on_draft.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        on_submit.call(());
                    }
                },
            }
            button { class: "btn btn-primary", onclick: move |_| on_submit.call(()), "Add" }
        }
    }
}
