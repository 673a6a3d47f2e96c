use dioxus::prelude::*;

use crate::models::Task;

#[component]
pub fn TodoItem(task: Task, on_toggle: EventHandler<u64>, on_remove: EventHandler<u64>) -> Element {
    let id = task.id;
    rsx! {
        li { class: "list-item",
            span {
                class: if task.completed { "item-text completed" } else { "item-text" },
                onclick: move |_| on_toggle.call(id),
                "{task.text}"
            }
            button {
                class: "btn btn-danger btn-icon",
                title: "Delete task",
                onclick: move |_| on_remove.call(id),
                "❌"
            }
        }
    }
}
