use dioxus::prelude::*;

use crate::components::{add_form::AddForm, filter_bar::FilterBar, header::Header, todo_item::TodoItem};
use crate::models::{Filter, Task};
use crate::state::AppState;
use crate::view::{remaining_count, EMPTY_PLACEHOLDER};

#[component]
pub fn TaskList() -> Element {
    let state = use_context::<AppState>();
    let mut store = state.store;

    let (draft, active_filter, total, remaining, visible) = {
        let s = store.read();
        let visible: Vec<Task> = s.visible().into_iter().cloned().collect();
        (s.draft().to_string(), s.filter(), s.tasks().len(), remaining_count(s.tasks()), visible)
    };

    rsx! {
        div { class: "app",
            div { class: "card",
                Header { total: total, remaining: remaining }
                AddForm {
                    draft: draft,
                    on_draft: move |text: String| store.write().set_draft(text),
                    on_submit: move |_| {
                        store.write().submit_draft();
                    },
                }
                FilterBar { active: active_filter, on_select: move |f: Filter| store.write().set_filter(f) }
                if visible.is_empty() {
                    p { class: "empty", "{EMPTY_PLACEHOLDER}" }
                } else {
                    ul { class: "list",
                        for task in visible.into_iter() {
                            TodoItem {
                                key: "task-{task.id}",
                                task: task.clone(),
                                on_toggle: move |id: u64| {
                                    store.write().toggle(id);
                                },
                                on_remove: move |id: u64| {
                                    store.write().delete(id);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
