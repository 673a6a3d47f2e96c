use dioxus::prelude::Signal;
use tracing::debug;

use crate::ids::IdSequence;
use crate::models::{Filter, Task};
use crate::ops;
use crate::storage::{PersistenceBridge, Slot};
use crate::view::visible_tasks;

/// Notified with the full list after every change to it.
pub trait TaskListObserver {
    fn tasks_changed(&mut self, tasks: &[Task]);
}

impl<F: FnMut(&[Task])> TaskListObserver for F {
    fn tasks_changed(&mut self, tasks: &[Task]) {
        self(tasks)
    }
}

/// Tasks, draft and filter of the task list view. The task list only
/// changes through `add`, `toggle` and `delete`.
pub struct TodoStore {
    tasks: Vec<Task>,
    draft: String,
    filter: Filter,
    ids: IdSequence,
    observers: Vec<Box<dyn TaskListObserver>>,
}

impl TodoStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        let ids = IdSequence::seeded_from(&tasks);
        Self { tasks, draft: String::new(), filter: Filter::default(), ids, observers: Vec::new() }
    }

    /// Loads the saved list and keeps the slot in sync from then on.
    pub fn open<S: Slot + 'static>(bridge: PersistenceBridge<S>) -> Self {
        let mut store = Self::new(bridge.load());
        store.subscribe(bridge);
        store
    }

    pub fn subscribe(&mut self, observer: impl TaskListObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks, self.filter)
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Appends a task and clears the draft. Blank text changes nothing.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.ids.next_id(&self.tasks);
        let next = ops::with_added(&self.tasks, id, text)?;
        debug!(id, "task added");
        self.commit(next);
        self.draft.clear();
        Some(id)
    }

    pub fn submit_draft(&mut self) -> Option<u64> {
        let draft = std::mem::take(&mut self.draft);
        let added = self.add(&draft);
        if added.is_none() {
            self.draft = draft;
        }
        added
    }

    pub fn toggle(&mut self, id: u64) -> bool {
        match ops::with_toggled(&self.tasks, id) {
            Some(next) => {
                debug!(id, "task toggled");
                self.commit(next);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: u64) -> bool {
        match ops::without(&self.tasks, id) {
            Some(next) => {
                debug!(id, "task deleted");
                self.commit(next);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        for observer in &mut self.observers {
            observer.tasks_changed(&self.tasks);
        }
    }
}

/// Context shared by the view components.
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: Signal<TodoStore>,
}
