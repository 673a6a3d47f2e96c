//! Task list transitions. Each returns a fresh list, or `None` when the
//! call would leave the list unchanged.

use crate::models::Task;

pub fn with_added(tasks: &[Task], id: u64, text: &str) -> Option<Vec<Task>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(Task::new(id, text));
    Some(next)
}

pub fn with_toggled(tasks: &[Task], id: u64) -> Option<Vec<Task>> {
    if !tasks.iter().any(|t| t.id == id) {
        return None;
    }
    let next = tasks
        .iter()
        .map(|t| if t.id == id { Task { completed: !t.completed, ..t.clone() } } else { t.clone() })
        .collect();
    Some(next)
}

pub fn without(tasks: &[Task], id: u64) -> Option<Vec<Task>> {
    let idx = tasks.iter().position(|t| t.id == id)?;
    let mut next = tasks.to_vec();
    next.remove(idx);
    Some(next)
}
