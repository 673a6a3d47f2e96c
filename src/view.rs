use crate::models::{Filter, Task};

pub const APP_TITLE: &str = "✅ To-Do App";
pub const INPUT_PLACEHOLDER: &str = "Enter a task";
pub const EMPTY_PLACEHOLDER: &str = "No tasks here. ✍️";

/// Tasks shown under `filter`, in list order.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new(1, "a"),
            Task { completed: true, ..Task::new(2, "b") },
            Task::new(3, "c"),
            Task { completed: true, ..Task::new(4, "d") },
        ]
    }

    fn ids(tasks: Vec<&Task>) -> Vec<u64> {
        tasks.into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn all_is_identity() {
        assert_eq!(ids(visible_tasks(&sample(), Filter::All)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn active_and_completed_keep_order() {
        assert_eq!(ids(visible_tasks(&sample(), Filter::Active)), vec![1, 3]);
        assert_eq!(ids(visible_tasks(&sample(), Filter::Completed)), vec![2, 4]);
    }

    #[test]
    fn empty_list_projects_to_empty() {
        for filter in Filter::ALL {
            assert!(visible_tasks(&[], filter).is_empty());
        }
    }

    #[test]
    fn counts_open_tasks() {
        assert_eq!(remaining_count(&sample()), 2);
    }
}
