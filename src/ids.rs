use std::collections::HashSet;

use crate::models::Task;

/// Increasing task ids, seeded past every id already in the list. Once the
/// counter runs past `u64::MAX` it falls back to the smallest free id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<u64>,
}

impl IdSequence {
    pub fn seeded_from(tasks: &[Task]) -> Self {
        let next = match tasks.iter().map(|t| t.id).max() {
            Some(max_id) => max_id.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// An id not used by any task in `taken`.
    pub fn next_id(&mut self, taken: &[Task]) -> u64 {
        if let Some(id) = self.next {
            if !taken.iter().any(|t| t.id == id) {
                self.next = id.checked_add(1);
                return id;
            }
        }
        self.next = None;
        smallest_free(taken)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

fn smallest_free(taken: &[Task]) -> u64 {
    let used: HashSet<u64> = taken.iter().map(|t| t.id).collect();
    // a finite list always leaves a gap
    (1..=u64::MAX).find(|id| !used.contains(id)).unwrap_or(0)
}
