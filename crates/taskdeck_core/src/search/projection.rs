//! Filter and title-search projection over the task sequence.
//!
//! # Responsibility
//! - Apply the active filter predicate, then a case-insensitive title
//!   substring search, in that order.
//! - Take the current date as an input so the projection stays pure.
//!
//! # Invariants
//! - Repeated calls over the same inputs return the same result; nothing is
//!   memoized or cached.
//! - `Overdue` never yields a completed task.
//! - Relative input order is preserved.

use crate::model::task::Task;
use crate::store::task_store::TaskFilter;

/// Options for one projection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    /// Active filter selector, usually read from the store.
    pub filter: TaskFilter,
    /// Substring matched case-insensitively against titles. Blank (or
    /// whitespace-only) matches every task.
    pub search: String,
    /// Current calendar date as zero-padded `YYYY-MM-DD`.
    pub today: String,
}

impl ViewQuery {
    /// Creates a query with no search term.
    pub fn new(filter: TaskFilter, today: impl Into<String>) -> Self {
        Self {
            filter,
            search: String::new(),
            today: today.into(),
        }
    }

    /// Replaces the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Projects the visible tasks for one render pass.
///
/// Filter first, then search, matching the order the dashboard applies
/// them. Returns borrowed tasks in input order.
pub fn project<'a>(tasks: &'a [Task], query: &ViewQuery) -> Vec<&'a Task> {
    let needle = query.search.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| matches_filter(task, query.filter, &query.today))
        .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
        .collect()
}

/// Single-task filter predicate.
///
/// `today` must use the zero-padded `YYYY-MM-DD` encoding; the overdue
/// comparison is lexical, which on that encoding equals date order.
pub fn matches_filter(task: &Task, filter: TaskFilter, today: &str) -> bool {
    match filter {
        TaskFilter::All => true,
        TaskFilter::Completed => task.completed,
        TaskFilter::Pending => !task.completed,
        TaskFilter::Overdue => !task.completed && task.due_date.as_str() < today,
    }
}
