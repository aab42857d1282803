//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record held by the store.
//! - Provide field-level validation for write paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` and `description` are non-blank on every committed task.
//! - `due_date` is zero-padded `YYYY-MM-DD`, so lexical order on the
//!   encoding equals chronological order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task held by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

static DUE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("valid due date regex")
});

/// Validation failures reported by [`Task::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task id is the nil UUID.
    NilId,
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Description is empty or whitespace-only.
    EmptyDescription,
    /// Due date does not match the zero-padded `YYYY-MM-DD` encoding.
    InvalidDueDate(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyDescription => write!(f, "task description must not be empty"),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical to-do record.
///
/// Serialized field names stay camelCase (`dueDate`) to match the task
/// record shape the shell and any future embedding hosts exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id used for every by-id store operation.
    pub id: TaskId,
    /// Short display label; search matches against this field only.
    pub title: String,
    /// Free-form detail text.
    pub description: String,
    /// Zero-padded `YYYY-MM-DD`; compared lexically by the overdue filter.
    pub due_date: String,
    /// Starts `false`; flipped by the toggle operation.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a task with a generated stable id and `completed = false`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, due_date)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by callers that already own identity (tests, imports). The id is
    /// not checked here; `validate()` runs at the store's write boundary.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            completed: false,
        }
    }

    /// Checks the field-level invariants listed in the module docs.
    ///
    /// # Errors
    /// Returns the first violated invariant in field order.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if !DUE_DATE_RE.is_match(&self.due_date) {
            return Err(TaskValidationError::InvalidDueDate(self.due_date.clone()));
        }
        Ok(())
    }
}

/// Shallow-merge payload for the edit operation.
///
/// `None` fields leave the task unchanged; a patch with every field `None`
/// merges to an identical task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
    }

    /// Returns a copy of `task` with the provided fields replaced.
    ///
    /// The id is never patched; identity is fixed at creation time.
    pub fn merged_into(&self, task: &Task) -> Task {
        let mut merged = task.clone();
        if let Some(title) = &self.title {
            merged.title = title.clone();
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(due_date) = &self.due_date {
            merged.due_date = due_date.clone();
        }
        if let Some(completed) = self.completed {
            merged.completed = completed;
        }
        merged
    }
}
