//! In-memory task store and its mutation operations.
//!
//! # Responsibility
//! - Hold the ordered task sequence (insertion order) and the filter
//!   selector.
//! - Reduce typed actions into new held state, synchronously.
//!
//! # Invariants
//! - Task ids are unique for the lifetime of the store.
//! - A failed operation leaves held state unchanged.
//! - The filter selector is always one of the four enumerated options,
//!   guaranteed by construction.

use crate::model::task::{Task, TaskId, TaskPatch, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic errors for store mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(TaskValidationError),
    /// An add carried an id already present in the sequence.
    DuplicateId(TaskId),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "task id already in use: {id}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Filter selector held alongside the task sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
    Overdue,
}

impl TaskFilter {
    /// Stable lowercase name, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for filter selector names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl Display for UnknownFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter `{}`; expected all|completed|pending|overdue",
            self.0
        )
    }
}

impl Error for UnknownFilter {}

impl FromStr for TaskFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "overdue" => Ok(Self::Overdue),
            _ => Err(UnknownFilter(value.to_string())),
        }
    }
}

/// Tagged mutation action reduced by [`TaskStore::apply`].
///
/// Each operation kind carries its own typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add(Task),
    Edit { id: TaskId, patch: TaskPatch },
    Delete(TaskId),
    ToggleComplete(TaskId),
    SetFilter(TaskFilter),
}

/// Explicitly owned state object: ordered tasks plus filter selector.
///
/// Single-threaded and synchronous; every operation completes immediately
/// and deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: TaskFilter,
}

impl TaskStore {
    /// Creates an empty store with the default `All` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces one action into held state.
    ///
    /// # Errors
    /// Propagates the per-operation errors; held state is unchanged on
    /// every error path.
    pub fn apply(&mut self, action: TaskAction) -> StoreResult<()> {
        match action {
            TaskAction::Add(task) => self.add(task).map(|_| ()),
            TaskAction::Edit { id, patch } => self.edit(id, &patch),
            TaskAction::Delete(id) => {
                self.delete(id);
                Ok(())
            }
            TaskAction::ToggleComplete(id) => self.toggle_complete(id).map(|_| ()),
            TaskAction::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(())
            }
        }
    }

    /// Appends a task to the end of the sequence.
    ///
    /// # Errors
    /// - `Validation` when the task violates field invariants.
    /// - `DuplicateId` when the id is already present; the sequence never
    ///   carries two tasks under one id.
    pub fn add(&mut self, task: Task) -> StoreResult<TaskId> {
        task.validate()?;
        if self.get(task.id).is_some() {
            return Err(StoreError::DuplicateId(task.id));
        }
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Shallow-merges `patch` into the task with the given id.
    ///
    /// Only provided fields change; the merged result is validated before
    /// it replaces the stored task.
    ///
    /// # Errors
    /// - `NotFound` when no task carries the id.
    /// - `Validation` when the merge would blank a required field.
    pub fn edit(&mut self, id: TaskId, patch: &TaskPatch) -> StoreResult<()> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let merged = patch.merged_into(&self.tasks[position]);
        merged.validate()?;
        self.tasks[position] = merged;
        Ok(())
    }

    /// Removes every task matching the id (filter-out).
    ///
    /// Returns whether anything was removed; deleting an absent id is an
    /// error-free no-op, so deletion is idempotent.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Flips the completed flag and returns the new value.
    ///
    /// # Errors
    /// `NotFound` when no task carries the id.
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Replaces the filter selector unconditionally.
    ///
    /// Takes the enum, so no out-of-range value can enter store state;
    /// string input is parsed (and rejected) at the boundary.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Active filter selector.
    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Held tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks one task up by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
