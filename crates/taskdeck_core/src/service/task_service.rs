//! Task use-case service.
//!
//! # Responsibility
//! - Provide the dispatch boundary the shell calls: mint ids for drafts,
//!   route typed actions into the owned store, expose the projection.
//! - Emit stable, metadata-only diagnostic events.
//!
//! # Invariants
//! - Service APIs never bypass store validation.
//! - Log lines carry ids, counts and filter names only; titles and
//!   descriptions never reach the log.

use crate::model::task::{Task, TaskId, TaskPatch, TaskValidationError};
use crate::search::projection::{project, ViewQuery};
use crate::store::task_store::{StoreError, TaskFilter, TaskStore};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-entered fields for creating one task.
///
/// Identity and the completed flag are not part of the draft: the service
/// mints the id and every task starts pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

/// Service error for task use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Draft or patch would violate task field invariants.
    InvalidInput(TaskValidationError),
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Any other state-container failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid task input: {err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::TaskNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Validation(err) => Self::InvalidInput(err),
            StoreError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Use-case facade over the owned task store.
#[derive(Debug, Default)]
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    /// Creates a service over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over a pre-populated store.
    pub fn with_store(store: TaskStore) -> Self {
        Self { store }
    }

    /// Creates one task from a draft and returns its minted id.
    ///
    /// # Errors
    /// `InvalidInput` when a required field is blank or the due date is not
    /// `YYYY-MM-DD`; the store is left unchanged.
    pub fn add_task(&mut self, draft: &TaskDraft) -> Result<TaskId, ServiceError> {
        let task = Task::new(
            draft.title.clone(),
            draft.description.clone(),
            draft.due_date.clone(),
        );
        let id = self.store.add(task)?;
        info!("event=task_added module=service status=ok id={id}");
        Ok(id)
    }

    /// Shallow-merges `patch` into the task with the given id.
    ///
    /// # Errors
    /// `TaskNotFound` when the id is absent, `InvalidInput` when the merge
    /// would violate field invariants; state is unchanged either way.
    pub fn edit_task(&mut self, id: TaskId, patch: &TaskPatch) -> Result<(), ServiceError> {
        self.store.edit(id, patch)?;
        info!("event=task_edited module=service status=ok id={id}");
        Ok(())
    }

    /// Deletes the task with the given id.
    ///
    /// Idempotent: returns whether anything was removed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let removed = self.store.delete(id);
        info!("event=task_deleted module=service status=ok id={id} removed={removed}");
        removed
    }

    /// Flips the completed flag and returns the new value.
    ///
    /// # Errors
    /// `TaskNotFound` when the id is absent.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<bool, ServiceError> {
        let completed = self.store.toggle_complete(id)?;
        info!("event=task_toggled module=service status=ok id={id} completed={completed}");
        Ok(completed)
    }

    /// Replaces the active filter selector.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.store.set_filter(filter);
        debug!("event=filter_set module=service status=ok filter={filter}");
    }

    /// Active filter selector.
    pub fn filter(&self) -> TaskFilter {
        self.store.filter()
    }

    /// Full task sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Looks one task up by id.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Number of held tasks.
    pub fn task_count(&self) -> usize {
        self.store.len()
    }

    /// Projects the visible tasks for the active filter.
    ///
    /// Recomputed on every call; `today` must be zero-padded `YYYY-MM-DD`.
    pub fn visible_tasks(&self, search: &str, today: &str) -> Vec<&Task> {
        let query = ViewQuery::new(self.store.filter(), today).with_search(search);
        project(self.store.tasks(), &query)
    }
}
