//! State container layer.
//!
//! # Responsibility
//! - Own the ordered task sequence and the active filter selector.
//! - Expose typed mutation operations as the only write path.
//!
//! # Invariants
//! - Writes must pass `Task::validate()` before touching held state.
//! - Store APIs return semantic errors (`NotFound`, `DuplicateId`) instead
//!   of silently dropping failed lookups.

pub mod task_store;
