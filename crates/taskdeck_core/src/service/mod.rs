//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store operations into use-case level APIs.
//! - Keep shell/embedding layers decoupled from state-container details.

pub mod task_service;
