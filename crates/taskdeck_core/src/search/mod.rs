//! View-side projection entry points.
//!
//! # Responsibility
//! - Derive the visible subset of tasks for one render pass.
//! - Keep projection shaping inside core, pure and clock-free.

pub mod projection;
