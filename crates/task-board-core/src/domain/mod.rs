//! Domain Layer
//!
//! Contains the task entity and core abstractions.
//! This layer has no I/O; reqwest only shows up as an error source.

mod entity;
mod task;

pub use entity::{position_of, DomainError, DomainResult, Entity};
pub use task::{Task, TaskDraft, TaskId, TaskStatus, FIELDS_REQUIRED};
