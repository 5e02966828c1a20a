//! API Layer - Core Trait
//!
//! The five calls the board makes against the task service.
//! Implementations can be HTTP, in-memory fakes, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Task, TaskDraft, TaskId, TaskStatus};

/// Remote task collection
///
/// Futures are not `Send`: the browser runs everything on one event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch every task, in server order
    async fn list(&self) -> DomainResult<Vec<Task>>;

    /// Create a task; the server assigns id and initial status
    async fn create(&self, draft: &TaskDraft) -> DomainResult<Task>;

    /// Replace title and description
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> DomainResult<()>;

    /// Delete by id
    async fn delete(&self, id: TaskId) -> DomainResult<()>;

    /// Set the status only; ordering is never sent
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> DomainResult<()>;
}
