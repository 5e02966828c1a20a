//! Board
//!
//! Owns the in-memory task collection and funnels every mutation through
//! the [`TaskApi`]. Only the drag path updates local state before the
//! server answers.

mod card;
mod form;
mod query;
mod reorder;


pub use card::{CardActions, CardEditor, CardMode};
pub use form::TaskForm;
pub use query::LoadQuery;
pub use reorder::{reorder, DragEnd, Reordered, Slot, StatusChange};

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::TaskApi;
use crate::domain::{position_of, DomainResult, Task, TaskDraft, TaskId, TaskStatus};

/// Result of [`Board::drag_end`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing moved, nothing sent
    Ignored,
    /// Local order changed; `synced` tells whether the status update landed
    Moved { synced: bool },
}

type Listener = Box<dyn Fn(&[Task])>;

/// The single owner of the task collection.
///
/// Methods take `&self`; the collection is never borrowed across an await.
pub struct Board<A: TaskApi> {
    api: A,
    tasks: RefCell<Vec<Task>>,
    listener: Option<Listener>,
}

impl<A: TaskApi> Board<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: RefCell::new(Vec::new()),
            listener: None,
        }
    }

    /// Called with the full collection after every local change
    pub fn with_listener(mut self, listener: impl Fn(&[Task]) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the collection in board order
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// Tasks of one column, in board order
    pub fn column(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    fn mutate(&self, f: impl FnOnce(&mut Vec<Task>)) {
        f(&mut self.tasks.borrow_mut());
        if let Some(listener) = &self.listener {
            let snapshot = self.tasks.borrow();
            listener(&snapshot);
        }
    }

    fn replace(&self, tasks: Vec<Task>) {
        tracing::info!(count = tasks.len(), "board collection replaced");
        self.mutate(|current| *current = tasks);
    }

    /// Replace the collection with the server's
    pub async fn fetch(&self) -> DomainResult<()> {
        let tasks = logged("fetch tasks", self.api.list().await)?;
        self.replace(tasks);
        Ok(())
    }

    /// Re-fetch everything, then keep only tasks titled `query` (ignoring
    /// case). An empty query keeps the full collection.
    pub async fn load(&self, query: &str) -> DomainResult<()> {
        let mut tasks = logged("load tasks", self.api.list().await)?;
        if !query.is_empty() {
            tasks.retain(|t| t.title_matches(query));
        }
        self.replace(tasks);
        Ok(())
    }

    /// Create on the server and append the confirmed record
    pub async fn create(&self, draft: &TaskDraft) -> DomainResult<Task> {
        let task = logged("create task", self.api.create(draft).await)?;
        tracing::debug!(id = task.id, "task created");
        let appended = task.clone();
        self.mutate(|tasks| tasks.push(appended));
        Ok(task)
    }

    /// Patch title/description, then mirror the change locally
    pub async fn update(&self, id: TaskId, draft: &TaskDraft) -> DomainResult<()> {
        logged("update task", self.api.update(id, draft).await)?;
        self.mutate(|tasks| {
            if let Some(at) = position_of(tasks.as_slice(), id) {
                tasks[at].title = draft.title().to_string();
                tasks[at].description = draft.description().to_string();
            }
        });
        Ok(())
    }

    /// Delete on the server, then drop the task locally
    pub async fn delete(&self, id: TaskId) -> DomainResult<()> {
        logged("delete task", self.api.delete(id).await)?;
        self.mutate(|tasks| {
            if let Some(at) = position_of(tasks.as_slice(), id) {
                tasks.remove(at);
            }
        });
        Ok(())
    }

    /// Apply a drag locally. Returns the status change to send, if any.
    pub fn apply_drag(&self, event: &DragEnd) -> Option<StatusChange> {
        let reordered = reorder(&self.tasks.borrow(), event)?;
        self.mutate(|tasks| *tasks = reordered.tasks);
        Some(reordered.change)
    }

    /// Push a status to the server. Failures are logged; local order stays.
    pub async fn push_status(&self, change: StatusChange) -> DomainResult<()> {
        logged(
            "update task status",
            self.api.update_status(change.id, change.status).await,
        )
    }

    /// Optimistic move followed by the status update
    pub async fn drag_end(&self, event: &DragEnd) -> DragOutcome {
        let Some(change) = self.apply_drag(event) else {
            return DragOutcome::Ignored;
        };
        let synced = self.push_status(change).await.is_ok();
        DragOutcome::Moved { synced }
    }
}

#[async_trait(?Send)]
impl<A: TaskApi> CardActions for Board<A> {
    async fn request_update(&self, id: TaskId, draft: TaskDraft) -> DomainResult<()> {
        self.update(id, &draft).await
    }

    async fn request_delete(&self, id: TaskId) -> DomainResult<()> {
        self.delete(id).await
    }
}

fn logged<T>(operation: &str, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(error) = &result {
        tracing::error!(operation, %error, "request failed");
    }
    result
}
