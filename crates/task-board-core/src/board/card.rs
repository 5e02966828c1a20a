//! Card State
//!
//! Display/edit state machine of a single card and the two operations a
//! card may ask of its owner.

use async_trait::async_trait;

use crate::domain::{DomainResult, Task, TaskDraft, TaskId};

/// What a card can ask the board to do.
///
/// Failures come back as values; the card decides what to show.
#[async_trait(?Send)]
pub trait CardActions {
    async fn request_update(&self, id: TaskId, draft: TaskDraft) -> DomainResult<()>;

    async fn request_delete(&self, id: TaskId) -> DomainResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardMode {
    #[default]
    Viewing,
    /// Working copies of the fields, seeded from the task on entry
    Editing { title: String, description: String },
}

/// Per-card local state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardEditor {
    mode: CardMode,
    show_validation: bool,
}

impl CardEditor {
    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing { .. })
    }

    /// Whether the "fields required" message is visible
    pub fn show_validation(&self) -> bool {
        self.show_validation
    }

    pub fn begin_edit(&mut self, task: &Task) {
        self.show_validation = false;
        self.mode = CardMode::Editing {
            title: task.title.clone(),
            description: task.description.clone(),
        };
    }

    pub fn set_title(&mut self, value: String) {
        if let CardMode::Editing { title, .. } = &mut self.mode {
            *title = value;
        }
    }

    pub fn set_description(&mut self, value: String) {
        if let CardMode::Editing { description, .. } = &mut self.mode {
            *description = value;
        }
    }

    /// Drop the working copies
    pub fn cancel(&mut self) {
        self.mode = CardMode::Viewing;
    }

    /// Validate the working copies.
    ///
    /// On failure the validation flag is raised and the card stays in
    /// edit mode. Returns `None` outside edit mode.
    pub fn try_save(&mut self) -> Option<TaskDraft> {
        let CardMode::Editing { title, description } = &self.mode else {
            return None;
        };
        match TaskDraft::new(title.clone(), description.clone()) {
            Ok(draft) => Some(draft),
            Err(_) => {
                self.show_validation = true;
                None
            }
        }
    }

    /// The update was handed off; back to viewing whatever the server said
    pub fn finish_save(&mut self) {
        self.show_validation = false;
        self.mode = CardMode::Viewing;
    }
}
