//! Task Entity
//!
//! A card on the board: server-assigned id, title, description and the
//! status that picks its column.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Server-assigned task identifier
pub type TaskId = u32;

/// Message shown when a create/edit form is submitted with an empty field
pub const FIELDS_REQUIRED: &str = "Both fields are required";

/// Task status; one column per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// All statuses in column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire name, as the REST service spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Position of this status' column on the board
    pub fn column(&self) -> usize {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }
}

/// A task card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
        }
    }

    /// Case-insensitive exact title match
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase() == query.to_lowercase()
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Title/description pair that passed validation.
///
/// Body of both the create and the edit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    title: String,
    description: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        let description = description.into();
        if title.is_empty() || description.is_empty() {
            return Err(DomainError::Validation(FIELDS_REQUIRED.to_string()));
        }
        Ok(Self { title, description })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let parsed: TaskStatus = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(parsed, TaskStatus::Done);
        assert_eq!(TaskStatus::Todo.as_str(), "TODO");
    }

    #[test]
    fn test_status_columns() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_column(status.column()), Some(status));
        }
        assert_eq!(TaskStatus::from_column(3), None);
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_task_deserialization() {
        let task: Task = serde_json::from_str(
            r#"{"id":7,"title":"Groceries","description":"milk","status":"IN_PROGRESS"}"#,
        )
        .unwrap();
        assert_eq!(task.id(), 7);
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_title_matches_ignores_case() {
        let task = Task::new(1, "Groceries", "milk", TaskStatus::Todo);
        assert!(task.title_matches("groceries"));
        assert!(task.title_matches("GROCERIES"));
        assert!(!task.title_matches("grocery"));
    }

    #[test]
    fn test_draft_requires_both_fields() {
        assert!(matches!(TaskDraft::new("", "desc"), Err(DomainError::Validation(_))));
        assert!(matches!(TaskDraft::new("title", ""), Err(DomainError::Validation(_))));
        let draft = TaskDraft::new("title", "desc").unwrap();
        assert_eq!(draft.title(), "title");
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"title": "title", "description": "desc"})
        );
    }
}
