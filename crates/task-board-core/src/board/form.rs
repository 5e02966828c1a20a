//! New Task Form State
//!
//! The add-card form at the foot of the Todo column.

use crate::domain::{DomainResult, TaskDraft};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub open: bool,
    pub title: String,
    pub description: String,
    pub show_validation: bool,
}

impl TaskForm {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Validate the inputs. Raises the flag on failure, lowers it on success.
    pub fn take_draft(&mut self) -> DomainResult<TaskDraft> {
        let draft = TaskDraft::new(self.title.clone(), self.description.clone());
        self.show_validation = draft.is_err();
        draft
    }

    /// Clear the inputs and fold the form back into its add button
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_raises_flag() {
        let mut form = TaskForm {
            open: true,
            title: "Groceries".into(),
            ..Default::default()
        };
        assert!(form.take_draft().is_err());
        assert!(form.show_validation);
        assert!(form.open);
        assert_eq!(form.title, "Groceries");
    }

    #[test]
    fn test_valid_draft_lowers_flag() {
        let mut form = TaskForm {
            open: true,
            title: "Groceries".into(),
            description: "milk, eggs".into(),
            show_validation: true,
        };
        let draft = form.take_draft().unwrap();
        assert_eq!(draft.description(), "milk, eggs");
        assert!(!form.show_validation);

        form.reset();
        assert_eq!(form, TaskForm::default());
    }
}
