//! Board View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! `tasks` mirrors the Board's collection; the rest is view-local input state.

use reactive_stores::Store;
use task_board_core::{LoadQuery, Task, TaskForm, TaskId, TaskStatus};

/// Everything the board view renders from
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Mirror of the Board collection, in board order
    pub tasks: Vec<Task>,
    /// Title filter typed into the load bar
    pub query: LoadQuery,
    /// Add-card form at the foot of the Todo column
    pub form: TaskForm,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Tasks of one column, in board order
pub fn column_tasks(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == status).cloned().collect()
}

/// Index of a task inside its column
pub fn column_index(tasks: &[Task], status: TaskStatus, id: TaskId) -> Option<usize> {
    tasks
        .iter()
        .filter(|t| t.status == status)
        .position(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new(1, "a", "a", TaskStatus::Todo),
            Task::new(2, "b", "b", TaskStatus::Done),
            Task::new(3, "c", "c", TaskStatus::Todo),
        ]
    }

    #[test]
    fn test_column_tasks() {
        let todo = column_tasks(&sample(), TaskStatus::Todo);
        assert_eq!(todo.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(column_tasks(&sample(), TaskStatus::InProgress).is_empty());
    }

    #[test]
    fn test_column_index_follows_siblings() {
        let mut tasks = sample();
        assert_eq!(column_index(&tasks, TaskStatus::Todo, 3), Some(1));

        tasks.remove(0);
        assert_eq!(column_index(&tasks, TaskStatus::Todo, 3), Some(0));
        assert_eq!(column_index(&tasks, TaskStatus::Done, 3), None);
    }
}
