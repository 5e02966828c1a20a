//! Drag Reorder
//!
//! Turns a drag-end gesture into a new task order plus the status change to
//! push to the server. Pure: the caller decides when to apply and send.

use crate::domain::{position_of, Task, TaskId, TaskStatus};

/// A position inside one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub status: TaskStatus,
    /// Index within the column's own tasks, not the whole collection
    pub index: usize,
}

impl Slot {
    pub fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// End of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub task_id: TaskId,
    pub source: Slot,
    /// Final slot of the card; `None` when released outside every column
    pub destination: Option<Slot>,
}

impl DragEnd {
    /// Build from a hovered insertion point.
    ///
    /// Pointer-driven drags report the gap the card hovers over, counted in
    /// the column as it looked before the card was lifted out. Moving later
    /// within the same column lands one index earlier once the card's own
    /// slot closes up.
    pub fn from_insertion_point(task_id: TaskId, source: Slot, insertion: Option<Slot>) -> Self {
        let destination = insertion.map(|slot| {
            if slot.status == source.status && slot.index > source.index {
                Slot::new(slot.status, slot.index - 1)
            } else {
                slot
            }
        });
        Self {
            task_id,
            source,
            destination,
        }
    }
}

/// Status to send after a successful local move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: TaskId,
    pub status: TaskStatus,
}

/// New local order and the status update it implies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    pub tasks: Vec<Task>,
    pub change: StatusChange,
}

/// Apply a drag-end event to `tasks`.
///
/// Returns `None` when the gesture is a no-op: no destination, a drop back
/// onto the source slot, or an id missing from the collection.
pub fn reorder(tasks: &[Task], event: &DragEnd) -> Option<Reordered> {
    let destination = event.destination?;
    if destination == event.source {
        return None;
    }

    let Some(from) = position_of(tasks, event.task_id) else {
        tracing::warn!(task_id = event.task_id, "dragged task is not on the board");
        return None;
    };

    let mut next = tasks.to_vec();
    let mut moved = next.remove(from);
    moved.status = destination.status;

    let at = insertion_index(&next, destination);
    next.insert(at, moved);

    Some(Reordered {
        tasks: next,
        change: StatusChange {
            id: event.task_id,
            status: destination.status,
        },
    })
}

/// Map a column index onto the flattened collection (after removal).
fn insertion_index(tasks: &[Task], slot: Slot) -> usize {
    let in_column: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.status == slot.status)
        .map(|(i, _)| i)
        .collect();

    match in_column.get(slot.index) {
        Some(&i) => i,
        None => in_column.last().map_or(tasks.len(), |i| i + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TaskStatus::{Done, InProgress, Todo};

    fn task(id: TaskId, status: TaskStatus) -> Task {
        Task::new(id, format!("Task {id}"), "details", status)
    }

    fn column(tasks: &[Task], status: TaskStatus) -> Vec<TaskId> {
        tasks.iter().filter(|t| t.status == status).map(|t| t.id).collect()
    }

    fn drag(task_id: TaskId, source: (TaskStatus, usize), destination: Option<(TaskStatus, usize)>) -> DragEnd {
        DragEnd {
            task_id,
            source: Slot::new(source.0, source.1),
            destination: destination.map(|(s, i)| Slot::new(s, i)),
        }
    }

    #[test]
    fn test_released_outside_columns_is_noop() {
        let tasks = vec![task(1, Todo), task(2, Done)];
        assert_eq!(reorder(&tasks, &drag(1, (Todo, 0), None)), None);
    }

    #[test]
    fn test_same_slot_is_noop() {
        let tasks = vec![task(1, Todo), task(2, Todo)];
        assert_eq!(reorder(&tasks, &drag(2, (Todo, 1), Some((Todo, 1)))), None);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let tasks = vec![task(1, Todo)];
        assert_eq!(reorder(&tasks, &drag(9, (Todo, 0), Some((Done, 0)))), None);
    }

    #[test]
    fn test_move_to_other_column_front() {
        let tasks = vec![task(1, Todo), task(2, Todo), task(3, Done)];
        let result = reorder(&tasks, &drag(2, (Todo, 1), Some((Done, 0)))).unwrap();

        assert_eq!(column(&result.tasks, Done), vec![2, 3]);
        assert_eq!(column(&result.tasks, Todo), vec![1]);
        assert_eq!(result.change, StatusChange { id: 2, status: Done });
        let others: Vec<Task> = result.tasks.iter().filter(|t| t.id != 2).cloned().collect();
        assert_eq!(others, vec![task(1, Todo), task(3, Done)]);
    }

    #[test]
    fn test_move_to_other_column_middle_and_end() {
        let tasks = vec![task(1, Todo), task(2, Todo), task(3, Done), task(4, Done)];

        let middle = reorder(&tasks, &drag(1, (Todo, 0), Some((Done, 1)))).unwrap();
        assert_eq!(column(&middle.tasks, Done), vec![3, 1, 4]);

        let end = reorder(&tasks, &drag(1, (Todo, 0), Some((Done, 2)))).unwrap();
        assert_eq!(column(&end.tasks, Done), vec![3, 4, 1]);
    }

    #[test]
    fn test_move_into_empty_column() {
        let tasks = vec![task(1, Todo), task(2, Done)];
        let result = reorder(&tasks, &drag(1, (Todo, 0), Some((InProgress, 0)))).unwrap();
        assert_eq!(column(&result.tasks, InProgress), vec![1]);
        assert_eq!(result.tasks.len(), 2);
    }

    #[test]
    fn test_reorder_within_column() {
        let tasks = vec![task(1, Todo), task(2, Todo), task(3, Todo)];

        let down = reorder(&tasks, &drag(1, (Todo, 0), Some((Todo, 2)))).unwrap();
        assert_eq!(column(&down.tasks, Todo), vec![2, 3, 1]);
        // Status is still sent even though it did not change
        assert_eq!(down.change, StatusChange { id: 1, status: Todo });

        let up = reorder(&tasks, &drag(3, (Todo, 2), Some((Todo, 0)))).unwrap();
        assert_eq!(column(&up.tasks, Todo), vec![3, 1, 2]);
    }

    #[test]
    fn test_insertion_point_below_source_shifts_up() {
        let source = Slot::new(Todo, 0);
        let event = DragEnd::from_insertion_point(1, source, Some(Slot::new(Todo, 3)));
        assert_eq!(event.destination, Some(Slot::new(Todo, 2)));

        let just_below = DragEnd::from_insertion_point(1, source, Some(Slot::new(Todo, 1)));
        assert_eq!(just_below.destination, Some(source));

        let other_column = DragEnd::from_insertion_point(1, source, Some(Slot::new(Done, 3)));
        assert_eq!(other_column.destination, Some(Slot::new(Done, 3)));

        let outside = DragEnd::from_insertion_point(1, source, None);
        assert_eq!(outside.destination, None);
    }
}
