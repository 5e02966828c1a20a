//! Drag Gesture Mapping
//!
//! Translates column-indexed releases from leptos-dragdrop into the board's
//! status-aware drag-end events.

use leptos_dragdrop::{DragRelease, DropSlot};
use task_board_core::{DragEnd, Slot, TaskStatus};

fn to_slot(slot: DropSlot) -> Option<Slot> {
    TaskStatus::from_column(slot.column).map(|status| Slot::new(status, slot.index))
}

/// `None` if the card was picked up from a column the board does not know
pub fn drag_end(release: DragRelease) -> Option<DragEnd> {
    let source = to_slot(release.source)?;
    let insertion = release.target.and_then(to_slot);
    Some(DragEnd::from_insertion_point(release.dragged_id, source, insertion))
}
