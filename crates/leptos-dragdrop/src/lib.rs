//! Leptos DragDrop Utilities
//!
//! Simple column drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A gap inside a column: the card would land before `index`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropSlot {
    pub column: usize,
    pub index: usize,
}

impl DropSlot {
    pub fn new(column: usize, index: usize) -> Self {
        Self { column, index }
    }
}

/// A finished drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragRelease {
    pub dragged_id: u32,
    /// Where the card was picked up
    pub source: DropSlot,
    /// Hovered gap at release; `None` outside every column
    pub target: Option<DropSlot>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropSlot>>,
    pub drop_target_write: WriteSignal<Option<DropSlot>>,
    /// Pending card (mousedown but not yet dragging) and its slot
    pub pending_read: ReadSignal<Option<(u32, DropSlot)>>,
    pub pending_write: WriteSignal<Option<(u32, DropSlot)>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    /// Is this slot the current drop target?
    pub fn is_target(&self, slot: DropSlot) -> bool {
        self.drop_target_read.get() == Some(slot)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropSlot>);
    let (pending_read, pending_write) = signal(None::<(u32, DropSlot)>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for a draggable card.
///
/// `source` is read at press time, so a card whose index moves keeps
/// reporting where it currently sits.
pub fn make_on_mousedown<S>(dnd: DndSignals, card_id: u32, source: S) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    S: Fn() -> DropSlot + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Controls (and icons inside buttons) keep their own mouse handling
            if starts_on_control(&ev) { return; }
            dnd.pending_write.set(Some((card_id, source())));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

fn starts_on_control(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button, input, textarea").ok().flatten())
        .is_some()
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some((card_id, source)) = dnd.pending_read.get_untracked() else { return };
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }

        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(Some(card_id));
            // Until something else is hovered the card goes back where it was
            dnd.drop_target_write.set(Some(source));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a gap (a card or a column's tail zone)
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: DropSlot) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(slot));
        }
    }
}

/// Gap picked by a pointer over the card at `index`: its upper half means
/// before the card, its lower half after it
pub fn gap_for_pointer(index: usize, pointer_y: f64, top: f64, height: f64) -> usize {
    if pointer_y - top > height / 2.0 { index + 1 } else { index }
}

/// Create mousemove handler for a card; targets the gap above or below it
pub fn make_on_card_mousemove<I>(dnd: DndSignals, column: usize, index: I) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    I: Fn() -> usize + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            return;
        }
        let Some(card) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else { return };
        let rect = card.get_bounding_client_rect();
        let gap = gap_for_pointer(index(), f64::from(ev.client_y()), rect.top(), rect.height());
        let slot = DropSlot::new(column, gap);
        if dnd.drop_target_read.get_untracked() != Some(slot) {
            dnd.drop_target_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler for a column; leaving it means no target
pub fn make_on_column_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_release` runs for every real drag, including releases outside any
/// column (`target == None`). Plain clicks never reach it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_release: F)
where
    F: Fn(DragRelease) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let pending = dnd.pending_read.get_untracked();
        let target = dnd.drop_target_read.get_untracked();

        match (dragging_id, pending) {
            (Some(dragged_id), Some((_, source))) => {
                end_drag(&dnd);
                on_release(DragRelease { dragged_id, source, target });
            }
            // Not dragging - click event will fire naturally on the element
            _ => dnd.pending_write.set(None),
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_for_pointer() {
        // Card at index 2 spanning y = 100..140
        assert_eq!(gap_for_pointer(2, 105.0, 100.0, 40.0), 2);
        assert_eq!(gap_for_pointer(2, 120.0, 100.0, 40.0), 2);
        assert_eq!(gap_for_pointer(2, 121.0, 100.0, 40.0), 3);
        assert_eq!(gap_for_pointer(0, 139.0, 100.0, 40.0), 1);
    }
}
