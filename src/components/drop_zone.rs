//! Drop Zone Component
//!
//! The gap after a column's last card.

use leptos::prelude::*;
use leptos_dragdrop::*;

/// Drop zone at the tail of a column; only visible while dragging
#[component]
pub fn DropZone(dnd: DndSignals, slot: DropSlot) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_dragging() { c.push_str(" hidden"); }
        if dnd.is_target(slot) { c.push_str(" active"); }
        c
    };

    view! { <div class=zone_class on:mouseenter=on_mouseenter /> }
}
