//! Board Commands
//!
//! Each command spawns the Board operation on the browser event loop and
//! updates view-local input state once it settles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DragRelease;
use task_board_core::TaskDraft;

use crate::context::AppContext;
use crate::dnd;
use crate::store::BoardStateStoreFields;

/// Replace the board with the server's collection
pub fn refresh(ctx: AppContext) {
    let board = ctx.board();
    spawn_local(async move {
        let _ = board.fetch().await;
    });
}

/// Re-fetch and narrow to the typed title (exact, ignoring case)
pub fn load(ctx: AppContext) {
    let board = ctx.board();
    let query = ctx.store.query().with_untracked(|q| q.text().to_string());
    spawn_local(async move {
        let result = board.load(&query).await;
        ctx.store.query().update(|q| q.settle(&result));
    });
}

/// Create a task, then fold the add form back up whatever the outcome
pub fn create_task(ctx: AppContext, draft: TaskDraft) {
    let board = ctx.board();
    spawn_local(async move {
        let _ = board.create(&draft).await;
        ctx.store.form().update(|form| form.reset());
    });
}

/// Move the card right away, then push the new status in the background
pub fn drop_card(ctx: AppContext, release: DragRelease) {
    let Some(event) = dnd::drag_end(release) else {
        tracing::warn!(?release, "drag released from an unknown column");
        return;
    };
    let board = ctx.board();
    let Some(change) = board.apply_drag(&event) else {
        tracing::debug!(?event, "drag ignored");
        return;
    };
    spawn_local(async move {
        let _ = board.push_status(change).await;
    });
}
