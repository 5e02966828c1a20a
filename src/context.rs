//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use task_board_core::{ApiConfig, Board, CardActions, HttpTaskApi};

use crate::store::{BoardStateStoreFields, BoardStore};

pub type SharedBoard = Rc<Board<HttpTaskApi>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The Board; lives as long as the mounted App
    board: StoredValue<SharedBoard, LocalStorage>,
    /// Reactive mirror of the board plus input state
    pub store: BoardStore,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig, store: BoardStore) -> Self {
        let board = Board::new(HttpTaskApi::new(config.clone()))
            .with_listener(move |tasks| store.tasks().set(tasks.to_vec()));
        Self {
            board: StoredValue::new_local(Rc::new(board)),
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn board(&self) -> SharedBoard {
        self.board.get_value()
    }

    /// The board, seen through the only two operations a card may use
    pub fn card_actions(&self) -> Rc<dyn CardActions> {
        self.board()
    }

    /// URL of an icon served by the task service
    pub fn icon(&self, name: &str) -> String {
        self.config.with_value(|config| config.icon_url(name))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
