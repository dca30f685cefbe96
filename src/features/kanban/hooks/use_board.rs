use leptos::prelude::*;

use crate::features::kanban::services::{
    add_task, destination_column, move_task, remove_task, DragRelease, MutationResult,
};
use crate::models::{BoardCollection, BoardId, TaskId};

/// Holds the current board snapshot. Every change replaces the whole
/// collection with one `set`, so renderers never see a half-applied update.
#[derive(Clone, Copy)]
pub struct BoardStore {
    snapshot: RwSignal<BoardCollection>,
}

impl BoardStore {
    pub fn new(initial: BoardCollection) -> Self {
        Self {
            snapshot: RwSignal::new(initial),
        }
    }

    pub fn boards(&self) -> ReadSignal<BoardCollection> {
        self.snapshot.read_only()
    }

    /// Runs `transform` against the current snapshot and swaps in the result.
    /// A skipped mutation leaves the snapshot alone. Returns whether anything
    /// changed.
    pub fn apply<F>(&self, action: &str, transform: F) -> bool
    where
        F: FnOnce(&BoardCollection) -> MutationResult,
    {
        match self.snapshot.with_untracked(transform) {
            Ok(next) => {
                if log::log_enabled!(log::Level::Debug) {
                    let json = serde_json::to_string(&next).unwrap_or_default();
                    log::debug!("{} applied, board now {}", action, json);
                }
                self.snapshot.set(next);
                true
            }
            Err(reason) => {
                log::debug!("{} skipped: {}", action, reason);
                false
            }
        }
    }

    pub fn add_task(&self, board_id: BoardId, content: Option<String>) -> bool {
        self.apply("add_task", |boards| add_task(boards, board_id, content))
    }

    pub fn remove_task(&self, board_id: BoardId, task_id: TaskId) -> bool {
        self.apply("remove_task", |boards| remove_task(boards, board_id, task_id))
    }

    pub fn move_task(&self, from_board_id: BoardId, to_board_id: BoardId, task_id: TaskId) -> bool {
        self.apply("move_task", |boards| {
            move_task(boards, from_board_id, to_board_id, task_id)
        })
    }

    /// Turns a finished drag into a move to the neighbouring column.
    pub fn release_task(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        release: DragRelease,
        threshold: f64,
    ) -> bool {
        let destination = self.snapshot.with_untracked(|boards| {
            let current = boards.board_index(board_id)?;
            let target = destination_column(current, boards.boards.len(), release, threshold)?;
            boards.boards.get(target).map(|b| b.id)
        });

        match destination {
            Some(to_board_id) => self.move_task(board_id, to_board_id, task_id),
            None => {
                log::trace!("drag of task {} released at {:.0}px, springing back", task_id, release.offset_x);
                false
            }
        }
    }
}

/// Creates the store for a fresh session and shares it with the component
/// tree.
pub fn use_board(initial: BoardCollection) -> BoardStore {
    let store = BoardStore::new(initial);
    provide_context(store);
    store
}

pub fn expect_board() -> BoardStore {
    use_context::<BoardStore>().expect("BoardStore context")
}
