use serde::{Deserialize, Serialize};
use std::fmt;

use super::task::{Task, TaskId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BoardId(pub u32);

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named column holding tasks in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn new(id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == task_id)
    }
}

/// The whole board state. Treated as an immutable snapshot: every mutation
/// produces a new collection rather than editing one that renderers can see.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardCollection {
    pub boards: Vec<Board>,
    /// Next identifier handed out to a new task. Only ever increases, so ids
    /// stay unique for the session even after removals.
    pub next_task_id: u64,
}

pub const DEFAULT_COLUMNS: [&str; 3] = ["To Do", "In Progress", "Done"];

impl Default for BoardCollection {
    fn default() -> Self {
        Self::with_columns(DEFAULT_COLUMNS)
    }
}

impl BoardCollection {
    /// Empty boards with ids 1..=n in the given left-to-right order.
    pub fn with_columns<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let boards = titles
            .into_iter()
            .zip(1u32..)
            .map(|(title, id)| Board::new(BoardId(id), title))
            .collect();
        Self {
            boards,
            next_task_id: 1,
        }
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn board_index(&self, id: BoardId) -> Option<usize> {
        self.boards.iter().position(|b| b.id == id)
    }

    pub fn task_count(&self) -> usize {
        self.boards.iter().map(|b| b.tasks.len()).sum()
    }

    /// Next task id and the counter value that follows it.
    pub(crate) fn allocate_task_id(&self) -> (TaskId, u64) {
        (TaskId(self.next_task_id), self.next_task_id + 1)
    }
}
