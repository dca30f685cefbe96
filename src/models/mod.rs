pub mod board;
pub mod task;

pub use board::{BoardCollection, BoardId, DEFAULT_COLUMNS};
pub use task::{Task, TaskId};
