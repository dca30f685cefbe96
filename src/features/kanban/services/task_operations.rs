use thiserror::Error;

use crate::models::{BoardCollection, BoardId, Task, TaskId};

/// Why a mutation left the board untouched. None of these reach the user;
/// the store logs them and keeps its current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("task content is empty or the prompt was cancelled")]
    EmptyContent,

    #[error("board not found: {id}")]
    BoardNotFound { id: BoardId },

    #[error("task {task} not found on board {board}")]
    TaskNotFound { board: BoardId, task: TaskId },

    #[error("task is already on board {id}")]
    SameBoard { id: BoardId },
}

pub type MutationResult = Result<BoardCollection, SkipReason>;

// Append a new task to a board. `None` models a cancelled prompt.
pub fn add_task(boards: &BoardCollection, board_id: BoardId, content: Option<String>) -> MutationResult {
    let content = content
        .filter(|c| !c.is_empty())
        .ok_or(SkipReason::EmptyContent)?;

    let index = boards
        .board_index(board_id)
        .ok_or(SkipReason::BoardNotFound { id: board_id })?;

    let (task_id, next_task_id) = boards.allocate_task_id();
    let mut next = boards.clone();
    next.boards[index].tasks.push(Task::new(task_id, content));
    next.next_task_id = next_task_id;
    Ok(next)
}

// Remove a task from the board it sits on
pub fn remove_task(boards: &BoardCollection, board_id: BoardId, task_id: TaskId) -> MutationResult {
    let index = boards
        .board_index(board_id)
        .ok_or(SkipReason::BoardNotFound { id: board_id })?;

    if !boards.boards[index].contains(task_id) {
        return Err(SkipReason::TaskNotFound { board: board_id, task: task_id });
    }

    let mut next = boards.clone();
    next.boards[index].tasks.retain(|t| t.id != task_id);
    Ok(next)
}

// Move a task to the end of another board, keeping its id and content
pub fn move_task(
    boards: &BoardCollection,
    from_board_id: BoardId,
    to_board_id: BoardId,
    task_id: TaskId,
) -> MutationResult {
    if from_board_id == to_board_id {
        return Err(SkipReason::SameBoard { id: from_board_id });
    }

    let from_index = boards
        .board_index(from_board_id)
        .ok_or(SkipReason::BoardNotFound { id: from_board_id })?;
    let to_index = boards
        .board_index(to_board_id)
        .ok_or(SkipReason::BoardNotFound { id: to_board_id })?;

    let position = boards.boards[from_index]
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or(SkipReason::TaskNotFound { board: from_board_id, task: task_id })?;

    let mut next = boards.clone();
    let task = next.boards[from_index].tasks.remove(position);
    next.boards[to_index].tasks.push(task);
    Ok(next)
}
