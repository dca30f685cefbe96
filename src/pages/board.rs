use leptos::prelude::*;

use crate::core::expect_config;
use crate::features::kanban::components::{KanbanColumn, KanbanHeader, PromptModal};
use crate::features::kanban::hooks::{use_board, use_prompt};

#[component]
pub fn TaskBoard() -> impl IntoView {
    let config = expect_config();
    let store = use_board(config.initial_boards());
    use_prompt();

    // Columns are fixed at mount, so lay them out once.
    let columns: Vec<_> = store
        .boards()
        .with_untracked(|b| b.boards.iter().map(|board| (board.id, board.title.clone())).collect());
    log::info!("Task board mounted with {} columns", columns.len());

    view! {
        <div class="kanban-page">
            <KanbanHeader title=config.title.clone() />
            <div class="kanban-board">
                {columns
                    .into_iter()
                    .map(|(board_id, title)| view! { <KanbanColumn board_id=board_id title=title /> })
                    .collect::<Vec<_>>()}
            </div>
            <PromptModal label="Enter new task:" />
        </div>
    }
}
