use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::{expect_board, expect_prompt};
use crate::models::BoardId;

#[component]
pub fn KanbanColumn(
    board_id: BoardId,
    #[prop(into)] title: String,
) -> impl IntoView {
    let store = expect_board();
    let prompt = expect_prompt();
    let boards = store.boards();

    let open_prompt = move |_| {
        spawn_local(async move {
            let response = prompt.ask().await;
            store.add_task(board_id, response.into_content());
        });
    };

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h2>{title}</h2>
                <span class="task-count">
                    {move || {
                        boards.with(|b| b.board(board_id).map(|board| board.tasks.len()).unwrap_or(0))
                    }}
                </span>
            </div>
            <div class="column-content">
                {move || {
                    boards.with(|b| {
                        b.board(board_id)
                            .map(|board| board.tasks.clone())
                            .unwrap_or_default()
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task board_id=board_id /> })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
            <button class="add-task-btn" on:click=open_prompt>
                <span class="add-task-icon">"⊕"</span>
                "Add Task"
            </button>
        </div>
    }
}
