use leptos::prelude::*;

use crate::features::kanban::hooks::expect_board;

#[component]
pub fn KanbanHeader(#[prop(into)] title: String) -> impl IntoView {
    let boards = expect_board().boards();

    view! {
        <header class="kanban-header">
            <h1>{title}</h1>
            <span class="board-summary">
                {move || {
                    let count = boards.with(|b| b.task_count());
                    match count {
                        1 => "1 task".to_string(),
                        n => format!("{} tasks", n),
                    }
                }}
            </span>
        </header>
    }
}
