use leptos::prelude::*;

use crate::core::BoardConfig;
use crate::pages::TaskBoard;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <main class="app">
            <TaskBoard />
        </main>
    }
}
