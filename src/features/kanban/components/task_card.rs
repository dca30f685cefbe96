use leptos::ev::PointerEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::expect_config;
use crate::features::kanban::hooks::{expect_board, use_drag};
use crate::models::{BoardId, Task};

#[component]
pub fn TaskCard(
    task: Task,
    board_id: BoardId,
) -> impl IntoView {
    let store = expect_board();
    let config = expect_config();
    let drag = use_drag(config.spring_back_ms);
    let threshold = config.move_threshold;
    let task_id = task.id;

    let on_pointerdown = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        // Keep receiving moves when the pointer leaves the card.
        if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
        drag.begin(f64::from(ev.client_x()));
    };

    let on_pointermove = move |ev: PointerEvent| {
        if drag.dragging.get_untracked() {
            drag.track(f64::from(ev.client_x()));
        }
    };

    let on_pointerup = move |ev: PointerEvent| {
        if let Some(release) = drag.release(f64::from(ev.client_x())) {
            store.release_task(board_id, task_id, release, threshold);
        }
    };

    let on_pointercancel = move |_: PointerEvent| drag.cancel();

    view! {
        <div
            class="task-card"
            class:dragging=move || drag.dragging.get()
            class:springing=move || drag.springing.get()
            style:transform=move || drag.transform()
            on:pointerdown=on_pointerdown
            on:pointermove=on_pointermove
            on:pointerup=on_pointerup
            on:pointercancel=on_pointercancel
        >
            <span class="task-content">{task.content}</span>
            <button
                class="task-delete-btn"
                title="Delete task"
                on:pointerdown=|e| e.stop_propagation()
                on:click=move |_| { store.remove_task(board_id, task_id); }
            >"🗑"</button>
        </div>
    }
}
