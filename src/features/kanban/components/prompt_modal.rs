use leptos::ev;
use leptos::prelude::*;

use crate::features::kanban::hooks::{expect_prompt, PromptResponse};

#[component]
pub fn PromptModal(#[prop(into)] label: String) -> impl IntoView {
    let prompt = expect_prompt();
    let (content, set_content) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Keep the page from reloading
        ev.prevent_default();
        let value = content.get_untracked();
        set_content.set(String::new());
        prompt.resolve(PromptResponse::Submitted(value));
    };

    let cancel = move |_| {
        set_content.set(String::new());
        prompt.resolve(PromptResponse::Cancelled);
    };

    // Escape closes the dialog without going through our buttons.
    let on_close = move |_| {
        set_content.set(String::new());
        prompt.resolve(PromptResponse::Cancelled);
    };

    view! {
        <dialog node_ref=prompt.dialog_ref class="task-modal" on:close=on_close>
            <form class="modal-content" on:submit=handle_submit>
                <div class="modal-header">
                    <h3>{label}</h3>
                    <button type="button" class="modal-close" on:click=cancel>"×"</button>
                </div>
                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Task..."
                        autofocus
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                        prop:value=move || content.get()
                    />
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=cancel>"Cancel"</button>
                    <button type="submit" class="btn-primary">"OK"</button>
                </div>
            </form>
        </dialog>
    }
}
