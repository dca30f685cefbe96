use futures::channel::oneshot;
use leptos::html::Dialog;
use leptos::prelude::*;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Submitted(String),
    Cancelled,
}

impl PromptResponse {
    pub fn into_content(self) -> Option<String> {
        match self {
            PromptResponse::Submitted(content) => Some(content),
            PromptResponse::Cancelled => None,
        }
    }
}

/// Asks the user for a line of text through a modal `<dialog>` and lets the
/// caller await the answer. The page behind the dialog is inert until the
/// user submits or cancels.
#[derive(Clone, Copy)]
pub struct PromptHandle {
    pub dialog_ref: NodeRef<Dialog>,
    pending: StoredValue<Option<oneshot::Sender<PromptResponse>>>,
}

pub fn use_prompt() -> PromptHandle {
    let handle = PromptHandle {
        dialog_ref: NodeRef::new(),
        pending: StoredValue::new(None),
    };
    provide_context(handle);
    handle
}

pub fn expect_prompt() -> PromptHandle {
    use_context::<PromptHandle>().expect("PromptHandle context")
}

impl PromptHandle {
    pub fn ask(&self) -> impl Future<Output = PromptResponse> {
        let answer = self.await_answer();

        match self.dialog_ref.get_untracked() {
            Some(dialog) => {
                if let Err(e) = dialog.show_modal() {
                    log::warn!("Failed to open prompt dialog: {:?}", e);
                    self.resolve(PromptResponse::Cancelled);
                }
            }
            None => {
                log::warn!("Prompt dialog is not mounted");
                self.resolve(PromptResponse::Cancelled);
            }
        }

        answer
    }

    // Registers a new outstanding request and returns its answer.
    fn await_answer(&self) -> impl Future<Output = PromptResponse> {
        let (tx, rx) = oneshot::channel();
        // Only one question at a time; an older one counts as cancelled.
        if let Some(previous) = self.pending.try_update_value(|slot| slot.replace(tx)).flatten() {
            let _ = previous.send(PromptResponse::Cancelled);
        }

        async move {
            rx.await.unwrap_or_else(|_| {
                log::warn!("Prompt was dropped without an answer");
                PromptResponse::Cancelled
            })
        }
    }

    /// Answers the outstanding request, if any, and closes the dialog.
    pub fn resolve(&self, response: PromptResponse) {
        if let Some(tx) = self.pending.try_update_value(|slot| slot.take()).flatten() {
            let _ = tx.send(response);
        }
        if let Some(dialog) = self.dialog_ref.get_untracked() {
            if dialog.open() {
                dialog.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn with_prompt(test: impl FnOnce(PromptHandle)) {
        let owner = Owner::new();
        owner.with(|| test(use_prompt()));
    }

    #[test]
    fn cancelled_prompt_has_no_content() {
        assert_eq!(PromptResponse::Cancelled.into_content(), None);
        assert_eq!(
            PromptResponse::Submitted("Write spec".to_string()).into_content(),
            Some("Write spec".to_string())
        );
    }

    #[test]
    fn submitted_text_reaches_the_waiting_caller() {
        with_prompt(|prompt| {
            let answer = prompt.await_answer();
            prompt.resolve(PromptResponse::Submitted("Buy milk".to_string()));
            assert_eq!(block_on(answer), PromptResponse::Submitted("Buy milk".to_string()));
        });
    }

    #[test]
    fn newer_request_cancels_the_older_one() {
        with_prompt(|prompt| {
            let first = prompt.await_answer();
            let second = prompt.await_answer();
            prompt.resolve(PromptResponse::Submitted("second".to_string()));

            assert_eq!(block_on(first), PromptResponse::Cancelled);
            assert_eq!(block_on(second), PromptResponse::Submitted("second".to_string()));
        });
    }

    #[test]
    fn resolve_without_a_request_is_ignored() {
        with_prompt(|prompt| {
            prompt.resolve(PromptResponse::Submitted("nobody asked".to_string()));
            let answer = prompt.await_answer();
            prompt.resolve(PromptResponse::Cancelled);
            assert_eq!(block_on(answer), PromptResponse::Cancelled);
        });
    }

    #[test]
    fn unmounted_dialog_answers_cancelled() {
        with_prompt(|prompt| {
            assert_eq!(block_on(prompt.ask()), PromptResponse::Cancelled);
        });
    }
}
