pub mod column;
pub mod header;
pub mod prompt_modal;
pub mod task_card;

pub use column::KanbanColumn;
pub use header::KanbanHeader;
pub use prompt_modal::PromptModal;
pub use task_card::TaskCard;
