pub mod gesture;
pub mod task_operations;

pub use gesture::*;
pub use task_operations::*;
