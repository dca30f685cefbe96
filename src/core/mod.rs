pub mod config;
pub mod logging;

pub use config::{expect_config, BoardConfig};
