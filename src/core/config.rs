use leptos::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;

use crate::features::kanban::services::DEFAULT_MOVE_THRESHOLD;
use crate::models::{BoardCollection, DEFAULT_COLUMNS};

const BUNDLED_CONFIG: &str = include_str!("../../config/board.json");

/// Board settings. Any field missing from the JSON falls back to its default.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub columns: Vec<String>,
    /// Horizontal drag distance a card must exceed to change column.
    pub move_threshold: f64,
    pub spring_back_ms: u32,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Luxurious To-Do Board".to_string(),
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            move_threshold: DEFAULT_MOVE_THRESHOLD,
            spring_back_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let config: BoardConfig = serde_json::from_str(raw)
            .map_err(|e| format!("Failed to parse board config: {}", e))?;
        if config.columns.is_empty() {
            return Err("Board config must name at least one column".to_string());
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = config.columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(format!("Duplicate column title: {}", duplicate));
        }
        if !config.move_threshold.is_finite() || config.move_threshold < 0.0 {
            return Err(format!("Invalid move threshold: {}", config.move_threshold));
        }
        Ok(config)
    }

    /// Config shipped with the app in `config/board.json`.
    pub fn bundled() -> Result<Self, String> {
        Self::from_json(BUNDLED_CONFIG)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn initial_boards(&self) -> BoardCollection {
        BoardCollection::with_columns(self.columns.iter().cloned())
    }
}

pub fn expect_config() -> BoardConfig {
    use_context::<BoardConfig>().expect("BoardConfig context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(BoardConfig::bundled(), Ok(BoardConfig::default()));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = BoardConfig::from_json(r#"{ "move_threshold": 40 }"#).expect("parses");
        assert_eq!(config.move_threshold, 40.0);
        assert_eq!(config.columns, vec!["To Do", "In Progress", "Done"]);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn rejects_unusable_values() {
        assert!(BoardConfig::from_json(r#"{ "columns": [] }"#).is_err());
        assert!(BoardConfig::from_json(r#"{ "move_threshold": -1 }"#).is_err());
        assert!(BoardConfig::from_json("not json").is_err());
    }

    #[test]
    fn rejects_duplicate_column_titles() {
        let result = BoardConfig::from_json(r#"{ "columns": ["To Do", "Done", "To Do"] }"#);
        assert_eq!(result, Err("Duplicate column title: To Do".to_string()));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = BoardConfig {
            log_level: "chatty".to_string(),
            ..BoardConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);

        let config = BoardConfig {
            log_level: "debug".to_string(),
            ..BoardConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn initial_boards_follow_configured_columns() {
        let config = BoardConfig {
            columns: vec!["Backlog".to_string(), "Shipped".to_string()],
            ..BoardConfig::default()
        };
        let boards = config.initial_boards();
        assert_eq!(boards.boards.len(), 2);
        assert_eq!(boards.boards[1].title, "Shipped");
        assert_eq!(boards.task_count(), 0);
    }

    #[test]
    fn expect_config_reads_the_provided_config() {
        let owner = Owner::new();
        owner.with(|| {
            let config = BoardConfig {
                move_threshold: 42.0,
                ..BoardConfig::default()
            };
            provide_context(config.clone());
            assert_eq!(expect_config(), config);
        });
    }

    #[test]
    #[should_panic(expected = "BoardConfig context")]
    fn expect_config_fails_without_a_provider() {
        let owner = Owner::new();
        owner.with(|| {
            expect_config();
        });
    }
}
