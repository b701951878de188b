use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Difficulty, GameMode, Mark};

pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_mark: Mark,
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

fn default_thinking_delay_ms() -> u64 {
    700
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            difficulty: Difficulty::Hard,
            computer_mark: Mark::O,
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.computer_mark.is_empty() {
            return Err("computer_mark must be X or O".to_string());
        }
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {}",
                MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }
}
