//! Scoring and payoff configuration.

use serde::{Deserialize, Serialize};

/// Scoring weights and terminal payoff magnitude.
///
/// The defaults are the standard rules:
/// `score = coins + 10 * dead_monsters - 0.1 * time`, and a terminal value of
/// `1e8` that dominates any reachable score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Magnitude of win/loss payoffs.
    pub terminal_value: f64,

    /// Score per collected coin.
    pub coin_value: f64,

    /// Score per dead monster.
    pub kill_value: f64,

    /// Score lost per elapsed round.
    pub time_penalty: f64,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            terminal_value: 1e8,
            coin_value: 1.0,
            kill_value: 10.0,
            time_penalty: 0.1,
        }
    }
}

impl DungeonConfig {
    pub fn with_terminal_value(mut self, value: f64) -> Self {
        self.terminal_value = value;
        self
    }

    pub fn with_coin_value(mut self, value: f64) -> Self {
        self.coin_value = value;
        self
    }

    pub fn with_kill_value(mut self, value: f64) -> Self {
        self.kill_value = value;
        self
    }

    pub fn with_time_penalty(mut self, value: f64) -> Self {
        self.time_penalty = value;
        self
    }
}
