//! Session configuration.
//!
//! The original host kept these values in a global `CONFIG` object; here they
//! travel as an explicit value so every operation sees exactly the constants
//! it was called with.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

pub const DEFAULT_TEAM_SIZE: usize = 6;
pub const DEFAULT_TARGET_GAMES: u32 = 3;
pub const DEFAULT_WIN_SCORE: u32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Members per full group.
    #[serde(default = "default_team_size")]
    pub team_size: usize,
    /// Games each group should get on the schedule.
    #[serde(default = "default_target_games")]
    pub target_games_per_group: u32,
    /// Points to win a set; carried for scoreboard hosts, unused by the draw.
    #[serde(default = "default_win_score")]
    pub win_score: u32,
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

fn default_target_games() -> u32 {
    DEFAULT_TARGET_GAMES
}

fn default_win_score() -> u32 {
    DEFAULT_WIN_SCORE
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            target_games_per_group: DEFAULT_TARGET_GAMES,
            win_score: DEFAULT_WIN_SCORE,
        }
    }
}

impl SessionConfig {
    /// A zero team size is a caller bug, not a degraded draw.
    pub fn validate(&self) -> Result<()> {
        if self.team_size == 0 {
            return Err(SessionError::InvalidConfig(
                "team_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_original_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.team_size, 6);
        assert_eq!(config.target_games_per_group, 3);
        assert_eq!(config.win_score, 25);
    }

    #[test]
    fn zero_team_size_is_rejected() {
        let config = SessionConfig {
            team_size: 0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"team_size": 4}"#).unwrap();
        assert_eq!(config.team_size, 4);
        assert_eq!(config.target_games_per_group, 3);
        assert_eq!(config.win_score, 25);
    }
}
