use crate::model::Difficulty;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::TimestampSeconds;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Result of one finished game, as handed to the stats manager.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct GameOutcome {
    pub won: bool,
    pub difficulty: Difficulty,
    pub guesses: u32,
    pub timestamp: i64,
}

impl GameOutcome {
    pub fn new(won: bool, difficulty: Difficulty, guesses: u32) -> Self {
        Self {
            won,
            difficulty,
            guesses,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct DifficultyStats {
    pub played: u32,
    pub won: u32,
}

/// Cross-session aggregate counters, persisted whole on every change.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub games_lost: u32,
    #[serde(default)]
    pub total_guesses: u32,
    #[serde(default)]
    pub best_streak: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub by_difficulty: HashMap<Difficulty, DifficultyStats>,
    #[serde_as(as = "Option<TimestampSeconds>")]
    #[serde(default)]
    pub last_played: Option<SystemTime>,
}

impl Default for GlobalStats {
    fn default() -> Self {
        let by_difficulty = Difficulty::all()
            .into_iter()
            .map(|difficulty| (difficulty, DifficultyStats::default()))
            .collect();
        GlobalStats {
            games_played: 0,
            games_won: 0,
            games_lost: 0,
            total_guesses: 0,
            best_streak: 0,
            current_streak: 0,
            by_difficulty,
            last_played: None,
        }
    }
}

impl GlobalStats {
    /// Percentage of games won, 0.0 when nothing has been played yet.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        (self.games_won as f64 / self.games_played as f64) * 100.0
    }
}
