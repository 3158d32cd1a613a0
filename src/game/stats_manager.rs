use log::{trace, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use crate::helpers::home_dir;
use crate::model::{GameOutcome, GlobalStats};

/// Loads the aggregate counters at construction and writes the whole record
/// back after every mutation. Storage trouble is never fatal: a missing or
/// corrupt file loads as zeroed stats, and a failed write leaves the
/// in-memory counters correct for the rest of the session.
#[derive(Debug)]
pub struct StatsManager {
    stats_path: PathBuf,
    stats: GlobalStats,
}

impl StatsManager {
    pub fn new(stats_path: PathBuf) -> Self {
        let stats = Self::load(&stats_path);
        Self { stats_path, stats }
    }

    /// Per-user stats location.
    pub fn default_path() -> PathBuf {
        home_dir().join(".hangman_stats.json")
    }

    fn load(path: &Path) -> GlobalStats {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(stats) => {
                    trace!(target: "stats", "loaded stats from {:?}", path);
                    stats
                }
                Err(e) => {
                    warn!("stats file {:?} is unreadable ({}), starting fresh", path, e);
                    GlobalStats::default()
                }
            },
            Err(_) => GlobalStats::default(),
        }
    }

    fn save(&self) -> std::io::Result<()> {
        if let Some(dir) = self.stats_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(&self.stats)?;
        fs::write(&self.stats_path, contents)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("failed to write stats to {:?}: {}", self.stats_path, e);
        }
    }

    pub fn record_game(&mut self, outcome: &GameOutcome) {
        self.stats.games_played += 1;
        self.stats.total_guesses += outcome.guesses;

        if outcome.won {
            self.stats.games_won += 1;
            self.stats.current_streak += 1;
            if self.stats.current_streak > self.stats.best_streak {
                self.stats.best_streak = self.stats.current_streak;
            }
        } else {
            self.stats.games_lost += 1;
            self.stats.current_streak = 0;
        }

        let per_difficulty = self.stats.by_difficulty.entry(outcome.difficulty).or_default();
        per_difficulty.played += 1;
        if outcome.won {
            per_difficulty.won += 1;
        }

        self.stats.last_played =
            Some(UNIX_EPOCH + Duration::from_secs(outcome.timestamp.max(0) as u64));
        trace!(
            target: "stats",
            "recorded {} on {:?}, streak {}",
            if outcome.won { "win" } else { "loss" },
            outcome.difficulty,
            self.stats.current_streak
        );
        self.persist();
    }

    /// Defensive copy of the current counters.
    pub fn stats(&self) -> GlobalStats {
        self.stats.clone()
    }

    pub fn win_rate(&self) -> f64 {
        self.stats.win_rate()
    }

    pub fn reset_stats(&mut self) {
        self.stats = GlobalStats::default();
        self.persist();
    }
}
