mod difficulty;
mod game_state_snapshot;
mod game_stats;
mod guess_result;

pub use difficulty::Difficulty;
pub use game_state_snapshot::GameStateSnapshot;
pub use game_stats::{DifficultyStats, GameOutcome, GlobalStats};
pub use guess_result::GuessResult;
