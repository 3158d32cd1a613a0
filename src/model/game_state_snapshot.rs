use serde::{Deserialize, Serialize};

/// Read-only projection of a game in progress, for drivers to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateSnapshot {
    pub display_word: String,
    pub incorrect_guesses: u32,
    pub max_incorrect_guesses: u32,
    pub guessed_letters: Vec<char>,
    pub hint: String,
    pub game_won: bool,
    pub game_lost: bool,
    pub is_game_over: bool,
}
