/// Outcome of submitting one letter to the engine.
///
/// `AlreadyGuessed` and `GameOver` leave the game untouched; the two
/// remaining variants report whether the guess ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    AlreadyGuessed,
    GameOver,
    Correct { game_won: bool },
    Incorrect { game_lost: bool },
}

impl GuessResult {
    /// A valid guess is one that changed the game state.
    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            GuessResult::Correct { .. } | GuessResult::Incorrect { .. }
        )
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, GuessResult::Correct { .. })
    }
}
