use itertools::Itertools;
use log::trace;
use rand::RngCore;
use std::collections::BTreeSet;

use super::settings::Settings;
use super::word_list::WordList;
use crate::model::{Difficulty, GameOutcome, GameStateSnapshot, GuessResult};

/// Authoritative state of a single hangman game.
///
/// Constructed once per difficulty; `start_new_game` draws a fresh word and
/// resets everything mutable, `make_guess` is the only other mutation. The
/// game is over once `game_won` or `game_lost` is set, and stays over until
/// the next `start_new_game`.
pub struct GameEngine {
    difficulty: Difficulty,
    word_list: WordList,
    word_to_guess: String,
    hint: String,
    guessed_letters: BTreeSet<char>,
    incorrect_guesses: u32,
    game_won: bool,
    game_lost: bool,
    seed: u64,
}

impl GameEngine {
    pub fn new(difficulty: Difficulty, word_list: WordList) -> Self {
        Self {
            difficulty,
            word_list,
            word_to_guess: String::new(),
            hint: String::new(),
            guessed_letters: BTreeSet::new(),
            incorrect_guesses: 0,
            game_won: false,
            game_lost: false,
            seed: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn max_incorrect_guesses(&self) -> u32 {
        self.difficulty.max_incorrect_guesses()
    }

    pub fn word_to_guess(&self) -> &str {
        &self.word_to_guess
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    pub fn game_won(&self) -> bool {
        self.game_won
    }

    pub fn game_lost(&self) -> bool {
        self.game_lost
    }

    pub fn is_game_over(&self) -> bool {
        self.game_won || self.game_lost
    }

    /// Seed of the most recent word draw.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fresh word and hint, resetting all per-game state. Honors the
    /// `SEED` environment variable for reproducible draws.
    pub fn start_new_game(&mut self) -> (String, String) {
        self.start_new_game_seeded(Settings::seed_from_env())
    }

    pub fn start_new_game_seeded(&mut self, seed: Option<u64>) -> (String, String) {
        let seed = seed.unwrap_or(rand::rng().next_u64());
        let (word, hint) = self.word_list.random_pair(self.difficulty, seed);
        trace!(target: "game_engine", "drew word {:?} (seed {})", word, seed);

        self.word_to_guess = word;
        self.hint = hint;
        self.guessed_letters.clear();
        self.incorrect_guesses = 0;
        self.game_won = false;
        self.game_lost = false;
        self.seed = seed;
        (self.word_to_guess.clone(), self.hint.clone())
    }

    /// Process one letter. The letter is lowercased here; rejecting
    /// non-alphabetic or multi-character input is the driver's job.
    pub fn make_guess(&mut self, letter: char) -> GuessResult {
        if self.is_game_over() {
            return GuessResult::GameOver;
        }

        let letter = letter.to_ascii_lowercase();
        if self.guessed_letters.contains(&letter) {
            return GuessResult::AlreadyGuessed;
        }
        self.guessed_letters.insert(letter);

        if self.word_to_guess.contains(letter) {
            if self.is_word_complete() {
                trace!(target: "game_engine", "word {:?} guessed", self.word_to_guess);
                self.game_won = true;
                return GuessResult::Correct { game_won: true };
            }
            GuessResult::Correct { game_won: false }
        } else {
            self.incorrect_guesses += 1;
            if self.incorrect_guesses >= self.max_incorrect_guesses() {
                trace!(target: "game_engine", "out of guesses, word was {:?}", self.word_to_guess);
                self.game_lost = true;
                return GuessResult::Incorrect { game_lost: true };
            }
            GuessResult::Incorrect { game_lost: false }
        }
    }

    /// The word with unguessed letters masked, e.g. `"p y _ _ _ _"`.
    pub fn get_display_word(&self) -> String {
        self.word_to_guess
            .chars()
            .map(|letter| {
                if self.guessed_letters.contains(&letter) {
                    letter.to_string()
                } else {
                    "_".to_string()
                }
            })
            .join(" ")
    }

    pub fn is_word_complete(&self) -> bool {
        self.word_to_guess
            .chars()
            .all(|letter| self.guessed_letters.contains(&letter))
    }

    pub fn game_state(&self) -> GameStateSnapshot {
        GameStateSnapshot {
            display_word: self.get_display_word(),
            incorrect_guesses: self.incorrect_guesses,
            max_incorrect_guesses: self.max_incorrect_guesses(),
            guessed_letters: self.guessed_letters.iter().copied().collect(),
            hint: self.hint.clone(),
            game_won: self.game_won,
            game_lost: self.game_lost,
            is_game_over: self.is_game_over(),
        }
    }

    /// Record of the finished (or abandoned) game, for the stats manager.
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::new(
            self.game_won,
            self.difficulty,
            self.guessed_letters.len() as u32,
        )
    }
}
