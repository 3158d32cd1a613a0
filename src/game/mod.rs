pub mod game_engine;
pub mod settings;
pub mod stats_manager;
pub mod word_list;

pub use game_engine::GameEngine;
pub use settings::Settings;
pub use stats_manager::StatsManager;
pub use word_list::WordList;

#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;

    use crate::model::Difficulty;

    use super::word_list::WordList;

    /// Word list where every difficulty holds exactly one known pair, so
    /// tests can script the whole game.
    pub fn fixed_word_list(word: &str, hint: &str) -> WordList {
        let words = Difficulty::all()
            .into_iter()
            .map(|difficulty| {
                (
                    difficulty,
                    HashMap::from([(word.to_string(), hint.to_string())]),
                )
            })
            .collect();
        WordList::with_words(words)
    }
}
