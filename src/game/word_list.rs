use itertools::Itertools;
use log::{trace, warn};
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::model::Difficulty;

/// Fallback list, used for any difficulty the words file does not cover.
const DEFAULT_WORDS: &[(&str, &str)] = &[
    ("python", "A popular programming language."),
    ("hangman", "A word guessing game."),
    ("challenge", "A task that tests someone's abilities."),
    ("programming", "The process of writing computer code."),
    ("development", "The process of developing something."),
    ("computer", "An electronic device for processing data."),
    ("algorithm", "A step-by-step procedure for solving a problem."),
    ("database", "An organized collection of data."),
    ("network", "A group of interconnected computers."),
    ("software", "Programs and operating systems used by computers."),
    ("interface", "A point where two systems meet and interact."),
    ("function", "A block of code that performs a specific task."),
    ("variable", "A storage location with a symbolic name."),
    ("debugging", "The process of finding and fixing errors."),
    ("repository", "A storage location for software packages."),
];

#[derive(Debug, Deserialize)]
struct WordsFile(HashMap<String, HashMap<String, String>>);

/// Words and their hints, grouped by difficulty.
#[derive(Debug, Clone)]
pub struct WordList {
    words: HashMap<Difficulty, HashMap<String, String>>,
}

impl Default for WordList {
    fn default() -> Self {
        let defaults: HashMap<String, String> = DEFAULT_WORDS
            .iter()
            .map(|(word, hint)| (word.to_string(), hint.to_string()))
            .collect();
        let words = Difficulty::all()
            .into_iter()
            .map(|difficulty| (difficulty, defaults.clone()))
            .collect();
        Self { words }
    }
}

impl WordList {
    pub fn with_words(words: HashMap<Difficulty, HashMap<String, String>>) -> Self {
        let mut list = Self { words };
        // Guarantee every difficulty can start a game.
        let defaults = Self::default();
        for difficulty in Difficulty::all() {
            let entry = list.words.entry(difficulty).or_default();
            if entry.is_empty() {
                *entry = defaults.words[&difficulty].clone();
            }
        }
        list
    }

    /// Load per-difficulty words from a JSON file, shaped like
    /// `{"easy": {"word": "hint", ...}, ...}`. Missing or unreadable files
    /// and missing difficulties fall back to the built-in list.
    pub fn load(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match serde_json::from_str::<WordsFile>(&contents) {
                Ok(parsed) => {
                    trace!(target: "word_list", "loaded words from {:?}", path);
                    let words = Difficulty::all()
                        .into_iter()
                        .filter_map(|difficulty| {
                            parsed
                                .0
                                .get(difficulty.name())
                                .map(|entries| (difficulty, entries.clone()))
                        })
                        .collect();
                    return Self::with_words(words);
                }
                Err(e) => {
                    warn!("words file {:?} is unreadable ({}), using defaults", path, e);
                }
            }
        }
        Self::default()
    }

    pub fn words_for(&self, difficulty: Difficulty) -> &HashMap<String, String> {
        &self.words[&difficulty]
    }

    /// Draw one `(word, hint)` pair uniformly at random. The word comes back
    /// lowercased; the same seed always draws the same pair.
    pub fn random_pair(&self, difficulty: Difficulty, seed: u64) -> (String, String) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let pairs: Vec<(&String, &String)> = self.words_for(difficulty).iter().sorted().collect();
        // with_words backfills empty difficulties, so the slice is never empty
        let (word, hint) = *pairs.choose(&mut rng).unwrap();
        (word.to_lowercase(), hint.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_list_covers_every_difficulty() {
        let list = WordList::default();
        for difficulty in Difficulty::all() {
            assert!(!list.words_for(difficulty).is_empty());
        }
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let list = WordList::load(Path::new("/nonexistent/words.json"));
        assert_eq!(
            list.words_for(Difficulty::Medium),
            WordList::default().words_for(Difficulty::Medium)
        );
    }

    #[test]
    fn test_load_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{{not json").unwrap();

        let list = WordList::load(&path);
        assert!(!list.words_for(Difficulty::Hard).is_empty());
    }

    #[test]
    fn test_load_keeps_file_entries_and_fills_missing_difficulties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(
            &path,
            r#"{"easy": {"cat": "A small domesticated feline."}}"#,
        )
        .unwrap();

        let list = WordList::load(&path);
        assert_eq!(list.words_for(Difficulty::Easy).len(), 1);
        assert_eq!(
            list.words_for(Difficulty::Easy)["cat"],
            "A small domesticated feline."
        );
        assert!(!list.words_for(Difficulty::Medium).is_empty());
    }

    #[test]
    fn test_random_pair_is_deterministic_for_a_seed() {
        let list = WordList::default();
        let first = list.random_pair(Difficulty::Medium, 42);
        let second = list.random_pair(Difficulty::Medium, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_pair_word_is_lowercase_and_hinted() {
        let mut words = HashMap::new();
        words.insert(
            Difficulty::Hard,
            HashMap::from([("RuSt".to_string(), "A systems language.".to_string())]),
        );
        let list = WordList::with_words(words);
        let (word, hint) = list.random_pair(Difficulty::Hard, 7);
        assert_eq!(word, "rust");
        assert_eq!(hint, "A systems language.");
    }
}
