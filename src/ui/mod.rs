pub mod hangman_art;
pub mod terminal;
