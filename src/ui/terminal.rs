use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;

use chrono::{Local, TimeZone};
use itertools::Itertools;
use log::{trace, warn};

use crate::game::{GameEngine, Settings, StatsManager, WordList};
use crate::helpers::Capitalize;
use crate::model::{Difficulty, GuessResult};
use crate::ui::hangman_art;

const BANNER_WIDTH: usize = 50;

/// Interactive terminal loop: pick a difficulty, play rounds until the
/// player declines another game. The chosen difficulty is persisted back
/// into settings for the next session.
pub fn run() {
    let mut settings = Settings::load();
    let word_list = WordList::load(Path::new("data/words.json"));
    let mut stats = StatsManager::new(StatsManager::default_path());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("      WELCOME TO HANGMAN!");
    println!("{}", "=".repeat(BANNER_WIDTH));

    loop {
        let difficulty = match select_difficulty(&mut input, settings.difficulty) {
            Some(difficulty) => difficulty,
            None => return,
        };
        if difficulty != settings.difficulty {
            settings.difficulty = difficulty;
            if let Err(e) = settings.save() {
                warn!("failed to save settings: {}", e);
            }
        }

        let mut engine = GameEngine::new(difficulty, word_list.clone());
        if !play_game(&mut input, &mut engine, &mut stats) {
            return;
        }

        match prompt(&mut input, "\nPlay again? (y/n): ") {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }
    println!("\nThanks for playing!");
}

fn select_difficulty(input: &mut impl BufRead, current: Difficulty) -> Option<Difficulty> {
    println!("\nSelect difficulty:");
    for difficulty in Difficulty::all() {
        println!(
            "{}. {} ({} wrong guesses)",
            difficulty.index() + 1,
            difficulty.name().capitalize(),
            difficulty.max_incorrect_guesses()
        );
    }
    loop {
        let line = prompt(
            input,
            &format!("\nEnter your choice (1-3) [{}]: ", current.name()),
        )?;
        if line.is_empty() {
            return Some(current);
        }
        match line.parse::<usize>() {
            Ok(choice @ 1..=3) => return Some(Difficulty::from_index(choice - 1)),
            _ => println!("Invalid choice. Please enter 1, 2, or 3."),
        }
    }
}

/// Returns false when stdin is exhausted mid-game.
fn play_game(input: &mut impl BufRead, engine: &mut GameEngine, stats: &mut StatsManager) -> bool {
    engine.start_new_game();
    trace!(target: "terminal", "new game started (seed {})", engine.seed());

    while !engine.is_game_over() {
        render(engine);
        let line = match prompt(input, "\nGuess a letter: ") {
            Some(line) => line,
            None => return false,
        };
        let letter = match parse_letter(&line) {
            Some(letter) => letter,
            None => {
                println!("Please enter a single letter.");
                continue;
            }
        };
        match engine.make_guess(letter) {
            GuessResult::AlreadyGuessed => println!("You already guessed that letter!"),
            GuessResult::Correct { .. } => println!("Correct!"),
            GuessResult::Incorrect { .. } => println!("Wrong guess!"),
            GuessResult::GameOver => break,
        }
    }

    println!(
        "{}",
        hangman_art::stage(engine.incorrect_guesses(), engine.max_incorrect_guesses())
    );
    println!("{}", "=".repeat(BANNER_WIDTH));
    if engine.game_won() {
        println!("CONGRATULATIONS! YOU WON!");
        println!("\nThe word was: {}", engine.word_to_guess().to_uppercase());
        println!(
            "You guessed it with {} wrong guesses!",
            engine.incorrect_guesses()
        );
    } else {
        println!("GAME OVER - YOU LOST!");
        println!("\nThe word was: {}", engine.word_to_guess().to_uppercase());
    }
    println!("{}", "=".repeat(BANNER_WIDTH));

    stats.record_game(&engine.outcome());
    print_stats(stats);
    true
}

fn render(engine: &GameEngine) {
    let state = engine.game_state();
    println!(
        "{}",
        hangman_art::stage(state.incorrect_guesses, state.max_incorrect_guesses)
    );
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Difficulty: {}", engine.difficulty().name().capitalize());
    println!("Hint: {}", state.hint);
    if Settings::is_debug_mode() {
        println!("[debug] word: {}", engine.word_to_guess());
    }
    println!("\nWord: {}", state.display_word);
    println!(
        "Wrong guesses: {}/{}",
        state.incorrect_guesses, state.max_incorrect_guesses
    );
    if !state.guessed_letters.is_empty() {
        println!(
            "Letters guessed: {}",
            state.guessed_letters.iter().join(", ")
        );
    }
    println!("{}", "=".repeat(BANNER_WIDTH));
}

fn print_stats(stats: &StatsManager) {
    let snapshot = stats.stats();
    println!("\nYour statistics:");
    println!("  Games played: {}", snapshot.games_played);
    println!("  Win rate: {:.1}%", stats.win_rate());
    println!("  Current streak: {}", snapshot.current_streak);
    println!("  Best streak: {}", snapshot.best_streak);
    if let Some(last_played) = snapshot.last_played {
        let timestamp = last_played
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        let date = Local
            .timestamp_opt(timestamp, 0)
            .single()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        println!("  Last played: {}", date);
    }
}

fn parse_letter(line: &str) -> Option<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Option<String> {
    print!("{}", message);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter_accepts_single_letters_only() {
        assert_eq!(parse_letter("a"), Some('a'));
        assert_eq!(parse_letter("Z"), Some('Z'));
        assert_eq!(parse_letter(""), None);
        assert_eq!(parse_letter("ab"), None);
        assert_eq!(parse_letter("7"), None);
    }
}
