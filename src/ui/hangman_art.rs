//! Gallows drawings, one per count of wrong guesses. Three tables: the
//! regular six-step figure, an extended nine-step set paced for an
//! eight-guess budget, and a compact set for the four-guess budget.

const STAGES: [&str; 7] = [
    r#"
   ________
   |      |
   |
   |
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |      |
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |     /
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |     / \
   |
___|___
"#,
];

const STAGES_EASY: [&str; 9] = [
    r#"
   ________
   |      |
   |
   |
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |      |
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |      |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |      |
   |     /
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |      |
   |     / \
___|___
"#,
    r#"
   ________
   |      |
   |      X
   |     /|\
   |      |
   |     / \
___|___
"#,
];

const STAGES_HARD: [&str; 5] = [
    r#"
   ________
   |      |
   |
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |     /
___|___
"#,
    r#"
   ________
   |      |
   |      O
   |     /|\
   |     / \
___|___
"#,
];

/// Drawing for the current number of wrong guesses, clamped at the final
/// stage. The table is picked by the wrong-guess budget.
pub fn stage(incorrect_guesses: u32, max_guesses: u32) -> &'static str {
    let stages: &[&str] = match max_guesses {
        8 => &STAGES_EASY,
        4 => &STAGES_HARD,
        _ => &STAGES,
    };
    let index = (incorrect_guesses as usize).min(stages.len() - 1);
    stages[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_stage_has_no_figure() {
        for max in [4, 6, 8] {
            assert!(!stage(0, max).contains('O'));
        }
    }

    #[test]
    fn test_final_stage_lands_exactly_on_the_budget() {
        assert!(stage(6, 6).contains("/ \\"));
        assert!(stage(4, 4).contains("/ \\"));
        assert!(stage(8, 8).contains('X'));
        assert!(!stage(5, 6).contains("/ \\"));
    }

    #[test]
    fn test_stage_clamps_past_the_budget() {
        assert_eq!(stage(10, 6), stage(6, 6));
        assert_eq!(stage(99, 8), stage(8, 8));
    }

    #[test]
    fn test_unusual_budget_uses_the_regular_table() {
        assert_eq!(stage(3, 5), stage(3, 6));
    }
}
