use std::fmt;

use super::{
    puzzle::{Category, Puzzle},
    GameStatus, GROUP_SIZE,
};

/// How a submitted guess was judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All four words belong to this category.
    Correct(Category),
    /// Three of the four words share a category.
    NearMiss,
    Incorrect,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct(_) => write!(f, "Correct!"),
            Outcome::NearMiss => write!(f, "One away..."),
            Outcome::Incorrect => write!(f, "Incorrect!"),
        }
    }
}

/// Everything the caller needs to know after a guess has been scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: Outcome,
    /// Game status after the guess was applied.
    pub status: GameStatus,
    /// Categories still unsolved when the game was lost, in puzzle order.
    /// Empty unless `status` is `Lost`.
    pub revealed: Vec<Category>,
}

/// Score `selection` against each category of `puzzle`.
///
/// Categories partition the puzzle's words, so at most one can match all four.
pub fn evaluate(puzzle: &Puzzle, selection: &[String]) -> Outcome {
    let mut best = 0;
    for category in puzzle.categories() {
        let matches = category.match_count(selection);
        if matches == GROUP_SIZE {
            return Outcome::Correct(category.clone());
        }
        best = best.max(matches);
    }

    if best == GROUP_SIZE - 1 {
        Outcome::NearMiss
    } else {
        Outcome::Incorrect
    }
}
