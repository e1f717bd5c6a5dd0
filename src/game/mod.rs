use log::{debug, info};
use std::sync::Arc;

pub use data::{Catalog, PUZZLES};
pub use guess::{GuessResult, Outcome};
pub use puzzle::{Category, Puzzle};
pub use random::Randomness;
pub use state::GameStatus;

pub mod data;
mod guess;
pub mod puzzle;
mod random;
mod state;
#[cfg(test)]
pub(crate) mod tests;

/// Number of words in a category, and so in a guess.
pub const GROUP_SIZE: usize = 4;
/// Number of categories in a puzzle.
pub const GROUP_COUNT: usize = 4;
/// Incorrect guesses allowed before the game is lost.
pub const MAX_MISTAKES: usize = 4;

/// A single playthrough of a puzzle drawn from a catalog.
///
/// All state changes go through the methods below. Calls made out of turn (selecting a
/// word that isn't on the board, submitting an incomplete guess, acting after the game is
/// over) leave the game untouched.
#[derive(Debug)]
pub struct Game<R> {
    catalog: Catalog,
    rng: R,
    /// The puzzle being played.
    puzzle: Arc<Puzzle>,
    /// Words not yet part of a solved category, in display order.
    remaining: Vec<String>,
    /// Currently selected words, in selection order.
    selection: Vec<String>,
    /// Categories guessed correctly, in the order they were solved.
    solved: Vec<Category>,
    mistakes: usize,
    status: GameStatus,
}

impl<R: Randomness> Game<R> {
    /// Start a new game on a random puzzle from `catalog`.
    pub fn new(catalog: Catalog, mut rng: R) -> Self {
        let puzzle = catalog.pick_random(&mut rng);
        let mut game = Game {
            catalog,
            rng,
            puzzle,
            remaining: Vec::new(),
            selection: Vec::new(),
            solved: Vec::new(),
            mistakes: 0,
            status: GameStatus::InProgress,
        };
        game.deal();
        game
    }

    /// Abandon the current game and start over on a freshly picked puzzle.
    pub fn start(&mut self) {
        self.puzzle = self.catalog.pick_random(&mut self.rng);
        self.deal();
    }

    fn deal(&mut self) {
        self.remaining = self.puzzle.words().cloned().collect();
        self.rng.shuffle_words(&mut self.remaining);
        self.selection.clear();
        self.solved.clear();
        self.mistakes = 0;
        self.status = GameStatus::InProgress;
        info!("Started a new game with {} words", self.remaining.len());
    }

    /// Select `word`, or deselect it if it is already selected. Selecting a fifth word does
    /// nothing. Returns the selection afterwards.
    pub fn toggle_select(&mut self, word: &str) -> &[String] {
        if self.status.is_over() || !self.remaining.iter().any(|w| w == word) {
            debug!("Ignoring selection of {:?}", word);
            return &self.selection;
        }

        if let Some(index) = self.selection.iter().position(|w| w == word) {
            self.selection.remove(index);
        } else if self.selection.len() < GROUP_SIZE {
            self.selection.push(word.to_owned());
        }
        debug!("Selection: {:?}", self.selection);
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.selection.clear();
    }

    /// Reorder the words still on the board.
    pub fn shuffle_remaining(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.rng.shuffle_words(&mut self.remaining);
        debug!("Shuffled board: {:?}", self.remaining);
    }

    /// Score the current selection. Returns `None` without changing anything unless the game
    /// is in progress and exactly four words are selected.
    pub fn submit_guess(&mut self) -> Option<GuessResult> {
        if self.status.is_over() || self.selection.len() != GROUP_SIZE {
            debug!(
                "Ignoring guess with {} words selected while {}",
                self.selection.len(),
                self.status
            );
            return None;
        }

        let outcome = guess::evaluate(&self.puzzle, &self.selection);
        self.selection.clear();

        let mut revealed = Vec::new();
        match &outcome {
            Outcome::Correct(category) => {
                info!("Solved category {:?}", category.name);
                self.remaining.retain(|w| !category.contains(w));
                self.solved.push(category.clone());
                if self.solved.len() == GROUP_COUNT {
                    info!("Game won with {} mistakes", self.mistakes);
                    self.status = GameStatus::Won;
                }
            }
            Outcome::NearMiss | Outcome::Incorrect => {
                self.mistakes += 1;
                debug!("{} ({}/{} mistakes)", outcome, self.mistakes, MAX_MISTAKES);
                if self.mistakes >= MAX_MISTAKES {
                    info!("Game lost with {} categories solved", self.solved.len());
                    self.status = GameStatus::Lost;
                    revealed = self.unsolved_categories();
                }
            }
        }

        Some(GuessResult {
            outcome,
            status: self.status,
            revealed,
        })
    }
}

impl<R> Game<R> {
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn remaining_words(&self) -> &[String] {
        &self.remaining
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_selected(&self, word: &str) -> bool {
        self.selection.iter().any(|w| w == word)
    }

    pub fn solved_categories(&self) -> &[Category] {
        &self.solved
    }

    /// Categories not yet solved, in puzzle order.
    pub fn unsolved_categories(&self) -> Vec<Category> {
        self.puzzle
            .categories()
            .iter()
            .filter(|c| !self.solved.contains(c))
            .cloned()
            .collect()
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub fn mistakes_remaining(&self) -> usize {
        MAX_MISTAKES - self.mistakes
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
