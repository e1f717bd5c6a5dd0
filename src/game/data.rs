use lazy_static::lazy_static;
use log::warn;
use std::sync::Arc;
use thiserror::Error;

use super::{
    puzzle::{Puzzle, PuzzleDefinition, PuzzleError},
    random::Randomness,
};

/// Failure modes when loading a puzzle catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no puzzles")]
    Empty,
    #[error("malformed catalog definition")]
    Json(#[from] serde_json::Error),
    #[error("puzzle {index} is invalid")]
    InvalidPuzzle {
        index: usize,
        #[source]
        source: PuzzleError,
    },
}

/// An ordered, non-empty collection of validated puzzles.
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: Vec<Arc<Puzzle>>,
}

impl Catalog {
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Catalog {
            puzzles: puzzles.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a catalog from its JSON definition. Any invalid puzzle rejects the whole catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<PuzzleDefinition> = serde_json::from_str(json)?;
        let mut puzzles = Vec::with_capacity(definitions.len());
        for (index, definition) in definitions.into_iter().enumerate() {
            match Puzzle::try_from(definition) {
                Ok(puzzle) => puzzles.push(puzzle),
                Err(source) => {
                    warn!("Rejecting puzzle {}: {}", index, source);
                    return Err(CatalogError::InvalidPuzzle { index, source });
                }
            }
        }
        Catalog::new(puzzles)
    }

    pub fn puzzles(&self) -> &[Arc<Puzzle>] {
        &self.puzzles
    }

    /// Pick a puzzle uniformly at random.
    pub fn pick_random(&self, rng: &mut impl Randomness) -> Arc<Puzzle> {
        let index = rng.choose_index(self.puzzles.len());
        self.puzzles[index].clone()
    }
}

lazy_static! {
    /// The puzzles built into the game.
    pub static ref PUZZLES: Catalog = Catalog::from_json(include_str!("data/puzzles.json"))
        .expect("built-in puzzle catalog is valid");
}
