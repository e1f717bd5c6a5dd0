use serde::Deserialize;
use std::collections::HashSet;
use strum::Display;
use thiserror::Error;

use super::{GROUP_COUNT, GROUP_SIZE};

/// Display tag of a category. Has no bearing on scoring.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Yellow,
    Green,
    Blue,
    Purple,
}

/// A themed group of words within a puzzle.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Category {
    /// The connection shared by the words, e.g. "FISH".
    #[serde(rename = "category")]
    pub name: String,
    /// The words belonging to the category.
    pub words: Vec<String>,
    /// How the category is shown once solved or revealed.
    pub color: Color,
}

impl Category {
    #[cfg(test)]
    pub fn new(name: &str, words: [&str; GROUP_SIZE], color: Color) -> Self {
        Category {
            name: name.to_owned(),
            words: words.iter().map(|w| w.to_string()).collect(),
            color,
        }
    }

    /// Whether `word` is one of this category's words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of `words` which belong to this category.
    pub fn match_count(&self, words: &[String]) -> usize {
        words.iter().filter(|w| self.contains(w)).count()
    }
}

/// Ways in which a puzzle definition can be malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle has {0} categories, expected {}", GROUP_COUNT)]
    CategoryCount(usize),
    #[error("category {category:?} has {count} words, expected {}", GROUP_SIZE)]
    WordCount { category: String, count: usize },
    #[error("category {0:?} contains an empty word")]
    EmptyWord(String),
    #[error("word {0:?} appears more than once in the puzzle")]
    DuplicateWord(String),
}

/// A puzzle as written in a catalog file, before validation.
#[derive(Debug, Deserialize)]
pub struct PuzzleDefinition {
    pub groups: Vec<Category>,
}

/// A validated puzzle: four categories partitioning sixteen unique words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    categories: Vec<Category>,
}

impl Puzzle {
    /// Validate and construct a puzzle from its categories.
    pub fn new(categories: Vec<Category>) -> Result<Self, PuzzleError> {
        if categories.len() != GROUP_COUNT {
            return Err(PuzzleError::CategoryCount(categories.len()));
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.words.len() != GROUP_SIZE {
                return Err(PuzzleError::WordCount {
                    category: category.name.clone(),
                    count: category.words.len(),
                });
            }
            for word in &category.words {
                if word.trim().is_empty() {
                    return Err(PuzzleError::EmptyWord(category.name.clone()));
                }
                // Covers repeats within a category as well as across categories
                if !seen.insert(word.as_str()) {
                    return Err(PuzzleError::DuplicateWord(word.clone()));
                }
            }
        }

        Ok(Puzzle { categories })
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All sixteen words, category by category.
    pub fn words(&self) -> impl Iterator<Item = &String> {
        self.categories.iter().flat_map(|c| c.words.iter())
    }
}

impl TryFrom<PuzzleDefinition> for Puzzle {
    type Error = PuzzleError;

    fn try_from(definition: PuzzleDefinition) -> Result<Self, Self::Error> {
        Puzzle::new(definition.groups)
    }
}
