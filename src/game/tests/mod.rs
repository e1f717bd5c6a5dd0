use super::{Catalog, Game, Puzzle, Randomness, PUZZLES};


/// Deterministic randomness: always picks the first puzzle and never reorders words.
#[derive(Debug, Default)]
pub struct Unshuffled;

impl Randomness for Unshuffled {
    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }

    fn shuffle_words(&mut self, _words: &mut [String]) {}
}

/// Reverses word order on every shuffle and picks puzzles from a fixed script.
#[derive(Debug)]
pub struct Scripted {
    picks: Vec<usize>,
}

impl Randomness for Scripted {
    fn choose_index(&mut self, len: usize) -> usize {
        let pick = self.picks.remove(0);
        assert!(pick < len);
        pick
    }

    fn shuffle_words(&mut self, words: &mut [String]) {
        words.reverse();
    }
}

/// The FISH / PALINDROMES / ___BOW / STARTS WITH BODY PARTS puzzle, unshuffled.
pub fn fish_game() -> Game<Unshuffled> {
    let puzzle: Puzzle = (*PUZZLES.puzzles()[0]).clone();
    Game::new(Catalog::new(vec![puzzle]).unwrap(), Unshuffled)
}

pub fn select_all<R: Randomness>(game: &mut Game<R>, words: &[&str]) {
    for word in words {
        game.toggle_select(word);
    }
}
