use rand::{seq::SliceRandom, Rng};

/// Source of the randomness a game consumes: picking a puzzle and shuffling words.
///
/// Every `rand::Rng` is a `Randomness`, so production code can pass `thread_rng()` or a
/// seeded `StdRng`, while tests can supply fully scripted behaviour.
pub trait Randomness {
    /// Choose an index uniformly from `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Permute `words` in place, every permutation equally likely.
    fn shuffle_words(&mut self, words: &mut [String]);
}

impl<R: Rng> Randomness for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn shuffle_words(&mut self, words: &mut [String]) {
        // Fisher-Yates
        words.shuffle(self);
    }
}
