use common::conformance_tests;
use common::{Accumulator, WordCount};

/// The count for `words[i]` lives at `counts[i]`.
#[derive(Debug, Default)]
pub struct ParallelStore {
    words: Vec<Vec<u8>>,
    counts: Vec<u64>,
}

impl ParallelStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for ParallelStore {
    fn observe(&mut self, token: &[u8]) {
        match self.words.iter().position(|w| w == token) {
            Some(i) => self.counts[i] += 1,
            None => {
                self.words.push(token.to_vec());
                self.counts.push(1);
            }
        }
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = WordCount> + '_> {
        Box::new(
            self.words
                .iter()
                .zip(&self.counts)
                .map(|(word, &count)| WordCount::new(word.as_slice(), count)),
        )
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn contains(&self, token: &[u8]) -> bool {
        self.words.iter().any(|w| w == token)
    }
}

conformance_tests!(ParallelStore::new);
