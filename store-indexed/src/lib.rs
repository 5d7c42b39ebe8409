use std::collections::HashMap;

use common::conformance_tests;
use common::{Accumulator, WordCount};

/// Hash index from token to position in `entries`.
#[derive(Debug, Default)]
pub struct IndexedStore {
    index: HashMap<Vec<u8>, usize>,
    entries: Vec<WordCount>,
}

impl IndexedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for IndexedStore {
    fn observe(&mut self, token: &[u8]) {
        match self.index.get(token) {
            Some(&i) => self.entries[i].increment(),
            None => {
                self.index.insert(token.to_vec(), self.entries.len());
                self.entries.push(WordCount::first(token));
            }
        }
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = WordCount> + '_> {
        Box::new(self.entries.iter().cloned())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, token: &[u8]) -> bool {
        self.index.contains_key(token)
    }
}

conformance_tests!(IndexedStore::new);
