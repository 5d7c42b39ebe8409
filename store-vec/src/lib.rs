use common::conformance_tests;
use common::{Accumulator, WordCount};

#[derive(Debug, Default)]
pub struct VecStore {
    entries: Vec<WordCount>,
}

impl VecStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for VecStore {
    fn observe(&mut self, token: &[u8]) {
        match self.entries.iter_mut().find(|wc| wc.matches(token)) {
            Some(wc) => wc.increment(),
            None => self.entries.push(WordCount::first(token)),
        }
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = WordCount> + '_> {
        Box::new(self.entries.iter().cloned())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, token: &[u8]) -> bool {
        self.entries.iter().any(|wc| wc.matches(token))
    }
}

conformance_tests!(VecStore::new);
