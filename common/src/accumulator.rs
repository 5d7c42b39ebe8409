use std::fmt::Debug;

use log::debug;

use crate::WordCount;

/// Lookup-or-insert over [`WordCount`]s, kept in order of first appearance.
pub trait Accumulator: Debug {
    fn observe(&mut self, token: &[u8]);

    fn enumerate(&self) -> Box<dyn Iterator<Item = WordCount> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, token: &[u8]) -> bool {
        self.enumerate().any(|wc| wc.matches(token))
    }
}

impl<A: Accumulator + ?Sized> Accumulator for Box<A> {
    fn observe(&mut self, token: &[u8]) {
        (**self).observe(token)
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = WordCount> + '_> {
        (**self).enumerate()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn contains(&self, token: &[u8]) -> bool {
        (**self).contains(token)
    }
}

/// Caps the number of distinct tokens an accumulator tracks.
///
/// Once `limit` tokens are tracked, unseen tokens are dropped without error;
/// tokens already tracked keep counting.
#[derive(Debug)]
pub struct Capped<A> {
    inner: A,
    limit: usize,
    dropped: u64,
}

impl<A: Accumulator> Capped<A> {
    pub fn new(inner: A, limit: usize) -> Self {
        Self {
            inner,
            limit,
            dropped: 0,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl<A: Accumulator> Accumulator for Capped<A> {
    fn observe(&mut self, token: &[u8]) {
        if self.inner.len() >= self.limit && !self.inner.contains(token) {
            debug!(
                "capacity {} reached, dropping {:?}",
                self.limit,
                String::from_utf8_lossy(token)
            );
            self.dropped += 1;
            return;
        }
        self.inner.observe(token);
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = WordCount> + '_> {
        self.inner.enumerate()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, token: &[u8]) -> bool {
        self.inner.contains(token)
    }
}
