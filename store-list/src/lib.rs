use std::iter;

use common::conformance_tests;
use common::{Accumulator, WordCount};

#[derive(Debug)]
struct Node {
    entry: WordCount,
    next: Link,
}

type Link = Option<Box<Node>>;

#[derive(Debug, Default)]
pub struct ListStore {
    head: Link,
    len: usize,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

impl Accumulator for ListStore {
    fn observe(&mut self, token: &[u8]) {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                Some(node) => {
                    if node.entry.matches(token) {
                        node.entry.increment();
                        return;
                    }
                    cursor = &mut node.next;
                }
                None => {
                    *cursor = Some(Box::new(Node {
                        entry: WordCount::first(token),
                        next: None,
                    }));
                    self.len += 1;
                    return;
                }
            }
        }
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = WordCount> + '_> {
        Box::new(self.nodes().map(|node| node.entry.clone()))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, token: &[u8]) -> bool {
        self.nodes().any(|node| node.entry.matches(token))
    }
}

impl Drop for ListStore {
    fn drop(&mut self) {
        // unlink one node at a time; the default drop recurses once per node
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

conformance_tests!(ListStore::new);
