use std::{borrow::Cow, fmt};

/// A token together with the number of times it has been observed.
///
/// Tokens are raw bytes; they are only decoded (lossily) for display, so two
/// tokens that differ in their invalid UTF-8 stay distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    token: Vec<u8>,
    count: u64,
}

impl WordCount {
    pub fn new(token: impl Into<Vec<u8>>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }

    pub fn first(token: impl Into<Vec<u8>>) -> Self {
        Self::new(token, 1)
    }

    pub fn token(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.token)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.token
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn matches(&self, candidate: &[u8]) -> bool {
        self.token == candidate
    }

    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20}{:<5}", self.token(), self.count)
    }
}
