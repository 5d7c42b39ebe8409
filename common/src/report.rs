use std::io::{self, Write};

use crate::{Accumulator, WordCount};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<WordCount>,
    /// Tokens read from the input, including any a capped store dropped.
    pub tokens_read: u64,
}

impl Report {
    pub fn new(acc: &dyn Accumulator, tokens_read: u64) -> Self {
        Self {
            entries: acc.enumerate().collect(),
            tokens_read,
        }
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(WordCount::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn write_report(mut w: impl Write, report: &Report) -> io::Result<()> {
    for wc in &report.entries {
        writeln!(w, "{}", wc)?;
    }
    Ok(())
}
