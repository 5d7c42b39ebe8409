pub use eyre::Result;
use eyre::WrapErr;
use log::{info, LevelFilter};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

mod accumulator;
pub mod report;
mod tokens;
mod word;

pub use accumulator::{Accumulator, Capped};
pub use report::Report;
pub use tokens::{tokens, Tokens};
pub use word::WordCount;

pub fn init_logger(level: LevelFilter) {
    env_logger::builder().filter_level(level).parse_default_env().init()
}

pub fn count_tokens(reader: impl BufRead, acc: &mut dyn Accumulator) -> io::Result<u64> {
    let mut read = 0;
    for token in tokens(reader) {
        acc.observe(&token?);
        read += 1;
    }
    Ok(read)
}

/// Nothing is reported unless the whole file was read.
pub fn process_file(path: impl AsRef<Path>, acc: &mut dyn Accumulator) -> Result<Report> {
    let path = path.as_ref();
    let file = File::open(path)
        .wrap_err_with(|| format!("unable to open file: {}", path.display()))?;
    read_report(path, BufReader::new(file), acc)
}

fn read_report(path: &Path, reader: impl BufRead, acc: &mut dyn Accumulator) -> Result<Report> {
    let tokens_read = count_tokens(reader, acc)
        .wrap_err_with(|| format!("unable to read file: {}", path.display()))?;

    let report = Report::new(acc, tokens_read);
    info!(
        "{}: {} tokens, {} distinct",
        path.display(),
        tokens_read,
        report.entries.len()
    );
    Ok(report)
}

/// Instantiates the shared accumulator test suite for a store.
///
/// `$constructor` must produce a fresh, empty store each time it is called.
#[macro_export]
macro_rules! conformance_tests {
    ($constructor:expr) => {
        #[cfg(test)]
        mod conformance {
            #[allow(unused_imports)]
            use super::*;
            use ::common::{Accumulator, Capped};
            use ::std::collections::HashSet;

            fn fresh() -> impl Accumulator {
                $constructor()
            }

            fn feed(acc: &mut dyn Accumulator, input: &str) {
                for token in input.split_whitespace() {
                    acc.observe(token.as_bytes());
                }
            }

            fn pairs(acc: &dyn Accumulator) -> Vec<(String, u64)> {
                acc.enumerate()
                    .map(|wc| (wc.token().into_owned(), wc.count()))
                    .collect()
            }

            #[test]
            fn empty() {
                let acc = fresh();
                assert!(acc.is_empty());
                assert_eq!(acc.len(), 0);
                assert_eq!(acc.enumerate().count(), 0);
            }

            #[test]
            fn first_appearance_order() {
                let mut acc = fresh();
                feed(&mut acc, "b a b c a");
                assert_eq!(
                    pairs(&acc),
                    vec![
                        ("b".to_owned(), 2),
                        ("a".to_owned(), 2),
                        ("c".to_owned(), 1)
                    ]
                );
            }

            #[test]
            fn repeated_token() {
                let mut acc = fresh();
                feed(&mut acc, "x x x");
                assert_eq!(acc.len(), 1);
                assert_eq!(pairs(&acc), vec![("x".to_owned(), 3)]);
            }

            #[test]
            fn case_sensitive() {
                let mut acc = fresh();
                feed(&mut acc, "Word word WORD word");
                assert_eq!(
                    pairs(&acc),
                    vec![
                        ("Word".to_owned(), 1),
                        ("word".to_owned(), 2),
                        ("WORD".to_owned(), 1)
                    ]
                );
                assert!(acc.contains(b"WORD"));
                assert!(!acc.contains(b"wOrD"));
            }

            #[test]
            fn invalid_utf8_tokens_stay_distinct() {
                let mut acc = fresh();
                acc.observe(b"\xff");
                acc.observe(b"\xfe");
                acc.observe(b"\xff");
                assert_eq!(acc.len(), 2);
                let entries: Vec<_> = acc.enumerate().collect();
                assert_eq!(entries[0].bytes(), b"\xff");
                assert_eq!(entries[0].count(), 2);
                assert_eq!(entries[1].bytes(), b"\xfe");
                assert_eq!(entries[1].count(), 1);
                assert!(!acc.contains("\u{fffd}".as_bytes()));
            }

            #[test]
            fn totals_and_distinct_set() {
                let input = "it was the best of times it was the worst of times \
                             it was the age of wisdom it was the age of foolishness";
                let mut acc = fresh();
                feed(&mut acc, input);

                let total: u64 = acc.enumerate().map(|wc| wc.count()).sum();
                assert_eq!(total, input.split_whitespace().count() as u64);

                let reported: HashSet<String> =
                    acc.enumerate().map(|wc| wc.token().into_owned()).collect();
                let distinct: HashSet<String> =
                    input.split_whitespace().map(str::to_owned).collect();
                assert_eq!(reported, distinct);
                assert_eq!(acc.len(), distinct.len());
            }

            #[test]
            fn enumerate_restarts() {
                let mut acc = fresh();
                feed(&mut acc, "one two two");
                assert_eq!(pairs(&acc), pairs(&acc));
                acc.observe(b"one");
                assert_eq!(
                    pairs(&acc),
                    vec![("one".to_owned(), 2), ("two".to_owned(), 2)]
                );
            }

            #[test]
            fn past_ten_distinct_tokens() {
                let mut acc = fresh();
                for i in 0..100 {
                    acc.observe(format!("w{}", i % 25).as_bytes());
                }
                assert_eq!(acc.len(), 25);
                assert!(acc.enumerate().all(|wc| wc.count() == 4));
                assert_eq!(acc.enumerate().next().unwrap().token(), "w0");
                assert_eq!(acc.enumerate().last().unwrap().token(), "w24");
            }

            #[test]
            fn capped() {
                let mut acc = Capped::new(fresh(), 2);
                feed(&mut acc, "a b c a c b d");
                assert_eq!(
                    pairs(&acc),
                    vec![("a".to_owned(), 2), ("b".to_owned(), 2)]
                );
                assert_eq!(acc.dropped(), 3);
            }
        }
    };
}
