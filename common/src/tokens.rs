use std::io::{self, BufRead};
use std::vec;

/// Tokens of `reader`, split on ASCII whitespace and kept as raw bytes.
pub fn tokens<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens {
        reader,
        line: Vec::new(),
        pending: Vec::new().into_iter(),
    }
}

fn is_separator(b: &u8) -> bool {
    matches!(*b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pending: vec::IntoIter<Vec<u8>>,
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }

            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.pending = self
                        .line
                        .split(is_separator)
                        .filter(|token| !token.is_empty())
                        .map(<[u8]>::to_vec)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
