use common::{process_file, report::write_report, tokens, Accumulator, Capped, Report, Result};
use eyre::eyre;
use itertools::Itertools;
use log::info;
use std::{
    fmt,
    io::{BufRead, Write},
    path::Path,
    str::{self, FromStr},
};
use store_indexed::IndexedStore;
use store_list::ListStore;
use store_parallel::ParallelStore;
use store_vec::VecStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Vec,
    Parallel,
    List,
    Indexed,
}

impl Store {
    pub const ALL: [Store; 4] = [Store::Vec, Store::Parallel, Store::List, Store::Indexed];

    pub fn name(self) -> &'static str {
        match self {
            Store::Vec => "vec",
            Store::Parallel => "parallel",
            Store::List => "list",
            Store::Indexed => "indexed",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Store::Vec => "a dynamic array",
            Store::Parallel => "parallel arrays",
            Store::List => "a linked list",
            Store::Indexed => "a hash index",
        }
    }

    pub fn build(self) -> Box<dyn Accumulator> {
        match self {
            Store::Vec => Box::new(VecStore::new()),
            Store::Parallel => Box::new(ParallelStore::new()),
            Store::List => Box::new(ListStore::new()),
            Store::Indexed => Box::new(IndexedStore::new()),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::Vec
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Store {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Store::ALL
            .iter()
            .copied()
            .find(|store| store.name() == s)
            .ok_or_else(|| {
                let names = Store::ALL.iter().map(|store| store.name()).join(", ");
                eyre!("unknown store {:?}, expected one of: {}", s, names)
            })
    }
}

pub fn count_file(path: impl AsRef<Path>, store: Store, capacity: Option<usize>) -> Result<Report> {
    let path = path.as_ref();
    info!("counting {} with the {} store", path.display(), store);

    match capacity {
        Some(limit) => {
            let mut acc = Capped::new(store.build(), limit);
            let report = process_file(path, &mut acc)?;
            if acc.dropped() > 0 {
                info!("{} tokens dropped past capacity {}", acc.dropped(), acc.limit());
            }
            Ok(report)
        }
        None => process_file(path, &mut *store.build()),
    }
}

fn display_menu(mut out: impl Write) -> Result<()> {
    writeln!(out, "Select an option:")?;
    for (i, store) in Store::ALL.iter().enumerate() {
        writeln!(out, "{}. Count words using {}", i + 1, store.describe())?;
    }
    writeln!(out, "{}. Exit", Store::ALL.len() + 1)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Runs until the exit option is chosen or `input` runs out. A file that
/// cannot be opened is reported on `err` and the menu shown again.
pub fn interactive(
    input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
    capacity: Option<usize>,
) -> Result<()> {
    let mut input = tokens(input);
    let exit = Store::ALL.len() + 1;

    loop {
        display_menu(&mut out)?;
        let choice = match input.next() {
            Some(choice) => choice?,
            None => break,
        };

        let choice = str::from_utf8(&choice)
            .ok()
            .and_then(|choice| choice.parse::<usize>().ok());
        let store = match choice {
            Some(n) if n == exit => {
                writeln!(out, "Exiting.")?;
                break;
            }
            Some(n) => n.checked_sub(1).and_then(|i| Store::ALL.get(i)).copied(),
            None => None,
        };
        let store = match store {
            Some(store) => store,
            None => {
                writeln!(out, "Invalid option. Please try again.")?;
                continue;
            }
        };

        write!(out, "Enter the filename: ")?;
        out.flush()?;
        let filename = match input.next() {
            Some(filename) => String::from_utf8_lossy(&filename?).into_owned(),
            None => break,
        };

        match count_file(&filename, store, capacity) {
            Ok(report) => write_report(&mut out, &report)?,
            Err(e) => writeln!(err, "{:#}", e)?,
        }
    }

    Ok(())
}
