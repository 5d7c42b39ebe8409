use common::{init_logger, report::write_report, Result};
use log::LevelFilter;
use std::{io, path::PathBuf};
use structopt::StructOpt;
use tally::{count_file, interactive, Store};

/// Count the whitespace-delimited words of a text file.
#[derive(StructOpt, Debug)]
struct Opt {
    /// File to count; the interactive menu starts when omitted
    file: Option<PathBuf>,
    /// Backing store: vec, parallel, list or indexed
    #[structopt(short, long, default_value = "vec")]
    store: Store,
    /// Stop tracking new words once this many are tracked
    #[structopt(short, long)]
    capacity: Option<usize>,
    /// Log more (-v info, -vv debug)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logger(match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    });

    match opt.file {
        Some(path) => {
            let report = count_file(&path, opt.store, opt.capacity)?;
            let stdout = io::stdout();
            write_report(stdout.lock(), &report)?;
        }
        None => {
            let stdin = io::stdin();
            interactive(stdin.lock(), io::stdout(), io::stderr(), opt.capacity)?;
        }
    }

    Ok(())
}
