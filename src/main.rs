use std::{fs, path::PathBuf};

use chemform::ElementTable;
use chemlab::{init_logging, summarize};
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr, bail};
use tracing::info;

/// Reports the heaviest, lightest, largest, and smallest of a list of chemical formulae, along with their averages
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// A file of newline-separated chemical formulae
    input: PathBuf,
    /// An element table to use in place of the built-in one
    #[arg(short, long)]
    element_table: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let table = match &args.element_table {
        Some(path) => {
            let text = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read the element table at {}", path.display()))?;
            ElementTable::new(path.display().to_string(), text).map_err(|e| *e)?
        }
        None => ElementTable::default(),
    };

    let formulae = fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read formulae from {}", args.input.display()))?;
    info!(input = %args.input.display(), elements = table.len(), "summarising formulae");

    let Some(report) = summarize(&table, &formulae).map_err(|e| *e)? else {
        bail!("{} doesn't contain any chemical formulae", args.input.display());
    };
    print!("{report}");

    Ok(())
}
