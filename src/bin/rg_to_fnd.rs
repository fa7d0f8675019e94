use std::path::PathBuf;

use clap::Parser;
use rok_lib::core::converter::convert_lines;
use rok_lib::core::converter::input::InputLines;
use rok_lib::init_tracing;

/// Turns `rg --line-number` output into one JSON record per line.
#[derive(Parser, Debug)]
#[command(name = "rg-to-fnd")]
#[command(version)]
struct Args {
    /// Files to read in order; `-` or no files reads stdin
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut out = std::io::stdout().lock();
    convert_lines(InputLines::from_args(args.files), &mut out)?;
    Ok(())
}
