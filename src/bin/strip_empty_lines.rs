use std::path::PathBuf;

use clap::Parser;

use empire_reports::lines;
use empire_reports::logging::init_tracing;

/// Remove empty and whitespace-only lines.
///
/// Without arguments stdin is filtered to stdout; with one, the file is
/// filtered to stdout. Giving the same file twice rewrites it in place.
#[derive(Parser)]
#[command(name = "strip_empty_lines")]
struct Cli {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    lines::run(cli.input.as_deref(), cli.output.as_deref())
}
