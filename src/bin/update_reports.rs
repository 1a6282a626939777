use std::process::ExitCode;

use clap::Parser;

use empire_reports::driver::{generators, run_all, sibling_path};
use empire_reports::logging::init_tracing;

/// Run every report generator, one after the other.
#[derive(Parser)]
#[command(name = "update_reports")]
struct Cli {}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    Cli::parse();

    println!("Updating empire reports\n=======================\n");
    let programs = generators()
        .map(sibling_path)
        .collect::<std::io::Result<Vec<_>>>()?;
    let failed = run_all(programs.iter().map(|p| p.as_path()));

    println!("\nDone. {} of {} generators succeeded.", programs.len() - failed, programs.len());
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
