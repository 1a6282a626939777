use clap::Parser;

use empire_reports::cli::{run_generator, ReportArgs};
use empire_reports::logging::init_tracing;
use empire_reports::reports::ReportKind;

#[derive(Parser)]
#[command(name = "ethics_combinations", about = "Count empires per legal ethics combination")]
struct Cli {
    #[command(flatten)]
    args: ReportArgs,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run_generator(ReportKind::Ethics, &cli.args)
}
