use clap::Parser;

use empire_reports::cli::{run_generator, ReportArgs};
use empire_reports::logging::init_tracing;
use empire_reports::reports::ReportKind;

#[derive(Parser)]
#[command(name = "initializer_report", about = "Group empires by initializer")]
struct Cli {
    #[command(flatten)]
    args: ReportArgs,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run_generator(ReportKind::Initializers, &cli.args)
}
