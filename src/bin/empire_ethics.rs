use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use empire_reports::config::{Overrides, Settings};
use empire_reports::input::read_input;
use empire_reports::logging::init_tracing;
use empire_reports::parser::extract::ethics;

#[derive(Parser)]
#[command(name = "empire_ethics", about = "List every empire with its ethics")]
struct Cli {
    /// Empire design file (default: user_empire_designs_v3.4.txt)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Settings file (default: empire_reports.toml, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let overrides = Overrides {
        input: cli.input.as_deref(),
        output: None,
    };
    let settings = Settings::load(cli.config.as_deref(), &overrides).context("loading settings")?;
    let text = read_input(&settings.input)?
        .with_context(|| format!("input file '{}' not found", settings.input.display()))?;

    let empires = ethics::extract(&text);
    let mut listed = 0;
    for empire in &empires {
        if empire.ethics.is_empty() {
            if let Some(key) = &empire.key {
                println!("Key='{key}' skipped: no recognized ethics");
            }
            continue;
        }
        listed += 1;
        println!(
            "Key='{}', Ethics=[{}]",
            empire.member(),
            empire.abbrevs().join(", ")
        );
    }

    println!("\n{listed} of {} empires listed.", empires.len());
    Ok(())
}
