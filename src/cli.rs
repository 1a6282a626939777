//! Argument parsing and console output shared by the report binaries.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use crate::config::{Overrides, Settings};
use crate::input::{FixedAnswer, StdinPrompt};
use crate::reports::{run_report, ReportKind, RunOutcome};

#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Empire design file (default: user_empire_designs_v3.4.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Report file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Settings file (default: empire_reports.toml, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Create a placeholder input without asking when the input is missing
    #[arg(long, conflicts_with = "no")]
    pub yes: bool,
    /// Never create a placeholder input
    #[arg(long)]
    pub no: bool,
}

impl ReportArgs {
    /// Pre-answered placeholder prompt, if any.
    pub fn answer(&self) -> Option<bool> {
        match (self.yes, self.no) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn settings(&self, kind: ReportKind) -> anyhow::Result<Settings> {
        let overrides = Overrides {
            input: self.input.as_deref(),
            output: self.output.as_deref().map(|p| (kind.output_key(), p)),
        };
        Settings::load(self.config.as_deref(), &overrides).context("loading settings")
    }
}

/// Full run of one report binary: settings, banner, report, summary.
pub fn run_generator(kind: ReportKind, args: &ReportArgs) -> anyhow::Result<()> {
    let t0 = Instant::now();
    let settings = args.settings(kind)?;

    println!("{}\n{}\n", kind.title(), "=".repeat(kind.title().len()));
    println!("Reading {}", settings.input.display());

    let outcome = match args.answer() {
        Some(answer) => run_report(kind, &settings, &mut FixedAnswer(answer)),
        None => run_report(kind, &settings, &mut StdinPrompt),
    }
    .with_context(|| format!("{} failed", kind.binary_name()))?;

    match outcome {
        RunOutcome::PlaceholderCreated(path) => {
            println!("Placeholder file '{}' created.", path.display());
            println!("Run {} again to build the report from it.", kind.binary_name());
        }
        RunOutcome::NoData(summary) => {
            println!("{} records parsed, no data for the report.", summary.records);
            println!("No report written.");
        }
        RunOutcome::Written {
            path,
            rows,
            summary,
        } => {
            println!(
                "{} records parsed, {} distinct groups found.",
                summary.records, summary.groups
            );
            println!("Wrote {} rows to {}", rows, path.display());
        }
    }

    println!("\nDone in {:.2}s", t0.elapsed().as_secs_f64());
    Ok(())
}
