//! The four report generators: input → grouping → CSV.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::aggregate::{GroupKey, Grouping};
use crate::config::Settings;
use crate::error::ReportError;
use crate::ethics::{combination_key, valid_combinations};
use crate::input::{create_placeholder, read_input, PlaceholderPrompt};
use crate::parser::extract::{ethics, initializers, origins, portraits};
use crate::report::{build_rows, write_report, ReportSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Ethics,
    Origins,
    Initializers,
    Portraits,
}

/// Records parsed and groups found by one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub groups: usize,
}

#[derive(Debug)]
pub struct Analysis {
    pub summary: Summary,
    pub grouping: Grouping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The input was missing and a placeholder was written in its place.
    PlaceholderCreated(PathBuf),
    /// Nothing qualified for the report; no file was written.
    NoData(Summary),
    Written {
        path: PathBuf,
        rows: usize,
        summary: Summary,
    },
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Ethics,
        ReportKind::Origins,
        ReportKind::Initializers,
        ReportKind::Portraits,
    ];

    /// Executable that generates this report.
    pub fn binary_name(self) -> &'static str {
        match self {
            ReportKind::Ethics => "ethics_combinations",
            ReportKind::Origins => "origin_report",
            ReportKind::Initializers => "initializer_report",
            ReportKind::Portraits => "portrait_report",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Ethics => "Empire Ethics Combinations",
            ReportKind::Origins => "Empire Origins",
            ReportKind::Initializers => "Empire Initializers",
            ReportKind::Portraits => "Species Portraits",
        }
    }

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            ReportKind::Ethics => &["EthicsCombination", "EmpireKeys"],
            ReportKind::Origins => &["N", "Origin", "Empires"],
            ReportKind::Initializers => &["N", "Initializer", "Reiche"],
            ReportKind::Portraits => &["N", "Name", "Reiche"],
        }
    }

    /// Settings key holding this report's output path.
    pub fn output_key(self) -> &'static str {
        match self {
            ReportKind::Ethics => "ethics_output",
            ReportKind::Origins => "origins_output",
            ReportKind::Initializers => "initializers_output",
            ReportKind::Portraits => "portraits_output",
        }
    }

    pub fn output_path(self, settings: &Settings) -> &Path {
        match self {
            ReportKind::Ethics => &settings.ethics_output,
            ReportKind::Origins => &settings.origins_output,
            ReportKind::Initializers => &settings.initializers_output,
            ReportKind::Portraits => &settings.portraits_output,
        }
    }

    pub fn schema(self, settings: &Settings) -> Result<ReportSchema, ReportError> {
        Ok(ReportSchema {
            headers: self.headers(),
            with_count: self != ReportKind::Ethics,
            delimiter: settings.delimiter_byte()?,
        })
    }

    /// Sample input written when the design file is missing.
    pub fn placeholder(self) -> &'static str {
        match self {
            ReportKind::Ethics => ETHICS_PLACEHOLDER,
            ReportKind::Origins => ORIGINS_PLACEHOLDER,
            ReportKind::Initializers => INITIALIZERS_PLACEHOLDER,
            ReportKind::Portraits => PORTRAITS_PLACEHOLDER,
        }
    }

    pub fn analyse(self, text: &str) -> Analysis {
        let (records, grouping) = match self {
            ReportKind::Ethics => group_ethics(text),
            ReportKind::Origins => {
                let found = origins::extract(text);
                let grouping = Grouping::build(
                    &found,
                    |o| Some(GroupKey::single(o.origin.as_str())),
                    |o| o.key.clone(),
                );
                (found.len(), grouping)
            }
            ReportKind::Initializers => {
                let found = initializers::extract(text);
                let grouping = Grouping::build(
                    &found,
                    |i| Some(GroupKey::single(i.group_label())),
                    |i| i.key.clone(),
                );
                (found.len(), grouping)
            }
            ReportKind::Portraits => {
                let found = portraits::extract(text);
                let grouping = Grouping::build(
                    &found,
                    |p| Some(GroupKey::single(p.portrait.as_str())),
                    |p| p.member.clone(),
                );
                (found.len(), grouping)
            }
        };

        let summary = Summary {
            records,
            groups: grouping.populated(),
        };
        info!(
            report = self.binary_name(),
            records = summary.records,
            groups = summary.groups,
            "input analysed"
        );
        Analysis { summary, grouping }
    }
}

/// Only empires with at least one recognized ethic take part; every legal
/// combination gets a row.
fn group_ethics(text: &str) -> (usize, Grouping) {
    let empires: Vec<_> = ethics::extract(text)
        .into_iter()
        .filter(|e| {
            if e.ethics.is_empty() {
                if let Some(key) = &e.key {
                    info!(key = %key, "empire has no recognized ethics, skipped");
                }
            }
            !e.ethics.is_empty()
        })
        .collect();

    let grouping = Grouping::build(
        &empires,
        |e| Some(combination_key(&e.ethics)),
        |e| e.member(),
    )
    .with_universe(valid_combinations());
    (empires.len(), grouping)
}

/// Run one report from input file to CSV.
///
/// A missing input is handed to `prompt`: on yes a placeholder input is
/// written and the run stops there, otherwise the report is built from an
/// empty dataset.
pub fn run_report(
    kind: ReportKind,
    settings: &Settings,
    prompt: &mut dyn PlaceholderPrompt,
) -> Result<RunOutcome, ReportError> {
    let schema = kind.schema(settings)?;
    let input = &settings.input;

    let text = match read_input(input)? {
        Some(text) => text,
        None => {
            if prompt.confirm(input).map_err(ReportError::Prompt)? {
                create_placeholder(input, kind.placeholder())?;
                return Ok(RunOutcome::PlaceholderCreated(input.clone()));
            }
            warn!(input = %input.display(), "input not found, continuing with an empty dataset");
            String::new()
        }
    };

    let Analysis { summary, grouping } = kind.analyse(&text);
    let rows = build_rows(&grouping);
    if rows.is_empty() {
        return Ok(RunOutcome::NoData(summary));
    }

    let path = kind.output_path(settings);
    write_report(path, &schema, &rows)?;
    Ok(RunOutcome::Written {
        path: path.to_path_buf(),
        rows: rows.len(),
        summary,
    })
}

const ETHICS_PLACEHOLDER: &str = r#"
{ name="Alpha Centauri Primus" key="ACP_KEY" ethic="ethic_xenophile" ethic="ethic_egalitarian" ethic="ethic_materialist" }
{ name="Solarian Concord" key="SOL_CON_KEY" ethic="ethic_egalitarian" ethic="ethic_materialist" ethic="ethic_xenophile" }
{ name="Void Cultists" key="VOID_CULT_KEY" ethic="ethic_fanatic_spiritualist" ethic="ethic_xenophobe" }
{ name="Machine Uprising Zero" key="MUZ_KEY" ethic="ethic_gestalt_consciousness" }
{ name="Human Hegemony" key="HUM_HEG_KEY" ethic="ethic_authoritarian" ethic="ethic_militarist" ethic="ethic_spiritualist" }
{ name="Spiritual Dominators" key="SPI_DOM" ethic="ethic_fanatic_authoritarian" ethic="ethic_spiritualist" }
{ name="Unaligned Drifters" key="DRIFT_KEY" }
"#;

const ORIGINS_PLACEHOLDER: &str = r#"
{ name="Ringworld Start" key="RING_KEY" origin="origin_shattered_ring" species={ class="HUM" } }
{ name="Progenitor Hive" key="HIVE_KEY_1" origin="origin_progenitor_hive" ethic="ethic_gestalt_consciousness" }
{ name="Lost Colony Humans" key="LOST_COL_HUM" origin="origin_lost_colony" species={ class="HUM" } }
{ name="Mechanists" key="MECH_KEY" origin="origin_mechanists" }
{ name="Another Ringworld" key="RING_KEY_2" origin="origin_shattered_ring" }
{ name="No Origin Empire" key="NO_ORIGIN_KEY" species={ class="HUM" } }
{ name="Hive Mind 2" key="HIVE_KEY_2" origin="origin_progenitor_hive" ethic="ethic_gestalt_consciousness" }
{ origin="origin_default" key="DEFAULT_ORIGIN_EMPIRE" }
{ key="LONE_SURVIVOR" origin="origin_lone_survivor" }
"#;

const INITIALIZERS_PLACEHOLDER: &str = r#"
empire_one = {
    key="EMP_A"
    initializer="standard_ship_designs"
}
empire_two = {
    key="EMP_B"
    initializer=""
}
empire_three = {
    key="EMP_C"
    # no initializer line
}
empire_four = {
    key="EMP_D"
    initializer="another_custom_init"
}
empire_five = {
    key="EMP_E"
    initializer=""
}
empire_no_key = {
    initializer="init_for_no_key_empire"
}
"#;

const PORTRAITS_PLACEHOLDER: &str = r#"
empire_one = {
    key="EMP_ALPHA"
    species={
        class="HUM"
        portrait="humanoid_01"
        name="Humans"
        plural="Humans"
        adjective="Human"
    }
    secondary_species={
        class="REP"
        portrait="reptilian_05"
        name="Vorgons"
    }
}
empire_two = {
    key="EMP_BETA"
    species={
        class="MAM"
        portrait="molluscoid_02"
        traits = { trait="trait_adaptive" trait="trait_nomadic" }
    }
}
empire_three = {
    key="EMP_GAMMA"
    species={
        class="FUN"
        portrait="fungoid_03"
    }
    secondary_species={
        class="AVI"
        portrait="avian_01"
    }
}
empire_four = {
    species={
        portrait="humanoid_01"
    }
}
empire_five = {
    key="EMP_DELTA"
}
empire_six = {
    key="EMP_EPSILON"
    species={
        name="Nameless Ones"
    }
    secondary_species={
        portrait="molluscoid_02"
    }
}
"#;
