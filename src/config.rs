use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::ReportError;
use crate::report::JOIN_SEPARATOR;

/// Design file read by every report.
pub const DEFAULT_INPUT: &str = "user_empire_designs_v3.4.txt";
/// Looked up in the working directory (`empire_reports.toml`) when no
/// `--config` is given; absence is fine.
pub const DEFAULT_CONFIG_NAME: &str = "empire_reports";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub input: PathBuf,
    pub ethics_output: PathBuf,
    pub origins_output: PathBuf,
    pub initializers_output: PathBuf,
    pub portraits_output: PathBuf,
    /// Column delimiter of every report.
    pub delimiter: String,
}

/// Command-line values that win over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub input: Option<&'a Path>,
    /// Settings key and value, e.g. `("origins_output", path)`.
    pub output: Option<(&'static str, &'a Path)>,
}

impl Settings {
    /// Defaults, then the config file, then `overrides`.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides<'_>) -> Result<Self, ReportError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let mut builder = Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("ethics_output", "ethics_combinations_report.csv")?
            .set_default("origins_output", "origins_report.csv")?
            .set_default("initializers_output", "initializers_report.csv")?
            .set_default("portraits_output", "portraits_report.csv")?
            .set_default("delimiter", ",")?
            .add_source(file)
            .set_override_option("input", overrides.input.map(path_value))?;
        if let Some((key, path)) = overrides.output {
            builder = builder.set_override(key, path_value(path))?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.delimiter_byte()?;
        Ok(settings)
    }

    /// The delimiter as the single byte the CSV writer needs.
    pub fn delimiter_byte(&self) -> Result<u8, ReportError> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii()
                && !matches!(*b, b'"' | b'\n' | b'\r')
                && !JOIN_SEPARATOR.as_bytes().contains(b) =>
            {
                Ok(*b)
            }
            _ => Err(ReportError::Delimiter(self.delimiter.clone())),
        }
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
