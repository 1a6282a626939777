use std::io::{self, Write};
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use itertools::Itertools;

use crate::aggregate::Grouping;
use crate::error::ReportError;
use crate::fsutil::replace_file;

/// Joins tuple-key parts and member lists inside one cell.
pub const JOIN_SEPARATOR: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSchema {
    pub headers: &'static [&'static str],
    /// Whether the first column is the member count.
    pub with_count: bool,
    pub delimiter: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub count: usize,
    pub key: String,
    /// Sorted.
    pub members: Vec<String>,
}

impl ReportRow {
    fn cells(&self, with_count: bool) -> Vec<String> {
        let mut cells = Vec::with_capacity(3);
        if with_count {
            cells.push(self.count.to_string());
        }
        cells.push(self.key.clone());
        cells.push(self.members.join(JOIN_SEPARATOR));
        cells
    }
}

/// One row per group, ordered by the rendered key.
pub fn build_rows(grouping: &Grouping) -> Vec<ReportRow> {
    grouping
        .iter()
        .map(|(key, members)| ReportRow {
            count: members.len(),
            key: key.render(JOIN_SEPARATOR),
            members: members.iter().cloned().sorted().collect(),
        })
        .sorted_by(|a, b| a.key.cmp(&b.key))
        .collect()
}

pub fn write_rows<W: Write>(writer: W, schema: &ReportSchema, rows: &[ReportRow]) -> io::Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(schema.delimiter)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);
    out.write_record(schema.headers)?;
    for row in rows {
        out.write_record(row.cells(schema.with_count))?;
    }
    out.flush()
}

/// Write `rows` to `path`, replacing any previous report only on success.
pub fn write_report(path: &Path, schema: &ReportSchema, rows: &[ReportRow]) -> Result<(), ReportError> {
    if JOIN_SEPARATOR.as_bytes().contains(&schema.delimiter) {
        return Err(ReportError::Delimiter(char::from(schema.delimiter).to_string()));
    }
    replace_file(path, |w| write_rows(w, schema, rows)).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
