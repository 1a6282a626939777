use super::{INITIALIZER, KEY};
use crate::parser::fields::extract_fields;
use crate::parser::{numbered_blocks, placeholder_key};

/// Group label of empires without any `initializer` line.
pub const NOT_SET: &str = "<NOT_SET>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpireInitializer {
    pub key: String,
    /// `Some("")` for `initializer=""`, `None` when the line is missing.
    pub initializer: Option<String>,
}

impl EmpireInitializer {
    pub fn group_label(&self) -> &str {
        self.initializer.as_deref().unwrap_or(NOT_SET)
    }
}

/// Every block takes part.
pub fn extract(text: &str) -> Vec<EmpireInitializer> {
    numbered_blocks(text)
        .map(|(ordinal, block)| {
            let mut record = extract_fields(block.body, &[KEY, INITIALIZER]);
            let key = record
                .first(KEY.name)
                .map(str::to_string)
                .unwrap_or_else(|| placeholder_key(ordinal));
            let initializer = record.take(INITIALIZER.name).into_iter().next();
            EmpireInitializer { key, initializer }
        })
        .collect()
}
