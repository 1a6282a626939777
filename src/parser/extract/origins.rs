use super::{KEY, ORIGIN};
use crate::parser::fields::extract_fields;
use crate::parser::{numbered_blocks, placeholder_key};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpireOrigin {
    pub key: String,
    pub origin: String,
}

/// Blocks without an origin are skipped.
pub fn extract(text: &str) -> Vec<EmpireOrigin> {
    numbered_blocks(text)
        .filter_map(|(ordinal, block)| {
            let record = extract_fields(block.body, &[KEY, ORIGIN]);
            let origin = record.first(ORIGIN.name)?.to_string();
            let key = record
                .first(KEY.name)
                .map(str::to_string)
                .unwrap_or_else(|| placeholder_key(ordinal));
            Some(EmpireOrigin { key, origin })
        })
        .collect()
}
