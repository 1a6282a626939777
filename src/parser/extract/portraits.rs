use super::{KEY, PORTRAIT, SECONDARY_SPECIES, SPECIES};
use crate::parser::fields::{extract_fields, extract_nested};
use crate::parser::{numbered_blocks, placeholder_key};

/// One species portrait in use by an empire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortraitUse {
    pub portrait: String,
    /// Empire key, `secondary_`-prefixed for the secondary species.
    pub member: String,
}

pub fn extract(text: &str) -> Vec<PortraitUse> {
    let mut uses = Vec::new();
    for (ordinal, block) in numbered_blocks(text) {
        let key = extract_fields(block.body, &[KEY])
            .first(KEY.name)
            .map(str::to_string)
            .unwrap_or_else(|| placeholder_key(ordinal));

        if let Some(portrait) = extract_nested(block.body, SPECIES, PORTRAIT) {
            uses.push(PortraitUse {
                portrait,
                member: key.clone(),
            });
        }
        if let Some(portrait) = extract_nested(block.body, SECONDARY_SPECIES, PORTRAIT) {
            uses.push(PortraitUse {
                portrait,
                member: format!("secondary_{key}"),
            });
        }
    }
    uses
}
