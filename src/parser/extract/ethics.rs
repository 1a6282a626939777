use tracing::warn;

use super::{ETHIC, KEY};
use crate::ethics::{Ethic, ParsedEthic};
use crate::parser::fields::extract_fields;
use crate::parser::{numbered_blocks, placeholder_key};

/// Key and ethics of one empire block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpireEthics {
    pub ordinal: usize,
    pub key: Option<String>,
    /// Recognized ethics, in file order.
    pub ethics: Vec<Ethic>,
    pub unrecognized: Vec<String>,
}

impl EmpireEthics {
    pub fn member(&self) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| placeholder_key(self.ordinal))
    }

    pub fn abbrevs(&self) -> Vec<&'static str> {
        self.ethics.iter().map(|e| e.abbrev()).collect()
    }
}

/// One entry per block, including blocks without any ethic.
pub fn extract(text: &str) -> Vec<EmpireEthics> {
    numbered_blocks(text)
        .map(|(ordinal, block)| {
            let mut record = extract_fields(block.body, &[KEY, ETHIC]);
            let key = record.first(KEY.name).map(str::to_string);

            let mut ethics = Vec::new();
            let mut unrecognized = Vec::new();
            for raw in record.take(ETHIC.name) {
                match Ethic::parse(&raw) {
                    ParsedEthic::Known(ethic) => ethics.push(ethic),
                    ParsedEthic::Unrecognized(value) => {
                        warn!(
                            block = ordinal,
                            key = key.as_deref().unwrap_or("-"),
                            ethic = %value,
                            "unknown ethic ignored"
                        );
                        unrecognized.push(value);
                    }
                }
            }

            EmpireEthics {
                ordinal,
                key,
                ethics,
                unrecognized,
            }
        })
        .collect()
}
