use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::blocks::find_sub_block;

/// `name="value"` at the start of the remaining line; `\"` does not end the value.
static ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^([A-Za-z_][A-Za-z0-9_]*)="((?:[^"\\]|\\.)*)""#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// First occurrence wins.
    Single,
    /// Every occurrence, in encounter order.
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub arity: Arity,
    /// Whether `name=""` counts as an occurrence.
    pub allow_empty: bool,
}

impl FieldSpec {
    pub const fn single(name: &'static str) -> Self {
        FieldSpec {
            name,
            arity: Arity::Single,
            allow_empty: false,
        }
    }

    pub const fn multi(name: &'static str) -> Self {
        FieldSpec {
            name,
            arity: Arity::Multi,
            allow_empty: false,
        }
    }

    pub const fn allowing_empty(self) -> Self {
        FieldSpec {
            allow_empty: true,
            ..self
        }
    }
}

/// Field values pulled out of one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: BTreeMap<&'static str, Vec<String>>,
}

impl Record {
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn take(&mut self, name: &str) -> Vec<String> {
        self.values.remove(name).unwrap_or_default()
    }

    fn push(&mut self, spec: &FieldSpec, value: &str) {
        let slot = self.values.entry(spec.name).or_default();
        if spec.arity == Arity::Multi || slot.is_empty() {
            slot.push(value.to_string());
        }
    }
}

/// Line-anchored extraction of `specs` from a block body.
///
/// Every trimmed line is read as a run of `name="value"` assignments from its
/// start; the run ends at the first token that is not one (`# comment`,
/// `species={`). Lines inside nested groups are read the same way.
pub fn extract_fields(body: &str, specs: &[FieldSpec]) -> Record {
    let mut record = Record::default();
    for line in body.lines() {
        for (name, value) in assignments(line) {
            let Some(spec) = specs.iter().find(|s| s.name == name) else {
                continue;
            };
            if value.is_empty() && !spec.allow_empty {
                continue;
            }
            record.push(spec, value);
        }
    }
    record
}

/// Single-valued lookup of `spec` inside the `sub_block = { ... }` group of
/// `body`.
pub fn extract_nested(body: &str, sub_block: &str, spec: FieldSpec) -> Option<String> {
    let block = find_sub_block(body, sub_block)?;
    let spec = FieldSpec {
        arity: Arity::Single,
        ..spec
    };
    extract_fields(block.body, &[spec])
        .take(spec.name)
        .into_iter()
        .next()
}

/// The leading `name="value"` assignments of one line.
pub fn assignments(line: &str) -> Vec<(&str, &str)> {
    let mut found = Vec::new();
    let mut rest = line.trim();
    while let Some(caps) = ASSIGNMENT_RE.captures(rest) {
        let (Some(whole), Some(name), Some(value)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };
        found.push((name.as_str(), value.as_str()));
        rest = rest[whole.end()..].trim_start();
    }
    found
}
