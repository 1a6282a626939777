use std::ops::Range;

use tracing::{debug, warn};

/// One brace-delimited group found at the top level of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Identifier written in front of the opening brace (`species = {`).
    pub label: Option<&'a str>,
    /// Text strictly between the braces, nested groups included verbatim.
    pub body: &'a str,
    /// Byte range of `body` within the scanned text.
    pub span: Range<usize>,
}

/// Split `text` into its top-level `{ ... }` groups, in source order.
///
/// Only depth 1 → 0 transitions emit a block. A closing brace without an open
/// group resets the scanner, and a group still open at end of input is
/// dropped.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut depth: usize = 0;
    let mut start: Option<usize> = None;
    let mut label: Option<&str> = None;

    // Braces are ASCII, so byte offsets are always char boundaries here.
    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => {
                if depth == 0 {
                    start = Some(i + 1);
                    label = label_before(text, i);
                }
                depth += 1;
            }
            b'}' => {
                if depth == 0 {
                    warn!(offset = i, "unmatched closing brace, resetting block scanner");
                    start = None;
                    label = None;
                    continue;
                }
                depth -= 1;
                if depth == 0 {
                    if let Some(s) = start.take() {
                        blocks.push(Block {
                            label: label.take(),
                            body: &text[s..i],
                            span: s..i,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        debug!(depth, "dropping unterminated trailing block");
    }

    blocks
}

/// Find the first top-level group of `text` written as `name = { ... }`.
///
/// The label must match exactly, so `secondary_species` never answers for
/// `species`. Nesting inside the group is unrestricted.
pub fn find_sub_block<'a>(text: &'a str, name: &str) -> Option<Block<'a>> {
    split_blocks(text)
        .into_iter()
        .find(|b| b.label == Some(name))
}

/// The identifier in `ident = {` directly before the brace at `brace`.
fn label_before(text: &str, brace: usize) -> Option<&str> {
    let head = text[..brace].trim_end().strip_suffix('=')?.trim_end();
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map(|(i, _)| i)?;
    Some(&head[start..])
}
