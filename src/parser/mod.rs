pub mod blocks;
pub mod extract;
pub mod fields;

use blocks::{split_blocks, Block};

/// Every top-level block of `text`, numbered from 1 in source order.
pub fn numbered_blocks(text: &str) -> impl Iterator<Item = (usize, Block<'_>)> {
    split_blocks(text)
        .into_iter()
        .enumerate()
        .map(|(i, block)| (i + 1, block))
}

/// Stand-in identifier for the block at `ordinal` when it has no usable `key`.
pub fn placeholder_key(ordinal: usize) -> String {
    format!("UNKNOWN_KEY_EMPIRE_{ordinal}")
}
