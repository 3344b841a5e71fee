//! Lenient parsing of operator input.

use stockroom_inventory::Attributes;

/// Parse `key=value,key=value` into ordered attributes.
///
/// Pairs without `=` are skipped and keys/values are trimmed. A pair with
/// more than one `=` keeps everything after the first as the value; an empty
/// key is dropped.
pub fn parse_pairs(input: &str) -> Attributes {
    input
        .split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

/// Parse a non-negative whole number, ignoring surrounding whitespace.
pub fn parse_quantity(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}
