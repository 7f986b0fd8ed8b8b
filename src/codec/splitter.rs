//! Quote-aware line splitter
//!
//! Splits one raw CSV line into an ordered list of decoded field values,
//! honoring quoted fields that contain the delimiter literally. The
//! algorithm is split-then-repair: a naive split on the delimiter followed
//! by a parity-driven merge pass that rejoins segments belonging to the
//! same quoted field.
//!
//! Splitting never fails. Malformed input (stray unmatched quotes) gets a
//! best-effort parse rather than an error, and every line produces at
//! least one field.

use tracing::trace;

use super::field::decode_field;
use crate::config::QUOTE;

/// Split one raw CSV line into decoded field values
///
/// Steps:
/// 1. Split on every occurrence of `delimiter`, ignoring quoting.
/// 2. Walk the segments in order. If the last accepted segment contains an
///    odd number of quote characters, it is inside an unterminated quoted
///    field: rejoin it with the delimiter and the new segment. Parity is
///    recomputed against the merged segment, so several delimiters inside
///    one quoted field merge in sequence.
/// 3. Decode every segment via [`decode_field`].
///
/// An empty line yields a single empty field. A trailing delimiter yields a
/// trailing empty field.
pub fn split_line(raw: &str, delimiter: char) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for segment in raw.split(delimiter) {
        match merged.last_mut() {
            Some(last) if has_open_quote(last) => {
                trace!("Merging segment {:?} into open quoted field", segment);
                last.push(delimiter);
                last.push_str(segment);
            }
            _ => merged.push(segment.to_string()),
        }
    }

    merged
        .iter()
        .map(|segment| decode_field(segment).to_string())
        .collect()
}

/// Whether a segment contains an odd number of quote characters, i.e. lies
/// inside an unterminated quoted field
fn has_open_quote(segment: &str) -> bool {
    segment.matches(QUOTE).count() % 2 == 1
}
