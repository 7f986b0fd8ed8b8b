//! Field codec: encoding and decoding of individual CSV field values
//!
//! Converts between a field's logical string value and its CSV-encoded
//! representation. Encoding always quotes, which keeps the output
//! context-free at the cost of size; decoding strips exactly one layer of
//! surrounding quotes and nothing more. Interior doubled quotes (`""`) are
//! deliberately left untouched by [`decode_field`]; the splitter already
//! resolved delimiter placement, and collapsing escapes is not part of the
//! decode contract (see the known-limitation tests).
//!
//! Neither function can fail: every input string has a defined output.

use crate::config::QUOTE;

/// Encode a logical field value as a CSV cell
///
/// The value is wrapped in quotes unconditionally, with every interior quote
/// character doubled first. Unconditional quoting means the output never
/// depends on whether the value contains a delimiter or terminator.
pub fn encode_field(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len() + 2);
    encoded.push(QUOTE);
    for ch in value.chars() {
        if ch == QUOTE {
            encoded.push(QUOTE);
        }
        encoded.push(ch);
    }
    encoded.push(QUOTE);
    encoded
}

/// Decode a raw CSV cell into its logical field value
///
/// Strips exactly one leading and one trailing quote when the text both
/// starts and ends with the quote character; anything else passes through
/// unchanged. A lone `"` satisfies both conditions with the same character
/// and decodes to the empty string. This quirk is part of the contract.
pub fn decode_field(text: &str) -> &str {
    if text.starts_with(QUOTE) && text.ends_with(QUOTE) {
        if text.len() <= 1 {
            return "";
        }
        // QUOTE is ASCII, so the byte offsets are char boundaries
        &text[1..text.len() - 1]
    } else {
        text
    }
}
