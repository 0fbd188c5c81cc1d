//! Parser module for line-delimited node/edge records

pub mod field;
pub mod record;

pub use record::{parse_record, Classification, ParsedRecord};

/// Token whose presence marks a line as a node description
pub const NODE_MARKER: &str = "name";
/// Token whose presence marks a line as an edge description
pub const EDGE_MARKER: &str = "node_from";

pub const ID_FIELD: &str = "id";
pub const LABEL_FIELD: &str = "name";
pub const FROM_FIELD: &str = "node_from";
pub const TO_FIELD: &str = "node_to";

/// Split input text into `(line_number, line)` pairs, 1-based.
///
/// Every line is kept, blank ones included; a final trailing newline does
/// not produce an extra empty line.
pub fn input_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect()
}
