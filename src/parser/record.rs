//! Single-line record parsing and classification

use super::field::{label_text, scalar_text};
use super::{EDGE_MARKER, FROM_FIELD, ID_FIELD, LABEL_FIELD, NODE_MARKER, TO_FIELD};
use crate::error::{GraphError, Result};
use crate::types::{ClassifyMode, EdgeRecord, NodeRecord};
use serde_json::Value;

/// Which graph elements a line contributes to. Both or neither is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub node: bool,
    pub edge: bool,
}

impl Classification {
    /// Substring test on the raw text, so a marker inside any key or value
    /// counts (`"surname"` marks a node line).
    pub fn from_raw(line: &str) -> Self {
        Self {
            node: line.contains(NODE_MARKER),
            edge: line.contains(EDGE_MARKER),
        }
    }

    /// Exact top-level key lookup on the parsed record.
    pub fn from_keys(record: &Value) -> Self {
        match record.as_object() {
            Some(map) => Self {
                node: map.contains_key(LABEL_FIELD),
                edge: map.contains_key(FROM_FIELD),
            },
            None => Self::default(),
        }
    }

    pub fn is_unclassified(&self) -> bool {
        !self.node && !self.edge
    }
}

/// A parsed line together with its classification
#[derive(Debug, Clone)]
pub struct ParsedRecord {
    pub line: usize,
    pub value: Value,
    pub kind: Classification,
}

impl ParsedRecord {
    /// Extract `{id, name}`. Only meaningful for node-classified lines.
    pub fn node(&self) -> Result<NodeRecord> {
        Ok(NodeRecord {
            id: scalar_text(&self.value, ID_FIELD, self.line)?,
            label: label_text(&self.value, LABEL_FIELD, self.line)?,
        })
    }

    /// Extract `{node_from, node_to}`. Only meaningful for edge-classified lines.
    pub fn edge(&self) -> Result<EdgeRecord> {
        Ok(EdgeRecord {
            from: scalar_text(&self.value, FROM_FIELD, self.line)?,
            to: scalar_text(&self.value, TO_FIELD, self.line)?,
        })
    }
}

/// Parse one raw line as JSON and classify it.
///
/// Any line that is not valid JSON is a [`GraphError::MalformedRecord`],
/// whatever its classification would have been.
pub fn parse_record(line: &str, line_no: usize, mode: ClassifyMode) -> Result<ParsedRecord> {
    let value: Value = serde_json::from_str(line)
        .map_err(|source| GraphError::MalformedRecord { line: line_no, source })?;

    let kind = match mode {
        ClassifyMode::Raw => Classification::from_raw(line),
        ClassifyMode::Keys => Classification::from_keys(&value),
    };

    Ok(ParsedRecord {
        line: line_no,
        value,
        kind,
    })
}
