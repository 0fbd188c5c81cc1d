//! Type definitions for the node/edge graph model

use crate::color::derive_color;
use serde::Serialize;

/// How a raw input line is classified as a node and/or edge description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyMode {
    /// Marker tokens are searched for anywhere in the raw line text
    #[default]
    Raw,
    /// Marker fields must be keys of the parsed record
    Keys,
}

impl ClassifyMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Some(ClassifyMode::Raw),
            "keys" => Some(ClassifyMode::Keys),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClassifyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyMode::Raw => write!(f, "raw"),
            ClassifyMode::Keys => write!(f, "keys"),
        }
    }
}

/// An entity: `id` keys the graph, `label` is display text and colour input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
}

impl NodeRecord {
    /// Colour derived from the label; never stored.
    pub fn color(&self) -> String {
        derive_color(&self.label)
    }
}

/// A directed relationship between two opaque identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
}

/// The assembled directed multigraph.
///
/// Nodes keep node-pass order and edges keep edge-pass order. Duplicate
/// node ids are kept, and edge endpoints may name undeclared nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
