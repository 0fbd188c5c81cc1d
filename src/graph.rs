//! Graph assembly from classified records.
//!
//! Input is processed in two complete passes: every node-like line first,
//! then every edge-like line. The resulting sequences therefore follow
//! their own relative input order and are never interleaved.

use crate::error::Result;
use crate::parser::{input_lines, parse_record, ParsedRecord};
use crate::types::{ClassifyMode, EdgeRecord, Graph, NodeRecord};
use tracing::{debug, trace};

/// Run-scoped accumulator for a [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. Repeated ids are appended again, never merged.
    pub fn add_node(&mut self, id: impl Into<String>, label: impl Into<String>) -> &NodeRecord {
        let node = NodeRecord {
            id: id.into(),
            label: label.into(),
        };
        trace!(id = %node.id, label = %node.label, color = %node.color(), "add node");
        self.graph.nodes.push(node);
        &self.graph.nodes[self.graph.nodes.len() - 1]
    }

    /// Append an edge. Endpoints are not checked against declared nodes.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &EdgeRecord {
        let edge = EdgeRecord {
            from: from.into(),
            to: to.into(),
        };
        trace!(from = %edge.from, to = %edge.to, "add edge");
        self.graph.edges.push(edge);
        &self.graph.edges[self.graph.edges.len() - 1]
    }

    pub fn node_count(&self) -> usize {
        self.graph.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edges.len()
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}

/// Parse `text` line by line and assemble the graph.
///
/// The node pass parses and extracts each line in order, so the first
/// failing line (malformed or missing a node field) aborts the run. The
/// edge pass then walks the already-parsed records.
pub fn build_graph(text: &str, mode: ClassifyMode) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    let mut records: Vec<ParsedRecord> = Vec::new();

    for (line_no, line) in input_lines(text) {
        let record = parse_record(line, line_no, mode)?;
        if record.kind.node {
            let node = record.node()?;
            builder.add_node(node.id, node.label);
        } else if record.kind.is_unclassified() {
            debug!(line = line_no, "no marker found, line dropped");
        }
        records.push(record);
    }
    debug!(records = records.len(), nodes = builder.node_count(), "node pass complete");

    for record in records.iter().filter(|r| r.kind.edge) {
        let edge = record.edge()?;
        builder.add_edge(edge.from, edge.to);
    }
    debug!(edges = builder.edge_count(), "edge pass complete");

    Ok(builder.build())
}
