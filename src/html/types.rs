//! Engine-facing node and edge payloads.

use crate::types::{EdgeRecord, Graph, NodeRecord};
use serde::Serialize;

/// A node as the layout engine receives it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisNode<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub color: String,
    pub shape: &'static str,
}

impl<'a> From<&'a NodeRecord> for VisNode<'a> {
    fn from(node: &'a NodeRecord) -> Self {
        Self {
            id: &node.id,
            label: &node.label,
            color: node.color(),
            shape: "dot",
        }
    }
}

/// An edge as the layout engine receives it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<&'static str>,
}

impl<'a> VisEdge<'a> {
    pub fn new(edge: &'a EdgeRecord, directed: bool) -> Self {
        Self {
            from: &edge.from,
            to: &edge.to,
            arrows: directed.then_some("to"),
        }
    }
}

/// Ordered node and edge lists for one graph
#[derive(Debug, Serialize)]
pub struct VisData<'a> {
    pub nodes: Vec<VisNode<'a>>,
    pub edges: Vec<VisEdge<'a>>,
}

impl<'a> VisData<'a> {
    pub fn new(graph: &'a Graph, directed: bool) -> Self {
        Self {
            nodes: graph.nodes.iter().map(VisNode::from).collect(),
            edges: graph.edges.iter().map(|e| VisEdge::new(e, directed)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_keeps_model_order_and_duplicates() {
        let graph = Graph {
            nodes: vec![
                NodeRecord { id: "a".into(), label: "Alpha".into() },
                NodeRecord { id: "a".into(), label: "Beta".into() },
            ],
            edges: vec![EdgeRecord { from: "a".into(), to: "ghost".into() }],
        };
        let data = VisData::new(&graph, true);
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "nodes": [
                    {"id": "a", "label": "Alpha", "color": "#b1a96d", "shape": "dot"},
                    {"id": "a", "label": "Beta", "color": "#703390", "shape": "dot"}
                ],
                "edges": [{"from": "a", "to": "ghost", "arrows": "to"}]
            })
        );
    }

    #[test]
    fn test_undirected_edges_have_no_arrows() {
        let edge = EdgeRecord { from: "x".into(), to: "y".into() };
        let value = serde_json::to_value(VisEdge::new(&edge, false)).unwrap();
        assert_eq!(value, json!({"from": "x", "to": "y"}));
    }
}
