//! HTML renderer - converts a Graph into a self-contained interactive page.
//!
//! Pure string building. The page embeds the node list, edge list and
//! network options as JSON and lets the engine compute the layout.

use super::options::RenderOptions;
use super::theme::{asset_tags, build_style_block};
use super::types::VisData;
use crate::error::{GraphError, Result};
use crate::types::Graph;
use serde::Serialize;

/// Render a graph as a complete HTML document.
pub fn render_html(graph: &Graph, options: &RenderOptions, title: &str) -> Result<String> {
    let data = VisData::new(graph, options.directed);
    let nodes_json = script_json(&data.nodes)?;
    let edges_json = script_json(&data.edges)?;
    let options_json = script_json(&options.network_options())?;
    let control_panel = !options.control_panel.is_empty();

    let mut parts: Vec<String> = Vec::new();

    parts.push("<!DOCTYPE html>".to_string());
    parts.push("<html>".to_string());
    parts.push("<head>".to_string());
    parts.push(r#"<meta charset="utf-8" />"#.to_string());
    parts.push(format!("<title>{}</title>", escape_xml(title)));
    parts.push(asset_tags());
    parts.push(build_style_block(options));
    parts.push("</head>".to_string());
    parts.push("<body>".to_string());
    parts.push(r#"<div id="mynetwork"></div>"#.to_string());
    if control_panel {
        parts.push(r#"<div id="config"></div>"#.to_string());
    }

    parts.push(r#"<script type="text/javascript">"#.to_string());
    // `update` tolerates repeated node ids where the DataSet constructor would throw.
    parts.push("  var nodes = new vis.DataSet();".to_string());
    parts.push(format!("  nodes.update({});", nodes_json));
    parts.push(format!("  var edges = new vis.DataSet({});", edges_json));
    parts.push(format!("  var options = {};", options_json));
    if control_panel {
        parts.push(
            r#"  options.configure.container = document.getElementById("config");"#.to_string(),
        );
    }
    parts.push(r#"  var container = document.getElementById("mynetwork");"#.to_string());
    parts.push(
        "  var network = new vis.Network(container, { nodes: nodes, edges: edges }, options);"
            .to_string(),
    );
    parts.push("</script>".to_string());

    parts.push("</body>".to_string());
    parts.push("</html>".to_string());

    Ok(parts.join("\n"))
}

// ============================================================================
// Utilities
// ============================================================================

/// Serialize a value as JSON safe to embed inside a <script> element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(GraphError::Render)?;
    Ok(escape_script(&json))
}

/// Escape characters that could close the script element or start markup.
///
/// Only ever applied to serde_json output, where these characters can
/// appear solely inside string literals, so the `\uXXXX` forms decode to
/// the same text.
pub fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeRecord, NodeRecord};

    fn sample_graph() -> Graph {
        Graph {
            nodes: vec![NodeRecord { id: "a".into(), label: "Alpha".into() }],
            edges: vec![EdgeRecord { from: "a".into(), to: "b".into() }],
        }
    }

    #[test]
    fn test_simple_graph_to_html() {
        let html = render_html(&sample_graph(), &RenderOptions::default(), "graph.html").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<title>graph.html</title>"));
        assert!(html.contains(
            r##"nodes.update([{"id":"a","label":"Alpha","color":"#b1a96d","shape":"dot"}]);"##
        ));
        assert!(html.contains(r#"new vis.DataSet([{"from":"a","to":"b","arrows":"to"}]);"#));
        assert!(html.contains(r#""solver":"repulsion""#));
        assert!(html.contains(r#"<div id="config"></div>"#));
        assert!(html.contains("options.configure.container"));
    }

    #[test]
    fn test_empty_graph_still_renders() {
        let html = render_html(&Graph::new(), &RenderOptions::default(), "empty").unwrap();
        assert!(html.contains("nodes.update([]);"));
        assert!(html.contains("new vis.DataSet([]);"));
        assert!(html.contains("new vis.Network("));
    }

    #[test]
    fn test_labels_cannot_break_out_of_script() {
        let graph = Graph {
            nodes: vec![NodeRecord {
                id: "x".into(),
                label: "</script><b>&".into(),
            }],
            edges: Vec::new(),
        };
        let html = render_html(&graph, &RenderOptions::default(), "t").unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#""label":"\u003c/script\u003e\u003cb\u003e\u0026""#));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_escaped_json_decodes_to_same_text() {
        let json = serde_json::to_string("a<b>&c").unwrap();
        let escaped = escape_script(&json);
        let back: String = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back, "a<b>&c");
    }

    #[test]
    fn test_no_control_panel() {
        let options = RenderOptions {
            control_panel: Vec::new(),
            ..Default::default()
        };
        let html = render_html(&sample_graph(), &options, "t").unwrap();
        assert!(!html.contains(r#"<div id="config">"#));
        assert!(!html.contains("options.configure.container"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_html(&Graph::new(), &RenderOptions::default(), "a<b>").unwrap();
        assert!(html.contains("<title>a&lt;b&gt;</title>"));
    }
}
