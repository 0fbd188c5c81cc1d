//! graph-html - Convert line-delimited node/edge records into an interactive
//! force-directed network page.
//!
//! Each input line is a JSON record. Lines mentioning `name` describe nodes
//! (`{"id": .., "name": ..}`), lines mentioning `node_from` describe directed
//! edges (`{"node_from": .., "node_to": ..}`). Every node gets a colour
//! derived from its label.
//!
//! # Example
//!
//! ```rust
//! use graph_html::{build_graph, ClassifyMode, HtmlRenderer, RenderOptions, Renderer};
//!
//! let input = "{\"id\":\"a\",\"name\":\"Alpha\"}\n{\"node_from\":\"a\",\"node_to\":\"b\"}";
//! let graph = build_graph(input, ClassifyMode::Raw).unwrap();
//! assert_eq!(graph.nodes.len(), 1);
//! assert_eq!(graph.edges.len(), 1);
//!
//! let html = HtmlRenderer::new(RenderOptions::default()).render(&graph).unwrap();
//! assert!(html.contains("vis.Network"));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod graph;
pub mod html;
pub mod parser;
pub mod types;

pub use color::derive_color;
pub use config::Config;
pub use error::{GraphError, Result};
pub use graph::{build_graph, GraphBuilder};
pub use html::{HtmlRenderer, RenderOptions, Renderer};
pub use parser::{parse_record, Classification, ParsedRecord};
pub use types::*;

use std::fs;
use std::path::PathBuf;
use tracing::info;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub nodes: usize,
    pub edges: usize,
    pub output: PathBuf,
}

/// Read the input, build the graph, render it and write the artifact once.
///
/// Nothing is written unless every earlier step succeeded. The output file
/// is replaced wholesale.
pub fn run(config: &Config) -> Result<RunSummary> {
    info!(input = %config.input.display(), classify = %config.classify, "reading records");
    let text = fs::read_to_string(&config.input).map_err(|source| GraphError::InputNotFound {
        path: config.input.clone(),
        source,
    })?;
    let lines = text.lines().count();

    let graph = build_graph(&text, config.classify)?;
    info!(lines, nodes = graph.nodes.len(), edges = graph.edges.len(), "graph built");

    let renderer = HtmlRenderer::new(config.render.clone()).with_title(config.title());
    let html = renderer.render(&graph)?;

    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| GraphError::OutputWrite {
            path: config.output.clone(),
            source,
        })?;
    }
    fs::write(&config.output, html).map_err(|source| GraphError::OutputWrite {
        path: config.output.clone(),
        source,
    })?;
    info!(output = %config.output.display(), "graph written");

    Ok(RunSummary {
        lines,
        nodes: graph.nodes.len(),
        edges: graph.edges.len(),
        output: config.output.clone(),
    })
}
