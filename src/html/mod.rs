//! Render boundary - hands the graph model to the layout engine.
//!
//! The engine itself (force simulation, drawing, interaction) runs in the
//! browser. This module only produces what it consumes: the ordered node
//! list, the ordered edge list and the network options, wrapped in a
//! self-contained HTML page.

mod options;
mod renderer;
mod theme;
mod types;

pub use options::{RenderOptions, RepulsionPhysics, DEFAULT_BGCOLOR, DEFAULT_HEIGHT};
pub use renderer::{escape_script, escape_xml, render_html};
pub use types::{VisData, VisEdge, VisNode};

use crate::error::Result;
use crate::types::Graph;

/// Turns a finished graph model into a visual artifact.
pub trait Renderer {
    fn render(&self, graph: &Graph) -> Result<String>;
}

/// Renders interactive HTML pages
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
    title: String,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, graph: &Graph) -> Result<String> {
        render_html(graph, &self.options, &self.title)
    }
}
