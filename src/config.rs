//! Run configuration: fixed locations plus optional environment overrides.

use crate::error::{GraphError, Result};
use crate::html::RenderOptions;
use crate::types::ClassifyMode;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "database/output.json";
pub const DEFAULT_OUTPUT_PATH: &str = "database/graph.html";

pub const ENV_INPUT: &str = "GRAPH_HTML_INPUT";
pub const ENV_OUTPUT: &str = "GRAPH_HTML_OUTPUT";
pub const ENV_HEIGHT: &str = "GRAPH_HTML_HEIGHT";
pub const ENV_BGCOLOR: &str = "GRAPH_HTML_BGCOLOR";
pub const ENV_CLASSIFY: &str = "GRAPH_HTML_CLASSIFY";

lazy_static! {
    static ref RE_HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub classify: ClassifyMode,
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            classify: ClassifyMode::default(),
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Build the config from process environment variables.
    ///
    /// Optional:
    /// - `GRAPH_HTML_INPUT`: input path, default `database/output.json`
    /// - `GRAPH_HTML_OUTPUT`: output path, default `database/graph.html`
    /// - `GRAPH_HTML_HEIGHT`: canvas height in px, default 1200
    /// - `GRAPH_HTML_BGCOLOR`: `#rrggbb` background, default `#ffffff`
    /// - `GRAPH_HTML_CLASSIFY`: `raw` (default) or `keys`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_INPUT) {
            config.input = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_OUTPUT) {
            config.output = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_HEIGHT) {
            config.render.height = parse_height(&raw)?;
        }
        if let Some(raw) = lookup(ENV_BGCOLOR) {
            config.render.bgcolor = parse_color(ENV_BGCOLOR, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CLASSIFY) {
            config.classify = ClassifyMode::from_str(&raw).ok_or_else(|| GraphError::InvalidConfig {
                key: ENV_CLASSIFY,
                value: raw.clone(),
                reason: "expected `raw` or `keys`".to_string(),
            })?;
        }

        Ok(config)
    }

    /// Page title: the output file name.
    pub fn title(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn parse_height(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(h) if h > 0 => Ok(h),
        _ => Err(GraphError::InvalidConfig {
            key: ENV_HEIGHT,
            value: raw.to_string(),
            reason: "expected a positive integer".to_string(),
        }),
    }
}

/// Validate a `#rrggbb` colour and normalise it to lowercase.
fn parse_color(key: &'static str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if RE_HEX_COLOR.is_match(trimmed) {
        Ok(trimmed.to_lowercase())
    } else {
        Err(GraphError::InvalidConfig {
            key,
            value: raw.to_string(),
            reason: "expected #rrggbb".to_string(),
        })
    }
}
