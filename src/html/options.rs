//! Display configuration handed to the layout engine.

use serde::Serialize;

/// Default canvas height in px
pub const DEFAULT_HEIGHT: u32 = 1200;
/// Default canvas background
pub const DEFAULT_BGCOLOR: &str = "#ffffff";

/// Repulsion-solver parameters.
///
/// Serialized with the engine's camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepulsionPhysics {
    pub node_distance: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_constant: f64,
    pub damping: f64,
}

impl Default for RepulsionPhysics {
    fn default() -> Self {
        Self {
            node_distance: 100.0,
            central_gravity: 0.2,
            spring_length: 200.0,
            spring_constant: 0.05,
            damping: 0.09,
        }
    }
}

/// Configuration options for HTML rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Draw arrow heads on edges. Default: true
    pub directed: bool,
    /// Canvas height in px. Default: 1200
    pub height: u32,
    /// Canvas background colour. Default: #ffffff
    pub bgcolor: String,
    pub physics: RepulsionPhysics,
    /// Option groups exposed in the interactive control panel. Empty disables the panel.
    pub control_panel: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            directed: true,
            height: DEFAULT_HEIGHT,
            bgcolor: DEFAULT_BGCOLOR.to_string(),
            physics: RepulsionPhysics::default(),
            control_panel: vec!["physics".to_string()],
        }
    }
}

impl RenderOptions {
    /// The options object passed to the network constructor.
    pub fn network_options(&self) -> NetworkOptions<'_> {
        NetworkOptions {
            edges: EdgeOptions {
                arrows: Arrows {
                    to: ArrowEnd {
                        enabled: self.directed,
                    },
                },
            },
            physics: PhysicsOptions {
                enabled: true,
                solver: "repulsion",
                repulsion: &self.physics,
            },
            configure: ConfigureOptions {
                enabled: !self.control_panel.is_empty(),
                filter: &self.control_panel,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NetworkOptions<'a> {
    pub edges: EdgeOptions,
    pub physics: PhysicsOptions<'a>,
    pub configure: ConfigureOptions<'a>,
}

#[derive(Debug, Serialize)]
pub struct EdgeOptions {
    pub arrows: Arrows,
}

#[derive(Debug, Serialize)]
pub struct Arrows {
    pub to: ArrowEnd,
}

#[derive(Debug, Serialize)]
pub struct ArrowEnd {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct PhysicsOptions<'a> {
    pub enabled: bool,
    pub solver: &'static str,
    pub repulsion: &'a RepulsionPhysics,
}

#[derive(Debug, Serialize)]
pub struct ConfigureOptions<'a> {
    pub enabled: bool,
    pub filter: &'a [String],
}
