//! Page-level styling and engine assets.

use super::options::RenderOptions;

/// Layout engine script and stylesheet, loaded from a CDN
pub const VIS_NETWORK_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/vis-network.min.js";
pub const VIS_NETWORK_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/dist/vis-network.min.css";

/// Width of the control panel column in px
pub const CONTROL_PANEL_WIDTH: u32 = 400;

/// Build the <style> block for the canvas and control panel.
pub fn build_style_block(options: &RenderOptions) -> String {
    format!(
        r#"<style type="text/css">
  #mynetwork {{
    width: 100%;
    height: {}px;
    background-color: {};
    border: 1px solid lightgray;
    position: relative;
    float: left;
  }}
  #config {{
    float: left;
    width: {}px;
    height: 600px;
  }}
</style>"#,
        options.height, options.bgcolor, CONTROL_PANEL_WIDTH
    )
}

/// Asset tags for the engine.
pub fn asset_tags() -> String {
    format!(
        r#"<link rel="stylesheet" href="{}" />
<script type="text/javascript" src="{}"></script>"#,
        VIS_NETWORK_CSS, VIS_NETWORK_JS
    )
}
