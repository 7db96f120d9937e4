//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::{FillMode, ShapeKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape tool defaults.
///
/// The selection persists across gestures; these values seed it when the
/// tool is created.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToolConfig {
    /// Initial shape kind (rectangle, oval, circle)
    #[serde(default)]
    pub default_shape: ShapeKind,

    /// Initial fill mode (empty, filled, secondary)
    #[serde(default)]
    pub default_fill: FillMode,

    /// Stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_shape: ShapeKind::default(),
            default_fill: FillMode::default(),
            default_width: default_width(),
        }
    }
}

/// Palette colors bound to the two mouse buttons.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ColorsConfig {
    /// Color for the left button (main color on a left-button drag)
    #[serde(default = "default_left_color")]
    pub left: ColorSpec,

    /// Color for the right button (main color on a right-button drag)
    #[serde(default = "default_right_color")]
    pub right: ColorSpec,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            left: default_left_color(),
            right: default_right_color(),
        }
    }
}

/// Canvas created by the command-line host.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background color; transparent when omitted
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> f64 {
    5.0
}

fn default_left_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_right_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_canvas_width() -> i32 {
    640
}

fn default_canvas_height() -> i32 {
    480
}
