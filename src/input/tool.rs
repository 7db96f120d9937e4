//! Shape and fill selections exposed to the host.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Contour drawn by a drag gesture.
///
/// Persists across gestures until the user picks another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Axis-aligned rectangle from corner to corner
    #[default]
    Rectangle,
    /// Ellipse inscribed in the drag box
    Oval,
    /// Circle centered on the press point
    Circle,
}

/// How the interior and border of a shape are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum FillMode {
    /// Stroke with the main color only
    #[serde(rename = "empty")]
    Empty,
    /// Fill with the main color only
    #[serde(rename = "filled")]
    FilledMain,
    /// Fill with the secondary color, then stroke with the main color
    #[default]
    #[serde(rename = "secondary")]
    FilledSecondaryFillMainStroke,
}

/// Error returned when a selection id is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseSelectionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Oval, ShapeKind::Circle];

    /// Stable identifier used in config files and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Oval => "oval",
            ShapeKind::Circle => "circle",
        }
    }

    /// Human-readable label for status display.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Oval => "Oval",
            ShapeKind::Circle => "Circle",
        }
    }
}

impl FillMode {
    pub const ALL: [FillMode; 3] = [
        FillMode::Empty,
        FillMode::FilledMain,
        FillMode::FilledSecondaryFillMainStroke,
    ];

    /// Stable identifier used in config files and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            FillMode::Empty => "empty",
            FillMode::FilledMain => "filled",
            FillMode::FilledSecondaryFillMainStroke => "secondary",
        }
    }

    /// Human-readable label for status display.
    pub fn label(self) -> &'static str {
        match self {
            FillMode::Empty => "Empty",
            FillMode::FilledMain => "Filled (main color)",
            FillMode::FilledSecondaryFillMainStroke => "Filled (secondary color)",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| ParseSelectionError {
                kind: "shape",
                value: s.to_string(),
                expected: "rectangle, oval, circle",
            })
    }
}

impl FromStr for FillMode {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.id() == wanted)
            .ok_or_else(|| ParseSelectionError {
                kind: "fill mode",
                value: s.to_string(),
                expected: "empty, filled, secondary",
            })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
