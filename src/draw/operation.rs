//! Replayable description of one paint action.

use super::color::Color;
use super::path::ShapePath;
use super::render::Operator;
use crate::input::FillMode;
use crate::util::{self, Rect};
use serde::{Deserialize, Serialize};

/// Everything needed to reproduce one shape paint, as a preview or a commit.
///
/// Operations travel over a channel shared by every tool; consumers compare
/// `tool_id` with their own identity and ignore the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Identity of the tool that built this operation
    pub tool_id: String,
    /// Stroke color, or fill color for [`FillMode::FilledMain`]
    pub main: Color,
    /// Fill color for [`FillMode::FilledSecondaryFillMainStroke`]
    pub secondary: Color,
    /// Compositing operator
    pub operator: Operator,
    /// Stroke width in pixels
    pub line_width: f64,
    /// Fill/stroke policy
    pub fill: FillMode,
    /// Contour to paint
    pub path: ShapePath,
}

impl Operation {
    /// Pixel rectangle this operation can touch, padded for the stroke.
    pub fn damage_rect(&self) -> Option<Rect> {
        util::damage_rect(self.path.bounds()?, self.line_width)
    }
}
