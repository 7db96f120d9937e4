//! Cairo-based fill/stroke policy for shape contours.

use super::color::Color;
use super::operation::Operation;
use super::path::ShapePath;
use crate::input::FillMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compositing operator recorded in an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    /// Paint over existing pixels, respecting alpha
    #[default]
    Over,
    /// Replace existing pixels
    Source,
}

impl From<Operator> for cairo::Operator {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Over => cairo::Operator::Over,
            Operator::Source => cairo::Operator::Source,
        }
    }
}

/// Which of the two gesture colors a paint step uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Main,
    Secondary,
}

/// One drawing call issued against the active contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStep {
    /// Fill and keep the path for a following stroke
    FillPreserve(ColorRole),
    /// Fill and consume the path
    Fill(ColorRole),
    /// Stroke and consume the path
    Stroke(ColorRole),
}

/// Errors raised while painting onto a Cairo context.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo drawing failed: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Returns the ordered drawing calls a fill mode expands to.
pub fn paint_steps(fill: FillMode) -> &'static [PaintStep] {
    match fill {
        FillMode::Empty => &[PaintStep::Stroke(ColorRole::Main)],
        FillMode::FilledMain => &[PaintStep::Fill(ColorRole::Main)],
        FillMode::FilledSecondaryFillMainStroke => &[
            PaintStep::FillPreserve(ColorRole::Secondary),
            PaintStep::Stroke(ColorRole::Main),
        ],
    }
}

/// Paints a contour with the given fill policy.
///
/// Operator and line width are configured inside a `save`/`restore` pair, so
/// the context's drawing state is left as it was found. Pixels outside the
/// filled/stroked region are untouched, which makes repeated calls against the
/// same baseline produce identical output.
#[allow(clippy::too_many_arguments)]
pub fn render_path(
    ctx: &cairo::Context,
    path: &ShapePath,
    fill: FillMode,
    line_width: f64,
    main: Color,
    secondary: Color,
    operator: Operator,
) -> Result<(), RenderError> {
    ctx.save()?;
    ctx.set_operator(operator.into());
    ctx.set_line_width(line_width);
    path.append_to(ctx);

    let result = paint_steps(fill).iter().try_for_each(|step| {
        let pick = |role: ColorRole| match role {
            ColorRole::Main => main,
            ColorRole::Secondary => secondary,
        };
        match *step {
            PaintStep::FillPreserve(role) => {
                pick(role).set_source(ctx);
                ctx.fill_preserve()
            }
            PaintStep::Fill(role) => {
                pick(role).set_source(ctx);
                ctx.fill()
            }
            PaintStep::Stroke(role) => {
                pick(role).set_source(ctx);
                ctx.stroke()
            }
        }
    });

    // Restore even when a step failed.
    ctx.new_path();
    ctx.restore()?;
    result.map_err(RenderError::from)
}

/// Paints everything an [`Operation`] describes.
pub fn render_operation(ctx: &cairo::Context, operation: &Operation) -> Result<(), RenderError> {
    render_path(
        ctx,
        &operation.path,
        operation.fill,
        operation.line_width,
        operation.main,
        operation.secondary,
        operation.operator,
    )
}
