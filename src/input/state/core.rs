//! Gesture state machine and shape tool state.

use crate::draw::{
    Color, Operation, Operator, RenderError, SurfaceError,
    path::{Point, ShapePath},
};
use crate::input::tool::{FillMode, ShapeKind};
use crate::util::Rect;
use log::debug;
use thiserror::Error;

/// Identity stamped on every operation this tool builds.
pub const TOOL_ID: &str = "shape";

/// Human-readable tool name used in status strings.
pub const TOOL_LABEL: &str = "Basic shape";

/// Errors raised while previewing, committing or cancelling a gesture.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Current gesture state.
///
/// Per-gesture parameters live inside `Pressed` so they cannot outlive the
/// gesture that captured them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No button held - waiting for a press
    Idle,
    /// Button held - previews follow the pointer
    Pressed {
        /// Where the press happened
        anchor: Point,
        /// Tool width captured at press time
        width: f64,
        /// Stroke color (fill color in filled-main mode)
        main: Color,
        /// Fill color in secondary-fill mode
        secondary: Color,
    },
}

impl GestureState {
    /// Anchor of the active gesture, or [`Point::NONE`] when idle.
    pub fn anchor(&self) -> Point {
        match self {
            GestureState::Idle => Point::NONE,
            GestureState::Pressed { anchor, .. } => *anchor,
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, GestureState::Pressed { .. })
    }
}

/// The rectangle/oval/circle tool.
///
/// Holds the persistent shape and fill selection, the gesture state, and the
/// status strings the host shows for the current selection.
pub struct ShapeTool {
    /// Current gesture state machine
    pub state: GestureState,
    /// Selected contour kind
    shape: ShapeKind,
    /// Selected fill policy
    fill: FillMode,
    /// Cached "tool - shape - fill" status text
    edition_status: String,
    /// Whether the host should repaint since the last check
    pub needs_redraw: bool,
    /// Region to repaint since the host last took it
    pub last_damage: Option<Rect>,
    /// Region covered by the preview currently on the working surface
    pub(crate) last_preview_damage: Option<Rect>,
}

impl Default for ShapeTool {
    fn default() -> Self {
        Self::new(ShapeKind::default(), FillMode::default())
    }
}

impl ShapeTool {
    /// Creates an idle tool with the given initial selection.
    pub fn new(shape: ShapeKind, fill: FillMode) -> Self {
        let mut tool = Self {
            state: GestureState::Idle,
            shape,
            fill,
            edition_status: String::new(),
            needs_redraw: false,
            last_damage: None,
            last_preview_damage: None,
        };
        tool.refresh_status();
        tool
    }

    pub fn id(&self) -> &'static str {
        TOOL_ID
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill
    }

    /// Selects the contour kind for the next rebuilt path.
    ///
    /// Returns `false` without touching anything when `kind` is already active.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) -> bool {
        if self.shape == kind {
            return false;
        }
        debug!("Shape kind {} -> {}", self.shape, kind);
        self.shape = kind;
        self.refresh_status();
        true
    }

    /// Selects the fill policy for the next rendered operation.
    ///
    /// Returns `false` without touching anything when `mode` is already active.
    pub fn set_fill_mode(&mut self, mode: FillMode) -> bool {
        if self.fill == mode {
            return false;
        }
        debug!("Fill mode {} -> {}", self.fill, mode);
        self.fill = mode;
        self.refresh_status();
        true
    }

    /// Short label for the tool options button (the shape name).
    pub fn options_label(&self) -> &'static str {
        self.shape.label()
    }

    /// Status line describing the active selection.
    pub fn edition_status(&self) -> &str {
        &self.edition_status
    }

    fn refresh_status(&mut self) {
        self.edition_status = format!(
            "{} - {} - {}",
            TOOL_LABEL,
            self.shape.label(),
            self.fill.label()
        );
    }

    /// Packages `path` with the gesture parameters into an [`Operation`].
    ///
    /// Returns `None` while idle, since there are no resolved colors yet.
    pub fn build_operation(&self, path: ShapePath) -> Option<Operation> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pressed {
                width,
                main,
                secondary,
                ..
            } => Some(Operation {
                tool_id: TOOL_ID.to_string(),
                main,
                secondary,
                operator: Operator::Over,
                line_width: width,
                fill: self.fill,
                path,
            }),
        }
    }
}
