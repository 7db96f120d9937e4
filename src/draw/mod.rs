//! Shape geometry, fill/stroke policy and restorable surfaces (Cairo-based).
//!
//! This module defines the drawing side of the shape tool:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`path`]: contour construction for rectangles, ovals and circles
//! - [`Operation`]: replayable description of one paint action
//! - [`render_operation`]: the fill/stroke policy executed on a Cairo context
//! - [`Snapshot`] / [`Canvas`]: working surface with a restorable baseline

pub mod canvas;
pub mod color;
pub mod operation;
pub mod path;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::{Canvas, Snapshot, SurfaceError};
pub use color::Color;
pub use operation::Operation;
pub use path::{PathSegment, Point, ShapePath, build_path};
pub use render::{
    ColorRole, Operator, PaintStep, RenderError, paint_steps, render_operation, render_path,
};
pub use color::{BLACK, RED, TRANSPARENT, WHITE};
