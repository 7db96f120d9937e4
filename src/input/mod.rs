//! Pointer handling and the shape tool state machine.
//!
//! This module turns host pointer events into previews and committed paint
//! operations. It owns the per-gesture state (anchor, width, resolved colors)
//! and the persistent shape/fill selection.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{MouseButton, MoveEvent, PressEvent, ReleaseEvent};
pub use state::{
    GestureState, ShapeTool, ToolError, ToolOperation, dispatch_preview, resolve_colors,
};
pub use tool::{FillMode, ParseSelectionError, ShapeKind};
