mod core;
mod dispatch;
mod mouse;
#[cfg(test)]
mod tests;

pub use self::core::{GestureState, ShapeTool, TOOL_ID, TOOL_LABEL, ToolError};
pub use dispatch::{ToolOperation, dispatch_preview};
pub use mouse::resolve_colors;
