use crate::draw::{
    Color, Operation, Snapshot,
    path::{Point, build_path},
};
use crate::input::events::{MouseButton, MoveEvent, PressEvent, ReleaseEvent};
use log::{debug, info};

use super::{GestureState, ShapeTool, ToolError, ToolOperation};

/// Picks (main, secondary) for a press: the right button swaps the palette.
pub fn resolve_colors(button: MouseButton, left: Color, right: Color) -> (Color, Color) {
    match button {
        MouseButton::Right => (right, left),
        MouseButton::Left | MouseButton::Middle => (left, right),
    }
}

impl ShapeTool {
    /// Processes a pointer press, starting a gesture.
    ///
    /// Records the anchor and width and resolves the gesture colors. Nothing is
    /// painted until the first motion event.
    pub fn on_press(&mut self, event: PressEvent) {
        let (main, secondary) = resolve_colors(event.button, event.left_color, event.right_color);
        if self.state.is_pressed() {
            debug!("Press while a gesture is active; re-anchoring");
        }
        self.state = GestureState::Pressed {
            anchor: event.point,
            width: event.width,
            main,
            secondary,
        };
        debug!(
            "Shape gesture started at ({:.1}, {:.1}) with {:?} button",
            event.point.x, event.point.y, event.button
        );
    }

    /// Processes pointer motion, replacing the previous preview.
    ///
    /// The path is rebuilt from the anchor and the event point using the
    /// currently selected shape kind, then painted as a non-committing preview.
    pub fn on_motion(
        &mut self,
        event: MoveEvent,
        snapshot: &mut dyn Snapshot,
    ) -> Result<(), ToolError> {
        let Some(operation) = self.operation_to(event.point) else {
            return Ok(());
        };
        self.do_tool_operation(&operation, snapshot)?;
        Ok(())
    }

    /// Processes pointer release, committing the final shape.
    ///
    /// Returns the committed operation so the host can record it (e.g. for
    /// undo), or `None` when no gesture was active.
    pub fn on_release(
        &mut self,
        event: ReleaseEvent,
        snapshot: &mut dyn Snapshot,
    ) -> Result<Option<Operation>, ToolError> {
        let Some(operation) = self.operation_to(event.point) else {
            return Ok(None);
        };
        self.state = GestureState::Idle;
        self.apply_operation(&operation, snapshot)?;
        info!(
            "Committed {} ({})",
            self.shape_kind().label(),
            self.fill_mode().label()
        );
        Ok(Some(operation))
    }

    /// Abandons the gesture, discarding any uncommitted preview.
    pub fn cancel(&mut self, snapshot: &mut dyn Snapshot) -> Result<(), ToolError> {
        if self.state.is_pressed() {
            debug!("Shape gesture cancelled");
        }
        self.state = GestureState::Idle;
        snapshot.restore()?;
        self.clear_preview_damage();
        self.needs_redraw = true;
        Ok(())
    }

    fn operation_to(&self, point: Point) -> Option<Operation> {
        let anchor = match self.state {
            GestureState::Pressed { anchor, .. } => anchor,
            GestureState::Idle => {
                debug!("Pointer event without an active gesture ignored");
                return None;
            }
        };
        self.build_operation(build_path(self.shape_kind(), anchor, point))
    }
}
