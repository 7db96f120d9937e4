use crate::draw::{Operation, RenderError, Snapshot, render_operation};
use crate::util::Rect;
use log::{debug, trace};

use super::{ShapeTool, ToolError};

/// A consumer of the shared preview channel.
///
/// Every tool sees every broadcast operation and must ignore the ones whose
/// `tool_id` is not its own.
pub trait ToolOperation {
    /// Identity compared against [`Operation::tool_id`].
    fn tool_id(&self) -> &str;

    /// Paints `operation` as a non-committing preview.
    ///
    /// Returns `Ok(false)` when the operation belongs to another tool; the
    /// surface is left untouched in that case.
    fn do_tool_operation(
        &mut self,
        operation: &Operation,
        snapshot: &mut dyn Snapshot,
    ) -> Result<bool, ToolError>;
}

/// Broadcasts a preview to every handler, returning how many accepted it.
pub fn dispatch_preview(
    handlers: &mut [&mut dyn ToolOperation],
    operation: &Operation,
    snapshot: &mut dyn Snapshot,
) -> Result<usize, ToolError> {
    let mut handled = 0;
    for handler in handlers.iter_mut() {
        if handler.do_tool_operation(operation, snapshot)? {
            handled += 1;
        }
    }
    if handled == 0 {
        debug!("No tool accepted operation from '{}'", operation.tool_id);
    }
    Ok(handled)
}

impl ToolOperation for ShapeTool {
    fn tool_id(&self) -> &str {
        self.id()
    }

    fn do_tool_operation(
        &mut self,
        operation: &Operation,
        snapshot: &mut dyn Snapshot,
    ) -> Result<bool, ToolError> {
        if operation.tool_id != self.id() {
            trace!("Ignoring operation for tool '{}'", operation.tool_id);
            return Ok(false);
        }
        snapshot.restore()?;
        self.clear_preview_damage();
        self.last_preview_damage = self.paint(operation, snapshot)?;
        Ok(true)
    }
}

impl ShapeTool {
    /// Paints `operation` onto the baseline and commits it.
    ///
    /// The working surface is restored first so no stale preview is baked in;
    /// after the commit the shape survives any later restore.
    pub fn apply_operation(
        &mut self,
        operation: &Operation,
        snapshot: &mut dyn Snapshot,
    ) -> Result<(), ToolError> {
        snapshot.restore()?;
        self.clear_preview_damage();
        self.paint(operation, snapshot)?;
        snapshot.commit()?;
        Ok(())
    }

    fn paint(
        &mut self,
        operation: &Operation,
        snapshot: &mut dyn Snapshot,
    ) -> Result<Option<Rect>, ToolError> {
        {
            let ctx = cairo::Context::new(snapshot.surface()).map_err(RenderError::from)?;
            render_operation(&ctx, operation)?;
        }
        let damage = operation.damage_rect();
        if let Some(rect) = damage {
            self.mark_damage(rect);
        }
        self.needs_redraw = true;
        Ok(damage)
    }

    /// Forgets the current preview and marks the area it covered for repaint.
    ///
    /// Call right after restoring the working surface.
    pub(crate) fn clear_preview_damage(&mut self) {
        if let Some(prev) = self.last_preview_damage.take() {
            self.mark_damage(prev);
        }
    }

    fn mark_damage(&mut self, rect: Rect) {
        self.last_damage = Some(match self.last_damage {
            Some(pending) => pending.union(rect),
            None => rect,
        });
        self.needs_redraw = true;
    }

    /// Returns and clears the pending repaint region.
    pub fn take_damage(&mut self) -> Option<Rect> {
        self.needs_redraw = false;
        self.last_damage.take()
    }
}
