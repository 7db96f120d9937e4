use super::*;
use crate::draw::{
    BLACK, Canvas, Color, Operation, RED, Snapshot, TRANSPARENT, WHITE, build_path,
    path::Point, render_operation,
};
use crate::input::{FillMode, MouseButton, MoveEvent, PressEvent, ReleaseEvent, ShapeKind};

const OPAQUE_RED: u32 = 0xffff_0000;

fn create_canvas() -> Canvas {
    Canvas::new(64, 64, TRANSPARENT).unwrap()
}

fn press(x: f64, y: f64, button: MouseButton) -> PressEvent {
    PressEvent {
        point: Point::new(x, y),
        width: 2.0,
        button,
        left_color: RED,
        right_color: WHITE,
    }
}

fn motion(x: f64, y: f64) -> MoveEvent {
    MoveEvent {
        point: Point::new(x, y),
    }
}

fn release(x: f64, y: f64) -> ReleaseEvent {
    ReleaseEvent {
        point: Point::new(x, y),
    }
}

/// Tool that records every operation it accepts.
struct RecordingTool {
    id: &'static str,
    seen: Vec<Operation>,
}

impl ToolOperation for RecordingTool {
    fn tool_id(&self) -> &str {
        self.id
    }

    fn do_tool_operation(
        &mut self,
        operation: &Operation,
        _snapshot: &mut dyn Snapshot,
    ) -> Result<bool, ToolError> {
        if operation.tool_id != self.id {
            return Ok(false);
        }
        self.seen.push(operation.clone());
        Ok(true)
    }
}

#[test]
fn test_release_commits_rectangle_that_survives_restore() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::FilledMain);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(30.0, 20.0), &mut canvas).unwrap();
    let committed = tool
        .on_release(release(50.0, 30.0), &mut canvas)
        .unwrap()
        .expect("release should commit");

    assert_eq!(
        committed.path,
        build_path(
            ShapeKind::Rectangle,
            Point::new(10.0, 10.0),
            Point::new(50.0, 30.0)
        )
    );
    assert_eq!(tool.state, GestureState::Idle);
    assert_eq!(tool.state.anchor(), Point::NONE);

    canvas.restore().unwrap();
    assert_eq!(canvas.pixel(30, 20).unwrap(), Some(OPAQUE_RED));
    assert_eq!(canvas.pixel(45, 25).unwrap(), Some(OPAQUE_RED));
    assert_eq!(canvas.pixel(55, 20).unwrap(), Some(0));
}

#[test]
fn test_right_button_swaps_colors() {
    let mut tool = ShapeTool::default();
    tool.on_press(PressEvent {
        point: Point::new(10.0, 10.0),
        width: 3.0,
        button: MouseButton::Right,
        left_color: BLACK,
        right_color: WHITE,
    });

    match tool.state {
        GestureState::Pressed {
            anchor,
            width,
            main,
            secondary,
        } => {
            assert_eq!(anchor, Point::new(10.0, 10.0));
            assert_eq!(width, 3.0);
            assert_eq!(main, WHITE);
            assert_eq!(secondary, BLACK);
        }
        GestureState::Idle => panic!("press should enter Pressed"),
    }
}

#[test]
fn test_left_and_middle_buttons_keep_palette_order() {
    for button in [MouseButton::Left, MouseButton::Middle] {
        assert_eq!(resolve_colors(button, BLACK, WHITE), (BLACK, WHITE));
    }
    assert_eq!(
        resolve_colors(MouseButton::from_code(3), BLACK, WHITE),
        (WHITE, BLACK)
    );
}

#[test]
fn test_only_final_drag_position_is_committed() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Circle, FillMode::Empty);

    tool.on_press(press(0.0, 0.0, MouseButton::Left));
    tool.on_motion(motion(10.0, 0.0), &mut canvas).unwrap();
    tool.on_motion(motion(20.0, 0.0), &mut canvas).unwrap();
    let committed = tool
        .on_release(release(20.0, 0.0), &mut canvas)
        .unwrap()
        .expect("release should commit");

    // Reference: the final shape painted once onto a pristine canvas.
    let mut reference = create_canvas();
    {
        let ctx = cairo::Context::new(reference.surface()).unwrap();
        render_operation(&ctx, &committed).unwrap();
    }

    assert_eq!(canvas.pixels().unwrap(), reference.pixels().unwrap());
    // Pixel on the discarded radius-10 ring stays clear.
    assert_eq!(canvas.pixel(7, 7).unwrap(), Some(0));
    assert_ne!(canvas.pixel(14, 14).unwrap(), Some(0));
}

#[test]
fn test_cancel_restores_baseline_and_resets_anchor() {
    let mut canvas = create_canvas();
    let baseline = canvas.pixels().unwrap();
    let mut tool = ShapeTool::new(ShapeKind::Oval, FillMode::FilledMain);

    tool.on_press(press(5.0, 5.0, MouseButton::Left));
    tool.on_motion(motion(40.0, 40.0), &mut canvas).unwrap();
    assert_ne!(canvas.pixels().unwrap(), baseline);

    tool.cancel(&mut canvas).unwrap();

    assert_eq!(canvas.pixels().unwrap(), baseline);
    assert_eq!(tool.state, GestureState::Idle);
    assert_eq!(tool.state.anchor(), Point::NONE);

    // A release after cancel has nothing to commit.
    assert!(
        tool.on_release(release(40.0, 40.0), &mut canvas)
            .unwrap()
            .is_none()
    );
    assert_eq!(canvas.pixels().unwrap(), baseline);
}

#[test]
fn test_empty_circle_strokes_without_filling() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Circle, FillMode::FilledMain);
    assert!(tool.set_fill_mode(FillMode::Empty));

    tool.on_press(press(32.0, 32.0, MouseButton::Left));
    tool.on_release(release(44.0, 32.0), &mut canvas).unwrap();

    assert_eq!(canvas.pixel(32, 32).unwrap(), Some(0));
    assert_ne!(canvas.pixel(44, 32).unwrap(), Some(0));
}

#[test]
fn test_secondary_mode_fills_with_secondary_and_strokes_with_main() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::FilledSecondaryFillMainStroke);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_release(release(50.0, 50.0), &mut canvas).unwrap();

    assert_eq!(canvas.pixel(30, 30).unwrap(), Some(0xffff_ffff));
    assert_eq!(canvas.pixel(10, 30).unwrap(), Some(OPAQUE_RED));
}

#[test]
fn test_motion_and_release_while_idle_are_ignored() {
    let mut canvas = create_canvas();
    let baseline = canvas.pixels().unwrap();
    let mut tool = ShapeTool::default();

    tool.on_motion(motion(20.0, 20.0), &mut canvas).unwrap();
    assert!(
        tool.on_release(release(20.0, 20.0), &mut canvas)
            .unwrap()
            .is_none()
    );

    assert_eq!(canvas.pixels().unwrap(), baseline);
    assert!(!tool.needs_redraw);
}

#[test]
fn test_preview_is_not_committed() {
    let mut canvas = create_canvas();
    let baseline = canvas.pixels().unwrap();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::FilledMain);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(30.0, 30.0), &mut canvas).unwrap();
    assert_eq!(canvas.pixel(20, 20).unwrap(), Some(OPAQUE_RED));

    canvas.restore().unwrap();
    assert_eq!(canvas.pixels().unwrap(), baseline);
}

#[test]
fn test_operation_for_other_tool_is_ignored() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::FilledMain);
    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(30.0, 30.0), &mut canvas).unwrap();
    let with_preview = canvas.pixels().unwrap();

    let mut foreign = tool
        .build_operation(build_path(
            ShapeKind::Rectangle,
            Point::new(0.0, 0.0),
            Point::new(60.0, 60.0),
        ))
        .unwrap();
    foreign.tool_id = "pencil".to_string();

    assert!(!tool.do_tool_operation(&foreign, &mut canvas).unwrap());
    assert_eq!(canvas.pixels().unwrap(), with_preview);
}

#[test]
fn test_dispatch_preview_reaches_only_matching_tools() {
    let mut canvas = create_canvas();
    let mut shape_tool = ShapeTool::new(ShapeKind::Circle, FillMode::FilledMain);
    let mut pencil = RecordingTool {
        id: "pencil",
        seen: Vec::new(),
    };

    shape_tool.on_press(press(32.0, 32.0, MouseButton::Left));
    let operation = shape_tool
        .build_operation(build_path(
            ShapeKind::Circle,
            Point::new(32.0, 32.0),
            Point::new(40.0, 32.0),
        ))
        .unwrap();

    let handled = {
        let mut handlers: [&mut dyn ToolOperation; 2] = [&mut shape_tool, &mut pencil];
        dispatch_preview(&mut handlers, &operation, &mut canvas).unwrap()
    };

    assert_eq!(handled, 1);
    assert!(pencil.seen.is_empty());
    assert_eq!(canvas.pixel(32, 32).unwrap(), Some(OPAQUE_RED));
}

#[test]
fn test_redundant_selection_is_a_no_op() {
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::FilledSecondaryFillMainStroke);
    assert_eq!(
        tool.edition_status(),
        "Basic shape - Rectangle - Filled (secondary color)"
    );

    assert!(!tool.set_shape_kind(ShapeKind::Rectangle));
    assert!(!tool.set_fill_mode(FillMode::FilledSecondaryFillMainStroke));

    assert!(tool.set_shape_kind(ShapeKind::Oval));
    assert!(tool.set_fill_mode(FillMode::Empty));
    assert_eq!(tool.options_label(), "Oval");
    assert_eq!(tool.edition_status(), "Basic shape - Oval - Empty");
}

#[test]
fn test_shape_change_mid_drag_applies_to_next_motion() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::FilledMain);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(50.0, 50.0), &mut canvas).unwrap();
    // Rectangle corner is painted.
    assert_eq!(canvas.pixel(12, 12).unwrap(), Some(OPAQUE_RED));

    tool.set_shape_kind(ShapeKind::Oval);
    tool.on_motion(motion(50.0, 50.0), &mut canvas).unwrap();
    // Oval leaves the corner clear.
    assert_eq!(canvas.pixel(12, 12).unwrap(), Some(0));
}

#[test]
fn test_damage_accumulates_until_taken() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::Empty);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(20.0, 20.0), &mut canvas).unwrap();
    tool.on_motion(motion(40.0, 40.0), &mut canvas).unwrap();

    assert!(tool.needs_redraw);
    let damage = tool.take_damage().expect("previews produce damage");
    assert!(damage.x <= 9 && damage.y <= 9);
    assert!(damage.x + damage.width >= 41 && damage.y + damage.height >= 41);
    assert!(!tool.needs_redraw);
    assert!(tool.take_damage().is_none());
}

#[test]
fn test_restore_damage_survives_take_between_motions() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::Empty);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(50.0, 50.0), &mut canvas).unwrap();
    tool.take_damage();

    // The large preview is wiped by the restore, so it must be repainted.
    tool.on_motion(motion(20.0, 20.0), &mut canvas).unwrap();
    let damage = tool.take_damage().expect("restore and preview produce damage");
    assert!(damage.x <= 9 && damage.y <= 9);
    assert!(damage.x + damage.width >= 51 && damage.y + damage.height >= 51);
}

#[test]
fn test_cancel_reports_discarded_preview_region() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::Empty);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(20.0, 20.0), &mut canvas).unwrap();
    tool.take_damage();

    tool.cancel(&mut canvas).unwrap();
    assert!(tool.needs_redraw);
    let damage = tool.take_damage().expect("cancel marks the preview region");
    assert!(damage.x <= 9 && damage.y <= 9);
    assert!(damage.x + damage.width >= 21 && damage.y + damage.height >= 21);

    // Nothing was previewed since, so a second cancel has no region to report.
    tool.cancel(&mut canvas).unwrap();
    assert!(tool.take_damage().is_none());
}

#[test]
fn test_commit_damage_includes_replaced_preview() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::FilledMain);

    tool.on_press(press(10.0, 10.0, MouseButton::Left));
    tool.on_motion(motion(50.0, 50.0), &mut canvas).unwrap();
    tool.take_damage();

    tool.on_release(release(20.0, 20.0), &mut canvas).unwrap();
    let damage = tool.take_damage().expect("commit produces damage");
    assert!(damage.x + damage.width >= 51 && damage.y + damage.height >= 51);

    // The committed shape is not a preview, so cancelling afterwards is clean.
    tool.cancel(&mut canvas).unwrap();
    assert!(tool.take_damage().is_none());
}

#[test]
fn test_drag_beyond_pixel_range_does_not_overflow_damage() {
    let mut canvas = create_canvas();
    let mut tool = ShapeTool::new(ShapeKind::Rectangle, FillMode::Empty);

    tool.on_press(press(-3e9, 0.0, MouseButton::Left));
    tool.on_motion(motion(3e9, 10.0), &mut canvas).unwrap();
    tool.on_release(release(3e9, 10.0), &mut canvas).unwrap();

    let damage = tool.take_damage().expect("huge drags still report damage");
    assert_eq!(damage.x, i32::MIN);
    assert_eq!(damage.width, i32::MAX);
}

#[test]
fn test_operation_captures_gesture_parameters() {
    let mut tool = ShapeTool::new(ShapeKind::Oval, FillMode::FilledMain);
    assert!(tool.build_operation(Default::default()).is_none());

    tool.on_press(PressEvent {
        point: Point::new(1.0, 2.0),
        width: 7.5,
        button: MouseButton::Left,
        left_color: Color::new(0.2, 0.4, 0.6, 0.8),
        right_color: WHITE,
    });
    let op = tool.build_operation(Default::default()).unwrap();
    assert_eq!(op.tool_id, TOOL_ID);
    assert_eq!(op.line_width, 7.5);
    assert_eq!(op.main, Color::new(0.2, 0.4, 0.6, 0.8));
    assert_eq!(op.secondary, WHITE);
    assert_eq!(op.fill, FillMode::FilledMain);
    assert_eq!(op.operator, crate::draw::Operator::Over);
}
