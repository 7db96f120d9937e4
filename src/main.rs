use anyhow::Context;
use clap::{Parser, ValueEnum};
use shapetool::config::Config;
use shapetool::draw::{Canvas, Point, TRANSPARENT};
use shapetool::input::{
    FillMode, MouseButton, MoveEvent, PressEvent, ReleaseEvent, ShapeKind, ShapeTool,
};
use shapetool::util::parse_point;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shapetool")]
#[command(
    version,
    about = "Drag out a rectangle, oval or circle and paint it onto a PNG canvas"
)]
struct Cli {
    /// Shape to draw (rectangle, oval, circle)
    #[arg(long, short = 's', value_name = "SHAPE")]
    shape: Option<ShapeKind>,

    /// Fill mode (empty, filled, secondary)
    #[arg(long, short = 'f', value_name = "FILL")]
    fill: Option<FillMode>,

    /// Stroke width in pixels (1-100)
    #[arg(long, short = 'w', value_name = "PIXELS", value_parser = parse_width)]
    width: Option<f64>,

    /// Point where the button is pressed
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    from: Point,

    /// Intermediate drag point (repeatable); each one is previewed then discarded
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    via: Vec<Point>,

    /// Point where the button is released
    #[arg(
        long,
        value_name = "X,Y",
        value_parser = parse_point,
        required_unless_present = "cancel"
    )]
    to: Option<Point>,

    /// Mouse button used for the drag (right swaps main and secondary colors)
    #[arg(long, short = 'b', value_enum, default_value_t = ButtonArg::Left)]
    button: ButtonArg,

    /// Cancel the gesture instead of releasing it
    #[arg(long, action = clap::ArgAction::SetTrue)]
    cancel: bool,

    /// PNG file to write the canvas to
    #[arg(long, short = 'o', value_name = "PATH")]
    output: PathBuf,

    /// Configuration file (defaults to ~/.config/shapetool/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the committed operation as JSON
    #[arg(long, action = clap::ArgAction::SetTrue)]
    print_operation: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ButtonArg {
    Left,
    Middle,
    Right,
}

impl From<ButtonArg> for MouseButton {
    fn from(button: ButtonArg) -> Self {
        match button {
            ButtonArg::Left => MouseButton::Left,
            ButtonArg::Middle => MouseButton::Middle,
            ButtonArg::Right => MouseButton::Right,
        }
    }
}

fn parse_width(s: &str) -> Result<f64, String> {
    let width: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{s}'"))?;
    if !(1.0..=100.0).contains(&width) {
        return Err(format!("width must be between 1 and 100, got '{s}'"));
    }
    Ok(width)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let background = config
        .canvas
        .background
        .as_ref()
        .map(|spec| spec.to_color())
        .unwrap_or(TRANSPARENT);
    let mut canvas = Canvas::new(config.canvas.width, config.canvas.height, background)
        .context("Failed to create canvas")?;

    let mut tool = ShapeTool::new(config.tool.default_shape, config.tool.default_fill);
    if let Some(shape) = cli.shape {
        tool.set_shape_kind(shape);
    }
    if let Some(fill) = cli.fill {
        tool.set_fill_mode(fill);
    }
    println!("{}", tool.edition_status());

    let width = cli.width.unwrap_or(config.tool.default_width);
    tool.on_press(PressEvent {
        point: cli.from,
        width,
        button: cli.button.into(),
        left_color: config.colors.left.to_color(),
        right_color: config.colors.right.to_color(),
    });

    for point in cli.via.iter().copied() {
        tool.on_motion(MoveEvent { point }, &mut canvas)?;
    }

    if cli.cancel {
        if let Some(point) = cli.to {
            tool.on_motion(MoveEvent { point }, &mut canvas)?;
        }
        tool.cancel(&mut canvas)?;
        log::info!("Gesture cancelled; canvas left at its baseline");
        println!("Gesture cancelled");
    } else if let Some(point) = cli.to {
        if let Some(operation) = tool.on_release(ReleaseEvent { point }, &mut canvas)? {
            if let Some(rect) = tool.take_damage() {
                println!(
                    "Committed {} (damage {},{} {}x{})",
                    tool.shape_kind().label(),
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height
                );
            }
            if cli.print_operation {
                println!("{}", serde_json::to_string_pretty(&operation)?);
            }
        }
    }

    canvas
        .write_png(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    log::info!("Wrote {}", cli.output.display());

    Ok(())
}
