//! Geometry helpers for damage regions and point parsing.

use crate::draw::path::{Bounds, Point};

/// Axis-aligned rectangle helper used for damage hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Extents wider than `i32::MAX` are clamped.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = clamp_extent(i64::from(max_x) - i64::from(min_x));
        let height = clamp_extent(i64::from(max_y) - i64::from(min_y));
        Self::new(min_x, min_y, width, height)
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());
        Rect {
            x: min_x,
            y: min_y,
            width: clamp_extent(max_x - i64::from(min_x)),
            height: clamp_extent(max_y - i64::from(min_y)),
        }
    }

    fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }
}

fn clamp_extent(extent: i64) -> i32 {
    extent.clamp(0, i64::from(i32::MAX)) as i32
}

fn stroke_padding(line_width: f64) -> f64 {
    (line_width / 2.0).ceil().max(1.0)
}

/// Converts float contour bounds into a pixel rectangle covering the stroke.
///
/// Zero-area contours still produce a rectangle at least one pixel wide so the
/// host repaints the spot where the gesture happened.
pub fn damage_rect(bounds: Bounds, line_width: f64) -> Option<Rect> {
    let padding = stroke_padding(line_width);
    let min_x = (bounds.min_x - padding).floor() as i32;
    let min_y = (bounds.min_y - padding).floor() as i32;
    // Float-to-int casts saturate, so far-off contours pin to the i32 range.
    let max_x = ((bounds.max_x + padding).ceil() as i32).max(min_x.saturating_add(1));
    let max_y = ((bounds.max_y + padding).ceil() as i32).max(min_y.saturating_add(1));
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

/// Parses an `X,Y` pair such as `10,20` or `12.5, 8`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid X coordinate '{}'", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid Y coordinate '{}'", y.trim()))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite: '{s}'"));
    }
    Ok(Point::new(x, y))
}
