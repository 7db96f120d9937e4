//! Closed contour construction for the shape tool.
//!
//! Paths are built fresh from the anchor and pointer position on every motion
//! event and replayed onto a Cairo context by the render policy.

use crate::input::ShapeKind;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A position in surface space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Sentinel meaning "no active gesture".
    pub const NONE: Point = Point { x: -1.0, y: -1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// One element of a contour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Starts a new sub-path at the given point
    MoveTo(Point),
    /// Straight line from the current point
    LineTo(Point),
    /// Cubic Bézier from the current point
    CurveTo { c1: Point, c2: Point, end: Point },
    /// Circular arc, angles in radians measured clockwise in surface space
    Arc {
        center: Point,
        radius: f64,
        angle1: f64,
        angle2: f64,
    },
    /// Closes the current sub-path back to its start
    ClosePath,
}

/// Axis-aligned bounds of a contour in surface space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// An ordered sequence of segments forming one closed contour.
///
/// Immutable once built; the shape tool rebuilds it every frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePath {
    segments: Vec<PathSegment>,
}

impl ShapePath {
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` when the contour ends with a close-path segment.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::ClosePath))
    }

    /// Replays the contour onto `ctx` as its only active path.
    pub fn append_to(&self, ctx: &cairo::Context) {
        ctx.new_path();
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => ctx.move_to(p.x, p.y),
                PathSegment::LineTo(p) => ctx.line_to(p.x, p.y),
                PathSegment::CurveTo { c1, c2, end } => {
                    ctx.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y)
                }
                PathSegment::Arc {
                    center,
                    radius,
                    angle1,
                    angle2,
                } => ctx.arc(center.x, center.y, radius, angle1, angle2),
                PathSegment::ClosePath => ctx.close_path(),
            }
        }
    }

    /// Samples points along the contour.
    ///
    /// Curves and arcs are evaluated at `steps` evenly spaced parameters;
    /// line segments contribute their end points only.
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut points = Vec::new();
        let mut current: Option<Point> = None;
        let mut start: Option<Point> = None;

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    points.push(p);
                    current = Some(p);
                    start = Some(p);
                }
                PathSegment::LineTo(p) => {
                    if start.is_none() {
                        start = Some(p);
                    }
                    points.push(p);
                    current = Some(p);
                }
                PathSegment::CurveTo { c1, c2, end } => {
                    // A curve with no current point starts at its first control point.
                    let from = current.unwrap_or(c1);
                    if start.is_none() {
                        start = Some(from);
                        points.push(from);
                    }
                    for i in 1..=steps {
                        let t = i as f64 / steps as f64;
                        points.push(cubic_at(from, c1, c2, end, t));
                    }
                    current = Some(end);
                }
                PathSegment::Arc {
                    center,
                    radius,
                    angle1,
                    angle2,
                } => {
                    for i in 0..=steps {
                        let angle = angle1 + (angle2 - angle1) * i as f64 / steps as f64;
                        let p = Point::new(
                            center.x + radius * angle.cos(),
                            center.y + radius * angle.sin(),
                        );
                        if start.is_none() {
                            start = Some(p);
                        }
                        points.push(p);
                        current = Some(p);
                    }
                }
                PathSegment::ClosePath => {
                    if let Some(s) = start {
                        points.push(s);
                        current = Some(s);
                    }
                }
            }
        }

        points
    }

    /// Axis-aligned bounds of the sampled contour, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let points = self.flatten(32);
        let first = points.first()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }
}

fn cubic_at(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Builds the closed contour for `kind` spanning the drag from `anchor` to `current`.
///
/// Pure and total: degenerate drags (anchor == current) yield a zero-area contour.
pub fn build_path(kind: ShapeKind, anchor: Point, current: Point) -> ShapePath {
    match kind {
        ShapeKind::Rectangle => rectangle_path(anchor, current),
        ShapeKind::Oval => oval_path(anchor, current),
        ShapeKind::Circle => circle_path(anchor, current),
    }
}

fn rectangle_path(anchor: Point, current: Point) -> ShapePath {
    ShapePath::from_segments(vec![
        PathSegment::MoveTo(anchor),
        PathSegment::LineTo(Point::new(anchor.x, current.y)),
        PathSegment::LineTo(current),
        PathSegment::LineTo(Point::new(current.x, anchor.y)),
        PathSegment::ClosePath,
    ])
}

/// Four-curve ellipse approximation inscribed in the drag box.
///
/// Each quadrant runs between two side midpoints, with both control points
/// pulled onto the box corner edges.
fn oval_path(anchor: Point, current: Point) -> ShapePath {
    let mid = anchor.midpoint(current);
    let left = Point::new(anchor.x, mid.y);
    let bottom = Point::new(mid.x, current.y);
    let right = Point::new(current.x, mid.y);
    let top = Point::new(mid.x, anchor.y);

    ShapePath::from_segments(vec![
        PathSegment::MoveTo(left),
        PathSegment::CurveTo {
            c1: left,
            c2: Point::new(anchor.x, current.y),
            end: bottom,
        },
        PathSegment::CurveTo {
            c1: bottom,
            c2: current,
            end: right,
        },
        PathSegment::CurveTo {
            c1: right,
            c2: Point::new(current.x, anchor.y),
            end: top,
        },
        PathSegment::CurveTo {
            c1: top,
            c2: anchor,
            end: left,
        },
        PathSegment::ClosePath,
    ])
}

fn circle_path(anchor: Point, current: Point) -> ShapePath {
    ShapePath::from_segments(vec![
        PathSegment::Arc {
            center: anchor,
            radius: anchor.distance_to(current),
            angle1: 0.0,
            angle2: 2.0 * PI,
        },
        PathSegment::ClosePath,
    ])
}
