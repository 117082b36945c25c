//! Scene descriptions handed to a [`Renderer`](crate::render::Renderer).
//!
//! Pattern families describe what a frame looks like as a list of simple
//! shapes on a square canvas; turning that into a displayable artifact is
//! the renderer's job.

use serde::{Deserialize, Serialize};

/// Canvas edge length in user units.
pub const CANVAS_SIZE: f64 = 160.0;

/// Centre of the canvas.
pub const CENTER: Point = Point {
    x: CANVAS_SIZE / 2.0,
    y: CANVAS_SIZE / 2.0,
};

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move this point a fraction of the way towards `target`.
    pub fn towards(self, target: Point, factor: f64) -> Point {
        Point::new(
            self.x + (target.x - self.x) * factor,
            self.y + (target.y - self.y) * factor,
        )
    }

    /// Translate by a delta.
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Fill and stroke attributes of a shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Fill colour; `None` means no fill.
    pub fill: Option<String>,
    /// Stroke colour; `None` means no stroke.
    pub stroke: Option<String>,
    /// Stroke width in user units.
    pub stroke_width: f64,
    /// Dash length and gap, if dashed.
    pub dash: Option<(f64, f64)>,
    /// Opacity in `[0, 1]`, if not fully opaque.
    pub opacity: Option<f64>,
}

impl Style {
    /// A filled shape without an outline.
    pub fn filled(fill: impl Into<String>) -> Self {
        Self {
            fill: Some(fill.into()),
            ..Self::default()
        }
    }

    /// An unfilled outline.
    pub fn outline(stroke: impl Into<String>, width: f64) -> Self {
        Self {
            stroke: Some(stroke.into()),
            stroke_width: width,
            ..Self::default()
        }
    }

    /// Add an outline to this style.
    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }

    /// Make the stroke dashed.
    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }

    /// Set the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned rectangle with its top-left corner at `origin`.
    Rect {
        /// Top-left corner.
        origin: Point,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Rotation in degrees around the top-left corner.
        rotation: f64,
        /// Appearance.
        style: Style,
    },
    /// Circle.
    Circle {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f64,
        /// Appearance.
        style: Style,
    },
    /// Half of a circle, cut along the vertical diameter.
    HalfCircle {
        /// Centre of the full circle.
        center: Point,
        /// Radius.
        radius: f64,
        /// Whether the left half is drawn (otherwise the right half).
        left: bool,
        /// Appearance.
        style: Style,
    },
    /// Closed polygon.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Appearance.
        style: Style,
    },
    /// Straight line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Appearance.
        style: Style,
    },
    /// Centred text label.
    Text {
        /// Anchor point (centre of the label).
        at: Point,
        /// Label content.
        content: String,
        /// Font size in user units.
        size: f64,
        /// Text colour.
        color: String,
    },
}

/// One frame's worth of shapes, drawn in order on a white canvas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Shapes in painting order.
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Builder form of [`Scene::push`].
    pub fn with(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Vertices of a regular polygon with `n` sides.
///
/// `start_deg` is the angle of the first vertex, measured clockwise from the
/// positive x axis in screen coordinates; -90 puts it at the top.
pub fn regular_polygon(n: usize, center: Point, radius: f64, start_deg: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = (start_deg + 360.0 * i as f64 / n as f64).to_radians();
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Vertices of an equilateral-ish triangle of height `h` centred on `at`.
pub fn triangle(at: Point, h: f64, up: bool) -> Vec<Point> {
    let half = h / 2.0;
    let dir = if up { 1.0 } else { -1.0 };
    vec![
        at.offset(0.0, -half * dir),
        at.offset(-half, half * dir),
        at.offset(half, half * dir),
    ]
}
