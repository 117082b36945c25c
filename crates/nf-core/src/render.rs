//! Rendering scenes into artifacts.
//!
//! The engine only needs a [`Renderer`]: it treats artifacts as opaque
//! strings and compares them after trimming. [`SvgRenderer`] produces small
//! standalone SVG documents.

use crate::scene::{CANVAS_SIZE, Point, Scene, Shape, Style};

/// Turns a scene description into an artifact string.
///
/// Implementations must be pure: the same scene always renders to the same
/// string.
pub trait Renderer: std::fmt::Debug + Send + Sync {
    /// Render one scene.
    fn render(&self, scene: &Scene) -> String;
}

/// Renders scenes to standalone SVG documents on a white square canvas.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { size: CANVAS_SIZE }
    }
}

impl SvgRenderer {
    /// A renderer for the standard canvas size.
    pub fn new() -> Self {
        Self::default()
    }

    fn header(&self) -> String {
        let s = num(self.size);
        format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{s}' height='{s}' viewBox='0 0 {s} {s}'>\
             <rect width='100%' height='100%' fill='white'/>"
        )
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, scene: &Scene) -> String {
        let mut out = self.header();
        for shape in &scene.shapes {
            out.push_str(&shape_svg(shape));
        }
        out.push_str("</svg>");
        out
    }
}

fn shape_svg(shape: &Shape) -> String {
    match shape {
        Shape::Rect {
            origin,
            width,
            height,
            rotation,
            style,
        } => {
            if rotation.abs() > f64::EPSILON {
                format!(
                    "<g transform='translate({},{}) rotate({:.2})'><rect x='0' y='0' width='{}' height='{}'{}/></g>",
                    num(origin.x),
                    num(origin.y),
                    rotation,
                    num(*width),
                    num(*height),
                    attrs(style)
                )
            } else {
                format!(
                    "<rect x='{}' y='{}' width='{}' height='{}'{}/>",
                    num(origin.x),
                    num(origin.y),
                    num(*width),
                    num(*height),
                    attrs(style)
                )
            }
        }
        Shape::Circle {
            center,
            radius,
            style,
        } => format!(
            "<circle cx='{}' cy='{}' r='{}'{}/>",
            num(center.x),
            num(center.y),
            num(*radius),
            attrs(style)
        ),
        Shape::HalfCircle {
            center,
            radius,
            left,
            style,
        } => {
            let top = Point::new(center.x, center.y - radius);
            let bottom = Point::new(center.x, center.y + radius);
            // Sweep counter-clockwise from the top for the left half.
            let sweep = if *left { 0 } else { 1 };
            format!(
                "<path d='M {} {} A {r} {r} 0 0 {sweep} {} {} Z'{}/>",
                num(top.x),
                num(top.y),
                num(bottom.x),
                num(bottom.y),
                attrs(style),
                r = num(*radius),
            )
        }
        Shape::Polygon { points, style } => format!(
            "<polygon points='{}'{}/>",
            points_str(points),
            attrs(style)
        ),
        Shape::Line { from, to, style } => format!(
            "<line x1='{}' y1='{}' x2='{}' y2='{}'{}/>",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            attrs(style)
        ),
        Shape::Text {
            at,
            content,
            size,
            color,
        } => format!(
            "<text x='{}' y='{}' font-size='{}' text-anchor='middle' dominant-baseline='middle' fill='{color}'>{}</text>",
            num(at.x),
            num(at.y),
            num(*size),
            escape(content)
        ),
    }
}

fn attrs(style: &Style) -> String {
    let mut s = format!(" fill='{}'", style.fill.as_deref().unwrap_or("none"));
    if let Some(stroke) = &style.stroke {
        s.push_str(&format!(
            " stroke='{stroke}' stroke-width='{:.2}'",
            style.stroke_width
        ));
    }
    if let Some((on, off)) = style.dash {
        s.push_str(&format!(" stroke-dasharray='{} {}'", num(on), num(off)));
    }
    if let Some(opacity) = style.opacity {
        s.push_str(&format!(" opacity='{opacity:.2}'"));
    }
    s
}

fn num(v: f64) -> String {
    format!("{v:.1}")
}

fn points_str(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
