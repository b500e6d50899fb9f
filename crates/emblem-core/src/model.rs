//! Emblem display list.
//!
//! A composed emblem is a flat, ordered list of draw operations. Each op is
//! one vector primitive in target-pixel coordinates plus the palette slot it
//! is painted with. Later ops paint over earlier ones.

use crate::color::{Color, Ink, Palette};
use kurbo::{BezPath, Point, Rect, Shape};

// ─── Primitives ──────────────────────────────────────────────────────────

/// A wavy stroke: quadratic arcs alternating above and below `baseline`.
///
/// The first hump rises (towards smaller y). Each hump peaks `amplitude`
/// pixels away from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub start_x: f64,
    pub end_x: f64,
    pub baseline: f64,
    pub amplitude: f64,
    pub humps: u32,
    pub width: f64,
}

impl Wave {
    pub fn path(&self) -> BezPath {
        let mut bez = BezPath::new();
        bez.move_to((self.start_x, self.baseline));
        if self.humps == 0 {
            return bez;
        }
        let span = (self.end_x - self.start_x) / self.humps as f64;
        // A quadratic's midpoint sits halfway to its control point.
        let lift = 2.0 * self.amplitude;
        for i in 0..self.humps {
            let x0 = self.start_x + span * i as f64;
            let dir = if i % 2 == 0 { -1.0 } else { 1.0 };
            bez.quad_to(
                (x0 + span / 2.0, self.baseline + dir * lift),
                (x0 + span, self.baseline),
            );
        }
        bez
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled rectangle with circular corners.
    RoundedRect { rect: Rect, radius: f64 },
    /// Filled axis-aligned bar.
    Rect(Rect),
    /// Circular outline. `radius` is the outer edge; the band of `width`
    /// pixels is laid inside it.
    Ring { center: Point, radius: f64, width: f64 },
    /// Filled circle.
    Disc { center: Point, radius: f64 },
    /// Filled closed polygon.
    Polygon(Vec<Point>),
    /// Straight stroke with butt caps.
    Line { from: Point, to: Point, width: f64 },
    Wave(Wave),
}

impl Primitive {
    /// True when the primitive would cover no area at all. Happens at tiny
    /// sizes where scaled lengths truncate to zero.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Primitive::RoundedRect { rect, .. } | Primitive::Rect(rect) => {
                rect.width() <= 0.0 || rect.height() <= 0.0
            }
            Primitive::Ring { radius, width, .. } => *radius <= 0.0 || *width <= 0.0,
            Primitive::Disc { radius, .. } => *radius <= 0.0,
            Primitive::Polygon(points) => points.len() < 3 || polygon_area(points).abs() <= f64::EPSILON,
            Primitive::Line { from, to, width } => *width <= 0.0 || from == to,
            Primitive::Wave(w) => w.width <= 0.0 || w.end_x <= w.start_x || w.humps == 0,
        }
    }

    /// Conservative pixel extent, including stroke width.
    pub fn bounds(&self) -> Rect {
        match self {
            Primitive::RoundedRect { rect, .. } | Primitive::Rect(rect) => *rect,
            Primitive::Ring { center, radius, .. } | Primitive::Disc { center, radius } => {
                Rect::from_center_size(*center, (2.0 * radius, 2.0 * radius))
            }
            Primitive::Polygon(points) => points
                .iter()
                .map(|p| Rect::from_points(*p, *p))
                .reduce(|a, b| a.union(b))
                .unwrap_or(Rect::ZERO),
            Primitive::Line { from, to, width } => Rect::from_points(*from, *to).inflate(width / 2.0, width / 2.0),
            Primitive::Wave(w) => w.path().bounding_box().inflate(w.width / 2.0, w.width / 2.0),
        }
    }
}

fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        / 2.0
}

// ─── Emblem ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub primitive: Primitive,
    pub ink: Ink,
}

/// A fully composed icon at one size, ready to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct Emblem {
    pub size: u32,
    pub palette: Palette,
    pub ops: Vec<DrawOp>,
}

impl Emblem {
    pub fn new(size: u32, palette: Palette) -> Self {
        Self {
            size,
            palette,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, ink: Ink, primitive: Primitive) {
        self.ops.push(DrawOp { primitive, ink });
    }

    pub fn color_of(&self, op: &DrawOp) -> Color {
        self.palette.resolve(op.ink)
    }

    /// The canvas as a rectangle, `[0, size)` on both axes.
    pub fn canvas(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size as f64, self.size as f64)
    }
}
