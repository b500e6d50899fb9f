//! Emblem display list → tiny-skia raster.
//!
//! Walks the ops in order and emits fills and strokes. Geometry is built
//! with kurbo shapes and flattened into tiny-skia paths.

use emblem_core::kurbo::{BezPath, Circle, Line, PathEl, Shape};
use emblem_core::{Color, Emblem, Primitive};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Curve flattening tolerance, in pixels.
const TOLERANCE: f64 = 0.1;

/// Paint every op of `emblem` onto `pixmap`, in order.
///
/// Degenerate primitives are skipped, so tiny sizes produce a bare
/// background instead of failing.
pub fn paint_emblem(pixmap: &mut Pixmap, emblem: &Emblem) {
    for op in &emblem.ops {
        if op.primitive.is_degenerate() {
            log::trace!("skip degenerate {:?} at {}px", op.primitive, emblem.size);
            continue;
        }
        paint_primitive(pixmap, &op.primitive, emblem.color_of(op));
    }
}

fn paint_primitive(pixmap: &mut Pixmap, primitive: &Primitive, color: Color) {
    match primitive {
        Primitive::RoundedRect { rect, radius } => {
            fill_shape(pixmap, &rect.to_rounded_rect(*radius), color)
        }

        Primitive::Rect(rect) => fill_shape(pixmap, rect, color),

        Primitive::Ring { center, radius, width } => {
            // Stroke is centred on the path, so pull it half a band inwards.
            let width = width.min(*radius);
            let circle = Circle::new(*center, radius - width / 2.0);
            stroke_shape(pixmap, &circle, width, LineCap::Butt, color);
        }

        Primitive::Disc { center, radius } => fill_shape(pixmap, &Circle::new(*center, *radius), color),

        Primitive::Polygon(points) => {
            let mut bez = BezPath::new();
            bez.move_to(points[0]);
            for p in &points[1..] {
                bez.line_to(*p);
            }
            bez.close_path();
            fill_shape(pixmap, &bez, color);
        }

        Primitive::Line { from, to, width } => {
            stroke_shape(pixmap, &Line::new(*from, *to), *width, LineCap::Butt, color)
        }

        Primitive::Wave(wave) => stroke_shape(pixmap, &wave.path(), wave.width, LineCap::Butt, color),
    }
}

// ─── Fill and stroke ─────────────────────────────────────────────────────────

fn fill_shape<S: Shape>(pixmap: &mut Pixmap, shape: &S, color: Color) {
    let Some(path) = to_skia_path(shape) else {
        return;
    };
    pixmap.fill_path(&path, &solid(color), FillRule::Winding, Transform::identity(), None);
}

fn stroke_shape<S: Shape>(pixmap: &mut Pixmap, shape: &S, width: f64, cap: LineCap, color: Color) {
    // tiny-skia draws zero-width strokes as hairlines.
    if width <= 0.0 {
        return;
    }
    let Some(path) = to_skia_path(shape) else {
        return;
    };
    let stroke = Stroke {
        width: width as f32,
        line_cap: cap,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Flatten a kurbo shape into a tiny-skia path. `None` when the shape has
/// no drawable extent.
fn to_skia_path<S: Shape>(shape: &S) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in shape.path_elements(TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}
