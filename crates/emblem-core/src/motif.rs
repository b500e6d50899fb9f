//! Motif composition: reference geometry → display list at a target size.
//!
//! Both motifs share the same recipe. The background tile comes first, then
//! foreground shapes whose coordinates are reference-design constants run
//! through [`Scale::px`].

use crate::color::{Ink, Palette};
use crate::model::{Emblem, Primitive, Wave};
use crate::scale::Scale;
use kurbo::{Point, Rect};
use std::fmt;

/// Which emblem to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motif {
    /// Anchor with ring, stock, arms and a wave underneath.
    #[default]
    Anchor,
    /// Sailing boat with a sun and two waves.
    Boat,
}

impl Motif {
    pub const ALL: [Motif; 2] = [Motif::Anchor, Motif::Boat];

    pub fn name(&self) -> &'static str {
        match self {
            Motif::Anchor => "anchor",
            Motif::Boat => "boat",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Motif::Anchor => Palette::ANCHOR,
            Motif::Boat => Palette::BOAT,
        }
    }

    /// Lay out the motif for a `size` × `size` canvas.
    pub fn compose(&self, size: u32) -> Emblem {
        let scale = Scale::new(size);
        let mut emblem = Emblem::new(size, self.palette());
        emblem.push(
            Ink::Background,
            Primitive::RoundedRect {
                rect: emblem.canvas(),
                radius: scale.corner_radius(),
            },
        );
        match self {
            Motif::Anchor => compose_anchor(&mut emblem, &scale),
            Motif::Boat => compose_boat(&mut emblem, &scale),
        }
        log::trace!("composed {} at {size}px: {} ops", self.name(), emblem.ops.len());
        emblem
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

/// Bar of `width` centred on `cx`, spanning `top..bottom`. The left edge is
/// `cx - width / 2` with the half-width rounded down.
fn centered_bar(cx: f64, width: f64, top: f64, bottom: f64) -> Primitive {
    let x0 = cx - (width / 2.0).floor();
    Primitive::Rect(Rect::new(x0, top, x0 + width, bottom))
}

fn wave(s: &Scale, start_x: f64, end_x: f64, baseline: f64, amplitude: f64, humps: u32, width: f64) -> Primitive {
    Primitive::Wave(Wave {
        start_x: s.px(start_x),
        end_x: s.px(end_x),
        baseline: s.px(baseline),
        amplitude: s.px(amplitude),
        humps,
        width: s.px(width),
    })
}

// ─── Anchor ──────────────────────────────────────────────────────────────

fn compose_anchor(emblem: &mut Emblem, s: &Scale) {
    let cx = s.cx();

    emblem.push(
        Ink::Foreground,
        Primitive::Ring {
            center: Point::new(cx, s.px(140.0)),
            radius: s.px(40.0),
            width: s.px(12.0),
        },
    );

    // Shank
    emblem.push(
        Ink::Foreground,
        centered_bar(cx, s.px(24.0), s.px(100.0), s.px(380.0)),
    );

    // Stock
    let stock_y = s.px(80.0);
    emblem.push(
        Ink::Foreground,
        centered_bar(cx, s.px(160.0), stock_y, stock_y + s.px(24.0)),
    );

    // Arms meet on the shank above the crown.
    let crown = Point::new(cx, s.px(300.0));
    let arm_y = s.px(340.0);
    let arm_offset = s.px(90.0);
    let arm_w = s.px(20.0);
    for tip_x in [cx - arm_offset, cx + arm_offset] {
        emblem.push(
            Ink::Foreground,
            Primitive::Line {
                from: Point::new(tip_x, arm_y),
                to: crown,
                width: arm_w,
            },
        );
    }

    emblem.push(Ink::Foreground, wave(s, 80.0, 432.0, 420.0, 20.0, 4, 16.0));
}

// ─── Boat ────────────────────────────────────────────────────────────────

fn compose_boat(emblem: &mut Emblem, s: &Scale) {
    let cx = s.cx();
    let at = |dx: f64, y: f64| Point::new(cx + s.px(dx.abs()).copysign(dx), s.px(y));

    emblem.push(
        Ink::Accent,
        Primitive::Disc {
            center: Point::new(s.px(380.0), s.px(130.0)),
            radius: s.px(48.0),
        },
    );

    // Mast
    emblem.push(
        Ink::Foreground,
        centered_bar(cx, s.px(16.0), s.px(110.0), s.px(330.0)),
    );

    // Mainsail and jib either side of the mast.
    emblem.push(
        Ink::Foreground,
        Primitive::Polygon(vec![at(20.0, 120.0), at(20.0, 310.0), at(150.0, 310.0)]),
    );
    emblem.push(
        Ink::Foreground,
        Primitive::Polygon(vec![at(-20.0, 150.0), at(-20.0, 310.0), at(-120.0, 310.0)]),
    );

    // Hull
    emblem.push(
        Ink::Foreground,
        Primitive::Polygon(vec![
            at(-160.0, 336.0),
            at(160.0, 336.0),
            at(104.0, 396.0),
            at(-104.0, 396.0),
        ]),
    );

    emblem.push(Ink::Foreground, wave(s, 80.0, 432.0, 430.0, 12.0, 4, 14.0));
    emblem.push(Ink::Foreground, wave(s, 128.0, 384.0, 468.0, 12.0, 3, 14.0));
}
