//! Pixel inspection: sample colours and measure painted features.
//!
//! Used to check rendered icons without re-deriving the geometry, e.g. how
//! wide a bar came out at a given size.

use emblem_core::Color;
use tiny_skia::Pixmap;

/// Straight-alpha colour at `(x, y)`, or `None` outside the pixmap.
pub fn sample(pixmap: &Pixmap, x: u32, y: u32) -> Option<Color> {
    // `Pixmap::pixel` only checks the flat buffer, so x past the edge
    // would read the next row.
    if x >= pixmap.width() || y >= pixmap.height() {
        return None;
    }
    let c = pixmap.pixel(x, y)?.demultiply();
    Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
}

/// Longest unbroken horizontal run of exactly `color` on row `y`.
pub fn row_run(pixmap: &Pixmap, y: u32, color: Color) -> u32 {
    longest_run((0..pixmap.width()).map(|x| sample(pixmap, x, y) == Some(color)))
}

/// Longest unbroken vertical run of exactly `color` in column `x`.
pub fn column_run(pixmap: &Pixmap, x: u32, color: Color) -> u32 {
    longest_run((0..pixmap.height()).map(|y| sample(pixmap, x, y) == Some(color)))
}

fn longest_run(hits: impl Iterator<Item = bool>) -> u32 {
    let (mut best, mut current) = (0, 0);
    for hit in hits {
        current = if hit { current + 1 } else { 0 };
        best = best.max(current);
    }
    best
}
