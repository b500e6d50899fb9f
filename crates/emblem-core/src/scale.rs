//! Reference-design scaling.
//!
//! Every motif is authored on a 512 × 512 canvas. A `Scale` maps those
//! reference lengths onto a target icon size by the linear factor
//! `size / 512`, truncating to whole pixels so axis-aligned bars stay
//! on pixel boundaries at every size.

/// Edge length of the canvas the motifs are authored on.
pub const REFERENCE_SIZE: u32 = 512;

/// The standard icon resolutions, in generation order.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Background corner radius as a fraction of the icon size.
pub const CORNER_RADIUS_RATIO: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    size: u32,
    factor: f64,
}

impl Scale {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            factor: size as f64 / REFERENCE_SIZE as f64,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Horizontal centre line, `size / 2` rounded down.
    pub fn cx(&self) -> f64 {
        (self.size / 2) as f64
    }

    /// Map a reference-design length to whole target pixels.
    pub fn px(&self, reference: f64) -> f64 {
        (reference * self.factor).floor()
    }

    /// Corner radius of the background tile.
    pub fn corner_radius(&self) -> f64 {
        (self.size as f64 * CORNER_RADIUS_RATIO).floor()
    }
}
