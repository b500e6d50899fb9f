//! Rasterizer for composed emblems.
//!
//! [`render`] turns a motif and a pixel size into an RGBA `Pixmap`;
//! [`encode_png`] serializes it. Both are pure: the same input always
//! yields the same pixels and the same bytes.

pub mod inspect;
pub mod paint;

use emblem_core::{Emblem, Motif};
use thiserror::Error;
use tiny_skia::Pixmap;

pub use paint::paint_emblem;
pub use tiny_skia;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("icon size must be positive")]
    ZeroSize,
    #[error("icon size {0} is too large to allocate")]
    TooLarge(u32),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Render `motif` onto a fresh, fully transparent `size` × `size` canvas.
pub fn render(motif: Motif, size: u32) -> Result<Pixmap, RenderError> {
    render_emblem(&motif.compose(size))
}

/// Rasterize an already composed emblem.
pub fn render_emblem(emblem: &Emblem) -> Result<Pixmap, RenderError> {
    if emblem.size == 0 {
        return Err(RenderError::ZeroSize);
    }
    let mut pixmap = Pixmap::new(emblem.size, emblem.size).ok_or(RenderError::TooLarge(emblem.size))?;
    paint_emblem(&mut pixmap, emblem);
    log::debug!("rendered {}x{} emblem ({} ops)", emblem.size, emblem.size, emblem.ops.len());
    Ok(pixmap)
}

/// Encode as 8-bit RGBA PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
}
