pub mod color;
pub mod model;
pub mod motif;
pub mod scale;

pub use color::{Color, Ink, Palette};
pub use model::{DrawOp, Emblem, Primitive, Wave};
pub use motif::Motif;
pub use scale::{ICON_SIZES, REFERENCE_SIZE, Scale};

// Re-export kurbo geometry so downstream crates agree on one version.
pub use kurbo;
