//! 8-bit RGBA colours and the per-motif palettes.

/// RGBA color, straight (non-premultiplied) alpha, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────

/// Which palette slot a primitive is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Background,
    Foreground,
    Accent,
}

/// The fixed colours of one motif. Shared by reference across a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
}

impl Palette {
    /// Marina teal `#1A5F7A` with white line work.
    pub const ANCHOR: Self = Self {
        background: Color::rgb(26, 95, 122),
        foreground: Color::WHITE,
        accent: Color::WHITE,
    };

    /// Deep blue with white line work and a yellow sun.
    pub const BOAT: Self = Self {
        background: Color::rgb(16, 78, 139),
        foreground: Color::WHITE,
        accent: Color::rgb(244, 185, 66),
    };

    pub const fn resolve(&self, ink: Ink) -> Color {
        match ink {
            Ink::Background => self.background,
            Ink::Foreground => self.foreground,
            Ink::Accent => self.accent,
        }
    }
}
