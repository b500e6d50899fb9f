//! Generation settings.
//!
//! Everything is fixed at build time. The binaries only pick the motif
//! and let the output land next to the executable.

use emblem_core::{ICON_SIZES, Motif};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Which emblem to draw. Default: **anchor**.
    pub motif: Motif,

    /// Icon edge lengths, generated in this order. Default: the eight
    /// standard app-icon sizes, 72 through 512.
    pub sizes: Vec<u32>,

    /// Directory the PNG files are written into. Default: the current
    /// working directory.
    pub out_dir: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            motif: Motif::default(),
            sizes: ICON_SIZES.to_vec(),
            out_dir: PathBuf::from("."),
        }
    }
}

impl GenerateConfig {
    /// Standard sizes for `motif`, written into the directory that holds
    /// the running executable.
    pub fn beside_executable(motif: Motif) -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let out_dir = exe
            .parent()
            .map(PathBuf::from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))?;
        Ok(Self {
            motif,
            out_dir,
            ..Self::default()
        })
    }

    /// `icon-{size}.png`
    pub fn file_name(size: u32) -> String {
        format!("icon-{size}.png")
    }

    pub fn output_path(&self, size: u32) -> PathBuf {
        self.out_dir.join(Self::file_name(size))
    }
}
