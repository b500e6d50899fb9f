//! Icon set generator.
//!
//! Renders one motif at every configured size and writes each result as
//! `icon-{size}.png`. Sizes are processed in order; the first failure
//! stops the run and files already written are left in place.

pub mod config;

pub use config::GenerateConfig;

use emblem_render::{RenderError, encode_png, render};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot determine output directory")]
    OutputDir(#[source] io::Error),
    #[error("failed to render {size}px icon")]
    Render {
        size: u32,
        #[source]
        source: RenderError,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render, encode and write every size in `config`, overwriting existing
/// files. Prints one status line per file and a final completion line.
///
/// Returns the written paths in generation order.
pub fn generate(config: &GenerateConfig) -> Result<Vec<PathBuf>, GenerateError> {
    log::info!(
        "generating {} icons ({} sizes) into {}",
        config.motif,
        config.sizes.len(),
        config.out_dir.display()
    );

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = write_icon(config, size)?;
        println!("Gerado: {}", GenerateConfig::file_name(size));
        written.push(path);
    }

    println!("Todos os icones foram gerados!");
    Ok(written)
}

fn write_icon(config: &GenerateConfig, size: u32) -> Result<PathBuf, GenerateError> {
    let pixmap = render(config.motif, size).map_err(|source| GenerateError::Render { size, source })?;
    let bytes = encode_png(&pixmap).map_err(|source| GenerateError::Render { size, source })?;

    let path = config.output_path(size);
    std::fs::write(&path, &bytes).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Entry point shared by the binaries: log setup, generation, exit code.
pub fn run(motif: emblem_core::Motif) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = GenerateConfig::beside_executable(motif)
        .map_err(GenerateError::OutputDir)
        .and_then(|config| generate(&config));

    if let Err(e) = result {
        eprintln!("error: {}", report(&e));
        std::process::exit(1);
    }
}

/// `err` followed by each of its causes, joined with `: `.
pub fn report(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(c) = cause {
        out.push_str(": ");
        out.push_str(&c.to_string());
        cause = c.source();
    }
    out
}
