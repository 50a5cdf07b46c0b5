//! Resource embedding pipeline
//!
//! Reads the source file's raw bytes and writes the generated C
//! declaration to the destination path. The read is byte-oriented:
//! multi-byte encoded input is embedded byte-for-byte, never decoded.

use crate::templates;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Configuration for a single embedding run
pub struct EmbedConfig {
    /// Resource file whose bytes are embedded
    pub source: PathBuf,
    /// Array name used verbatim in the generated declaration
    pub symbol: String,
    /// Output path for the generated fragment
    pub dest: PathBuf,
}

/// Embed the source file as a C char array declaration at the destination
///
/// The destination is fully overwritten when it already exists. The write
/// is only reached after a successful read, so an unreadable source never
/// produces a destination file.
pub fn embed_file(config: EmbedConfig) -> Result<()> {
    let data = fs::read(&config.source)
        .with_context(|| format!("Failed to read resource: {:?}", config.source))?;

    tracing::info!("Embedding {} bytes as '{}'", data.len(), config.symbol);

    let fragment = templates::c_char_array(&config.symbol, &data);

    fs::write(&config.dest, fragment)
        .with_context(|| format!("Failed to write fragment: {:?}", config.dest))?;

    tracing::debug!("Generated fragment at: {:?}", config.dest);

    Ok(())
}
