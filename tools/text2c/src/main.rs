//! text2c - Text Resource Embedding Tool
//!
//! Generates a C source fragment declaring a null-terminated `const char`
//! array holding the bytes of a text resource file.
//!
//! # Usage
//!
//! ```bash
//! # Embed widget_api.js under the symbol kSource_widget_api
//! text2c widget_api.js kSource_widget_api widget_api_js.h
//! ```
//!
//! The consuming translation unit declares `extern const char <symbol>[];`
//! and compiles the generated fragment alongside it.

mod embedder;
mod templates;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// text2c - Embed a text resource as a C char array
#[derive(Parser)]
#[command(name = "text2c")]
#[command(author, version)]
#[command(about = "Generate a C char array declaration from a text resource file")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the resource file to embed
    source: PathBuf,

    /// Array name used in the generated declaration (emitted verbatim)
    symbol: String,

    /// Path of the generated fragment (overwritten if present)
    dest: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let config = embedder::EmbedConfig {
        source: args.source,
        symbol: args.symbol,
        dest: args.dest,
    };

    embedder::embed_file(config).context("Failed to generate embedded resource")?;

    Ok(())
}
