//! Markpad - A terminal markdown editor with live HTML preview.
//!
//! # Usage
//!
//! ```bash
//! markpad
//! markpad README.md
//! markpad --export README.md > readme.html
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use markpad::app::App;

/// A terminal markdown editor with live HTML preview
#[derive(Parser, Debug)]
#[command(name = "markpad", version, about, long_about = None)]
struct Cli {
    /// Markdown file to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Render FILE to HTML on stdout and exit
    #[arg(long)]
    export: bool,

    /// Start with the preview pane hidden
    #[arg(long)]
    no_preview: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.export {
        let Some(file) = &cli.file else {
            anyhow::bail!("--export requires a FILE argument");
        };
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        print!("{}", markpad::render::to_html(&text));
        return Ok(());
    }

    if let Some(file) = &cli.file
        && !file.exists()
    {
        anyhow::bail!("File not found: {}", file.display());
    }

    let mut app = App::new()
        .with_file(cli.file)
        .with_preview_visible(!cli.no_preview);

    app.run().context("Application error")
}
