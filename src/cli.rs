//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// Asset inliner - embed the report logo as a base64 data URI
///
/// Without arguments, reads `public/allumoves-logo.png` and rewrites
/// `src/assets/reportAssets.ts`.
#[derive(Parser, Debug)]
#[command(
    name = "asset-inliner",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inline the report logo into a TypeScript module as a base64 data URI",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  asset-inliner\n    \
                  asset-inliner --source assets/logo.png --output src/assets/reportAssets.ts\n    \
                  asset-inliner --strict"
)]
pub struct Cli {
    /// Image to inline (defaults to public/allumoves-logo.png)
    #[arg(long, short = 's', value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Module to write (defaults to src/assets/reportAssets.ts)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with a non-zero status when the run fails
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
