//! Asset inliner - embeds the report logo into a generated TypeScript module
//!
//! Reads a PNG, base64-encodes it and writes
//! `export const REPORT_ASSETS = { logo: 'data:image/png;base64,...' };`
//! to the destination module, replacing whatever was there.

use clap::Parser;

mod cli;
mod config;
mod data_uri;
mod error;
mod inliner;
mod module;
mod ui;

use cli::Cli;
use config::InlinerConfig;

fn main() {
    let cli = Cli::parse();
    let config = InlinerConfig::with_overrides(cli.source, cli.output);
    let verbose = ui::Verbose::new(cli.verbose);

    verbose.config(&config);

    match inliner::run(&config) {
        Ok(outcome) => {
            ui::report_success(&outcome);
            verbose.outcome(&outcome);
        }
        Err(e) => {
            ui::report_failure(&e);
            verbose.failure(&e);
            // Failures exit 0 unless --strict
            if cli.strict {
                std::process::exit(1);
            }
        }
    }
}
