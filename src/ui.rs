//! Console reporting
//!
//! The result of a run is always a single line on stdout. Verbose details
//! go to stderr so that line stays the only stdout output.

use console::Style;

use crate::config::InlinerConfig;
use crate::error::InlinerError;
use crate::inliner::InlineOutcome;

/// Line printed after a successful run
pub fn success_line(outcome: &InlineOutcome) -> String {
    format!(
        "Successfully updated {} with base64 logo.",
        outcome.destination_path.display()
    )
}

/// Line printed when a run fails
pub fn failure_line(err: &InlinerError) -> String {
    format!("Error: {err}")
}

pub fn report_success(outcome: &InlineOutcome) {
    println!("{}", success_line(outcome));
}

pub fn report_failure(err: &InlinerError) {
    println!("{}", failure_line(err));
}

/// Prints extra run details to stderr when enabled
#[derive(Debug, Clone, Copy)]
pub struct Verbose {
    enabled: bool,
}

impl Verbose {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn config(&self, config: &InlinerConfig) {
        if !self.enabled {
            return;
        }
        let label = Style::new().for_stderr().bold();
        eprintln!(
            "{} {}",
            label.apply_to("Source:"),
            config.source_path.display()
        );
        eprintln!(
            "{} {}",
            label.apply_to("Destination:"),
            config.destination_path.display()
        );
    }

    pub fn outcome(&self, outcome: &InlineOutcome) {
        if !self.enabled {
            return;
        }
        eprintln!(
            "{} {} bytes encoded as {} base64 characters ({}), {} bytes written",
            Style::new().for_stderr().bold().green().apply_to("Done:"),
            outcome.source_bytes,
            outcome.payload_chars,
            outcome.mime,
            outcome.module_bytes
        );
    }

    pub fn failure(&self, err: &InlinerError) {
        if !self.enabled {
            return;
        }
        if let Some(help) = miette::Diagnostic::help(err) {
            eprintln!(
                "{} {}",
                Style::new().for_stderr().bold().yellow().apply_to("Hint:"),
                help
            );
        }
    }
}
