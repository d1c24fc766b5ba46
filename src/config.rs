//! Inliner configuration

use std::path::PathBuf;

/// Default location of the logo image, relative to the project root
pub const DEFAULT_SOURCE_PATH: &str = "public/allumoves-logo.png";

/// Default location of the generated module, relative to the project root
pub const DEFAULT_DESTINATION_PATH: &str = "src/assets/reportAssets.ts";

/// Source and destination of a single inlining run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinerConfig {
    /// Binary asset to encode
    pub source_path: PathBuf,
    /// Module file to (over)write
    pub destination_path: PathBuf,
}

impl InlinerConfig {
    pub fn new(source_path: impl Into<PathBuf>, destination_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
        }
    }

    /// Apply optional overrides on top of the defaults
    pub fn with_overrides(source: Option<PathBuf>, destination: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            source_path: source.unwrap_or(defaults.source_path),
            destination_path: destination.unwrap_or(defaults.destination_path),
        }
    }
}

impl Default for InlinerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH, DEFAULT_DESTINATION_PATH)
    }
}
