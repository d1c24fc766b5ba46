//! Common test utilities for asset-inliner integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Default image path, relative to the project root
pub const LOGO_PATH: &str = "public/allumoves-logo.png";

/// Default module path, relative to the project root
pub const MODULE_PATH: &str = "src/assets/reportAssets.ts";

/// A throwaway project directory the binary runs in
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with `public/` and `src/assets/` present
    pub fn with_layout() -> Self {
        let project = Self::new();
        project.create_dir("public");
        project.create_dir("src/assets");
        project
    }

    /// Create a directory (and parents) in the project
    pub fn create_dir(&self, path: &str) {
        std::fs::create_dir_all(self.path.join(path)).expect("Failed to create directory");
    }

    /// Write raw bytes to a file in the project
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command running the real binary from the project root
    pub fn cmd(&self) -> Command {
        let mut cmd = inliner_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn inliner_cmd() -> Command {
    Command::cargo_bin("asset-inliner").expect("Failed to locate asset-inliner binary")
}
