//! The inlining run: read the asset, encode it, render the module, write it
//!
//! The destination is only replaced once the new module text has been fully
//! written to a temporary file beside it, so a failed run leaves the
//! previous module intact.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::InlinerConfig;
use crate::data_uri::DataUri;
use crate::error::{InlinerError, Result};
use crate::module;

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOutcome {
    pub destination_path: PathBuf,
    pub mime: String,
    pub source_bytes: usize,
    pub payload_chars: usize,
    pub module_bytes: usize,
}

fn source_read_error(path: &Path, e: std::io::Error) -> InlinerError {
    InlinerError::SourceReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn destination_write_error(path: &Path, e: std::io::Error) -> InlinerError {
    InlinerError::DestinationWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Run the inliner once with the given paths
pub fn run(config: &InlinerConfig) -> Result<InlineOutcome> {
    let bytes = read_source(&config.source_path)?;
    let logo = DataUri::png(&bytes);
    let content = module::render_module(&logo);
    write_destination(&config.destination_path, &content)?;

    Ok(InlineOutcome {
        destination_path: config.destination_path.clone(),
        mime: logo.mime().to_string(),
        source_bytes: bytes.len(),
        payload_chars: logo.payload().len(),
        module_bytes: content.len(),
    })
}

/// Read the whole source asset into memory
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| source_read_error(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| source_read_error(path, e))?;
    Ok(bytes)
}

/// Replace the destination with `content`
///
/// A symlinked destination is followed and its target rewritten. Parent
/// directories are not created; a missing parent is an error, as is a
/// read-only destination.
pub fn write_destination(path: &Path, content: &str) -> Result<()> {
    let target = resolve_target(path).map_err(|e| destination_write_error(path, e))?;

    if let Ok(meta) = std::fs::metadata(&target) {
        if meta.is_file() && meta.permissions().readonly() {
            return Err(destination_write_error(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "destination is read-only",
                ),
            ));
        }
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let written = match NamedTempFile::new_in(dir) {
        Ok(tmp) => replace_with_temp(tmp, &target, content),
        // read-only directory holding a writable module: overwrite in place
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied && target.is_file() => {
            overwrite_in_place(&target, content)
        }
        Err(e) => Err(e),
    };
    written.map_err(|e| destination_write_error(path, e))
}

/// Follow symlinks of an existing destination; a missing one is used as given
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

fn replace_with_temp(mut tmp: NamedTempFile, target: &Path, content: &str) -> std::io::Result<()> {
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    carry_permissions(tmp.as_file(), target)?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

fn overwrite_in_place(target: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(target)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// Give the temporary file the permissions a plain overwrite would have kept
fn carry_permissions(tmp: &File, destination: &Path) -> std::io::Result<()> {
    match std::fs::metadata(destination) {
        Ok(meta) if meta.is_file() => tmp.set_permissions(meta.permissions()),
        _ => set_default_permissions(tmp),
    }
}

#[cfg(unix)]
fn set_default_permissions(tmp: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tmp.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_tmp: &File) -> std::io::Result<()> {
    Ok(())
}
