//! # Path Helpers (`common::fs::paths`)
//!
//! File: cli/src/common/fs/paths.rs
//!
use crate::core::error::TarchiverError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves `path` against `base` when `path` is relative and a base is set.
///
/// The external tools run inside `base`, so anything TArchiver checks or
/// creates itself must be looked up there as well.
pub fn anchor(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

/// Confirms the archive exists before an extract or list operation.
///
/// # Errors
///
/// Returns `TarchiverError::MissingPath` (carrying the path exactly as the
/// user typed it) when nothing exists at the resolved location.
pub fn validate_archive_exists(base: Option<&Path>, archive: &str) -> Result<(), TarchiverError> {
    let resolved = anchor(base, Path::new(archive));
    if resolved.exists() {
        debug!("Archive found at {}", resolved.display());
        Ok(())
    } else {
        debug!("Archive missing at {}", resolved.display());
        Err(TarchiverError::MissingPath {
            path: archive.to_string(),
        })
    }
}

/// Whether `a` and `b` name the same file once resolved against `base`.
///
/// Existing paths are compared after canonicalisation, so `./a.gz`, `a.gz`
/// and symlinks to it all match. A path that does not exist cannot be an
/// existing file, so the lexical comparison is enough there.
pub fn same_file(base: Option<&Path>, a: &Path, b: &Path) -> bool {
    let (a, b) = (anchor(base, a), anchor(base, b));
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
