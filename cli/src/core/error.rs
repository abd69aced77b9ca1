//! # TArchiver Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout TArchiver. Two layers
//! are used, mirroring how the rest of the crate is written:
//!
//! - `TarchiverError`: a `thiserror` enum for the failures a user can
//!   actually hit (missing archive, tool not installed, tool exited non-zero,
//!   bad configuration).
//! - `Result<T>`: an alias for `anyhow::Result<T>`, used for application
//!   plumbing where adding `.context(...)` matters more than matching.
//!
//! The `Display` text of the user-facing variants is exactly what ends up in
//! the red status panel, so changes here are visible on the terminal.
//!
//! ## Examples
//!
//! ```rust
//! if !path.exists() {
//!     return Err(TarchiverError::MissingPath { path: path.display().to_string() });
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::io;
use thiserror::Error;

/// Custom error type for the TArchiver application.
#[derive(Error, Debug)]
pub enum TarchiverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error: {path} does not exist")]
    MissingPath { path: String },

    #[error("Please provide files to create an archive")]
    MissingFiles,

    #[error("Please provide a destination to extract the archive into")]
    MissingDestination,

    #[error("Error: Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: Command '{cmd}' returned non-zero exit status {code}.{}", detail_suffix(.detail))]
    NonZeroExit {
        cmd: String,
        code: i32,
        detail: Option<String>,
    },

    #[error("Error: Command '{cmd}' was terminated by a signal.{}", detail_suffix(.detail))]
    Signalled { cmd: String, detail: Option<String> },

    #[error("Error: Command '{cmd}' timed out after {secs}s")]
    TimedOut { cmd: String, secs: u64 },

    #[error("Error: Destination '{path}' is the archive itself")]
    DestinationIsArchive { path: String },

    #[error("Error: Cannot write to destination '{path}': {source}")]
    Destination {
        path: String,
        #[source]
        source: io::Error,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(line) => format!(" {}", line),
        None => String::new(),
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = TarchiverError::Config("timeout_secs must be positive".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: timeout_secs must be positive"
        );

        let missing = TarchiverError::MissingPath {
            path: "backup.zip".into(),
        };
        assert_eq!(missing.to_string(), "Error: backup.zip does not exist");

        assert_eq!(
            TarchiverError::MissingFiles.to_string(),
            "Please provide files to create an archive"
        );

        let onto_archive = TarchiverError::DestinationIsArchive {
            path: "n.txt.gz".into(),
        };
        assert_eq!(
            onto_archive.to_string(),
            "Error: Destination 'n.txt.gz' is the archive itself"
        );
    }

    #[test]
    fn test_non_zero_exit_includes_detail_when_present() {
        let bare = TarchiverError::NonZeroExit {
            cmd: "tar -tvf a.tar".into(),
            code: 2,
            detail: None,
        };
        assert_eq!(
            bare.to_string(),
            "Error: Command 'tar -tvf a.tar' returned non-zero exit status 2."
        );

        let detailed = TarchiverError::NonZeroExit {
            cmd: "tar -tvf a.tar".into(),
            code: 2,
            detail: Some("tar: a.tar: Cannot open".into()),
        };
        assert!(detailed.to_string().ends_with("status 2. tar: a.tar: Cannot open"));
    }

    #[test]
    fn test_spawn_error_names_program() {
        let err = TarchiverError::Spawn {
            program: "unrar".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert!(err.to_string().contains("Failed to run 'unrar'"));
        assert!(err.to_string().contains("No such file or directory"));
    }
}
