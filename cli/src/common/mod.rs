//! # TArchiver Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers. The command modules
//! (`commands::`) decide *what* to do; these modules know *how*:
//!
//! - **`archive`**: Suffix → format resolution and the format → external tool
//!   argument table.
//! - **`fs`**: Archive existence checks and working-directory path resolution.
//! - **`process`**: Running the external tool and classifying its exit.
//! - **`ui`**: The `Reporter` trait and the coloured status panels.
//!

/// Archive format resolution and external command construction.
pub mod archive;
/// Filesystem checks performed before a tool is launched.
pub mod fs;
/// Execution of external tools.
pub mod process;
/// Status reporting to the terminal.
pub mod ui;
