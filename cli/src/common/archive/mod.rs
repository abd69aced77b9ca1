//! # TArchiver Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! TArchiver never reads or writes archive bytes itself. This module holds the
//! two pieces of knowledge needed to delegate that work:
//!
//! - **`format`**: which format an archive path refers to, decided by suffix.
//! - **`command`**: which external program and argument vector performs a
//!   given action on that format, plus the messages reported afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{build_command, ArchiveFormat, Operation};
//!
//! let format = ArchiveFormat::resolve("backup.tar.gz").unwrap();
//! let cmd = build_command(Operation::List, format, "backup.tar.gz", None)?;
//! assert_eq!(cmd.command_line(), "tar -tvf backup.tar.gz");
//! ```
//!

pub mod command;
pub mod format;

pub use command::{
    build_command, success_message, Action, ExternalCommand, Invocation, Operation, Unsupported,
};
pub use format::ArchiveFormat;
