//! # TArchiver Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! TArchiver touches the filesystem in a few places before handing off to an
//! external tool:
//!
//! - checking that an archive exists before `extract` / `list`
//! - refusing a redirect target that is the archive being read
//! - resolving relative paths against the configured working directory
//!
//! All of them live in the `paths` submodule and are re-exported here.
//!

pub mod paths;

pub use paths::{anchor, same_file, validate_archive_exists};
