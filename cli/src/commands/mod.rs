//! # TArchiver Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per subcommand plus the dispatcher they share:
//!
//! - `create`: `tarchiver create <archive> <files...> [-p PW]`
//! - `extract`: `tarchiver extract <archive> <destination> [-p PW]`
//! - `list`: `tarchiver list <archive>`
//! - `dispatch`: validation, format resolution, execution and reporting
//!
//! Each subcommand module defines its `clap` argument struct, converts it into
//! an `Invocation`, and hands that to the `Dispatcher` built in `main.rs`.
//!

/// `tarchiver create`.
pub mod create;
/// The pipeline shared by all subcommands.
pub mod dispatch;
/// `tarchiver extract`.
pub mod extract;
/// `tarchiver list`.
pub mod list;
