//! # TArchiver Create Command
//!
//! File: cli/src/commands/create.rs
//!
//! ## Overview
//!
//! Implements `tarchiver create <archive> <files...> [-p PASSWORD]`. The
//! archive's suffix decides which tool builds it (`zip`, `tar`, `gzip`, `7z`
//! or `rar`). XZ archives cannot be created.
//!
//! ```bash
//! tarchiver create photos.zip ~/Pictures/2024
//! tarchiver create backup.tar.gz src Cargo.toml
//! tarchiver create vault.7z secrets.txt -p hunter2
//! ```
//!
//! For `.gz` only the first file is compressed, next to the original
//! (`gzip -k`); the archive name itself is not passed to `gzip`.
//!
use super::dispatch::{Dispatcher, Outcome};
use crate::common::archive::{Action, Invocation};
use crate::common::process::ProcessRunner;
use crate::common::ui::Reporter;
use clap::Parser;
use tracing::info;

/// Arguments for `tarchiver create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Archive to create; its suffix selects the tool.
    archive: String,

    /// Files and directories to add to the archive.
    files: Vec<String>,

    /// Password for encrypted archives (7z and rar only).
    #[arg(short, long)]
    password: Option<String>,
}

impl From<CreateArgs> for Invocation {
    fn from(args: CreateArgs) -> Self {
        Invocation {
            action: Action::Create,
            archive: args.archive,
            operands: args.files,
            password: args.password,
        }
    }
}

/// Handler for `tarchiver create`.
pub async fn handle_create<R: ProcessRunner, P: Reporter>(
    args: CreateArgs,
    dispatcher: &mut Dispatcher<'_, R, P>,
) -> Outcome {
    info!("Handling create command for '{}'", args.archive);
    dispatcher.dispatch(&args.into()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_archive_files_and_password() {
        let args = CreateArgs::try_parse_from([
            "create", "vault.7z", "a.txt", "docs", "--password", "SECRET",
        ])
        .unwrap();
        let invocation = Invocation::from(args);
        assert_eq!(invocation.action, Action::Create);
        assert_eq!(invocation.archive, "vault.7z");
        assert_eq!(invocation.operands, vec!["a.txt", "docs"]);
        assert_eq!(invocation.password.as_deref(), Some("SECRET"));
    }

    #[test]
    fn test_short_password_flag_may_precede_files() {
        let args =
            CreateArgs::try_parse_from(["create", "-p", "pw", "vault.rar", "a.txt"]).unwrap();
        assert_eq!(args.password.as_deref(), Some("pw"));
        assert_eq!(args.files, vec!["a.txt"]);
    }

    #[test]
    fn test_files_are_optional_at_parse_time() {
        // The missing-files message comes from the dispatcher, not clap.
        let args = CreateArgs::try_parse_from(["create", "out.zip"]).unwrap();
        assert!(args.files.is_empty());
        assert!(args.password.is_none());
    }

    #[test]
    fn test_archive_is_required() {
        assert!(CreateArgs::try_parse_from(["create"]).is_err());
    }
}
