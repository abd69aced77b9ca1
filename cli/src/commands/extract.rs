//! # TArchiver Extract Command
//!
//! File: cli/src/commands/extract.rs
//!
//! ## Overview
//!
//! Implements `tarchiver extract <archive> <destination> [-p PASSWORD]`.
//!
//! The archive must exist; otherwise an error is reported and no tool runs.
//! For most formats `<destination>` is a directory. For plain `.gz` files it
//! is the output *file*: `gunzip -c` streams the decompressed bytes there.
//! `.xz` archives are decompressed in place by `xz -d` and the destination is
//! not used.
//!
//! ```bash
//! tarchiver extract photos.zip ./photos
//! tarchiver extract notes.txt.gz notes.txt
//! tarchiver extract vault.rar ./vault -p hunter2
//! ```
//!
use super::dispatch::{Dispatcher, Outcome};
use crate::common::archive::{Action, Invocation};
use crate::common::process::ProcessRunner;
use crate::common::ui::Reporter;
use clap::Parser;
use tracing::info;

/// Arguments for `tarchiver extract`.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Archive to extract.
    archive: String,

    /// Where to extract to (a directory, or the output file for .gz).
    destination: Vec<String>,

    /// Password for encrypted archives (7z and rar only).
    #[arg(short, long)]
    password: Option<String>,
}

impl From<ExtractArgs> for Invocation {
    fn from(args: ExtractArgs) -> Self {
        Invocation {
            action: Action::Extract,
            archive: args.archive,
            operands: args.destination,
            password: args.password,
        }
    }
}

/// Handler for `tarchiver extract`.
pub async fn handle_extract<R: ProcessRunner, P: Reporter>(
    args: ExtractArgs,
    dispatcher: &mut Dispatcher<'_, R, P>,
) -> Outcome {
    info!("Handling extract command for '{}'", args.archive);
    dispatcher.dispatch(&args.into()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_destination_and_password() {
        let args =
            ExtractArgs::try_parse_from(["extract", "vault.7z", "out", "-p", "SECRET"]).unwrap();
        let invocation = Invocation::from(args);
        assert_eq!(invocation.action, Action::Extract);
        assert_eq!(invocation.archive, "vault.7z");
        assert_eq!(invocation.operands, vec!["out"]);
        assert_eq!(invocation.password.as_deref(), Some("SECRET"));
    }

    #[test]
    fn test_destination_is_optional_at_parse_time() {
        let args = ExtractArgs::try_parse_from(["extract", "a.zip"]).unwrap();
        assert!(args.destination.is_empty());
    }
}
