//! # TArchiver List Command
//!
//! File: cli/src/commands/list.rs
//!
//! Implements `tarchiver list <archive>`. The listing itself is printed by
//! the external tool (`unzip -l`, `tar -tvf`, `7z l`, `unrar l`). XZ and
//! plain GZIP files carry no file table, so they are reported as unsupported.
//!
use super::dispatch::{Dispatcher, Outcome};
use crate::common::archive::{Action, Invocation};
use crate::common::process::ProcessRunner;
use crate::common::ui::Reporter;
use clap::Parser;
use tracing::info;

/// Arguments for `tarchiver list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Archive whose contents should be listed.
    archive: String,

    /// Password for encrypted archives (7z and rar only).
    #[arg(short, long)]
    password: Option<String>,
}

impl From<ListArgs> for Invocation {
    fn from(args: ListArgs) -> Self {
        Invocation {
            action: Action::List,
            archive: args.archive,
            operands: Vec::new(),
            password: args.password,
        }
    }
}

/// Handler for `tarchiver list`.
pub async fn handle_list<R: ProcessRunner, P: Reporter>(
    args: ListArgs,
    dispatcher: &mut Dispatcher<'_, R, P>,
) -> Outcome {
    info!("Handling list command for '{}'", args.archive);
    dispatcher.dispatch(&args.into()).await
}
