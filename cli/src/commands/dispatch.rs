//! # TArchiver Dispatcher
//!
//! File: cli/src/commands/dispatch.rs
//!
//! ## Overview
//!
//! The single pipeline shared by `create`, `extract` and `list`:
//!
//! 1. Check that the operands the action needs were given.
//! 2. For `extract` / `list`, check that the archive exists.
//! 3. Resolve the archive format from its suffix.
//! 4. Build the external command for that format, refusing to redirect
//!    output onto the archive itself.
//! 5. Run it once and wait for it.
//! 6. Report the result through the injected `Reporter`.
//!
//! Steps 1-4 can stop the run early; when they do, no process is spawned.
//! Whatever happens, exactly one message is reported and an `Outcome` is
//! returned for `main.rs` to turn into an exit code.
//!
use crate::common::archive::{
    build_command, success_message, Action, ArchiveFormat, Invocation, Operation, Unsupported,
};
use crate::common::fs::{same_file, validate_archive_exists};
use crate::common::process::ProcessRunner;
use crate::common::ui::Reporter;
use crate::core::error::TarchiverError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How a run ended, as far as the exit code is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The external tool exited with status 0.
    Succeeded,
    /// Nothing was run because the format/action pair is not supported.
    /// Informational only.
    Unsupported,
    /// Validation failed or the external tool failed.
    Failed,
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// With `exit_zero_on_failure` every outcome exits 0, which is how the
    /// tool behaved before failures were propagated.
    pub fn exit_code(self, exit_zero_on_failure: bool) -> i32 {
        match self {
            Outcome::Succeeded | Outcome::Unsupported => 0,
            Outcome::Failed if exit_zero_on_failure => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Reasons the pipeline stops before reporting success.
#[derive(Debug)]
enum Halt {
    Unsupported(Unsupported),
    Failed(TarchiverError),
}

impl From<Unsupported> for Halt {
    fn from(reason: Unsupported) -> Self {
        Halt::Unsupported(reason)
    }
}

impl From<TarchiverError> for Halt {
    fn from(err: TarchiverError) -> Self {
        Halt::Failed(err)
    }
}

/// Runs invocations with one runner and reports through one reporter.
pub struct Dispatcher<'a, R, P> {
    runner: &'a R,
    reporter: &'a mut P,
    working_dir: Option<PathBuf>,
}

impl<'a, R: ProcessRunner, P: Reporter> Dispatcher<'a, R, P> {
    pub fn new(runner: &'a R, reporter: &'a mut P, working_dir: Option<PathBuf>) -> Self {
        Self {
            runner,
            reporter,
            working_dir,
        }
    }

    /// Executes `invocation` end to end and reports the result.
    pub async fn dispatch(&mut self, invocation: &Invocation) -> Outcome {
        debug!("Dispatching {:?}", invocation);
        match self.execute(invocation).await {
            Ok(message) => {
                self.reporter.success(&message);
                Outcome::Succeeded
            }
            Err(Halt::Unsupported(reason)) => {
                let message = reason.message(invocation.action, &invocation.archive);
                self.reporter.error(&message);
                Outcome::Unsupported
            }
            Err(Halt::Failed(err)) => {
                debug!("Invocation failed: {:?}", err);
                self.reporter.error(&err.to_string());
                Outcome::Failed
            }
        }
    }

    async fn execute(&self, invocation: &Invocation) -> Result<String, Halt> {
        let archive = invocation.archive.as_str();

        if invocation.action == Action::Create && invocation.operands.is_empty() {
            return Err(TarchiverError::MissingFiles.into());
        }
        if matches!(invocation.action, Action::Extract | Action::List) {
            validate_archive_exists(self.working_dir.as_deref(), archive)?;
        }

        let format = ArchiveFormat::resolve(archive).ok_or(Unsupported::Format)?;
        debug!("Resolved '{}' as {}", archive, format);

        let operation = match invocation.action {
            Action::Create => Operation::Create {
                files: &invocation.operands,
            },
            Action::Extract => {
                let (destination, extra) = invocation
                    .operands
                    .split_first()
                    .ok_or(TarchiverError::MissingDestination)?;
                if !extra.is_empty() {
                    warn!(
                        "Extracting into '{}'; ignoring {} extra argument(s).",
                        destination,
                        extra.len()
                    );
                }
                Operation::Extract {
                    destination: destination.as_str(),
                }
            }
            Action::List => Operation::List,
        };

        let command = build_command(operation, format, archive, invocation.password())?;
        if let Some(target) = &command.stdout_target {
            if same_file(self.working_dir.as_deref(), target, Path::new(archive)) {
                return Err(TarchiverError::DestinationIsArchive {
                    path: target.display().to_string(),
                }
                .into());
            }
        }
        self.runner.run(&command).await?;
        Ok(success_message(operation.action(), format, archive))
    }
}
