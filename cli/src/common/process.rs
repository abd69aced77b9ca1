//! # TArchiver Process Execution (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs one `ExternalCommand` to completion and classifies how it ended.
//! Execution sits behind the `ProcessRunner` trait so the dispatcher can be
//! exercised without spawning anything; `TokioRunner` is the real
//! implementation used by the binary.
//!
//! ## Stream handling
//!
//! - **stdin**: inherited, so tools that prompt (e.g. `unzip` asking before
//!   overwriting) still work.
//! - **stdout**: inherited, so listings appear on the terminal. When the
//!   command carries a `stdout_target`, stdout goes to a staging file next to
//!   the target, which replaces the target only after the tool exits 0.
//! - **stderr**: piped and relayed to our own stderr as it arrives (prompts
//!   included); its last non-empty line is attached to the failure diagnostic.
//!
//! ## Failure classes
//!
//! | how it ended | error |
//! |---|---|
//! | executable missing / not launchable | `TarchiverError::Spawn` |
//! | non-zero exit status | `TarchiverError::NonZeroExit` |
//! | killed by a signal | `TarchiverError::Signalled` |
//! | exceeded the configured timeout | `TarchiverError::TimedOut` |
//! | stdout target not writable | `TarchiverError::Destination` |
//!
use crate::common::archive::ExternalCommand;
use crate::common::fs::anchor;
use crate::core::error::TarchiverError;
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};
use tempfile::NamedTempFile;
use tokio::io::AsyncReadExt;
use tokio::process::{ChildStderr, Command};
use tracing::{debug, info, warn};

/// Something that can execute an external command.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Runs `command` once and waits for it. `Ok(())` means exit status 0.
    async fn run(&self, command: &ExternalCommand) -> Result<(), TarchiverError>;
}

/// Runs commands as real child processes on the tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct TokioRunner {
    timeout: Option<Duration>,
    working_dir: Option<PathBuf>,
}

impl TokioRunner {
    pub fn new(timeout: Option<Duration>, working_dir: Option<PathBuf>) -> Self {
        Self {
            timeout,
            working_dir,
        }
    }
}

impl ProcessRunner for TokioRunner {
    async fn run(&self, command: &ExternalCommand) -> Result<(), TarchiverError> {
        let cmd_line = command.command_line();
        info!("Running: {}", cmd_line);

        let mut child_cmd = Command::new(&command.program);
        child_cmd
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            child_cmd.current_dir(dir);
        }

        let Some(target) = command.stdout_target.as_deref() else {
            child_cmd.stdout(Stdio::inherit());
            return wait_for(child_cmd, command, &cmd_line, self.timeout).await;
        };

        // The target is only replaced once the tool has succeeded, so a failed
        // run leaves whatever was there before untouched.
        let target = anchor(self.working_dir.as_deref(), target);
        let destination_error = |source| TarchiverError::Destination {
            path: target.display().to_string(),
            source,
        };
        let staging = NamedTempFile::new_in(staging_dir(&target)).map_err(destination_error)?;
        let handle = staging.reopen().map_err(destination_error)?;
        debug!(
            "Redirecting stdout of '{}' to {} via {}",
            command.program,
            target.display(),
            staging.path().display()
        );
        child_cmd.stdout(Stdio::from(handle));

        wait_for(child_cmd, command, &cmd_line, self.timeout).await?;
        staging
            .persist(&target)
            .map_err(|e| destination_error(e.error))?;
        Ok(())
    }
}

/// Directory the staging file is created in: next to the target, so the
/// final rename never crosses filesystems.
fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

async fn wait_for(
    mut child_cmd: Command,
    command: &ExternalCommand,
    cmd_line: &str,
    timeout: Option<Duration>,
) -> Result<(), TarchiverError> {
    let spawn_error = |source| TarchiverError::Spawn {
        program: command.program.clone(),
        source,
    };

    let mut child = child_cmd.spawn().map_err(spawn_error)?;
    let stderr = child.stderr.take();
    let mut sink = std::io::stderr();
    let finished = async {
        tokio::join!(child.wait(), relay_stderr(stderr, &mut sink, &command.program))
    };
    // Dropping the wait future on timeout drops the child, which kills it.
    let (status, tail) = match timeout {
        Some(limit) => tokio::time::timeout(limit, finished).await.map_err(|_| {
            TarchiverError::TimedOut {
                cmd: cmd_line.to_string(),
                secs: limit.as_secs(),
            }
        })?,
        None => finished.await,
    };
    let status = status.map_err(spawn_error)?;

    debug!("'{}' finished with {}", cmd_line, status);
    if status.success() {
        return Ok(());
    }
    let detail = last_diagnostic_line(&tail);
    match status.code() {
        Some(code) => Err(TarchiverError::NonZeroExit {
            cmd: cmd_line.to_string(),
            code,
            detail,
        }),
        None => Err(TarchiverError::Signalled {
            cmd: cmd_line.to_string(),
            detail,
        }),
    }
}

/// Bytes of stderr kept around for the failure diagnostic.
const STDERR_TAIL_BYTES: usize = 4096;

/// Copies the child's stderr to `sink` chunk by chunk as it arrives, so
/// prompts without a trailing newline show up while the tool waits on stdin.
/// Returns the tail of what was seen.
async fn relay_stderr<W: Write>(
    stderr: Option<ChildStderr>,
    sink: &mut W,
    program: &str,
) -> Vec<u8> {
    let mut tail = Vec::new();
    let Some(mut stderr) = stderr else {
        return tail;
    };
    let mut chunk = [0u8; 1024];
    loop {
        let n = match stderr.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                warn!("Could not read stderr of '{}': {}", program, e);
                break;
            }
        };
        let relayed = sink.write_all(&chunk[..n]);
        if let Err(e) = relayed.and_then(|()| sink.flush()) {
            warn!("Could not relay stderr of '{}': {}", program, e);
        }
        tail.extend_from_slice(&chunk[..n]);
        if tail.len() > STDERR_TAIL_BYTES {
            tail.drain(..tail.len() - STDERR_TAIL_BYTES);
        }
    }
    tail
}

/// Last non-empty line of the captured stderr, if any.
fn last_diagnostic_line(stderr: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
