//! # External Command Builder (`common::archive::command`)
//!
//! File: cli/src/common/archive/command.rs
//!
//! ## Overview
//!
//! Turns "what the user asked for" into "which program to run with which
//! arguments". Everything here is pure: no filesystem access, no process
//! spawning. That makes the full mapping table testable without any of the
//! external tools installed.
//!
//! | format | create | extract | list |
//! |--------|--------|---------|------|
//! | zip    | `zip -r A F...` | `unzip A -d D` | `unzip -l A` |
//! | tar    | `tar -cvf A F...` | `tar -xvf A -C D` | `tar -tvf A` |
//! | tar.gz | `tar -czvf A F...` | `tar -xzvf A -C D` | `tar -tvf A` |
//! | gz     | `gzip -k F1` | `gunzip -c A > D` | - |
//! | 7z     | `7z a [-pP] A F...` | `7z x [-pP] A -oD` | `7z l [-pP] A` |
//! | rar    | `rar a [-pP] A F...` | `unrar x [-pP] A D/` | `unrar l [-pP] A` |
//! | xz     | - | `xz -d A` | - |
//!
use super::format::ArchiveFormat;
use std::path::PathBuf;
use tracing::{debug, warn};

/// The three things TArchiver can do with an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Extract,
    List,
}

/// One parsed command-line request. Built once in the command handlers and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub archive: String,
    /// Files to add (create) or the destination (extract). Unused by list.
    pub operands: Vec<String>,
    pub password: Option<String>,
}

impl Invocation {
    /// The password, treating `""` the same as no password at all.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// An action together with the operands it needs, after they were checked
/// to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    Create { files: &'a [String] },
    Extract { destination: &'a str },
    List,
}

impl Operation<'_> {
    pub fn action(&self) -> Action {
        match self {
            Operation::Create { .. } => Action::Create,
            Operation::Extract { .. } => Action::Extract,
            Operation::List => Action::List,
        }
    }
}

/// A fully resolved invocation of an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    /// When set, the child's stdout is written to this file instead of the
    /// terminal.
    pub stdout_target: Option<PathBuf>,
}

impl ExternalCommand {
    fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            stdout_target: None,
        }
    }

    fn extend_args(mut self, extra: &[String]) -> Self {
        self.args.extend(extra.iter().cloned());
        self
    }

    fn with_stdout_target(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout_target = Some(path.into());
        self
    }

    /// Inserts `-p<password>` right after the tool's subcommand token.
    fn with_password(mut self, password: Option<&str>) -> Self {
        if let Some(password) = password {
            self.args.insert(1, format!("-p{}", password));
        }
        self
    }

    /// Human-readable command line for logs and error messages. Password
    /// options are masked.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().map(|arg| {
            if arg.starts_with("-p") && arg.len() > 2 && self.takes_password() {
                "-p***".to_string()
            } else {
                arg.clone()
            }
        }));
        let line = parts.join(" ");
        match &self.stdout_target {
            Some(target) => format!("{} > {}", line, target.display()),
            None => line,
        }
    }

    fn takes_password(&self) -> bool {
        matches!(self.program.as_str(), "7z" | "rar" | "unrar")
    }
}

/// Why no external command could be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// The suffix is unknown, or the format has no tool for this action.
    Format,
    /// XZ archives have no table of contents to list.
    XzListing,
}

impl Unsupported {
    /// The informational message shown to the user.
    pub fn message(self, action: Action, archive: &str) -> String {
        match (self, action) {
            (Unsupported::XzListing, _) => {
                format!("Listing files in XZ archive: {} is not supported.", archive)
            }
            (Unsupported::Format, Action::Create) => {
                format!("Unsupported archive type for creation: {}", archive)
            }
            (Unsupported::Format, Action::Extract) => {
                format!("Unsupported archive type for extraction: {}", archive)
            }
            (Unsupported::Format, Action::List) => {
                format!("Unsupported archive format for listing: {}", archive)
            }
        }
    }
}

/// Builds the external command for `operation` on `archive`.
///
/// The password is only applied to formats whose tools accept one; for other
/// formats it is ignored.
pub fn build_command(
    operation: Operation<'_>,
    format: ArchiveFormat,
    archive: &str,
    password: Option<&str>,
) -> Result<ExternalCommand, Unsupported> {
    let password = password.filter(|p| !p.is_empty());
    if password.is_some() && !format.supports_password() {
        debug!("Ignoring password: {} archives are not encrypted by their tool.", format);
    }

    use ArchiveFormat as F;
    let command = match (operation, format) {
        (Operation::Create { files }, F::Zip) => {
            ExternalCommand::new("zip", ["-r", archive]).extend_args(files)
        }
        (Operation::Create { files }, F::Tar) => {
            ExternalCommand::new("tar", ["-cvf", archive]).extend_args(files)
        }
        (Operation::Create { files }, F::TarGz) => {
            ExternalCommand::new("tar", ["-czvf", archive]).extend_args(files)
        }
        (Operation::Create { files }, F::Gz) => {
            let (first, rest) = files.split_first().ok_or(Unsupported::Format)?;
            if !rest.is_empty() {
                warn!(
                    "gzip compresses a single file; ignoring {} additional file(s).",
                    rest.len()
                );
            }
            ExternalCommand::new("gzip", ["-k", first.as_str()])
        }
        (Operation::Create { files }, F::SevenZip) => ExternalCommand::new("7z", ["a", archive])
            .extend_args(files)
            .with_password(password),
        (Operation::Create { files }, F::Rar) => ExternalCommand::new("rar", ["a", archive])
            .extend_args(files)
            .with_password(password),
        (Operation::Create { .. }, F::Xz) => return Err(Unsupported::Format),

        (Operation::Extract { destination }, F::Zip) => {
            ExternalCommand::new("unzip", [archive, "-d", destination])
        }
        (Operation::Extract { destination }, F::Tar) => {
            ExternalCommand::new("tar", ["-xvf", archive, "-C", destination])
        }
        (Operation::Extract { destination }, F::TarGz) => {
            ExternalCommand::new("tar", ["-xzvf", archive, "-C", destination])
        }
        (Operation::Extract { destination }, F::Gz) => {
            ExternalCommand::new("gunzip", ["-c", archive]).with_stdout_target(destination)
        }
        (Operation::Extract { destination }, F::SevenZip) => {
            let output = format!("-o{}", destination);
            ExternalCommand::new("7z", ["x", archive, output.as_str()]).with_password(password)
        }
        (Operation::Extract { destination }, F::Rar) => {
            let output = format!("{}/", destination);
            ExternalCommand::new("unrar", ["x", archive, output.as_str()]).with_password(password)
        }
        (Operation::Extract { .. }, F::Xz) => ExternalCommand::new("xz", ["-d", archive]),

        (Operation::List, F::Zip) => ExternalCommand::new("unzip", ["-l", archive]),
        (Operation::List, F::Tar | F::TarGz) => ExternalCommand::new("tar", ["-tvf", archive]),
        (Operation::List, F::SevenZip) => {
            ExternalCommand::new("7z", ["l", archive]).with_password(password)
        }
        (Operation::List, F::Rar) => {
            ExternalCommand::new("unrar", ["l", archive]).with_password(password)
        }
        (Operation::List, F::Xz) => return Err(Unsupported::XzListing),
        (Operation::List, F::Gz) => return Err(Unsupported::Format),
    };
    Ok(command)
}

/// The success message for a completed operation.
pub fn success_message(action: Action, format: ArchiveFormat, archive: &str) -> String {
    match (action, format) {
        (Action::List, _) => format!("Listing files in {}", archive),
        (Action::Extract, ArchiveFormat::Gz) => format!("Gunzip extraction: {}", archive),
        (Action::Create, format) => format!("Created {} archive: {}", format.label(), archive),
        (Action::Extract, format) => format!("Extracted {} archive: {}", format.label(), archive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn argv(cmd: &ExternalCommand) -> Vec<&str> {
        std::iter::once(cmd.program.as_str())
            .chain(cmd.args.iter().map(String::as_str))
            .collect()
    }

    #[test]
    fn test_create_table() {
        let files = strings(&["a.txt", "docs"]);
        let create = Operation::Create { files: &files };
        let cases: [(ArchiveFormat, &str, Vec<&str>); 6] = [
            (ArchiveFormat::Zip, "out.zip", vec!["zip", "-r", "out.zip", "a.txt", "docs"]),
            (ArchiveFormat::Tar, "out.tar", vec!["tar", "-cvf", "out.tar", "a.txt", "docs"]),
            (
                ArchiveFormat::TarGz,
                "out.tar.gz",
                vec!["tar", "-czvf", "out.tar.gz", "a.txt", "docs"],
            ),
            (ArchiveFormat::Gz, "a.txt.gz", vec!["gzip", "-k", "a.txt"]),
            (ArchiveFormat::SevenZip, "out.7z", vec!["7z", "a", "out.7z", "a.txt", "docs"]),
            (ArchiveFormat::Rar, "out.rar", vec!["rar", "a", "out.rar", "a.txt", "docs"]),
        ];
        for (format, archive, expected) in cases {
            let cmd = build_command(create, format, archive, None).unwrap();
            assert_eq!(argv(&cmd), expected, "format: {}", format);
            assert_eq!(cmd.stdout_target, None);
        }
        assert_eq!(
            build_command(create, ArchiveFormat::Xz, "out.xz", None),
            Err(Unsupported::Format)
        );
    }

    #[test]
    fn test_extract_table() {
        let extract = Operation::Extract { destination: "out" };
        let cases: [(ArchiveFormat, &str, Vec<&str>); 7] = [
            (ArchiveFormat::Zip, "a.zip", vec!["unzip", "a.zip", "-d", "out"]),
            (ArchiveFormat::Tar, "a.tar", vec!["tar", "-xvf", "a.tar", "-C", "out"]),
            (ArchiveFormat::TarGz, "a.tar.gz", vec!["tar", "-xzvf", "a.tar.gz", "-C", "out"]),
            (ArchiveFormat::Gz, "a.gz", vec!["gunzip", "-c", "a.gz"]),
            (ArchiveFormat::SevenZip, "a.7z", vec!["7z", "x", "a.7z", "-oout"]),
            (ArchiveFormat::Rar, "a.rar", vec!["unrar", "x", "a.rar", "out/"]),
            (ArchiveFormat::Xz, "a.xz", vec!["xz", "-d", "a.xz"]),
        ];
        for (format, archive, expected) in cases {
            let cmd = build_command(extract, format, archive, None).unwrap();
            assert_eq!(argv(&cmd), expected, "format: {}", format);
        }
    }

    #[test]
    fn test_gunzip_redirects_stdout_to_destination() {
        let cmd = build_command(
            Operation::Extract { destination: "notes.txt" },
            ArchiveFormat::Gz,
            "notes.txt.gz",
            None,
        )
        .unwrap();
        assert_eq!(cmd.stdout_target, Some(PathBuf::from("notes.txt")));
        assert_eq!(cmd.command_line(), "gunzip -c notes.txt.gz > notes.txt");
    }

    #[test]
    fn test_list_table() {
        let cases: [(ArchiveFormat, &str, Vec<&str>); 5] = [
            (ArchiveFormat::Zip, "a.zip", vec!["unzip", "-l", "a.zip"]),
            (ArchiveFormat::Tar, "a.tar", vec!["tar", "-tvf", "a.tar"]),
            (ArchiveFormat::TarGz, "a.tar.gz", vec!["tar", "-tvf", "a.tar.gz"]),
            (ArchiveFormat::SevenZip, "a.7z", vec!["7z", "l", "a.7z"]),
            (ArchiveFormat::Rar, "a.rar", vec!["unrar", "l", "a.rar"]),
        ];
        for (format, archive, expected) in cases {
            let cmd = build_command(Operation::List, format, archive, None).unwrap();
            assert_eq!(argv(&cmd), expected, "format: {}", format);
        }
        assert_eq!(
            build_command(Operation::List, ArchiveFormat::Xz, "a.xz", None),
            Err(Unsupported::XzListing)
        );
        assert_eq!(
            build_command(Operation::List, ArchiveFormat::Gz, "a.gz", None),
            Err(Unsupported::Format)
        );
    }

    #[test]
    fn test_password_inserted_after_subcommand() {
        let files = strings(&["secret.txt"]);
        let cmd = build_command(
            Operation::Create { files: &files },
            ArchiveFormat::SevenZip,
            "vault.7z",
            Some("SECRET"),
        )
        .unwrap();
        assert_eq!(argv(&cmd), vec!["7z", "a", "-pSECRET", "vault.7z", "secret.txt"]);

        let cmd = build_command(
            Operation::Extract { destination: "out" },
            ArchiveFormat::Rar,
            "vault.rar",
            Some("SECRET"),
        )
        .unwrap();
        assert_eq!(argv(&cmd), vec!["unrar", "x", "-pSECRET", "vault.rar", "out/"]);
    }

    #[test]
    fn test_absent_or_empty_password_adds_no_flag() {
        let files = strings(&["secret.txt"]);
        for password in [None, Some("")] {
            let cmd = build_command(
                Operation::Create { files: &files },
                ArchiveFormat::SevenZip,
                "vault.7z",
                password,
            )
            .unwrap();
            assert!(
                cmd.args.iter().all(|arg| !arg.starts_with("-p")),
                "unexpected password flag in {:?}",
                cmd.args
            );
        }
    }

    #[test]
    fn test_password_ignored_for_formats_without_encryption() {
        let files = strings(&["a.txt"]);
        let cmd = build_command(
            Operation::Create { files: &files },
            ArchiveFormat::Zip,
            "a.zip",
            Some("SECRET"),
        )
        .unwrap();
        assert_eq!(argv(&cmd), vec!["zip", "-r", "a.zip", "a.txt"]);
    }

    #[test]
    fn test_command_line_masks_password() {
        let cmd = build_command(Operation::List, ArchiveFormat::SevenZip, "v.7z", Some("hunter2"))
            .unwrap();
        assert_eq!(cmd.command_line(), "7z l -p*** v.7z");
        assert!(!cmd.command_line().contains("hunter2"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            success_message(Action::Create, ArchiveFormat::TarGz, "a.tar.gz"),
            "Created TAR.GZ archive: a.tar.gz"
        );
        assert_eq!(
            success_message(Action::Extract, ArchiveFormat::SevenZip, "a.7z"),
            "Extracted 7z archive: a.7z"
        );
        assert_eq!(
            success_message(Action::Extract, ArchiveFormat::Gz, "a.gz"),
            "Gunzip extraction: a.gz"
        );
        assert_eq!(
            success_message(Action::List, ArchiveFormat::Zip, "a.zip"),
            "Listing files in a.zip"
        );
        assert_eq!(
            Unsupported::XzListing.message(Action::List, "a.xz"),
            "Listing files in XZ archive: a.xz is not supported."
        );
        assert_eq!(
            Unsupported::Format.message(Action::Create, "a.foo"),
            "Unsupported archive type for creation: a.foo"
        );
    }
}
