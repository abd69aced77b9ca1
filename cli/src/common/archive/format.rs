//! # Archive Format Resolution (`common::archive::format`)
//!
//! File: cli/src/common/archive/format.rs
//!
//! Maps an archive path to the format whose external tool will handle it.
//! The decision is made purely from the trailing characters of the path;
//! file contents are never inspected.
//!
use std::fmt;

/// Every archive format TArchiver knows how to hand off to an external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    Gz,
    SevenZip,
    Rar,
    Xz,
}

/// Suffix table, longest suffix first so `.tar.gz` never resolves to `.gz`.
const SUFFIXES: &[(&str, ArchiveFormat)] = &[
    (".tar.gz", ArchiveFormat::TarGz),
    (".zip", ArchiveFormat::Zip),
    (".tar", ArchiveFormat::Tar),
    (".rar", ArchiveFormat::Rar),
    (".7z", ArchiveFormat::SevenZip),
    (".gz", ArchiveFormat::Gz),
    (".xz", ArchiveFormat::Xz),
];

impl ArchiveFormat {
    /// Resolves the format from the archive path's suffix.
    ///
    /// Matching is case-sensitive: `BACKUP.ZIP` is not recognised.
    pub fn resolve(archive: &str) -> Option<Self> {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| archive.ends_with(suffix))
            .map(|(_, format)| *format)
    }

    /// Label used in the status messages (`Created TAR.GZ archive: ...`).
    pub fn label(self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "ZIP",
            ArchiveFormat::Tar => "TAR",
            ArchiveFormat::TarGz => "TAR.GZ",
            ArchiveFormat::Gz => "GZIP",
            ArchiveFormat::SevenZip => "7z",
            ArchiveFormat::Rar => "RAR",
            ArchiveFormat::Xz => "XZ",
        }
    }

    /// Formats whose tools accept a `-p<password>` option.
    pub fn supports_password(self) -> bool {
        matches!(self, ArchiveFormat::SevenZip | ArchiveFormat::Rar)
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
