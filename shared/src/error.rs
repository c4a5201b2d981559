//! Error taxonomy shared by the library crates.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// What an expected-but-missing path was supposed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// The SD card root
    Drive,
    /// A per-system ROM folder such as `<drive>/GB`
    RomFolder,
    /// One of the three index files under `<drive>/Resources`
    IndexFile,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Drive => f.write_str("drive or path"),
            PathKind::RomFolder => f.write_str("folder"),
            PathKind::IndexFile => f.write_str("game list file"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GamelistError {
    #[error("{0}")]
    Usage(String),

    #[error("Couldn't find {kind} {}", .path.display())]
    PathNotFound { kind: PathKind, path: PathBuf },

    #[error("No ROMs found in {}", .path.display())]
    EmptyResult { path: PathBuf },

    #[error("Failed to back up {} as {}", .path.display(), .backup.display())]
    BackupFailed {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed index data: {0}")]
    Format(String),
}

impl GamelistError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Follow-up advice printed under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            GamelistError::Usage(_) => None,
            GamelistError::PathNotFound { .. } => {
                Some("Check the provided path points to an SF2000 SD card!")
            }
            GamelistError::EmptyResult { .. } => {
                Some("Copy some ROMs into the folder first, game list not modified.")
            }
            GamelistError::BackupFailed { .. } => {
                Some("Check the SD card and Resources directory are writable.")
            }
            GamelistError::Io { .. } => Some(
                "Check the SD card and file are writable, and the file is not open in another program.",
            ),
            GamelistError::Format(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GamelistError>;
