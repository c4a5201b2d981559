//! Per-system game list rebuilding
//!
//! For one system this:
//! 1. checks the ROM folder and all three index files exist
//! 2. backs up each index on first modification ([`Mode::Write`] only)
//! 3. collects and sorts the ROMs
//! 4. encodes the three indexes and writes them (or compares them in
//!    [`Mode::Verify`])
//!
//! Any failure aborts the system immediately. Indexes already written for
//! the same system stay written; backups make that recoverable.

use std::fs::File;
use std::path::{Path, PathBuf};

use gamelist_shared::{
    GameList, GamelistError, IndexKind, PathKind, RESOURCES_DIR, Result, SystemProfile,
    SystemSelection, encode_index, write_index,
};

use crate::backup::{ensure_backup, require_index_file};
use crate::collect::collect_roms;

/// Whether a rebuild touches the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Back up and overwrite the index files
    #[default]
    Write,
    /// Compare generated indexes with the ones on the card, writing nothing
    Verify,
}

/// Paths on a mounted SD card.
#[derive(Debug, Clone)]
pub struct CardLayout {
    root: PathBuf,
}

impl CardLayout {
    /// Locate the card root.
    ///
    /// A bare drive letter such as `F` that isn't a directory itself is
    /// retried as `F:`.
    pub fn locate(drive: &Path) -> Result<Self> {
        if drive.is_dir() {
            return Ok(Self {
                root: drive.to_path_buf(),
            });
        }

        if let Some(letter) = drive.to_str()
            && letter.len() == 1
            && letter.chars().all(|c| c.is_ascii_alphabetic())
        {
            let with_colon = PathBuf::from(format!("{letter}:"));
            if with_colon.is_dir() {
                return Ok(Self { root: with_colon });
            }
        }

        Err(GamelistError::PathNotFound {
            kind: PathKind::Drive,
            path: drive.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<drive>/<CODE>`
    pub fn rom_dir(&self, profile: &SystemProfile) -> PathBuf {
        self.root.join(profile.code)
    }

    /// `<drive>/Resources/<index file>`
    pub fn index_path(&self, profile: &SystemProfile, kind: IndexKind) -> PathBuf {
        self.root.join(RESOURCES_DIR).join(profile.index_filename(kind))
    }
}

/// Result of handling one index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    /// Overwritten with this many bytes
    Written(usize),
    /// Verify mode: card already holds the generated bytes
    Matches,
    /// Verify mode: card differs from the generated bytes
    Differs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub kind: IndexKind,
    pub path: PathBuf,
    pub outcome: IndexOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemReport {
    pub code: &'static str,
    pub rom_count: usize,
    pub indexes: Vec<IndexReport>,
}

impl SystemReport {
    /// True unless a verify run found a mismatch.
    pub fn all_match(&self) -> bool {
        self.indexes.iter().all(|i| i.outcome != IndexOutcome::Differs)
    }
}

/// Rebuild (or verify) the three index files of one system.
pub fn rebuild_system(
    card: &CardLayout,
    profile: &SystemProfile,
    mode: Mode,
) -> Result<SystemReport> {
    tracing::info!("Processing {}", profile.code);

    let rom_dir = card.rom_dir(profile);
    if !rom_dir.is_dir() {
        return Err(GamelistError::PathNotFound {
            kind: PathKind::RomFolder,
            path: rom_dir,
        });
    }

    let index_paths: Vec<(IndexKind, PathBuf)> = IndexKind::ALL
        .iter()
        .map(|&kind| (kind, card.index_path(profile, kind)))
        .collect();

    for (_, path) in &index_paths {
        require_index_file(path)?;
    }
    if mode == Mode::Write {
        for (_, path) in &index_paths {
            ensure_backup(path)?;
        }
    }

    let list = collect_roms(&rom_dir)?;

    let indexes = index_paths
        .into_iter()
        .map(|(kind, path)| {
            let outcome = process_index(&list, kind, &path, mode)?;
            Ok(IndexReport {
                kind,
                path,
                outcome,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!("Done {}", profile.code);

    Ok(SystemReport {
        code: profile.code,
        rom_count: list.len(),
        indexes,
    })
}

/// Rebuild (or verify) every selected system in order.
///
/// The first failure stops the run; systems already processed keep their new
/// indexes and later ones are left untouched.
pub fn rebuild_selection(
    card: &CardLayout,
    selection: SystemSelection,
    mode: Mode,
) -> Result<Vec<SystemReport>> {
    selection
        .profiles()
        .into_iter()
        .map(|profile| rebuild_system(card, profile, mode))
        .collect()
}

fn process_index(
    list: &GameList,
    kind: IndexKind,
    path: &Path,
    mode: Mode,
) -> Result<IndexOutcome> {
    match mode {
        Mode::Write => {
            tracing::info!("Overwriting {}", path.display());
            let mut file = File::create(path).map_err(|e| GamelistError::io(path, e))?;
            write_index(&mut file, list, kind.mapping())
                .map_err(|e| GamelistError::io(path, e))?;
            let size = file.metadata().map_err(|e| GamelistError::io(path, e))?.len();
            Ok(IndexOutcome::Written(size as usize))
        }
        Mode::Verify => {
            tracing::info!("Checking {}", path.display());
            let existing = std::fs::read(path).map_err(|e| GamelistError::io(path, e))?;
            if existing == encode_index(list, kind.mapping()) {
                Ok(IndexOutcome::Matches)
            } else {
                tracing::warn!("{} doesn't match", path.display());
                Ok(IndexOutcome::Differs)
            }
        }
    }
}
