//! Gamelist Core - rebuilds SF2000 menu indexes from ROM folders
//!
//! # Architecture
//!
//! - [`collect`] - Scans a system folder for ROMs and sorts them by display name
//! - [`backup`] - Keeps a pristine `_orig` copy of every index before it is touched
//! - [`rebuild`] - Per-system pipeline: locate, back up, collect, encode, write or verify;
//!   runs systems one after another for `ALL`

pub mod backup;
pub mod collect;
pub mod rebuild;

pub use backup::{BackupOutcome, backup_path, ensure_backup};
pub use collect::{collect_roms, rom_filenames};
pub use rebuild::{
    CardLayout, IndexOutcome, IndexReport, Mode, SystemReport, rebuild_selection, rebuild_system,
};
