//! Shared types for rebuilding SF2000 game list indexes.
//!
//! Holds the fixed system table, the name mapping policies and the binary
//! index format. Nothing in this crate touches the filesystem except through
//! the `Write` impls handed to the encoder.

pub mod error;
pub mod formats;
pub mod game_list;
pub mod mapping;
pub mod systems;

pub use error::{GamelistError, PathKind, Result};
pub use formats::index_file::{IndexHeader, decode_index, encode_index, write_index};
pub use game_list::{GameList, RomEntry};
pub use mapping::{NameMapping, display_name};
pub use systems::{
    BACKUP_SUFFIX, IndexKind, RESOURCES_DIR, ROM_EXTENSIONS, SYSTEMS, SystemProfile,
    SystemSelection, find_system, has_rom_extension,
};
