//! Name mapping policies for index name blobs.

use crate::game_list::RomEntry;

/// Strip the final `.`-delimited segment from a filename.
///
/// Names without a dot come back unchanged.
pub fn display_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => filename,
    }
}

/// Selects which string an index stores for each ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameMapping {
    /// The raw filename, extension included
    Filename,
    /// The filename with its extension stripped
    DisplayName,
}

impl NameMapping {
    pub fn apply(self, entry: &RomEntry) -> &str {
        match self {
            NameMapping::Filename => &entry.filename,
            NameMapping::DisplayName => &entry.display_name,
        }
    }
}
