//! Sorted game lists.
//!
//! A [`GameList`] is the encoder's only input: ROM entries in ascending
//! display-name order, each remembering where it sat in the directory listing.
//! The position of an entry in the list is its sort rank.

use crate::mapping::display_name;

/// One ROM file found in a system folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomEntry {
    /// Filename as listed, extension included
    pub filename: String,
    /// Filename with the last extension stripped
    pub display_name: String,
    /// Position in the raw directory listing
    pub listing_index: usize,
}

impl RomEntry {
    pub fn new(filename: impl Into<String>, listing_index: usize) -> Self {
        let filename = filename.into();
        let display_name = display_name(&filename).to_string();
        Self {
            filename,
            display_name,
            listing_index,
        }
    }
}

/// ROM entries sorted by display name.
///
/// Ordering is ordinal (byte-wise on UTF-8) and stable, so the result does not
/// depend on the host locale and ties keep their listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameList {
    entries: Vec<RomEntry>,
}

impl GameList {
    /// Build a list from filenames in directory-listing order.
    pub fn from_listing<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<RomEntry> = filenames
            .into_iter()
            .enumerate()
            .map(|(i, name)| RomEntry::new(name, i))
            .collect();
        entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in sort-rank order.
    pub fn entries(&self) -> &[RomEntry] {
        &self.entries
    }

    /// `(rank, entry)` pairs in directory-listing order.
    pub fn by_listing_order(&self) -> Vec<(usize, &RomEntry)> {
        let mut ranked: Vec<(usize, &RomEntry)> = self.entries.iter().enumerate().collect();
        ranked.sort_by_key(|(_, entry)| entry.listing_index);
        ranked
    }

    /// Display names shared by more than one entry.
    pub fn duplicate_display_names(&self) -> Vec<&str> {
        let mut dupes: Vec<&str> = self
            .entries
            .windows(2)
            .filter(|pair| pair[0].display_name == pair[1].display_name)
            .map(|pair| pair[0].display_name.as_str())
            .collect();
        dupes.dedup();
        dupes
    }
}
