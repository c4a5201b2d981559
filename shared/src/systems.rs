//! System profiles for the SF2000 menu.
//!
//! This module is the single source of truth for which systems the menu knows
//! about, which index files in `Resources/` belong to each, and which file
//! extensions count as ROMs.
//!
//! # Example
//!
//! ```
//! use gamelist_shared::{IndexKind, find_system};
//!
//! let gb = find_system("gb").unwrap();
//! assert_eq!(gb.code, "GB");
//! assert_eq!(gb.index_filename(IndexKind::Files), "vdsdc.tax");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GamelistError;
use crate::mapping::NameMapping;

/// Folder on the card holding every system's index files.
pub const RESOURCES_DIR: &str = "Resources";

/// Suffix appended to an index path to form its one-time backup.
pub const BACKUP_SUFFIX: &str = "_orig";

/// Extensions the firmware loads as ROMs (lowercase, without dot).
pub const ROM_EXTENSIONS: &[&str] = &[
    "bkp", "zip", "zfc", "zsf", "zmd", "zgb", "zfb", "smc", "fig", "sfc", "gd3", "gd7", "dx2",
    "bsx", "swc", "nes", "nfc", "fds", "unf", "gba", "agb", "gbz", "gbc", "gb", "sgb", "bin",
    "md", "smd", "gen", "sms",
];

/// The three index files every system owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// Raw filenames (`.tax`); the menu strips extensions itself.
    Files,
    /// Localized titles (`.nec`).
    Names,
    /// Phonetic initials used by menu search (`.bvs`).
    Phonetic,
}

impl IndexKind {
    /// All kinds, in the order they are written.
    pub const ALL: [IndexKind; 3] = [IndexKind::Files, IndexKind::Names, IndexKind::Phonetic];

    /// Which string ends up in this index's name blob.
    ///
    /// Localization is unsupported, so both the localized-name and phonetic
    /// indexes fall back to the display name.
    pub fn mapping(self) -> NameMapping {
        match self {
            IndexKind::Files => NameMapping::Filename,
            IndexKind::Names | IndexKind::Phonetic => NameMapping::DisplayName,
        }
    }
}

/// One supported system and its index files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemProfile {
    /// Folder name on the card and command-line code (e.g., "GB")
    pub code: &'static str,

    /// Filename index (e.g., "vdsdc.tax")
    pub file_index: &'static str,

    /// Localized-name index (e.g., "umboa.nec")
    pub name_index: &'static str,

    /// Phonetic index (e.g., "qdvd6.bvs")
    pub phonetic_index: &'static str,
}

impl SystemProfile {
    pub const fn new(
        code: &'static str,
        file_index: &'static str,
        name_index: &'static str,
        phonetic_index: &'static str,
    ) -> Self {
        Self {
            code,
            file_index,
            name_index,
            phonetic_index,
        }
    }

    pub fn index_filename(&self, kind: IndexKind) -> &'static str {
        match kind {
            IndexKind::Files => self.file_index,
            IndexKind::Names => self.name_index,
            IndexKind::Phonetic => self.phonetic_index,
        }
    }
}

/// Every system the stock firmware indexes, in processing order for `ALL`.
pub const SYSTEMS: &[SystemProfile] = &[
    SystemProfile::new("ARCADE", "mswb7.tax", "msdtc.nec", "mfpmp.bvs"),
    SystemProfile::new("FC", "rdbui.tax", "fhcfg.nec", "nethn.bvs"),
    SystemProfile::new("GB", "vdsdc.tax", "umboa.nec", "qdvd6.bvs"),
    SystemProfile::new("GBA", "vfnet.tax", "htuiw.nec", "sppnp.bvs"),
    SystemProfile::new("GBC", "pnpui.tax", "wjere.nec", "mgdel.bvs"),
    SystemProfile::new("MD", "scksp.tax", "setxa.nec", "wmiui.bvs"),
    SystemProfile::new("SFC", "urefs.tax", "adsnt.nec", "xvb6c.bvs"),
];

/// Look up a system by code, ignoring case.
pub fn find_system(code: &str) -> Option<&'static SystemProfile> {
    SYSTEMS.iter().find(|s| s.code.eq_ignore_ascii_case(code))
}

/// Which systems a run should process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemSelection {
    One(&'static SystemProfile),
    All,
}

impl SystemSelection {
    pub fn profiles(&self) -> Vec<&'static SystemProfile> {
        match self {
            SystemSelection::One(profile) => vec![*profile],
            SystemSelection::All => SYSTEMS.iter().collect(),
        }
    }
}

impl FromStr for SystemSelection {
    type Err = GamelistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ALL") {
            return Ok(SystemSelection::All);
        }
        find_system(s).map(SystemSelection::One).ok_or_else(|| {
            let codes: Vec<&str> = SYSTEMS.iter().map(|p| p.code).collect();
            GamelistError::Usage(format!(
                "Unknown system '{s}', expected one of: {} or ALL",
                codes.join(", ")
            ))
        })
    }
}

impl fmt::Display for SystemSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemSelection::One(profile) => f.write_str(profile.code),
            SystemSelection::All => f.write_str("ALL"),
        }
    }
}

/// Returns true if `name` ends in `.<ext>` for a known ROM extension.
///
/// Case-insensitive. At least one character must precede the dot, so a bare
/// `.gb` is rejected.
pub fn has_rom_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    ROM_EXTENSIONS.iter().any(|ext| {
        lower
            .strip_suffix(ext)
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some_and(|stem| !stem.is_empty())
    })
}
