//! ROM folder scanning
//!
//! Lists a system folder once, keeps files with a known ROM extension, and
//! hands them to [`GameList`] for sorting. The folder is expected to exist;
//! callers check that first so they can report which folder was missing.

use std::path::Path;

use gamelist_shared::{GameList, GamelistError, Result, has_rom_extension};

/// Filenames in `dir` with a known ROM extension, in directory-listing order.
///
/// Directories are skipped even when their name looks like a ROM. Names that
/// are not valid UTF-8 are skipped with a warning since the firmware blob is
/// UTF-8.
pub fn rom_filenames(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| GamelistError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GamelistError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!("Skipping {:?}: filename is not valid UTF-8", raw);
                continue;
            }
        };

        if has_rom_extension(&name) {
            tracing::debug!("Found ROM {}", name);
            names.push(name);
        }
    }

    Ok(names)
}

/// Scan `dir` and build its sorted game list.
///
/// Fails with [`GamelistError::EmptyResult`] when nothing matches.
pub fn collect_roms(dir: &Path) -> Result<GameList> {
    tracing::info!("Looking for ROMs in {}", dir.display());

    let names = rom_filenames(dir)?;
    if names.is_empty() {
        return Err(GamelistError::EmptyResult {
            path: dir.to_path_buf(),
        });
    }

    let list = GameList::from_listing(names);
    tracing::info!("Found {} ROMs", list.len());

    for name in list.duplicate_display_names() {
        tracing::warn!(
            "Several ROMs display as '{}'; they keep listing order in the menu",
            name
        );
    }

    Ok(list)
}
