//! Integration tests for gamelist-core
//!
//! Builds a fake SD card in a temp dir, rebuilds one or more systems, and
//! reads the resulting index files back.

use std::path::Path;

use gamelist_core::{
    BackupOutcome, CardLayout, IndexOutcome, Mode, backup_path, ensure_backup, rebuild_selection,
    rebuild_system,
};
use gamelist_shared::{
    GamelistError, IndexHeader, IndexKind, PathKind, SystemSelection, decode_index, find_system,
};
use tempfile::{TempDir, tempdir};

const STOCK: &[u8] = b"stock index bytes";

/// Give `card` stock index files for `code` and a `<code>` folder holding `roms`.
fn add_system(card: &Path, code: &str, roms: &[&str]) {
    let profile = find_system(code).unwrap();

    let resources = card.join("Resources");
    std::fs::create_dir_all(&resources).expect("Failed to create Resources");
    for kind in IndexKind::ALL {
        std::fs::write(resources.join(profile.index_filename(kind)), STOCK)
            .expect("Failed to write stock index");
    }

    let rom_dir = card.join(profile.code);
    std::fs::create_dir(&rom_dir).expect("Failed to create ROM folder");
    for name in roms {
        std::fs::write(rom_dir.join(name), b"rom").expect("Failed to write ROM");
    }
}

/// A card with only the GB system set up.
fn fake_card(roms: &[&str]) -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    add_system(dir.path(), "GB", roms);
    dir
}

fn read_system_index(card: &Path, code: &str, kind: IndexKind) -> Vec<u8> {
    let profile = find_system(code).unwrap();
    std::fs::read(card.join("Resources").join(profile.index_filename(kind)))
        .expect("Failed to read index")
}

fn read_index(card: &Path, kind: IndexKind) -> Vec<u8> {
    read_system_index(card, "GB", kind)
}

#[test]
fn test_rebuild_writes_sorted_indexes() {
    let dir = fake_card(&["Tetris.gb", "Kirby's Dream Land.gb", "Alleyway.gb", "readme.txt"]);
    let card = CardLayout::locate(dir.path()).unwrap();

    let report = rebuild_system(&card, find_system("gb").unwrap(), Mode::Write).unwrap();
    assert_eq!(report.code, "GB");
    assert_eq!(report.rom_count, 3);
    assert_eq!(report.indexes.len(), 3);
    assert!(
        report
            .indexes
            .iter()
            .all(|i| matches!(i.outcome, IndexOutcome::Written(_)))
    );

    let files = read_index(dir.path(), IndexKind::Files);
    assert_eq!(IndexHeader::from_bytes(&files).unwrap().count, 3);
    assert_eq!(
        decode_index(&files).unwrap(),
        ["Alleyway.gb", "Kirby's Dream Land.gb", "Tetris.gb"]
    );

    for kind in [IndexKind::Names, IndexKind::Phonetic] {
        assert_eq!(
            decode_index(&read_index(dir.path(), kind)).unwrap(),
            ["Alleyway", "Kirby's Dream Land", "Tetris"]
        );
    }
}

#[test]
fn test_localized_and_phonetic_indexes_identical() {
    let dir = fake_card(&["b.gb", "a.gb"]);
    let card = CardLayout::locate(dir.path()).unwrap();
    rebuild_system(&card, find_system("GB").unwrap(), Mode::Write).unwrap();

    let names = read_index(dir.path(), IndexKind::Names);
    assert_eq!(names, read_index(dir.path(), IndexKind::Phonetic));
    assert_eq!(decode_index(&names).unwrap(), ["a", "b"]);
    // 4-byte count, two offsets, "a\0b\0" in some listing order
    assert_eq!(names.len(), 4 + 8 + 4);
}

#[test]
fn test_backup_made_once_and_keeps_stock_bytes() {
    let dir = fake_card(&["Tetris.gb"]);
    let card = CardLayout::locate(dir.path()).unwrap();
    let gb = find_system("GB").unwrap();

    rebuild_system(&card, gb, Mode::Write).unwrap();
    let rebuilt = read_index(dir.path(), IndexKind::Files);
    assert_ne!(rebuilt, STOCK);

    // Add a ROM and rebuild; the backup must still hold the stock bytes
    std::fs::write(dir.path().join("GB").join("Alleyway.gb"), b"rom").unwrap();
    rebuild_system(&card, gb, Mode::Write).unwrap();

    for kind in IndexKind::ALL {
        let index = card.index_path(gb, kind);
        assert_eq!(std::fs::read(backup_path(&index)).unwrap(), STOCK);
    }
    assert_eq!(
        ensure_backup(&card.index_path(gb, IndexKind::Files)).unwrap(),
        BackupOutcome::AlreadyPresent(backup_path(&card.index_path(gb, IndexKind::Files)))
    );
}

#[test]
fn test_empty_folder_leaves_indexes_alone() {
    let dir = fake_card(&["notes.txt"]);
    let card = CardLayout::locate(dir.path()).unwrap();

    let err = rebuild_system(&card, find_system("GB").unwrap(), Mode::Write).unwrap_err();
    assert!(matches!(err, GamelistError::EmptyResult { .. }));
    for kind in IndexKind::ALL {
        assert_eq!(read_index(dir.path(), kind), STOCK);
    }
}

#[test]
fn test_missing_index_file_stops_before_backup() {
    let dir = fake_card(&["Tetris.gb"]);
    let gb = find_system("GB").unwrap();
    let card = CardLayout::locate(dir.path()).unwrap();
    std::fs::remove_file(card.index_path(gb, IndexKind::Phonetic)).unwrap();

    let err = rebuild_system(&card, gb, Mode::Write).unwrap_err();
    assert!(matches!(
        err,
        GamelistError::PathNotFound {
            kind: PathKind::IndexFile,
            ..
        }
    ));
    for kind in [IndexKind::Files, IndexKind::Names] {
        assert_eq!(read_index(dir.path(), kind), STOCK);
        let backup = backup_path(&card.index_path(gb, kind));
        assert!(!backup.exists(), "unexpected backup {}", backup.display());
    }
}

#[test]
fn test_backup_failure_stops_before_writing() {
    let dir = fake_card(&["Tetris.gb"]);
    let gb = find_system("GB").unwrap();
    let card = CardLayout::locate(dir.path()).unwrap();
    // A directory squatting on the backup path makes the copy fail
    std::fs::create_dir(backup_path(&card.index_path(gb, IndexKind::Names))).unwrap();

    let err = rebuild_system(&card, gb, Mode::Write).unwrap_err();
    assert!(matches!(err, GamelistError::BackupFailed { .. }));
    for kind in IndexKind::ALL {
        assert_eq!(read_index(dir.path(), kind), STOCK);
    }
}

#[test]
fn test_all_run_stops_at_first_failing_system() {
    let dir = tempdir().expect("Failed to create temp dir");
    add_system(dir.path(), "ARCADE", &["Galaga.zip"]);
    // FC has its index files but no ROM folder
    add_system(dir.path(), "FC", &[]);
    std::fs::remove_dir(dir.path().join("FC")).unwrap();
    add_system(dir.path(), "GB", &["Tetris.gb"]);
    let card = CardLayout::locate(dir.path()).unwrap();

    let err = rebuild_selection(&card, SystemSelection::All, Mode::Write).unwrap_err();
    match err {
        GamelistError::PathNotFound {
            kind: PathKind::RomFolder,
            path,
        } => assert_eq!(path, dir.path().join("FC")),
        other => panic!("expected missing FC folder, got {other:?}"),
    }

    // ARCADE ran before the failure and keeps its new lists
    assert_eq!(
        decode_index(&read_system_index(dir.path(), "ARCADE", IndexKind::Files)).unwrap(),
        ["Galaga.zip"]
    );

    // GB comes after FC and is never touched
    let gb = find_system("GB").unwrap();
    for kind in IndexKind::ALL {
        assert_eq!(read_index(dir.path(), kind), STOCK);
        assert!(!backup_path(&card.index_path(gb, kind)).exists());
    }
}

#[test]
fn test_single_selection_runs_one_system() {
    let dir = tempdir().expect("Failed to create temp dir");
    add_system(dir.path(), "GB", &["Tetris.gb"]);
    add_system(dir.path(), "GBC", &["Pokemon Gold.gbc"]);
    let card = CardLayout::locate(dir.path()).unwrap();

    let selection: SystemSelection = "gbc".parse().unwrap();
    let reports = rebuild_selection(&card, selection, Mode::Write).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, "GBC");
    assert_eq!(read_index(dir.path(), IndexKind::Files), STOCK);
}

#[test]
fn test_verify_mode_writes_nothing() {
    let dir = fake_card(&["Tetris.gb", "Alleyway.gb"]);
    let card = CardLayout::locate(dir.path()).unwrap();
    let gb = find_system("GB").unwrap();

    let report = rebuild_system(&card, gb, Mode::Verify).unwrap();
    assert!(!report.all_match());
    assert!(
        report
            .indexes
            .iter()
            .all(|i| i.outcome == IndexOutcome::Differs)
    );
    for kind in IndexKind::ALL {
        assert_eq!(read_index(dir.path(), kind), STOCK);
        assert!(!backup_path(&card.index_path(gb, kind)).exists());
    }
}

#[test]
fn test_verify_after_rebuild_matches() {
    let dir = fake_card(&["Tetris.gb", "Alleyway.gb", "Boxxle.gb"]);
    let card = CardLayout::locate(dir.path()).unwrap();
    let gb = find_system("GB").unwrap();

    rebuild_system(&card, gb, Mode::Write).unwrap();
    let report = rebuild_system(&card, gb, Mode::Verify).unwrap();
    assert!(report.all_match());
}
