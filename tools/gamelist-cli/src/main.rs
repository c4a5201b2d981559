//! Gamelist CLI - rebuild SF2000 game lists from ROM folders
//!
//! Replaces the stock menu indexes (localized names, curated order) with
//! plain alphabetical lists built from the filenames on the card.
//!
//! # Usage
//!
//! ```bash
//! # Rebuild the Game Boy list on the card mounted at F:
//! gamelist F: GB
//!
//! # Rebuild every system without the confirmation prompt
//! gamelist /media/sdcard ALL --skip-confirmation
//!
//! # Check whether the card already carries the lists this tool would write
//! gamelist F: ALL --verify
//! ```
//!
//! # Config (config.toml)
//!
//! ```toml
//! # Used when only the system is given on the command line
//! drive = "F:"
//! skip_confirmation = false
//! ```

mod config;
mod prompt;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gamelist_core::{CardLayout, IndexOutcome, Mode, rebuild_selection};
use gamelist_shared::{GamelistError, SystemSelection};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;

/// Gamelist - rebuild SF2000 game lists in alphabetical order
#[derive(Parser, Debug)]
#[command(name = "gamelist")]
#[command(about = "Rebuild SF2000 game lists in alphabetical order")]
#[command(version)]
struct Cli {
    /// Drive or path of the SD card (e.g. F: or /media/sdcard), then the
    /// system to rebuild: ARCADE, FC, GB, GBA, GBC, MD, SFC or ALL.
    /// The drive may be left out when config.toml sets one.
    #[arg(value_name = "DRIVE|SYSTEM", num_args = 1..=2, required = true)]
    targets: Vec<String>,

    /// Don't ask for confirmation before modifying files
    #[arg(short, long)]
    skip_confirmation: bool,

    /// Compare generated lists with the card instead of writing them
    #[arg(short = 't', long)]
    verify: bool,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Work out the drive and systems from positional arguments and config.
fn resolve_targets(targets: &[String], config: &Config) -> Result<(PathBuf, SystemSelection)> {
    match targets {
        [drive, system] => Ok((PathBuf::from(drive), system.parse()?)),
        [system] => {
            let drive = config.drive.clone().ok_or_else(|| {
                GamelistError::Usage(
                    "No drive given and no default drive in config.toml".to_string(),
                )
            })?;
            Ok((drive, system.parse()?))
        }
        _ => Err(GamelistError::Usage("Expected <DRIVE> <SYSTEM>".to_string()).into()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let (drive, selection) = resolve_targets(&cli.targets, &config)?;
    let card = CardLayout::locate(&drive)?;

    let mode = if cli.verify { Mode::Verify } else { Mode::Write };

    if mode == Mode::Write {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        prompt::print_disclaimer(&mut out)?;

        if !(cli.skip_confirmation || config.skip_confirmation) {
            let mut input = std::io::stdin().lock();
            if !prompt::confirm(&mut input, &mut out)? {
                println!("Cancelling, no files modified");
                return Ok(());
            }
        }
    }

    tracing::debug!("Card root: {}", card.root().display());

    let reports = rebuild_selection(&card, selection, mode)?;

    let mut mismatches = 0;
    for report in &reports {
        for index in &report.indexes {
            match index.outcome {
                IndexOutcome::Written(size) => {
                    println!("  {} ({} bytes)", index.path.display(), size)
                }
                IndexOutcome::Matches => println!("  {} matches", index.path.display()),
                IndexOutcome::Differs => {
                    println!("  ! {} doesn't match", index.path.display());
                    mismatches += 1;
                }
            }
        }
        println!("✓ {}: {} ROMs", report.code, report.rom_count);
        println!();
    }

    if mismatches > 0 {
        anyhow::bail!("{} game list file(s) don't match", mismatches);
    }

    Ok(())
}

/// Bad arguments found after parsing, rendered by clap with the usage line.
fn usage_error(message: &str) -> clap::Error {
    Cli::command().error(ErrorKind::InvalidValue, message)
}

/// Print an error and its follow-up hint.
fn report(err: &anyhow::Error) {
    eprintln!("! {err:#}");
    if let Some(hint) = err.downcast_ref::<GamelistError>().and_then(GamelistError::hint) {
        eprintln!("  {hint}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(GamelistError::Usage(message)) = err.downcast_ref::<GamelistError>() {
                usage_error(message).exit();
            }
            report(&err);
            ExitCode::FAILURE
        }
    }
}
