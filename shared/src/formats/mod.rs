//! Binary formats read by the SF2000 menu firmware.
//!
//! No magic bytes or version fields - the firmware picks the format from the
//! file it opened.

pub mod index_file;
