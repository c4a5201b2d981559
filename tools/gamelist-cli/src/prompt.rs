//! Disclaimer and Y/N confirmation.

use std::io::{self, BufRead, Write};

const DISCLAIMER: &str = "\
=== DISCLAIMER ===

This program is experimental and you should proceed with caution!
Although it will back up the files it modifies, you should make your own backup of the
Resources folder and ideally your whole SD card so you can restore the original state of
your device if anything goes wrong.

The following functionality from the stock system will be lost by using this program:
1. Chinese translations of game names (including searching by pinyin initials).
   Game names will be taken from the filename regardless of language setting.
2. Any custom sorting of games in the menu (e.g. popular games placed at the top).
   All games will be sorted alphabetically instead.
";

pub fn print_disclaimer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{DISCLAIMER}")
}

/// Ask for `Y`. Anything else, including end of input, is a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    writeln!(out, "Type Y to continue, or anything else to cancel")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> bool {
        let mut input = answer.as_bytes();
        let mut out = Vec::new();
        confirm(&mut input, &mut out).unwrap()
    }

    #[test]
    fn test_confirm_accepts_y() {
        assert!(ask("Y\n"));
        assert!(ask("y\r\n"));
        assert!(ask("  y  \n"));
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        assert!(!ask("n\n"));
        assert!(!ask("yes\n"));
        assert!(!ask("\n"));
        assert!(!ask(""));
    }

    #[test]
    fn test_disclaimer_mentions_lost_features() {
        let mut out = Vec::new();
        print_disclaimer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("pinyin"));
        assert!(text.contains("sorted alphabetically"));
    }
}
