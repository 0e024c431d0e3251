// multireplace/src/ui/diff_viewer.rs
//! Prints a line diff between the input and the transformed output.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes removed lines (red, `- `) and added lines (green, `+ `) with
/// surrounding context.
pub fn print_diff<W: Write>(original: &str, replaced: &str, writer: &mut W, supports_color: bool) -> io::Result<()> {
    let patch = create_patch(original, replaced);

    if supports_color {
        writeln!(writer, "{}", "--- Diff ---".yellow().bold())?;
    } else {
        writeln!(writer, "--- Diff ---")?;
    }

    let mut changes = 0usize;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    changes += 1;
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("- {}", s).red())?;
                    } else {
                        writeln!(writer, "- {}", s)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changes += 1;
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("+ {}", s).green())?;
                    } else {
                        writeln!(writer, "+ {}", s)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if changes == 0 {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(())
}
