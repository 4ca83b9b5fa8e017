//! Command implementations
//!
//! Text-mode flows driven by any line reader and writer, so they can run
//! against the terminal or against in-memory buffers.

pub mod menu;
pub mod play;
pub mod score;

pub use menu::run_menu;
pub use play::play_game;
pub use score::{record_score, show_high_score};

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line without its line terminator
///
/// Returns `None` at end of input. Other whitespace is preserved.
pub(crate) fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
