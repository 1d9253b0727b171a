// Rust guideline compliant 2026-10-19

//! Formatting drift notice.

use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Default notice printed after the formatter rewrote the working tree.
pub const DEFAULT_NOTICE: &str = " Formatted. Please run git add";

/// Writes the drift notice as a single line.
///
/// The text is rendered bold on an intense green background when the writer
/// supports color. The style is reset before the trailing newline.
///
/// # Arguments
///
/// * `out` - Destination stream
/// * `text` - Notice text
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_notice<W: WriteColor + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(
        ColorSpec::new()
            .set_bg(Some(Color::Green))
            .set_intense(true)
            .set_bold(true),
    )?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)?;
    out.flush()
}
