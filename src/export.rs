//! Clipboard export of the computed consignment price
//!
//! The clipboard always receives the raw numeric string, never the grouped
//! display form, so the value can be pasted straight into a listing form.

use clipboard::{ClipboardContext, ClipboardProvider};
use tracing::debug;

use crate::errors::ClipboardError;
use crate::pricing::strip_separators;

/// Copies a price to the platform clipboard with grouping separators
/// stripped. Returns the raw string that was copied.
pub fn copy_to_clipboard(display_value: &str) -> Result<String, ClipboardError> {
    let raw = strip_separators(display_value);

    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    ctx.set_contents(raw.clone())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

    debug!(value = %raw, "copied consignment price to clipboard");
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Clipboard access needs a display server, so only the stripping
    // contract is exercised here; the TUI treats copy failures as
    // log-and-continue either way.
    #[test]
    fn test_copied_value_is_raw() {
        assert_eq!(strip_separators("952,380"), "952380");
        assert_eq!(strip_separators("500"), "500");
    }
}
