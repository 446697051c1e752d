//! Clipboard support for copying calculator results.

use arboard::Clipboard;
use thiserror::Error;

/// Failure to reach or write the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
    #[error("nothing to copy")]
    Empty,
}

/// Copy a raw operand to the system clipboard.
///
/// Empty operands are refused so a failed evaluation never clobbers the
/// clipboard with an empty string.
///
/// On Linux the clipboard contents live only as long as the process that set
/// them. With `hold` set, this call blocks until another application takes
/// over the clipboard, so the text survives a process that is about to exit.
pub fn copy_to_clipboard(text: &str, hold: bool) -> Result<(), ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }

    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    set_text(&mut clipboard, text, hold).map_err(ClipboardError::Write)
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str, hold: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        clipboard.set().wait().text(text.to_string())
    } else {
        clipboard.set_text(text.to_string())
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str, _hold: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}
