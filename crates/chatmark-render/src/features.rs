//! Terminal-side features: clipboard integration and size detection.
//!
//! - **Clipboard (OSC 52)**: copy a code block's original text through the
//!   terminal, so it works over SSH and inside tmux
//! - **Terminal size**: width detection for layout

use crate::code::CodeBlockView;
use chatmark_core::{ChatmarkError, Result};
use log::{debug, warn};
use serde::Serialize;
use std::io::Write;

/// Maximum payload for OSC 52 (50KB - terminal limit).
pub const MAX_CLIPBOARD_SIZE: usize = 50_000;

/// Something that can receive copied text.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// OSC 52 clipboard writing through a terminal stream.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        use base64::{engine::general_purpose::STANDARD, Engine};

        if text.len() > MAX_CLIPBOARD_SIZE {
            return Err(ChatmarkError::Clipboard(format!(
                "{} bytes exceeds the {} byte OSC 52 limit",
                text.len(),
                MAX_CLIPBOARD_SIZE
            )));
        }

        let encoded = STANDARD.encode(text.as_bytes());

        // 'c' selects the clipboard rather than the primary selection
        write!(self.writer, "\x1b]52;c;{}\x07", encoded)
            .and_then(|_| self.writer.flush())
            .map_err(|e| ChatmarkError::Clipboard(e.to_string()))
    }
}

/// Outcome of a copy action, for transient UI feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

/// Copy a code block's original text.
///
/// Failures are logged and reported as [`CopyStatus::Failed`], never
/// returned as errors.
pub fn copy_code(view: &CodeBlockView, clipboard: &mut dyn Clipboard) -> CopyStatus {
    let text = view.copy_text();
    match clipboard.copy(&text) {
        Ok(()) => {
            debug!("copied {} bytes to clipboard", text.len());
            CopyStatus::Copied
        }
        Err(e) => {
            warn!("{}", e);
            CopyStatus::Failed
        }
    }
}

/// Whether stdout is an interactive terminal.
pub fn is_tty() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}

/// Terminal width in columns, or 80 if detection fails.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => 80,
    }
}
