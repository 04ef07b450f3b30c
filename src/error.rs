// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Clipboard(ClipboardError),
}

/// Specific error types for clipboard write failures.
///
/// Every clipboard fault collapses into one of these variants; callers only
/// ever surface them as user feedback, never propagate them further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The native clipboard API could not be opened (headless session,
    /// missing display server, denied access).
    Unavailable(String),

    /// The native clipboard accepted the connection but the write failed.
    WriteFailed(String),

    /// A fallback utility was found but exited unsuccessfully.
    CommandFailed {
        utility: &'static str,
        detail: String,
    },

    /// No fallback clipboard utility is installed on this system.
    NoFallbackUtility,

    /// I/O error while piping text to a fallback utility.
    Io(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::WriteFailed(msg) => write!(f, "clipboard write failed: {msg}"),
            ClipboardError::CommandFailed { utility, detail } => {
                write!(f, "{utility} failed: {detail}")
            }
            ClipboardError::NoFallbackUtility => {
                write!(f, "no clipboard utility found for fallback copy")
            }
            ClipboardError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Clipboard(e) => write!(f, "Clipboard Error: {e}"),
        }
    }
}

impl From<ClipboardError> for Error {
    fn from(err: ClipboardError) -> Self {
        Error::Clipboard(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
