// SPDX-License-Identifier: MPL-2.0
//! Clipboard copy with user feedback.
//!
//! The primary path writes through the native clipboard. When the native
//! API cannot be opened (headless session, missing display server), the
//! copy falls back to piping the text into the first available system
//! clipboard utility, which is fully synchronous. Either way the outcome
//! is surfaced as a toast, never as a propagated error.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Instant;

use iced::Task;

use super::toast::{Toast, ToastSlot};
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, ErrorEvent, ErrorType};
use crate::error::ClipboardError;

/// Default toast message on a successful copy.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Copied to clipboard!";

/// Toast message when every copy mechanism failed.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Clipboard utilities probed by the fallback path, in preference order.
/// Each entry pipes the text into the utility's stdin.
const FALLBACK_UTILITIES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Which mechanism completed the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// The native clipboard API.
    Native,
    /// A system utility, named for diagnostics.
    Fallback(&'static str),
}

impl CopyMethod {
    /// Returns the method's name for diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CopyMethod::Native => "native",
            CopyMethod::Fallback(utility) => utility,
        }
    }
}

/// Result of a finished copy, paired with the message to show on success.
#[derive(Debug, Clone)]
pub struct CopyOutcome {
    pub result: Result<CopyMethod, ClipboardError>,
    pub success_message: String,
}

/// Copies `text` to the system clipboard.
///
/// Tries the native clipboard first; when the native API is unavailable,
/// falls back to the first installed clipboard utility. Reports which
/// mechanism succeeded.
///
/// # Errors
///
/// Returns a [`ClipboardError`] when the native write fails outright, or
/// when the native API is unavailable and no fallback utility works.
pub fn copy(text: &str) -> Result<CopyMethod, ClipboardError> {
    match native_copy(text) {
        Ok(()) => Ok(CopyMethod::Native),
        Err(ClipboardError::Unavailable(_)) => {
            fallback_copy(FALLBACK_UTILITIES, text).map(CopyMethod::Fallback)
        }
        Err(err) => Err(err),
    }
}

/// Runs [`copy`] off the UI thread and resolves to a [`CopyOutcome`].
///
/// The host maps the outcome into its own message and feeds it to
/// [`apply_outcome`] when it arrives.
pub fn copy_task<M>(
    text: String,
    success_message: String,
    on_done: impl Fn(CopyOutcome) -> M + Send + 'static,
) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(
        async move {
            let result = match tokio::task::spawn_blocking(move || copy(&text)).await {
                Ok(result) => result,
                Err(join_error) => Err(ClipboardError::Io(join_error.to_string())),
            };
            CopyOutcome {
                result,
                success_message,
            }
        },
        on_done,
    )
}

/// Surfaces a finished copy as user feedback.
///
/// Success shows a success toast with the outcome's message and records the
/// mechanism in diagnostics; failure shows the fixed error toast and logs
/// the error. The failure itself is swallowed.
pub fn apply_outcome(
    outcome: &CopyOutcome,
    slot: &mut ToastSlot,
    diagnostics: Option<&DiagnosticsHandle>,
    now: Instant,
) {
    match &outcome.result {
        Ok(method) => {
            slot.show(Toast::success(&outcome.success_message), now);
            if let Some(handle) = diagnostics {
                handle.log_state(AppStateEvent::CopyCompleted {
                    method: method.label().to_string(),
                });
            }
        }
        Err(err) => {
            slot.show(Toast::error(COPY_FAILED_MESSAGE), now);
            if let Some(handle) = diagnostics {
                handle.log_error(ErrorEvent::new(ErrorType::Clipboard, err.to_string()));
            }
        }
    }
}

fn native_copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

/// Pipes `text` into the first utility that can be spawned.
///
/// Missing utilities are skipped; any other fault aborts the attempt, since
/// retrying a utility that failed mid-write could leave a partial clipboard.
fn fallback_copy(
    utilities: &[(&'static str, &[&str])],
    text: &str,
) -> Result<&'static str, ClipboardError> {
    for (utility, args) in utilities {
        let spawned = Command::new(utility)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => return Err(ClipboardError::Io(err.to_string())),
        };

        let Some(mut stdin) = child.stdin.take() else {
            return Err(ClipboardError::Io(format!("{utility}: stdin not piped")));
        };
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ClipboardError::Io(e.to_string()))?;
        drop(stdin);

        let status = child.wait().map_err(|e| ClipboardError::Io(e.to_string()))?;
        if status.success() {
            return Ok(utility);
        }
        return Err(ClipboardError::CommandFailed {
            utility,
            detail: status.to_string(),
        });
    }

    Err(ClipboardError::NoFallbackUtility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::ui::toast::ToastKind;

    #[test]
    fn fallback_utilities_are_declared() {
        assert!(!FALLBACK_UTILITIES.is_empty());
        assert!(FALLBACK_UTILITIES.iter().any(|(name, _)| *name == "xclip"));
    }

    #[test]
    fn fallback_skips_missing_utilities() {
        let utilities: &[(&'static str, &[&str])] =
            &[("iced-pagekit-no-such-utility", &[])];
        let result = fallback_copy(utilities, "hello");
        assert_eq!(result, Err(ClipboardError::NoFallbackUtility));
    }

    #[cfg(unix)]
    #[test]
    fn fallback_pipes_text_into_the_first_working_utility() {
        let utilities: &[(&'static str, &[&str])] = &[
            ("iced-pagekit-no-such-utility", &[]),
            ("cat", &[]),
        ];
        let result = fallback_copy(utilities, "hello");
        assert_eq!(result, Ok("cat"));
    }

    #[cfg(unix)]
    #[test]
    fn fallback_reports_a_failing_utility() {
        // Consumes stdin before failing, so the write itself succeeds.
        let utilities: &[(&'static str, &[&str])] =
            &[("sh", &["-c", "cat > /dev/null; exit 1"])];
        let result = fallback_copy(utilities, "hello");
        assert!(matches!(
            result,
            Err(ClipboardError::CommandFailed { utility: "sh", .. })
        ));
    }

    #[test]
    fn success_outcome_shows_exactly_one_success_toast() {
        let now = Instant::now();
        let mut slot = ToastSlot::new();
        let outcome = CopyOutcome {
            result: Ok(CopyMethod::Native),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        };

        apply_outcome(&outcome, &mut slot, None, now);

        let toast = slot.active().expect("a toast should be showing");
        assert_eq!(toast.kind(), ToastKind::Success);
        assert_eq!(toast.message(), DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn success_outcome_records_the_method() {
        let now = Instant::now();
        let mut collector = DiagnosticsCollector::default();
        let mut slot = ToastSlot::new();
        let outcome = CopyOutcome {
            result: Ok(CopyMethod::Fallback("wl-copy")),
            success_message: "Link copied".to_string(),
        };

        apply_outcome(&outcome, &mut slot, Some(&collector.handle()), now);

        collector.drain();
        let recorded: Vec<_> = collector.iter().map(|e| e.kind().clone()).collect();
        match &recorded[0] {
            DiagnosticEventKind::AppState {
                state: crate::diagnostics::AppStateEvent::CopyCompleted { method },
            } => assert_eq!(method, "wl-copy"),
            other => panic!("expected CopyCompleted, got {other:?}"),
        }
    }

    #[test]
    fn failed_outcome_shows_error_toast_and_logs() {
        let now = Instant::now();
        let mut collector = DiagnosticsCollector::default();
        let mut slot = ToastSlot::new();
        let outcome = CopyOutcome {
            result: Err(ClipboardError::NoFallbackUtility),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        };

        apply_outcome(&outcome, &mut slot, Some(&collector.handle()), now);

        let toast = slot.active().expect("a toast should be showing");
        assert_eq!(toast.kind(), ToastKind::Error);
        assert_eq!(toast.message(), COPY_FAILED_MESSAGE);

        collector.drain();
        // The slot has no diagnostics handle here, so the copier's own log
        // entry is the only error event.
        let errors = collector
            .iter()
            .filter(|e| matches!(e.kind(), DiagnosticEventKind::Error { .. }))
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn copy_method_labels() {
        assert_eq!(CopyMethod::Native.label(), "native");
        assert_eq!(CopyMethod::Fallback("xsel").label(), "xsel");
    }
}
