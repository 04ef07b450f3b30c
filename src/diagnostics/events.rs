// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events are recorded with a monotonic timestamp and serialized relative to
//! the collector's start time, so exported reports carry no wall-clock data
//! beyond the report's own generation stamp.

use std::time::Instant;

use serde::Serialize;

/// Category of a warning event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A scroll target was requested for an anchor that is not registered.
    MissingAnchor,
    /// Uncategorized warning.
    Other,
}

/// Category of an error event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Clipboard write failure (native path and fallback both failed).
    Clipboard,
    /// Uncategorized error.
    Other,
}

/// A warning that did not block an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Application lifecycle events worth keeping in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The page shell finished its one-time initialization.
    ShellInitialized { link_count: usize },
    /// A clipboard copy completed, recording which mechanism succeeded.
    CopyCompleted { method: String },
}

/// The different kinds of diagnostic events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    AppState { state: AppStateEvent },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A diagnostic event with its monotonic capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    recorded_at: Instant,
    kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new event stamped with the current monotonic time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            recorded_at: Instant::now(),
            kind,
        }
    }

    /// Returns when the event was recorded.
    #[must_use]
    pub fn recorded_at(&self) -> Instant {
        self.recorded_at
    }

    /// Returns the event kind.
    #[must_use]
    pub fn kind(&self) -> &DiagnosticEventKind {
        &self.kind
    }
}

/// An event as it appears in an exported report, with its timestamp
/// expressed in milliseconds since collection start.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    /// Converts an event to its exportable form, relative to `collection_start`.
    #[must_use]
    pub fn from_event(event: &DiagnosticEvent, collection_start: Instant) -> Self {
        let elapsed = event.recorded_at.saturating_duration_since(collection_start);
        // Report timestamps saturate at u64::MAX ms, far beyond any session.
        let timestamp_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        Self {
            timestamp_ms,
            kind: event.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn event_records_kind() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::MissingAnchor, "no anchor 'intro'"),
        });

        match event.kind() {
            DiagnosticEventKind::Warning { event } => {
                assert_eq!(event.warning_type, WarningType::MissingAnchor);
                assert!(event.message.contains("intro"));
            }
            _ => panic!("expected Warning"),
        }
    }

    #[test]
    fn serializable_event_is_relative_to_collection_start() {
        let start = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::Clipboard, "denied"),
        });

        let serializable = SerializableEvent::from_event(&event, start);
        // Recorded after `start`, so the offset is small but non-negative.
        assert!(serializable.timestamp_ms < 10_000);
    }

    #[test]
    fn serializable_event_saturates_before_collection_start() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::AppState {
            state: AppStateEvent::ShellInitialized { link_count: 3 },
        });
        let late_start = Instant::now() + Duration::from_secs(60);

        let serializable = SerializableEvent::from_event(&event, late_start);
        assert_eq!(serializable.timestamp_ms, 0);
    }

    #[test]
    fn event_kinds_serialize_with_type_tag() {
        let kind = DiagnosticEventKind::AppState {
            state: AppStateEvent::CopyCompleted {
                method: "native".to_string(),
            },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");

        assert!(json.contains("\"type\":\"app_state\""));
        assert!(json.contains("\"state\":\"copy_completed\""));
        assert!(json.contains("\"method\":\"native\""));
    }
}
