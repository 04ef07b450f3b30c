// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector receives events through a bounded channel and stores them
//! in a memory-bounded circular buffer. UI components hold a cheap
//! [`DiagnosticsHandle`] and log without blocking; the host drains the
//! channel whenever convenient (typically once per update cycle).

use std::time::Instant;

use chrono::Utc;
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, SerializableEvent,
    WarningEvent,
};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across components.
/// Events are sent via a bounded channel and dropped if the channel is
/// full, so logging never blocks the update loop.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a warning event. Non-blocking; drops the event when full.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event. Non-blocking; drops the event when full.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an application state change. Non-blocking; drops the event when full.
    pub fn log_state(&self, state: AppStateEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::AppState { state });
        let _ = self.event_tx.try_send(event);
    }
}

/// An exportable snapshot of the collected event log.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    /// RFC 3339 stamp of when the report was generated.
    pub generated_at: String,
    /// Milliseconds since the collector was created.
    pub collection_duration_ms: u64,
    /// Number of events in the report.
    pub event_count: usize,
    /// The events, oldest first, with timestamps relative to collection start.
    pub events: Vec<SerializableEvent>,
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    /// Creates a new collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
        }
    }

    /// Returns a handle components can use to log events.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves pending events from the channel into the buffer.
    ///
    /// Returns the number of events drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events have been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over buffered events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Clears the buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds an exportable report from the buffered events.
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::from_event(event, self.started_at))
            .collect();

        let duration = self.started_at.elapsed();
        DiagnosticReport {
            generated_at: Utc::now().to_rfc3339(),
            collection_duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            event_count: events.len(),
            events,
        }
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.build_report())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn collector_new_creates_empty_buffer() {
        let collector = DiagnosticsCollector::default();
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
    }

    #[test]
    fn handle_events_arrive_after_drain() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new(WarningType::MissingAnchor, "no anchor"));
        handle.log_error(ErrorEvent::new(ErrorType::Clipboard, "denied"));
        assert!(collector.is_empty());

        let drained = collector.drain();
        assert_eq!(drained, 2);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn drain_preserves_event_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_state(AppStateEvent::ShellInitialized { link_count: 2 });
        handle.log_error(ErrorEvent::new(ErrorType::Other, "later"));
        collector.drain();

        let kinds: Vec<_> = collector.iter().map(DiagnosticEvent::kind).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::AppState { .. }));
        assert!(matches!(kinds[1], DiagnosticEventKind::Error { .. }));
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.log_warning(WarningEvent::new(WarningType::Other, "a"));
        second.log_warning(WarningEvent::new(WarningType::Other, "b"));

        assert_eq!(collector.drain(), 2);
    }

    #[test]
    fn report_counts_match_buffer() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for i in 0..3 {
            handle.log_error(ErrorEvent::new(ErrorType::Other, format!("error {i}")));
        }
        collector.drain();

        let report = collector.build_report();
        assert_eq!(report.event_count, 3);
        assert_eq!(report.events.len(), 3);
    }

    #[test]
    fn export_json_contains_event_fields() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_error(ErrorEvent::new(ErrorType::Clipboard, "copy failed"));
        collector.drain();

        let json = collector.export_json().expect("export should succeed");
        assert!(json.contains("\"type\": \"error\""));
        assert!(json.contains("copy failed"));
        assert!(json.contains("generated_at"));
    }

    #[test]
    fn clear_removes_buffered_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new(WarningType::Other, "w"));
        collector.drain();
        collector.clear();

        assert!(collector.is_empty());
    }
}
