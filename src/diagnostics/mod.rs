// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting UI activity into an exportable log.
//!
//! Components hold a [`DiagnosticsHandle`] and log warnings, errors, and
//! lifecycle events without blocking; the host owns the
//! [`DiagnosticsCollector`], drains it during its update cycle, and can
//! export the buffered log as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: generic ring buffer with validated capacity
//! - [`DiagnosticEvent`]: captured event with monotonic timestamp
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: bounded-channel
//!   collector pair; sends never block the update loop

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType,
    SerializableEvent, WarningEvent, WarningType,
};
