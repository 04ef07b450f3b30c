// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`ToastSlot`] owns zero or one active toast and drives it through
//! its display phases from an injected monotonic clock, so hosts (and
//! tests) control timing explicitly. Showing a new toast evicts any
//! current one immediately, without an exit animation.

use std::time::{Duration, Instant};

use super::toast::{Toast, ToastKind};
use crate::config::{FRAME_MS, TOAST_ENTER_TRANSITION_MS, TOAST_EXIT_TRANSITION_MS};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::ui::easing::ease_out_cubic;

/// Display phase of the active toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted but not yet painted; the slide-in starts on the next tick.
    Entering,
    /// Sliding in or fully shown.
    Visible,
    /// Sliding out; removed once the exit transition elapses.
    Leaving,
}

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    created_at: Instant,
    phase: Phase,
    phase_since: Instant,
}

/// Single-slot toast manager.
///
/// `show` and `dismiss` are the only mutators; `tick` advances the phase
/// machine. Warning and error toasts are logged to diagnostics when a
/// handle is attached.
#[derive(Debug, Default)]
pub struct ToastSlot {
    active: Option<ActiveToast>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastSlot {
    /// Creates a new empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle for logging warning and error toasts.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a toast, evicting any current one immediately.
    ///
    /// The evicted toast gets no exit animation; the incoming toast starts
    /// in [`Phase::Entering`] and slides in on the next tick.
    pub fn show(&mut self, toast: Toast, now: Instant) {
        if let Some(handle) = &self.diagnostics {
            match toast.kind() {
                ToastKind::Warning => {
                    handle.log_warning(WarningEvent::new(WarningType::Other, toast.message()));
                }
                ToastKind::Error => {
                    handle.log_error(ErrorEvent::new(ErrorType::Other, toast.message()));
                }
                ToastKind::Success | ToastKind::Info => {}
            }
        }

        self.active = Some(ActiveToast {
            toast,
            created_at: now,
            phase: Phase::Entering,
            phase_since: now,
        });
    }

    /// Begins the exit transition of the active toast, if any.
    pub fn dismiss(&mut self, now: Instant) {
        if let Some(active) = &mut self.active {
            if active.phase != Phase::Leaving {
                active.phase = Phase::Leaving;
                active.phase_since = now;
            }
        }
    }

    /// Advances the phase machine.
    ///
    /// Transitions happen at: one frame after creation (`Entering` →
    /// `Visible`), the display duration after creation (`Visible` →
    /// `Leaving`), and the fixed exit transition after leaving began
    /// (removal). A large tick gap may cross several boundaries at once.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let Some(active) = &mut self.active else { return };

            match active.phase {
                Phase::Entering => {
                    if now.duration_since(active.created_at) < Duration::from_millis(FRAME_MS) {
                        return;
                    }
                    active.phase = Phase::Visible;
                    active.phase_since = now;
                }
                Phase::Visible => {
                    if now.duration_since(active.created_at) < active.toast.duration().value() {
                        return;
                    }
                    active.phase = Phase::Leaving;
                    active.phase_since = now;
                    return;
                }
                Phase::Leaving => {
                    if now.duration_since(active.phase_since)
                        < Duration::from_millis(TOAST_EXIT_TRANSITION_MS)
                    {
                        return;
                    }
                    self.active = None;
                    return;
                }
            }
        }
    }

    /// Returns the active toast, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Toast> {
        self.active.as_ref().map(|a| &a.toast)
    }

    /// Returns the active toast's phase, if any.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.active.as_ref().map(|a| a.phase)
    }

    /// Returns whether a toast occupies the slot.
    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.active.is_some()
    }

    /// Returns whether the active toast is in its visible state.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase() == Some(Phase::Visible)
    }

    /// Slide-in progress of the active toast: 0.0 fully off-screen,
    /// 1.0 fully shown.
    #[must_use]
    pub fn slide_progress(&self, now: Instant) -> f32 {
        let Some(active) = &self.active else {
            return 0.0;
        };

        let elapsed = now.duration_since(active.phase_since);
        match active.phase {
            Phase::Entering => 0.0,
            Phase::Visible => ease_out_cubic(
                elapsed.as_secs_f32() / millis_f32(TOAST_ENTER_TRANSITION_MS),
            ),
            Phase::Leaving => {
                1.0 - ease_out_cubic(elapsed.as_secs_f32() / millis_f32(TOAST_EXIT_TRANSITION_MS))
            }
        }
    }
}

fn millis_f32(ms: u64) -> f32 {
    Duration::from_millis(ms).as_secs_f32()
}
