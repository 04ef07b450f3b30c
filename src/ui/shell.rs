// SPDX-License-Identifier: MPL-2.0
//! Page shell: one-shot bootstrap and event wiring.
//!
//! The [`Shell`] is a caller-owned instance bundling the toast slot, the
//! scroll helper, the anchor registry, and the navigation links. It
//! intercepts hash-link activations into smooth scrolls, tracks the
//! keyboard-navigation focus marker, and highlights the link matching the
//! current page path. `initialize` is idempotent and effective exactly once
//! per shell lifetime.

use std::time::{Duration, Instant};

use iced::widget::scrollable::AbsoluteOffset;
use iced::{keyboard, mouse, time, Subscription};

use super::nav::{self, NavLink};
use super::scroll::{AnchorMap, ScrollState};
use super::toast::ToastSlot;
use crate::config::{HASH_LINK_OFFSET_PX, TICK_INTERVAL_MS};
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, WarningEvent, WarningType};

/// Events propagated to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Handled internally; nothing for the host to do.
    None,
    /// A non-hash link was activated; the host decides how to navigate.
    Navigate(String),
}

/// Caller-owned bundle of the page-level UI conveniences.
#[derive(Debug, Default)]
pub struct Shell {
    /// Toast notifications.
    pub toasts: ToastSlot,
    /// Smooth-scroll state.
    pub scroll: ScrollState,
    /// Anchor positions registered by the host layout.
    pub anchors: AnchorMap,
    links: Vec<NavLink>,
    current_path: String,
    keyboard_navigation: bool,
    initialized: bool,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Shell {
    /// Creates a shell for the given links and current page path.
    pub fn new(links: Vec<NavLink>, current_path: impl Into<String>) -> Self {
        Self {
            links,
            current_path: current_path.into(),
            ..Self::default()
        }
    }

    /// Attaches a diagnostics handle, shared with the toast slot.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.toasts.set_diagnostics(handle.clone());
        self.diagnostics = Some(handle);
    }

    /// Runs the one-time bootstrap: highlights the matching navigation
    /// link and announces initialization to diagnostics.
    ///
    /// Subsequent calls are no-ops.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        nav::set_active_links(&mut self.links, &self.current_path);

        if let Some(handle) = &self.diagnostics {
            handle.log_state(AppStateEvent::ShellInitialized {
                link_count: self.links.len(),
            });
        }
    }

    /// Returns whether `initialize` has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the navigation links with their active flags.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Returns the current page path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Updates the current page path and re-highlights the links.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        nav::set_active_links(&mut self.links, &self.current_path);
    }

    /// Handles a link activation.
    ///
    /// Hash links are intercepted into a smooth scroll that leaves the
    /// fixed header offset above the anchor; anything else is handed back
    /// to the host as [`ShellEvent::Navigate`].
    pub fn on_link_activated(&mut self, href: &str, now: Instant) -> ShellEvent {
        if let Some(anchor) = href.strip_prefix('#') {
            let started = self
                .scroll
                .scroll_to(&self.anchors, anchor, HASH_LINK_OFFSET_PX, now);
            if !started {
                if let Some(handle) = &self.diagnostics {
                    handle.log_warning(WarningEvent::new(
                        WarningType::MissingAnchor,
                        format!("no anchor registered for '#{anchor}'"),
                    ));
                }
            }
            return ShellEvent::None;
        }

        ShellEvent::Navigate(href.to_string())
    }

    /// Routes a raw runtime event into the focus-marker state.
    ///
    /// Tab marks the page as keyboard-navigated; any mouse press clears
    /// the marker.
    pub fn handle_event(&mut self, event: &iced::Event) {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Tab),
                ..
            }) => {
                self.keyboard_navigation = true;
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(_)) => {
                self.keyboard_navigation = false;
            }
            _ => {}
        }
    }

    /// Returns whether the keyboard-navigation marker is set.
    #[must_use]
    pub fn keyboard_navigation(&self) -> bool {
        self.keyboard_navigation
    }

    /// Advances the shell's animations, returning a scroll offset to apply.
    pub fn tick(&mut self, now: Instant) -> Option<AbsoluteOffset> {
        self.toasts.tick(now);
        self.scroll.tick(now)
    }

    /// Returns whether anything needs animation ticks right now.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.toasts.has_toast() || self.scroll.is_animating()
    }
}

/// Periodic tick subscription while something is animating.
///
/// Returns an empty subscription otherwise, so an idle page schedules no
/// wakeups.
pub fn tick_subscription(animating: bool) -> Subscription<Instant> {
    if animating {
        time::every(Duration::from_millis(TICK_INTERVAL_MS))
    } else {
        Subscription::none()
    }
}
