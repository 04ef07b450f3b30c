// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use std::time::Instant;

use crate::ui::clipboard::CopyOutcome;
use crate::ui::toast::ToastKind;
use crate::ui::{nav, toast};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A navigation link was pressed.
    Nav(nav::Message),
    /// The active toast's dismiss button was pressed.
    Toast(toast::Message),
    /// One of the demo buttons requested a toast of the given kind.
    ShowToast(ToastKind),
    /// A copy button was pressed for the snippet at this index.
    CopySnippet(usize),
    /// A clipboard copy finished.
    CopyCompleted(CopyOutcome),
    /// The welcome banner's dismiss button was pressed.
    DismissBanner,
    /// Periodic animation tick.
    Tick(Instant),
    /// The content scrollable reported a new offset.
    Scrolled(f32),
    /// A raw runtime event for the shell's focus-marker tracking.
    RawEvent(iced::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme override (`light` or `dark`).
    pub theme: Option<String>,
    /// Optional page path used for navigation highlighting.
    pub path: Option<String>,
}
