// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.

use iced::Color;

use crate::config::ToastDuration;
use crate::ui::design_tokens::palette;

/// Kind of a toast, determining its accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Something degraded but didn't block (orange).
    Warning,
    /// Operation failed (red).
    Error,
    /// Neutral information (blue).
    Info,
}

impl ToastKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Warning => palette::WARNING_500,
            ToastKind::Error => palette::ERROR_500,
            ToastKind::Info => palette::INFO_500,
        }
    }

    /// Returns the surface tint drawn behind the accent.
    #[must_use]
    pub fn surface_color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_50,
            ToastKind::Warning => palette::WARNING_50,
            ToastKind::Error => palette::ERROR_50,
            ToastKind::Info => palette::INFO_50,
        }
    }

    /// Returns the icon glyph for this kind.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2713}",
            ToastKind::Warning => "\u{26a0}",
            ToastKind::Error => "\u{2717}",
            ToastKind::Info => "i",
        }
    }

    /// Returns the kind's name for diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

/// A transient notification banner.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    duration: ToastDuration,
}

impl Toast {
    /// Creates a new toast with the given kind and message.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: ToastDuration::default(),
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the display duration.
    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }
}
