// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the active notification.
//!
//! Toasts appear as small cards with a kind-colored accent border, an icon,
//! the message text, and a dismiss button. Slide-in/out is expressed as an
//! alpha ramp derived from the slot's phase progress.

use std::time::Instant;

use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

use super::slot::ToastSlot;
use super::toast::ToastKind;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};

/// Messages emitted by the toast widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button was pressed.
    Dismiss,
}

/// Renders the active toast as a card.
///
/// Returns an empty, zero-sized element when the slot is empty.
pub fn view<'a>(slot: &'a ToastSlot, now: Instant) -> Element<'a, Message> {
    let Some(toast) = slot.active() else {
        return empty();
    };

    let progress = slot.slide_progress(now);
    let kind = toast.kind();
    let accent = kind.accent_color();

    let icon = Text::new(kind.icon())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(with_alpha(accent, progress)),
        });

    let message = Text::new(toast.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, progress)),
        });

    let dismiss = button(Text::new("\u{00d7}").size(typography::BODY))
        .on_press(Message::Dismiss)
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [icon] [message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, kind, progress))
        .into()
}

/// Renders the toast overlay, positioned in the top-right corner.
///
/// Stack this over the page content; it takes no space when the slot is
/// empty.
pub fn overlay<'a>(slot: &'a ToastSlot, now: Instant) -> Element<'a, Message> {
    if !slot.has_toast() {
        return empty();
    }

    Container::new(view(slot, now))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::XL)
        .into()
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Style function for the toast card.
///
/// Background and text come from the host theme; the accent border and the
/// light-mode surface tint are the library's literal kind colors.
fn toast_container_style(theme: &Theme, kind: ToastKind, progress: f32) -> container::Style {
    let palette = theme.extended_palette();
    let bg = palette.background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;
    let surface = if is_dark {
        palette.background.weak.color
    } else {
        kind.surface_color()
    };

    container::Style {
        background: Some(iced::Background::Color(with_alpha(surface, progress))),
        border: iced::Border {
            color: with_alpha(kind.accent_color(), progress),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::MD.color, progress),
            ..shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, progress)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: iced::Border::default(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette.background.strong.color
            })),
            text_color: palette.background.base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}
