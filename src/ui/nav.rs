// SPDX-License-Identifier: MPL-2.0
//! Navigation links and active-link highlighting.
//!
//! Each link's `active` flag is recomputed independently from its own match
//! against the current page path; no mutual exclusion is enforced. Matching
//! compares normalized path segments exactly, so overlapping names such as
//! `docs` and `docs-legacy` never activate each other. A root link (`../`,
//! `/`, or empty) matches the root path.

use iced::widget::{button, Row, Text};
use iced::{Border, Element, Length, Theme};

use crate::ui::design_tokens::{radius, sizing, spacing, typography};

/// A navigation link with its computed active state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    label: String,
    href: String,
    active: bool,
}

impl NavLink {
    /// Creates an inactive link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the link target.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns whether the link matches the current page.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Messages emitted by the link row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A link was pressed, carrying its href.
    Activated(String),
}

/// Recomputes every link's active flag against the current page path.
pub fn set_active_links(links: &mut [NavLink], current_path: &str) {
    for link in links {
        link.active = matches_path(&link.href, current_path);
    }
}

/// Returns whether `href` designates the page at `current_path`.
///
/// Pure fragment links never match; they target anchors within whatever
/// page is showing.
#[must_use]
pub fn matches_path(href: &str, current_path: &str) -> bool {
    if href.starts_with('#') {
        return false;
    }
    path_segments(href) == path_segments(current_path)
}

/// Splits a path into its meaningful segments.
///
/// Drops empty segments, `.` and `..` components, any fragment or query
/// suffix, and a trailing `index.html`, so `../docs/` and `/docs/index.html`
/// compare equal.
fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['#', '?']).next().unwrap_or("");
    let mut segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect();

    if segments.last() == Some(&"index.html") {
        segments.pop();
    }
    segments
}

/// Renders the navigation link row.
pub fn view(links: &[NavLink]) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for link in links {
        let label = Text::new(link.label()).size(typography::BODY);
        let styled = if link.is_active() {
            button(label).style(active_link_style)
        } else {
            button(label).style(link_style)
        };
        row = row.push(
            styled
                .on_press(Message::Activated(link.href().to_string()))
                .height(Length::Fixed(sizing::NAV_LINK_HEIGHT))
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    row.into()
}

/// Style function for inactive links.
fn link_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Style function for the link matching the current page.
fn active_link_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.weak.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}
