// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{alignment, Border, Color, Element, Length, Theme};

use super::{App, Message, Section, CONTENT_SCROLLABLE_ID, SECTIONS, SECTION_HEIGHT, SNIPPETS};
use crate::ui::design_tokens::{border, radius, spacing, typography};
use crate::ui::toast::{self, ToastKind};
use crate::ui::nav;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let mut page = Column::new().push(view_header(app));
    if let Some(banner) = &app.banner {
        page = page.push(view_banner(banner.fade.opacity(app.last_tick)));
    }
    page = page.push(view_content());

    let overlay = toast::overlay(&app.shell.toasts, app.last_tick).map(Message::Toast);

    Stack::new()
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .into()
}

fn view_header(app: &App) -> Element<'_, Message> {
    let title = Text::new("Iced PageKit").size(typography::TITLE_MD);
    let links = nav::view(app.shell.links()).map(Message::Nav);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(links);

    if app.shell.keyboard_navigation() {
        row = row.push(keyboard_badge());
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(header_style)
        .into()
}

/// Marker shown while the page is keyboard-navigated, the demo's stand-in
/// for focus-outline styling.
fn keyboard_badge<'a>() -> Element<'a, Message> {
    Container::new(Text::new("Keyboard navigation").size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            border: Border {
                color: theme.extended_palette().primary.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            text_color: Some(theme.extended_palette().primary.strong.color),
            ..Default::default()
        })
        .into()
}

fn view_banner<'a>(opacity: f32) -> Element<'a, Message> {
    let message = Text::new("Welcome! This demo exercises every PageKit helper.")
        .size(typography::BODY)
        .style(move |theme: &Theme| iced::widget::text::Style {
            color: Some(with_alpha(theme.extended_palette().primary.weak.text, opacity)),
        });

    let dismiss = button(Text::new("Dismiss").size(typography::BODY_SM))
        .on_press(Message::DismissBanner)
        .padding([spacing::XXS, spacing::XS]);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| banner_style(theme, opacity))
        .into()
}

fn view_content<'a>() -> Element<'a, Message> {
    let mut sections = Column::new();
    for section in SECTIONS {
        sections = sections.push(view_section(section));
    }

    Scrollable::new(sections)
        .id(Id::new(CONTENT_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y))
        .into()
}

fn view_section<'a>(section: &'static Section) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(section.title).size(typography::TITLE_SM))
        .push(Text::new(section.body).size(typography::BODY));

    match section.id {
        "overview" => body = body.push(toast_demo_row()),
        "reference" => body = body.push(snippet_list()),
        _ => {}
    }

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_HEIGHT))
        .padding(spacing::LG)
        .into()
}

fn toast_demo_row<'a>() -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for kind in [
        ToastKind::Success,
        ToastKind::Warning,
        ToastKind::Error,
        ToastKind::Info,
    ] {
        row = row.push(
            button(Text::new(kind.as_str()).size(typography::BODY_SM))
                .on_press(Message::ShowToast(kind))
                .padding([spacing::XXS, spacing::SM]),
        );
    }
    row.into()
}

fn snippet_list<'a>() -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    for (index, (label, snippet)) in SNIPPETS.iter().enumerate() {
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(*label).size(typography::BODY_SM))
            .push(
                Container::new(
                    Text::new(*snippet)
                        .size(typography::BODY_SM)
                        .font(iced::Font::MONOSPACE),
                )
                .padding([spacing::XXS, spacing::XS])
                .style(snippet_style),
            )
            .push(
                button(Text::new("Copy").size(typography::BODY_SM))
                    .on_press(Message::CopySnippet(index))
                    .padding([spacing::XXS, spacing::XS]),
            );
        column = column.push(row);
    }
    column.into()
}

fn snippet_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn header_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

fn banner_style(theme: &Theme, opacity: f32) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            palette.primary.weak.color,
            opacity,
        ))),
        text_color: Some(with_alpha(palette.primary.weak.text, opacity)),
        ..Default::default()
    }
}
