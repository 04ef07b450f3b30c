// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the demo application.

use std::time::Instant;

use iced::widget::{operation, Id};
use iced::Task;

use super::{App, Message, CONTENT_SCROLLABLE_ID, SNIPPETS};
use crate::config::FadeDuration;
use crate::ui::fade::{Fade, FadeEvent};
use crate::ui::shell::ShellEvent;
use crate::ui::toast::{self, Toast, ToastKind};
use crate::ui::{clipboard, nav};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    let now = Instant::now();

    match message {
        Message::Nav(nav::Message::Activated(href)) => {
            if let ShellEvent::Navigate(path) = app.shell.on_link_activated(&href, now) {
                // The demo has no other pages; page links navigate in place
                // so the highlighting change is observable.
                app.shell.navigate(path);
            }
            Task::none()
        }
        Message::Toast(toast::Message::Dismiss) => {
            app.shell.toasts.dismiss(now);
            Task::none()
        }
        Message::ShowToast(kind) => {
            app.shell.toasts.show(Toast::new(kind, demo_toast_message(kind)), now);
            Task::none()
        }
        Message::CopySnippet(index) => {
            let Some((_, snippet)) = SNIPPETS.get(index) else {
                return Task::none();
            };
            clipboard::copy_task(
                (*snippet).to_string(),
                clipboard::DEFAULT_SUCCESS_MESSAGE.to_string(),
                Message::CopyCompleted,
            )
        }
        Message::CopyCompleted(outcome) => {
            let handle = app.diagnostics.handle();
            clipboard::apply_outcome(&outcome, &mut app.shell.toasts, Some(&handle), now);
            app.diagnostics.drain();
            Task::none()
        }
        Message::DismissBanner => {
            if let Some(banner) = &mut app.banner {
                if !banner.dismissing {
                    let opacity = banner.fade.opacity(now);
                    banner.fade = Fade::fade_out_from(opacity, FadeDuration::default(), now);
                    banner.dismissing = true;
                }
            }
            Task::none()
        }
        Message::Tick(tick) => {
            app.last_tick = tick;

            if let Some(banner) = &mut app.banner {
                if banner.fade.tick(tick) == Some(FadeEvent::FadedOut) {
                    app.banner = None;
                }
            }

            app.diagnostics.drain();

            if let Some(offset) = app.shell.tick(tick) {
                return operation::scroll_to(Id::new(CONTENT_SCROLLABLE_ID), offset);
            }
            Task::none()
        }
        Message::Scrolled(y) => {
            app.shell.scroll.record_offset(y);
            Task::none()
        }
        Message::RawEvent(event) => {
            app.shell.handle_event(&event);
            Task::none()
        }
    }
}

fn demo_toast_message(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "Changes saved successfully",
        ToastKind::Warning => "Preview may be out of date",
        ToastKind::Error => "Something went wrong",
        ToastKind::Info => "A new version is available",
    }
}
