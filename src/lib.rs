// SPDX-License-Identifier: MPL-2.0
//! `iced_pagekit` is a set of shared UI conveniences for applications built
//! with the Iced GUI framework: toast notifications, clipboard copy with a
//! legacy fallback, smooth scrolling to anchors, opacity fades, and
//! active-navigation-link highlighting, bundled behind a caller-owned page
//! shell with a one-shot bootstrap.

#![doc(html_root_url = "https://docs.rs/iced_pagekit/0.2.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
