// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring every PageKit helper into a small multi-section
//! page: navigation with active-link highlighting, hash links that smooth-
//! scroll to their sections, copy-snippet buttons, toast demos, and a
//! dismissible fading banner.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use std::time::Instant;

use iced::{Element, Subscription, Task, Theme};

use crate::diagnostics::DiagnosticsCollector;
use crate::ui::fade::Fade;
use crate::ui::nav::NavLink;
use crate::ui::shell::{self, Shell};

/// One section of the demo page.
pub(crate) struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub(crate) const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "Overview",
        body: "PageKit bundles the small conveniences shared across pages: \
               toasts, clipboard copy, smooth scrolling, fades, and \
               navigation highlighting. Try the toast kinds below.",
    },
    Section {
        id: "reference",
        title: "Reference",
        body: "Each helper is an independent value owned by your \
               application state. Copy a snippet to get started.",
    },
    Section {
        id: "about",
        title: "About",
        body: "The shell intercepts hash links into smooth scrolls, tracks \
               keyboard navigation, and highlights the current page's link.",
    },
];

/// Copyable snippets shown in the reference section.
pub(crate) const SNIPPETS: &[(&str, &str)] = &[
    ("Add the dependency", "iced_pagekit = \"0.2\""),
    ("Create a shell", "let mut shell = Shell::new(links, \"/guide.html\");"),
];

/// Fixed height of each demo section, which makes anchor positions exact.
pub(crate) const SECTION_HEIGHT: f32 = 560.0;

/// Id of the content scrollable the smooth-scroll helper drives.
pub(crate) const CONTENT_SCROLLABLE_ID: &str = "pagekit-demo-content";

/// Theme selection from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    fn parse(flag: Option<&str>) -> Self {
        match flag {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// The dismissible welcome banner and its fade state.
struct Banner {
    fade: Fade,
    dismissing: bool,
}

impl Banner {
    fn new() -> Self {
        Self {
            fade: Fade::fade_in(crate::config::FadeDuration::default()),
            dismissing: false,
        }
    }
}

/// Root application state bridging the shell, diagnostics, and the banner.
pub struct App {
    shell: Shell,
    diagnostics: DiagnosticsCollector,
    theme_mode: ThemeMode,
    banner: Option<Banner>,
    /// Clock of the most recent tick; the view renders against it.
    last_tick: Instant,
}

impl App {
    /// Initializes application state from CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let links = vec![
            NavLink::new("Home", "../"),
            NavLink::new("Guide", "guide.html"),
            NavLink::new("Overview", "#overview"),
            NavLink::new("Reference", "#reference"),
            NavLink::new("About", "#about"),
        ];
        let path = flags.path.unwrap_or_else(|| "/guide.html".to_string());

        let diagnostics = DiagnosticsCollector::default();
        let mut shell = Shell::new(links, path);
        shell.set_diagnostics(diagnostics.handle());
        for (index, section) in SECTIONS.iter().enumerate() {
            shell.anchors.register(section.id, index as f32 * SECTION_HEIGHT);
        }
        shell.initialize();

        let app = App {
            shell,
            diagnostics,
            theme_mode: ThemeMode::parse(flags.theme.as_deref()),
            banner: Some(Banner::new()),
            last_tick: Instant::now(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced PageKit Demo".to_string()
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = iced::event::listen().map(Message::RawEvent);

        let banner_animating = self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.fade.is_animating(self.last_tick));
        let ticks = shell::tick_subscription(self.shell.is_animating() || banner_animating)
            .map(Message::Tick);

        Subscription::batch([events, ticks])
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}
