// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};

use iced_pagekit::config::{ToastDuration, HASH_LINK_OFFSET_PX};
use iced_pagekit::diagnostics::{
    AppStateEvent, DiagnosticEventKind, DiagnosticsCollector,
};
use iced_pagekit::error::ClipboardError;
use iced_pagekit::ui::clipboard::{self, CopyMethod, CopyOutcome};
use iced_pagekit::ui::nav::NavLink;
use iced_pagekit::ui::shell::{Shell, ShellEvent};
use iced_pagekit::ui::toast::{Phase, Toast, ToastKind};

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

fn demo_shell() -> Shell {
    let links = vec![
        NavLink::new("Home", "../"),
        NavLink::new("Guide", "guide.html"),
        NavLink::new("Reference", "#reference"),
    ];
    let mut shell = Shell::new(links, "/guide.html");
    shell.anchors.register("overview", 0.0);
    shell.anchors.register("reference", 900.0);
    shell
}

#[test]
fn shell_bootstrap_highlights_and_announces_once() {
    let mut collector = DiagnosticsCollector::default();
    let mut shell = demo_shell();
    shell.set_diagnostics(collector.handle());

    // 1. Bootstrap runs once, no matter how often it is invoked.
    shell.initialize();
    shell.initialize();

    let active: Vec<&str> = shell
        .links()
        .iter()
        .filter(|link| link.is_active())
        .map(NavLink::label)
        .collect();
    assert_eq!(active, vec!["Guide"]);

    // 2. Exactly one initialization announcement reaches diagnostics.
    collector.drain();
    let announcements = collector
        .iter()
        .filter(|event| {
            matches!(
                event.kind(),
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::ShellInitialized { link_count: 3 }
                }
            )
        })
        .count();
    assert_eq!(announcements, 1);
}

#[test]
fn hash_link_scrolls_while_page_link_navigates() {
    let start = Instant::now();
    let mut shell = demo_shell();
    shell.initialize();

    // 1. A hash link is intercepted into a smooth scroll.
    assert_eq!(shell.on_link_activated("#reference", start), ShellEvent::None);
    assert!(shell.scroll.is_animating());

    // 2. The scroll settles the header offset above the anchor.
    let mut last_offset = 0.0;
    for ms in [16, 100, 200, 400, 800] {
        if let Some(offset) = shell.tick(at(start, ms)) {
            assert!(offset.y >= last_offset);
            last_offset = offset.y;
        }
    }
    assert!((last_offset - (900.0 - HASH_LINK_OFFSET_PX)).abs() < 0.5);
    assert!(!shell.scroll.is_animating());

    // 3. A page link is handed back to the host.
    assert_eq!(
        shell.on_link_activated("../", at(start, 900)),
        ShellEvent::Navigate("../".to_string())
    );
    shell.navigate("/");
    let active: Vec<&str> = shell
        .links()
        .iter()
        .filter(|link| link.is_active())
        .map(NavLink::label)
        .collect();
    assert_eq!(active, vec!["Home"]);
}

#[test]
fn toast_lifecycle_through_the_shell_tick() {
    let start = Instant::now();
    let mut shell = demo_shell();
    shell.initialize();

    shell
        .toasts
        .show(Toast::success("x").with_duration(ToastDuration::from_millis(100)), start);

    // Present and visible one frame in.
    shell.tick(at(start, 16));
    assert_eq!(shell.toasts.phase(), Some(Phase::Visible));

    // Loses the visible state at the display duration.
    shell.tick(at(start, 100));
    assert_eq!(shell.toasts.phase(), Some(Phase::Leaving));

    // Fully removed after the fixed 300ms exit transition.
    shell.tick(at(start, 400));
    assert!(!shell.toasts.has_toast());
    assert!(!shell.is_animating());
}

#[test]
fn rapid_toasts_keep_the_single_slot_invariant() {
    let start = Instant::now();
    let mut shell = demo_shell();

    for i in 0..20u64 {
        shell.toasts.show(
            Toast::new(
                if i % 2 == 0 { ToastKind::Info } else { ToastKind::Error },
                format!("burst {i}"),
            ),
            at(start, i),
        );
        shell.tick(at(start, i));
        assert!(shell.toasts.active().is_some());
    }

    assert_eq!(
        shell.toasts.active().map(|toast| toast.message().to_string()),
        Some("burst 19".to_string())
    );
}

#[test]
fn copy_outcomes_surface_as_toasts_and_diagnostics() {
    let start = Instant::now();
    let mut collector = DiagnosticsCollector::default();
    let mut shell = demo_shell();
    shell.set_diagnostics(collector.handle());

    // 1. Success: one success toast, the mechanism recorded.
    let success = CopyOutcome {
        result: Ok(CopyMethod::Native),
        success_message: clipboard::DEFAULT_SUCCESS_MESSAGE.to_string(),
    };
    clipboard::apply_outcome(&success, &mut shell.toasts, Some(&collector.handle()), start);
    assert_eq!(
        shell.toasts.active().map(Toast::kind),
        Some(ToastKind::Success)
    );

    // 2. Failure: one error toast plus an error event; nothing propagates.
    let failure = CopyOutcome {
        result: Err(ClipboardError::NoFallbackUtility),
        success_message: clipboard::DEFAULT_SUCCESS_MESSAGE.to_string(),
    };
    clipboard::apply_outcome(
        &failure,
        &mut shell.toasts,
        Some(&collector.handle()),
        at(start, 10),
    );
    let toast = shell.toasts.active().expect("error toast should be showing");
    assert_eq!(toast.kind(), ToastKind::Error);
    assert_eq!(toast.message(), clipboard::COPY_FAILED_MESSAGE);

    collector.drain();
    let copy_completions = collector
        .iter()
        .filter(|event| {
            matches!(
                event.kind(),
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::CopyCompleted { .. }
                }
            )
        })
        .count();
    let errors = collector
        .iter()
        .filter(|event| matches!(event.kind(), DiagnosticEventKind::Error { .. }))
        .count();
    assert_eq!(copy_completions, 1);
    // The copier logs the failure and the slot logs the error toast.
    assert_eq!(errors, 2);
}

#[test]
fn missing_anchor_and_missing_page_degrade_silently() {
    let start = Instant::now();
    let mut shell = demo_shell();
    shell.initialize();

    // Unknown anchors neither scroll nor error.
    assert_eq!(shell.on_link_activated("#missing", start), ShellEvent::None);
    assert!(shell.tick(at(start, 16)).is_none());

    // A path matching no link simply leaves everything inactive.
    shell.navigate("/elsewhere.html");
    assert!(shell.links().iter().all(|link| !link.is_active()));
}

#[test]
fn exported_report_reflects_the_session() {
    let start = Instant::now();
    let mut collector = DiagnosticsCollector::default();
    let mut shell = demo_shell();
    shell.set_diagnostics(collector.handle());

    shell.initialize();
    shell.toasts.show(Toast::error("boom"), start);
    shell.on_link_activated("#nowhere", at(start, 5));

    collector.drain();
    let json = collector.export_json().expect("export should succeed");
    assert!(json.contains("shell_initialized"));
    assert!(json.contains("boom"));
    assert!(json.contains("missing_anchor"));
}
