// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling to named anchors.
//!
//! Hosts register anchor positions in an [`AnchorMap`] as they lay out
//! their content, then ask the [`ScrollState`] to animate the viewport to
//! one of them. Each tick yields the [`AbsoluteOffset`] to forward to
//! `iced::widget::operation::scroll_to`. Unknown anchors are silent no-ops.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use iced::widget::scrollable::AbsoluteOffset;

use crate::config::ScrollDuration;
use crate::ui::easing::ease_out_cubic;

/// Named vertical positions within a scrollable region.
///
/// Names are stored without a leading `#`, so hash-link hrefs resolve
/// directly.
#[derive(Debug, Clone, Default)]
pub struct AnchorMap {
    anchors: BTreeMap<String, f32>,
}

impl AnchorMap {
    /// Creates an empty anchor map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an anchor at the given vertical position.
    ///
    /// Registering an existing name replaces its position.
    pub fn register(&mut self, name: impl AsRef<str>, y: f32) {
        self.anchors.insert(normalize(name.as_ref()).to_string(), y);
    }

    /// Resolves an anchor name (with or without a leading `#`).
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<f32> {
        self.anchors.get(normalize(name)).copied()
    }

    /// Returns the number of registered anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns true if no anchors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

fn normalize(name: &str) -> &str {
    name.strip_prefix('#').unwrap_or(name)
}

/// An in-flight scroll animation.
#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Viewport scroll position and the animation driving it.
#[derive(Debug, Default)]
pub struct ScrollState {
    current: f32,
    duration: ScrollDuration,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Creates a new scroll state with the default animation duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scroll state with a custom animation duration.
    #[must_use]
    pub fn with_duration(duration: ScrollDuration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Begins a smooth scroll to `target`, `offset_px` above the anchor.
    ///
    /// An unknown anchor performs no scroll and raises no error; the return
    /// value reports whether an animation started.
    pub fn scroll_to(
        &mut self,
        anchors: &AnchorMap,
        target: &str,
        offset_px: f32,
        now: Instant,
    ) -> bool {
        let Some(anchor_y) = anchors.resolve(target) else {
            return false;
        };

        let destination = (anchor_y - offset_px).max(0.0);
        self.animation = Some(ScrollAnimation {
            from: self.current,
            to: destination,
            started: now,
            duration: self.duration.value(),
        });
        true
    }

    /// Records the viewport offset reported by the host's scroll events.
    ///
    /// Ignored while an animation is in flight, since those events echo the
    /// animation's own scroll commands.
    pub fn record_offset(&mut self, y: f32) {
        if self.animation.is_none() {
            self.current = y;
        }
    }

    /// Advances the animation, returning the offset to apply this frame.
    ///
    /// Returns `None` when idle. The final frame lands exactly on the
    /// destination and ends the animation.
    pub fn tick(&mut self, now: Instant) -> Option<AbsoluteOffset> {
        let animation = self.animation?;

        let y = if animation.is_complete(now) {
            self.animation = None;
            animation.to
        } else {
            animation.offset_at(now)
        };
        self.current = y;

        Some(AbsoluteOffset { x: 0.0, y })
    }

    /// Returns whether a scroll animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Returns the current vertical offset.
    #[must_use]
    pub fn current_offset(&self) -> f32 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    fn fixture_anchors() -> AnchorMap {
        let mut anchors = AnchorMap::new();
        anchors.register("overview", 0.0);
        anchors.register("#reference", 600.0);
        anchors.register("about", 1400.0);
        anchors
    }

    #[test]
    fn register_and_resolve_ignore_hash_prefix() {
        let anchors = fixture_anchors();
        assert_eq!(anchors.resolve("reference"), Some(600.0));
        assert_eq!(anchors.resolve("#reference"), Some(600.0));
        assert_eq!(anchors.resolve("#overview"), Some(0.0));
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        let start = Instant::now();
        let anchors = fixture_anchors();
        let mut state = ScrollState::new();

        assert!(!state.scroll_to(&anchors, "#missing", 80.0, start));
        assert!(!state.is_animating());
        assert!(state.tick(at(start, 16)).is_none());
    }

    #[test]
    fn scroll_applies_the_header_offset() {
        let start = Instant::now();
        let anchors = fixture_anchors();
        let mut state = ScrollState::with_duration(ScrollDuration::from_millis(200));

        assert!(state.scroll_to(&anchors, "#reference", 80.0, start));

        let final_offset = state.tick(at(start, 200)).expect("animation should yield");
        assert_relative_eq!(final_offset.y, 520.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn destination_clamps_at_the_top() {
        let start = Instant::now();
        let anchors = fixture_anchors();
        let mut state = ScrollState::with_duration(ScrollDuration::from_millis(200));

        state.scroll_to(&anchors, "overview", 80.0, start);
        let final_offset = state.tick(at(start, 200)).expect("animation should yield");
        assert_relative_eq!(final_offset.y, 0.0);
    }

    #[test]
    fn animation_progresses_monotonically() {
        let start = Instant::now();
        let anchors = fixture_anchors();
        let mut state = ScrollState::with_duration(ScrollDuration::from_millis(400));
        state.scroll_to(&anchors, "about", 0.0, start);

        let mut previous = 0.0;
        for ms in [50, 100, 200, 300, 400] {
            let offset = state.tick(at(start, ms)).expect("animating");
            assert!(offset.y >= previous);
            previous = offset.y;
        }
        assert_relative_eq!(previous, 1400.0);
    }

    #[test]
    fn successive_scrolls_start_from_the_current_position() {
        let start = Instant::now();
        let anchors = fixture_anchors();
        let mut state = ScrollState::with_duration(ScrollDuration::from_millis(200));

        state.scroll_to(&anchors, "about", 0.0, start);
        state.tick(at(start, 200));
        assert_relative_eq!(state.current_offset(), 1400.0);

        // Scrolling back starts from 1400, not 0.
        state.scroll_to(&anchors, "overview", 0.0, at(start, 300));
        let mid = state.tick(at(start, 350)).expect("animating");
        assert!(mid.y < 1400.0);
        assert!(mid.y > 0.0);
    }

    #[test]
    fn record_offset_is_ignored_mid_animation() {
        let start = Instant::now();
        let anchors = fixture_anchors();
        let mut state = ScrollState::with_duration(ScrollDuration::from_millis(200));

        state.record_offset(100.0);
        assert_relative_eq!(state.current_offset(), 100.0);

        state.scroll_to(&anchors, "about", 0.0, start);
        state.record_offset(5.0);
        let offset = state.tick(at(start, 100)).expect("animating");
        assert!(offset.y > 100.0);
    }
}
