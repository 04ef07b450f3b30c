// SPDX-License-Identifier: MPL-2.0
//! Opacity fade transitions.
//!
//! A [`Fade`] interpolates an element's opacity over a fixed duration.
//! Fading in holds opacity at zero until the first tick so the transition
//! has a starting frame; fading out begins immediately and emits a one-shot
//! [`FadeEvent::FadedOut`] from `tick` once the duration has elapsed. The
//! host maps that event to whatever should happen next (hiding, removal).

use std::time::{Duration, Instant};

use crate::config::FadeDuration;
use crate::ui::easing::ease_out_cubic;

/// Completion signal emitted by [`Fade::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    /// A fade-out reached zero opacity. Emitted exactly once.
    FadedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    In,
    Out,
}

/// An opacity transition in flight.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    direction: Direction,
    from: f32,
    to: f32,
    duration: Duration,
    /// Set on the first tick for fade-ins; set at creation for fade-outs.
    started: Option<Instant>,
    completion_emitted: bool,
}

impl Fade {
    /// Begins a fade from transparent to opaque.
    ///
    /// Opacity stays at zero until the first tick, guaranteeing the
    /// transition a starting frame.
    #[must_use]
    pub fn fade_in(duration: FadeDuration) -> Self {
        Self {
            direction: Direction::In,
            from: 0.0,
            to: 1.0,
            duration: duration.value(),
            started: None,
            completion_emitted: false,
        }
    }

    /// Begins a fade from opaque to transparent, starting immediately.
    #[must_use]
    pub fn fade_out(duration: FadeDuration, now: Instant) -> Self {
        Self::fade_out_from(1.0, duration, now)
    }

    /// Begins a fade to transparent from the given starting opacity.
    #[must_use]
    pub fn fade_out_from(opacity: f32, duration: FadeDuration, now: Instant) -> Self {
        Self {
            direction: Direction::Out,
            from: opacity.clamp(0.0, 1.0),
            to: 0.0,
            duration: duration.value(),
            started: Some(now),
            completion_emitted: false,
        }
    }

    /// Returns the eased opacity at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.from;
        };
        let elapsed = now.saturating_duration_since(started);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Advances the transition.
    ///
    /// The first tick of a fade-in starts the transition clock. A fade-out
    /// emits [`FadeEvent::FadedOut`] exactly once, no earlier than its
    /// duration after it began.
    pub fn tick(&mut self, now: Instant) -> Option<FadeEvent> {
        let Some(started) = self.started else {
            self.started = Some(now);
            return None;
        };

        if self.direction == Direction::Out
            && !self.completion_emitted
            && now.saturating_duration_since(started) >= self.duration
        {
            self.completion_emitted = true;
            return Some(FadeEvent::FadedOut);
        }
        None
    }

    /// Returns whether the transition has reached its target.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) >= self.duration)
    }

    /// Returns whether the fade still needs ticks (pending start, mid
    /// transition, or an unemitted completion).
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.direction == Direction::Out && !self.completion_emitted {
            return true;
        }
        !self.is_complete(now)
    }
}
