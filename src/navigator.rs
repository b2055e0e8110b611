//! Smooth scroll navigator
//!
//! Moves the viewport to a section over a fixed duration using an
//! ease-in-out quadratic curve instead of jumping. The render loop calls
//! `Navigator::frame` once per rendered frame. The first frame fixes the start
//! time, and once the duration has elapsed the navigator lands exactly on the
//! destination and goes back to idle, so the loop stops asking for frames.
//!
//! At most one run is in flight. Starting a new navigation, scrolling by hand,
//! or jumping to the top drops whatever run is in flight, so two runs never
//! fight over the scroll offset.

use crate::tracker::{Region, Viewport};
use std::time::{Duration, Instant};

/// Default animation length
pub const SCROLL_DURATION: Duration = Duration::from_millis(1000);

/// Ease-in-out quadratic
///
/// `t` is elapsed time, `start` the starting value, `change` the total delta
/// and `duration` the total time (same unit as `t`). Accelerates over the
/// first half, decelerates over the second.
pub fn ease_in_out_quad(t: f64, start: f64, change: f64, duration: f64) -> f64 {
    let t = t / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + start;
    }
    let t = t - 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// Destination of a navigation, in document rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTarget {
    pub offset: f64,
}

impl ScrollTarget {
    /// Resolve a section region into a scroll destination
    ///
    /// The destination is the region's top in document coordinates (current
    /// offset plus the region's distance from the viewport top), clamped to
    /// the scrollable range. Returns `None` for an unmeasured region.
    pub fn resolve(region: Option<Region>, viewport: Viewport, max_offset: usize) -> Option<Self> {
        let region = region?;
        let current = viewport.offset as f64;
        let relative_top = region.top as f64 - current;
        let offset = (current + relative_top).clamp(0.0, max_offset as f64);
        Some(Self { offset })
    }
}

/// One in-flight scroll run
#[derive(Debug)]
pub struct ScrollAnimation {
    start: f64,
    distance: f64,
    duration: Duration,
    started_at: Option<Instant>,
}

impl ScrollAnimation {
    pub fn new(start: f64, destination: f64, duration: Duration) -> Self {
        Self {
            start,
            distance: destination - start,
            duration,
            started_at: None,
        }
    }

    pub fn destination(&self) -> f64 {
        self.start + self.distance
    }

    /// Offset for the frame rendered at `now`, and whether the run is over
    pub fn step(&mut self, now: Instant) -> (f64, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.destination(), true);
        }

        let offset = ease_in_out_quad(
            elapsed.as_secs_f64() * 1000.0,
            self.start,
            self.distance,
            self.duration.as_secs_f64() * 1000.0,
        );
        (offset, false)
    }
}

/// Navigator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorState {
    Idle,
    Animating,
}

/// Drives smooth scrolling between sections
#[derive(Debug)]
pub struct Navigator {
    duration: Duration,
    current: Option<ScrollAnimation>,
}

impl Navigator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn state(&self) -> NavigatorState {
        match self.current {
            Some(_) => NavigatorState::Animating,
            None => NavigatorState::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == NavigatorState::Animating
    }

    /// Destination of the run in flight
    pub fn destination(&self) -> Option<f64> {
        self.current.as_ref().map(ScrollAnimation::destination)
    }

    /// Start scrolling toward a section region
    ///
    /// Returns false (and does nothing) when the region is not available.
    /// A run already in flight is cancelled first; the new run starts from
    /// the viewport's current offset.
    pub fn scroll_to(&mut self, region: Option<Region>, viewport: Viewport, max_offset: usize) -> bool {
        let Some(target) = ScrollTarget::resolve(region, viewport, max_offset) else {
            tracing::debug!("Scroll target not laid out yet, ignoring");
            return false;
        };

        self.cancel();
        tracing::debug!(
            "Smooth scroll {} -> {:.0} over {}ms",
            viewport.offset,
            target.offset,
            self.duration.as_millis()
        );
        self.current = Some(ScrollAnimation::new(
            viewport.offset as f64,
            target.offset,
            self.duration,
        ));
        true
    }

    /// Cancel the run in flight, if any
    pub fn cancel(&mut self) {
        if let Some(run) = self.current.take() {
            tracing::debug!("Dropping scroll run toward {:.0}", run.destination());
        }
    }

    /// Advance one frame
    ///
    /// Returns the offset to write for this frame, or `None` when idle.
    /// The final frame returns the exact destination and goes idle.
    pub fn frame(&mut self, now: Instant) -> Option<f64> {
        let run = self.current.as_mut()?;
        let (offset, done) = run.step(now);
        if done {
            self.current = None;
        }
        Some(offset)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(SCROLL_DURATION)
    }
}
