//! Hero typewriter effect
//!
//! Cycles through the hero phrases: type one character at a time, hold the
//! full phrase, delete it faster than it was typed, then move to the next
//! phrase (wrapping). Time is passed in explicitly so the render loop and the
//! tests drive it the same way.

use std::time::{Duration, Instant};

/// Delay between typed characters
pub const TYPE_DELAY: Duration = Duration::from_millis(80);

/// Delay between deleted characters
pub const DELETE_DELAY: Duration = Duration::from_millis(30);

/// How long the complete phrase stays on screen
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Longest gap we'll catch up on; beyond this the animation just resumes
const MAX_CATCH_UP: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    visible: usize,
    phase: Phase,
    last_step: Instant,
}

impl Typewriter {
    /// Empty phrases are dropped
    pub fn new(phrases: &[String], now: Instant) -> Self {
        Self {
            phrases: phrases
                .iter()
                .filter(|p| !p.trim().is_empty())
                .cloned()
                .collect(),
            index: 0,
            visible: 0,
            phase: Phase::Typing,
            last_step: now,
        }
    }

    /// Currently visible text
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.visible) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the phrase being shown
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Advance to `now`; returns true if the visible text changed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        if now.saturating_duration_since(self.last_step) > MAX_CATCH_UP {
            self.last_step = now;
            return false;
        }

        let mut changed = false;
        loop {
            let delay = self.delay();
            if now.saturating_duration_since(self.last_step) < delay {
                break;
            }
            self.last_step += delay;
            self.step();
            changed = true;
        }
        changed
    }

    /// Time until the next step is due, for frame pacing
    pub fn next_step_in(&self, now: Instant) -> Duration {
        if self.phrases.is_empty() {
            return Duration::MAX;
        }
        (self.last_step + self.delay()).saturating_duration_since(now)
    }

    fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => TYPE_DELAY,
            Phase::Holding => HOLD_DELAY,
            Phase::Deleting => DELETE_DELAY,
        }
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                self.visible += 1;
                if self.visible >= self.current_len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}
