//! Clipboard helper for copying the contact email
//!
//! Primary path is the system clipboard via `arboard` (created fresh each time
//! to avoid holding resources). When that fails (headless Linux, no display
//! server, SSH session) the text is sent to the terminal as an OSC 52 escape
//! sequence, which most modern terminals forward to the local clipboard.
//!
//! The UI acknowledges a copy either way; failures are only logged.

use anyhow::{Context, Result};
use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;
use std::time::{Duration, Instant};

/// How long the "Copied!" acknowledgement stays up
pub const COPIED_DURATION: Duration = Duration::from_millis(2000);

/// Something that can put text on a clipboard
pub trait ClipboardBackend {
    fn name(&self) -> &'static str;
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// System clipboard through arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}

/// OSC 52 escape sequence written to a terminal stream
#[derive(Debug)]
pub struct Osc52<W: Write> {
    out: W,
}

impl<W: Write> Osc52<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl Osc52<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ClipboardBackend for Osc52<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        // ESC ] 52 ; c ; <base64> BEL, "c" being the clipboard selection
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))
            .and_then(|()| self.out.flush())
            .context("Failed to write OSC 52 sequence")?;
        Ok(())
    }
}

/// Which path ended up handling a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    /// Both paths failed; still acknowledged in the UI
    Failed,
}

/// Try the primary backend, fall back to the secondary, never fail
pub fn copy_with_fallback(
    text: &str,
    primary: &mut dyn ClipboardBackend,
    fallback: &mut dyn ClipboardBackend,
) -> CopyOutcome {
    match primary.copy(text) {
        Ok(()) => {
            tracing::debug!("Copied {} bytes via {} clipboard", text.len(), primary.name());
            CopyOutcome::Primary
        }
        Err(e) => {
            tracing::debug!("{} clipboard unavailable ({:#}), trying {}", primary.name(), e, fallback.name());
            match fallback.copy(text) {
                Ok(()) => CopyOutcome::Fallback,
                Err(e) => {
                    tracing::warn!("Clipboard copy failed on every path: {:#}", e);
                    CopyOutcome::Failed
                }
            }
        }
    }
}

/// "Copied!" acknowledgement that clears itself
#[derive(Debug, Default, Clone)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn on; a second copy restarts the timer
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_DURATION)
    }

    /// Drop expired state; returns true if the indicator just turned off
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.copied_at.is_some() && !self.is_copied(now) {
            self.copied_at = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[derive(Default)]
    struct Recording {
        copied: Vec<String>,
        fail: bool,
    }

    impl ClipboardBackend for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn copy(&mut self, text: &str) -> Result<()> {
            if self.fail {
                bail!("no clipboard here");
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn primary_success_skips_fallback() {
        let mut primary = Recording::default();
        let mut fallback = Recording::default();
        let outcome = copy_with_fallback("me@example.com", &mut primary, &mut fallback);

        assert_eq!(outcome, CopyOutcome::Primary);
        assert_eq!(primary.copied, vec!["me@example.com"]);
        assert!(fallback.copied.is_empty());
    }

    #[test]
    fn primary_failure_uses_fallback() {
        let mut primary = Recording { fail: true, ..Default::default() };
        let mut fallback = Recording::default();
        let outcome = copy_with_fallback("me@example.com", &mut primary, &mut fallback);

        assert_eq!(outcome, CopyOutcome::Fallback);
        assert_eq!(fallback.copied, vec!["me@example.com"]);
    }

    #[test]
    fn total_failure_is_reported_not_raised() {
        let mut primary = Recording { fail: true, ..Default::default() };
        let mut fallback = Recording { fail: true, ..Default::default() };
        assert_eq!(
            copy_with_fallback("x", &mut primary, &mut fallback),
            CopyOutcome::Failed
        );
    }

    #[test]
    fn osc52_writes_escape_sequence() {
        let mut buf = Vec::new();
        Osc52::new(&mut buf).copy("hi").unwrap();
        let written = String::from_utf8(buf).unwrap();
        assert_eq!(written, "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_encodes_non_ascii_payload() {
        let mut buf = Vec::new();
        Osc52::new(&mut buf).copy("é@x.io").unwrap();
        let written = String::from_utf8(buf).unwrap();
        assert_eq!(written, format!("\x1b]52;c;{}\x07", STANDARD.encode("é@x.io")));
        assert_eq!(STANDARD.encode("é@x.io"), "w6lAeC5pbw==");
    }

    #[test]
    fn indicator_sets_immediately_and_clears_after_two_seconds() {
        let t0 = Instant::now();
        let mut indicator = CopyIndicator::new();
        assert!(!indicator.is_copied(t0));

        indicator.mark(t0);
        assert!(indicator.is_copied(t0));
        assert!(indicator.is_copied(t0 + Duration::from_millis(1999)));
        assert!(!indicator.tick(t0 + Duration::from_millis(1999)));

        assert!(!indicator.is_copied(t0 + COPIED_DURATION));
        assert!(indicator.tick(t0 + COPIED_DURATION));
        assert!(!indicator.tick(t0 + Duration::from_millis(2500)));
    }

    #[test]
    fn recopy_restarts_timer() {
        let t0 = Instant::now();
        let mut indicator = CopyIndicator::new();
        indicator.mark(t0);
        indicator.mark(t0 + Duration::from_millis(1500));
        assert!(indicator.is_copied(t0 + Duration::from_millis(3000)));
        assert!(!indicator.is_copied(t0 + Duration::from_millis(3500)));
    }
}
