//! Page behavior configuration: smooth scrolling and section tracking

use crate::navigator::SCROLL_DURATION;
use crate::tracker::VisibilityBand;
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Smooth scroll settings
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Length of one smooth scroll
    pub scroll_duration_ms: u64,
    /// Render rate while a scroll is animating
    pub frame_rate: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: SCROLL_DURATION.as_millis() as u64,
            frame_rate: 60,
        }
    }
}

/// [navigation] as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileNavigation {
    pub scroll_duration_ms: Option<u64>,
    pub frame_rate: Option<u32>,
}

impl NavigationConfig {
    /// Create from file config with defaults; `duration_override` comes from env
    pub fn from_file(file: Option<FileNavigation>, duration_override: Option<u64>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            scroll_duration_ms: duration_override
                .or(file.scroll_duration_ms)
                .unwrap_or(defaults.scroll_duration_ms),
            // 0 fps would never wake the loop
            frame_rate: file
                .frame_rate
                .filter(|fps| *fps > 0)
                .unwrap_or(defaults.frame_rate)
                .min(240),
        }
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    /// Time between animation frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tracker
// ─────────────────────────────────────────────────────────────────────────────

/// Visibility band margins, as fractions of the viewport height
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub band_top: f64,
    pub band_bottom: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let band = VisibilityBand::default();
        Self {
            band_top: band.top_margin,
            band_bottom: band.bottom_margin,
        }
    }
}

/// [tracker] as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTracker {
    pub band_top: Option<f64>,
    pub band_bottom: Option<f64>,
}

impl TrackerConfig {
    pub fn from_file(file: Option<FileTracker>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            band_top: file.band_top.unwrap_or(defaults.band_top),
            band_bottom: file.band_bottom.unwrap_or(defaults.band_bottom),
        }
    }

    /// Band used by the section tracker
    ///
    /// Margins are clamped into [0, 1]. Margins that leave no band at all would
    /// pin the highlight on the first section, so they fall back to the defaults.
    pub fn band(&self) -> VisibilityBand {
        let band = VisibilityBand::new(self.band_top, self.band_bottom);
        if band.top_margin + band.bottom_margin < 1.0 {
            return band;
        }

        let fallback = VisibilityBand::default();
        tracing::warn!(
            "[tracker] band_top ({}) + band_bottom ({}) leave no visible band, using {} / {}",
            self.band_top,
            self.band_bottom,
            fallback.top_margin,
            fallback.bottom_margin
        );
        fallback
    }
}
