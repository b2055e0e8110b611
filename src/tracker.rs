//! Section activity tracker
//!
//! Decides which section is "in focus" for the nav bar highlight. The
//! viewport is narrowed to a horizontal visibility band (by default 20% in
//! from the top and 60% in from the bottom). A section counts as
//! intersecting while its region overlaps that band.
//!
//! The tracker works like an intersection observer. Each `check` reports only
//! the sections whose intersecting state changed since the last check. The
//! first check after `observe` reports the initial state. `dispatch` then applies
//! "last event wins": the last entry that reports intersecting becomes the
//! active section.

use crate::section::SectionId;
use crate::state::AppState;
use std::collections::HashMap;

/// A rectangular region of the document, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First row of the region (document coordinates)
    pub top: usize,
    /// Number of rows
    pub height: usize,
}

impl Region {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// One past the last row
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// The visible window onto the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Current scroll offset (first visible document row)
    pub offset: usize,
    /// Number of visible rows
    pub height: usize,
}

impl Viewport {
    pub fn new(offset: usize, height: usize) -> Self {
        Self { offset, height }
    }
}

/// Resolves a section to its measured region
///
/// Returns `None` when the section has not been laid out yet.
pub trait RegionLookup {
    fn region(&self, section: SectionId) -> Option<Region>;
}

impl RegionLookup for HashMap<SectionId, Region> {
    fn region(&self, section: SectionId) -> Option<Region> {
        self.get(&section).copied()
    }
}

/// The band of the viewport that decides visibility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityBand {
    /// Fraction of the viewport height cut from the top
    pub top_margin: f64,
    /// Fraction of the viewport height cut from the bottom
    pub bottom_margin: f64,
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self {
            top_margin: 0.2,
            bottom_margin: 0.6,
        }
    }
}

impl VisibilityBand {
    /// Build from configured margins, clamped into [0, 1]
    pub fn new(top_margin: f64, bottom_margin: f64) -> Self {
        Self {
            top_margin: top_margin.clamp(0.0, 1.0),
            bottom_margin: bottom_margin.clamp(0.0, 1.0),
        }
    }

    /// Band bounds in document coordinates: [start, end)
    pub fn bounds(&self, viewport: Viewport) -> (f64, f64) {
        let height = viewport.height as f64;
        let start = viewport.offset as f64 + height * self.top_margin;
        let end = viewport.offset as f64 + height * (1.0 - self.bottom_margin);
        (start, end.max(start))
    }

    /// Whether a region overlaps the band
    pub fn intersects(&self, region: Region, viewport: Viewport) -> bool {
        let (start, end) = self.bounds(viewport);
        if region.height == 0 || end <= start {
            return false;
        }
        (region.top as f64) < end && (region.bottom() as f64) > start
    }
}

/// A change in one section's intersecting state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub section: SectionId,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct Watched {
    section: SectionId,
    /// Last reported state; `None` until the first report
    last: Option<bool>,
}

/// Maps scroll position to the active section
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    band: VisibilityBand,
    watched: Vec<Watched>,
}

impl SectionTracker {
    pub fn new(band: VisibilityBand) -> Self {
        Self {
            band,
            watched: Vec::new(),
        }
    }

    /// Start watching a section (no-op if already watched)
    pub fn observe(&mut self, section: SectionId) {
        if !self.is_observing(section) {
            self.watched.push(Watched {
                section,
                last: None,
            });
        }
    }

    /// Watch several sections, in the given order
    pub fn observe_all(&mut self, sections: impl IntoIterator<Item = SectionId>) {
        for section in sections {
            self.observe(section);
        }
    }

    /// Stop watching everything
    pub fn disconnect(&mut self) {
        self.watched.clear();
    }

    pub fn is_observing(&self, section: SectionId) -> bool {
        self.watched.iter().any(|w| w.section == section)
    }

    /// Compute state changes for the current viewport
    ///
    /// Unmeasured sections are skipped without an entry; they are reported
    /// once their region becomes available.
    pub fn check(
        &mut self,
        viewport: Viewport,
        regions: &impl RegionLookup,
    ) -> Vec<IntersectionEntry> {
        let band = self.band;
        let mut entries = Vec::new();

        for watched in &mut self.watched {
            let Some(region) = regions.region(watched.section) else {
                continue;
            };

            let is_intersecting = band.intersects(region, viewport);
            if watched.last != Some(is_intersecting) {
                watched.last = Some(is_intersecting);
                entries.push(IntersectionEntry {
                    section: watched.section,
                    is_intersecting,
                });
            }
        }

        entries
    }

    /// Apply a batch of entries to the state (last intersecting entry wins)
    ///
    /// Returns the section that was written, if any.
    pub fn dispatch(entries: &[IntersectionEntry], state: &AppState) -> Option<SectionId> {
        let mut written = None;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            state.set_active_section(entry.section);
            written = Some(entry.section);
        }

        if let Some(section) = written {
            tracing::trace!("Active section: {}", section.label());
        }
        written
    }

    /// `check` followed by `dispatch`
    pub fn track(
        &mut self,
        viewport: Viewport,
        regions: &impl RegionLookup,
        state: &AppState,
    ) -> Option<SectionId> {
        let entries = self.check(viewport, regions);
        Self::dispatch(&entries, state)
    }
}
