// Scroll state for the page document
//
// The whole portfolio is one tall document; the viewport is a window onto it.
// ScrollState owns the offset and clamps it against the current content and
// viewport sizes. Manual scrolling writes here directly, the navigator writes
// here once per animation frame.

use crate::tracker::Viewport;

/// Offset past which the scroll-to-top affordance appears
pub const SCROLL_TOP_THRESHOLD: usize = 25;

/// Offset past which the nav bar shows its "scrolled" accent
pub const SCROLLED_THRESHOLD: usize = 2;

/// Scroll position of the document
///
/// Owns all state needed for scrolling: position, content size, viewport size.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset (document row at top of viewport)
    offset: usize,

    /// Total rows in the document
    total: usize,

    /// Rows visible in the viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll up by `rows`
    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Scroll down by `rows`
    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = (self.offset + rows).min(self.max_offset());
    }

    /// Scroll up by a page
    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Write an absolute offset (rounded, clamped)
    pub fn set_offset(&mut self, offset: f64) {
        let offset = if offset.is_finite() { offset.round().max(0.0) as usize } else { 0 };
        self.offset = offset.min(self.max_offset());
    }

    /// Current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible window as the tracker sees it
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.offset, self.viewport)
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Show the scroll-to-top affordance
    pub fn show_scroll_top(&self) -> bool {
        self.offset > SCROLL_TOP_THRESHOLD
    }

    /// Nav bar "scrolled" accent
    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    /// Maximum valid offset
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    fn page(&self) -> usize {
        // Keep two rows of overlap so the reader doesn't lose their place
        self.viewport.saturating_sub(2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamped_to_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 20);

        scroll.scroll_down(500);
        assert_eq!(scroll.offset(), 80);

        scroll.scroll_up(500);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_shrinking_content_pulls_offset_back() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 20);
        scroll.scroll_down(70);

        scroll.update_dimensions(60, 20);
        assert_eq!(scroll.offset(), 40);
    }

    #[test]
    fn test_set_offset_rounds_and_clamps() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 20);

        scroll.set_offset(12.6);
        assert_eq!(scroll.offset(), 13);
        scroll.set_offset(-3.0);
        assert_eq!(scroll.offset(), 0);
        scroll.set_offset(1e9);
        assert_eq!(scroll.offset(), 80);
        scroll.set_offset(f64::NAN);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_paging_keeps_overlap() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 20);

        scroll.page_down();
        assert_eq!(scroll.offset(), 18);
        scroll.page_up();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_visible_range() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);
        scroll.scroll_down(95);

        assert_eq!(scroll.visible_range(), (90, 100));

        scroll.scroll_to_top();
        assert_eq!(scroll.visible_range(), (0, 10));
    }

    #[test]
    fn test_affordance_thresholds() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(200, 20);
        assert!(!scroll.is_scrolled());
        assert!(!scroll.show_scroll_top());

        scroll.scroll_down(3);
        assert!(scroll.is_scrolled());
        assert!(!scroll.show_scroll_top());

        scroll.scroll_down(23);
        assert!(scroll.show_scroll_top());
    }
}
