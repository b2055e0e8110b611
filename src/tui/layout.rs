/// Responsive breakpoint for the nav bar.
///
/// Single source of truth for the width threshold - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 80 cols: numbered nav entries
    Compact,
    /// 80+ cols: full labels
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            _ => Breakpoint::Wide,
        }
    }

    pub fn is_compact(&self) -> bool {
        *self == Breakpoint::Compact
    }
}

/// Screen areas from the last render, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub nav: ratatui::layout::Rect,
    /// Where the document text is drawn (inside padding, left of the scrollbar)
    pub text: ratatui::layout::Rect,
    pub status: ratatui::layout::Rect,
    /// Scroll-to-top affordance, when shown
    pub scroll_top: Option<ratatui::layout::Rect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(79), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(200), Breakpoint::Wide);
        assert!(Breakpoint::from_width(10).is_compact());
    }
}
