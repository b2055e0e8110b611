//! Page document
//!
//! The whole portfolio is laid out as one tall list of lines. While the
//! sections are appended, the builder records each section's region (first
//! row and height) for the tracker and navigator, and the clickable spans
//! (hero CTAs, the copy button) for mouse hit-testing.

use crate::section::SectionId;
use crate::tracker::{Region, RegionLookup};
use crate::util::{display_width, wrap_text};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::collections::HashMap;

/// What a click on a hotspot does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotAction {
    Navigate(SectionId),
    CopyEmail,
}

/// A clickable span of one document row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    pub row: usize,
    /// Column range [start, end) relative to the text area
    pub start: usize,
    pub end: usize,
    pub action: HotspotAction,
}

/// A laid-out page
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub regions: HashMap<SectionId, Region>,
    pub hotspots: Vec<Hotspot>,
}

impl Document {
    /// Total rows
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Hotspot under a document cell
    pub fn hotspot_at(&self, row: usize, col: usize) -> Option<HotspotAction> {
        self.hotspots
            .iter()
            .find(|h| h.row == row && (h.start..h.end).contains(&col))
            .map(|h| h.action)
    }

    /// Lines in [start, end), clamped to the document
    pub fn window(&self, start: usize, end: usize) -> Vec<Line<'static>> {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        self.lines[start..end].to_vec()
    }

    /// The page as plain text, trailing blanks trimmed per line
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

impl RegionLookup for Document {
    fn region(&self, section: SectionId) -> Option<Region> {
        self.regions.region(section)
    }
}

/// A clickable button in a row of buttons
pub struct Button {
    pub label: String,
    pub style: Style,
    pub action: HotspotAction,
}

/// Appends lines and keeps track of section regions
pub struct DocumentBuilder {
    width: usize,
    doc: Document,
    open: Option<(SectionId, usize)>,
}

impl DocumentBuilder {
    /// `width` is the text width in columns
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            doc: Document::default(),
            open: None,
        }
    }

    /// Rows so far
    pub fn row(&self) -> usize {
        self.doc.lines.len()
    }

    /// Start a new section, closing the previous one
    pub fn section(&mut self, section: SectionId) {
        self.close();
        self.open = Some((section, self.row()));
    }

    pub fn line(&mut self, line: impl Into<Line<'static>>) {
        self.doc.lines.push(line.into());
    }

    /// A row already written, for appending spans that don't change its height
    pub fn line_mut(&mut self, row: usize) -> Option<&mut Line<'static>> {
        self.doc.lines.get_mut(row)
    }

    pub fn blank(&mut self) {
        self.line(Line::default());
    }

    pub fn blanks(&mut self, count: usize) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// Word-wrapped text, every line indented by `indent` columns
    pub fn paragraph(&mut self, text: &str, indent: usize, style: Style) {
        let width = self.width.saturating_sub(indent).max(1);
        for chunk in wrap_text(text, width) {
            self.line(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(chunk, style),
            ]));
        }
    }

    /// Word-wrapped text behind a marker ("• ", "✓ "), continuation lines aligned
    pub fn bullet(&mut self, marker: &str, text: &str, indent: usize, marker_style: Style, style: Style) {
        let hang = indent + display_width(marker);
        let width = self.width.saturating_sub(hang).max(1);
        for (i, chunk) in wrap_text(text, width).into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(format!("{}{}", " ".repeat(indent), marker), marker_style)
            } else {
                Span::raw(" ".repeat(hang))
            };
            self.line(Line::from(vec![lead, Span::styled(chunk, style)]));
        }
    }

    /// One row of clickable buttons, separated by two spaces
    pub fn buttons(&mut self, indent: usize, buttons: Vec<Button>) {
        let row = self.row();
        let mut col = indent;
        let mut spans = vec![Span::raw(" ".repeat(indent))];

        for (i, button) in buttons.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
                col += 2;
            }
            let text = format!("[ {} ]", button.label);
            let width = display_width(&text);
            self.doc.hotspots.push(Hotspot {
                row,
                start: col,
                end: col + width,
                action: button.action,
            });
            col += width;
            spans.push(Span::styled(text, button.style));
        }

        self.line(Line::from(spans));
    }

    /// Grow the open section with blank rows until it is at least `rows` tall
    pub fn pad_section_to(&mut self, rows: usize) {
        if let Some((_, top)) = self.open {
            while self.row() - top < rows {
                self.blank();
            }
        }
    }

    fn close(&mut self) {
        if let Some((section, top)) = self.open.take() {
            let height = self.row() - top;
            self.doc.regions.insert(section, Region::new(top, height));
        }
    }

    pub fn finish(mut self) -> Document {
        self.close();
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_sections_in_order() {
        let mut b = DocumentBuilder::new(40);
        b.section(SectionId::Home);
        b.blanks(5);
        b.section(SectionId::About);
        b.paragraph("one two three", 0, Style::default());
        b.blank();
        let doc = b.finish();

        assert_eq!(doc.region(SectionId::Home), Some(Region::new(0, 5)));
        assert_eq!(doc.region(SectionId::About), Some(Region::new(5, 2)));
        assert_eq!(doc.region(SectionId::Contact), None);
        assert_eq!(doc.height(), 7);
    }

    #[test]
    fn buttons_register_hotspots() {
        let mut b = DocumentBuilder::new(60);
        b.blank();
        b.buttons(
            2,
            vec![
                Button {
                    label: "Go".into(),
                    style: Style::default(),
                    action: HotspotAction::Navigate(SectionId::About),
                },
                Button {
                    label: "Copy".into(),
                    style: Style::default(),
                    action: HotspotAction::CopyEmail,
                },
            ],
        );
        let doc = b.finish();

        // "  [ Go ]  [ Copy ]"
        assert_eq!(doc.hotspot_at(1, 2), Some(HotspotAction::Navigate(SectionId::About)));
        assert_eq!(doc.hotspot_at(1, 7), Some(HotspotAction::Navigate(SectionId::About)));
        assert_eq!(doc.hotspot_at(1, 8), None);
        assert_eq!(doc.hotspot_at(1, 10), Some(HotspotAction::CopyEmail));
        assert_eq!(doc.hotspot_at(0, 2), None);
        assert_eq!(doc.plain_text(), "\n  [ Go ]  [ Copy ]\n");
    }

    #[test]
    fn padding_extends_open_section() {
        let mut b = DocumentBuilder::new(20);
        b.section(SectionId::Contact);
        b.line("email");
        b.pad_section_to(10);
        let doc = b.finish();
        assert_eq!(doc.region(SectionId::Contact), Some(Region::new(0, 10)));
    }

    #[test]
    fn bullets_hang_continuation_lines() {
        let mut b = DocumentBuilder::new(12);
        b.bullet("• ", "alpha beta gamma", 2, Style::default(), Style::default());
        let doc = b.finish();
        assert_eq!(doc.plain_text(), "  • alpha\n    beta\n    gamma\n");
    }

    #[test]
    fn window_clamps() {
        let mut b = DocumentBuilder::new(10);
        b.blanks(3);
        let doc = b.finish();
        assert_eq!(doc.window(1, 10).len(), 2);
        assert!(doc.window(5, 10).is_empty());
    }
}
