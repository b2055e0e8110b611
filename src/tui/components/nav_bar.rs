// Nav bar component
//
// Renders the logo and the six section entries, with the active section
// highlighted. Compact widths show numbered entries. The border switches to
// the accent color once the page is scrolled.

use crate::section::SectionId;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::util::display_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the nav bar, borders included
pub const HEIGHT: u16 = 3;

/// Gap between logo and the first entry
const LOGO_GAP: u16 = 3;

/// Gap between entries
const ENTRY_GAP: u16 = 2;

/// What a nav bar entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The logo goes back to the hero
    Logo,
    Section(SectionId),
}

/// One clickable entry, in absolute screen columns [start, end)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub target: NavTarget,
    pub text: String,
    pub start: u16,
    pub end: u16,
    pub row: u16,
}

/// Entry text for a section at a breakpoint
fn entry_text(section: SectionId, breakpoint: Breakpoint) -> String {
    match breakpoint {
        Breakpoint::Compact => format!("{:02}", section.index() + 1),
        Breakpoint::Wide => section.label().to_string(),
    }
}

/// Lay out the logo and entries inside the nav bar area
///
/// Entries that would run past the right border are left out.
pub fn items(area: Rect, logo: &str, breakpoint: Breakpoint) -> Vec<NavItem> {
    if area.height < HEIGHT || area.width < 4 {
        return Vec::new();
    }
    let row = area.y + 1;
    let limit = area.right().saturating_sub(1);
    let mut items = Vec::with_capacity(SectionId::ALL.len() + 1);

    let mut x = area.x + 2;
    let targets = std::iter::once((NavTarget::Logo, logo.to_string())).chain(
        SectionId::ALL
            .iter()
            .map(|s| (NavTarget::Section(*s), entry_text(*s, breakpoint))),
    );

    for (target, text) in targets {
        let width = display_width(&text) as u16;
        let end = x.saturating_add(width);
        if end > limit {
            break;
        }
        items.push(NavItem {
            target,
            text,
            start: x,
            end,
            row,
        });
        x = end + if target == NavTarget::Logo { LOGO_GAP } else { ENTRY_GAP };
    }

    items
}

/// Entry under a screen cell
pub fn hit(items: &[NavItem], column: u16, row: u16) -> Option<NavTarget> {
    items
        .iter()
        .find(|item| item.row == row && (item.start..item.end).contains(&column))
        .map(|item| item.target)
}

/// Render the nav bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let active = app.state.active_section();

    let mut spans = Vec::with_capacity(app.nav_items.len() * 2 + 1);
    // Paragraph starts at the inner edge (area.x + 1)
    let mut cursor = area.x + 1;
    for item in &app.nav_items {
        if item.start > cursor {
            spans.push(Span::raw(" ".repeat((item.start - cursor) as usize)));
        }
        let style = match item.target {
            NavTarget::Logo => Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
            NavTarget::Section(section) if section == active => Style::default()
                .fg(theme.selection_fg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
            NavTarget::Section(_) => Style::default().fg(theme.foreground),
        };
        spans.push(Span::styled(item.text.clone(), style));
        cursor = item.end;
    }

    let border = if app.scroll.is_scrolled() {
        theme.highlight
    } else {
        theme.border
    };

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(nav, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_uses_labels() {
        let area = Rect::new(0, 0, 100, HEIGHT);
        let items = items(area, "◆ PA", Breakpoint::Wide);

        assert_eq!(items.len(), 7);
        assert_eq!(items[0].target, NavTarget::Logo);
        assert_eq!(items[0].start, 2);
        assert_eq!(items[1].text, "Home");
        // "◆ PA" ends at 6, plus the logo gap
        assert_eq!(items[1].start, 9);
        assert_eq!(items[2].start, items[1].end + ENTRY_GAP);
        assert_eq!(items[6].target, NavTarget::Section(SectionId::Contact));
    }

    #[test]
    fn compact_layout_numbers_entries() {
        let area = Rect::new(0, 0, 40, HEIGHT);
        let items = items(area, "◆ PA", Breakpoint::Compact);
        let texts: Vec<_> = items.iter().skip(1).map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn entries_past_the_border_are_dropped() {
        let area = Rect::new(0, 0, 20, HEIGHT);
        let items = items(area, "◆ PA", Breakpoint::Wide);
        assert!(items.len() < 7);
        assert!(items.iter().all(|i| i.end <= 19));
    }

    #[test]
    fn hit_testing_follows_the_layout() {
        let area = Rect::new(0, 5, 100, HEIGHT);
        let items = items(area, "◆ PA", Breakpoint::Wide);
        let skills = items
            .iter()
            .find(|i| i.target == NavTarget::Section(SectionId::Skills))
            .unwrap();

        assert_eq!(
            hit(&items, skills.start, 6),
            Some(NavTarget::Section(SectionId::Skills))
        );
        assert_eq!(hit(&items, skills.end, 6), None);
        assert_eq!(hit(&items, skills.start, 5), None);
        assert_eq!(hit(&items, 3, 6), Some(NavTarget::Logo));
    }
}
