// Page view - the scrolling portfolio document
//
// Lays the document out for the current content area, draws the visible
// window, the scrollbar, and the scroll-to-top affordance.

use crate::tui::app::App;
use crate::tui::components::scrollbar::render_scrollbar;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Horizontal padding on each side of the text
const PADDING: u16 = 2;

const SCROLL_TOP_LABEL: &str = " ↑ Top (g) ";

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    // Right padding keeps clear of the scrollbar column
    let text = Rect {
        x: area.x + PADDING.min(area.width),
        y: area.y,
        width: area.width.saturating_sub(PADDING * 2 + 1),
        height: area.height,
    };

    app.relayout(text.width, text.height);
    app.layout.text = text;

    let (start, end) = app.scroll.visible_range();
    let page = Paragraph::new(app.page.window(start, end))
        .style(Style::default().fg(app.theme.foreground));
    f.render_widget(page, text);

    render_scrollbar(f, area, &app.scroll, &app.theme);

    app.layout.scroll_top = if app.scroll.show_scroll_top() {
        let width = (SCROLL_TOP_LABEL.chars().count() as u16).min(area.width);
        let button = Rect {
            x: area.right().saturating_sub(width + 2),
            y: area.bottom().saturating_sub(1),
            width,
            height: 1.min(area.height),
        };
        let label = Paragraph::new(SCROLL_TOP_LABEL).style(
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(Clear, button);
        f.render_widget(label, button);
        Some(button)
    } else {
        None
    };
}
