// Status bar component
//
// Renders the active section, scroll position, theme and key hints at the bottom.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the status bar, top border included
pub const HEIGHT: u16 = 2;

/// Scroll position as a short label
fn position(offset: usize, max_offset: usize) -> String {
    if max_offset == 0 || offset == 0 {
        "Top".to_string()
    } else if offset >= max_offset {
        "End".to_string()
    } else {
        format!("{}%", offset * 100 / max_offset)
    }
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: position, theme and the main key hints
/// - Compact: position and the help hint only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let active = app.state.active_label();
    let pos = position(app.scroll.offset(), app.scroll.max_offset());
    let motion = if app.navigator.is_animating() {
        " ↻"
    } else {
        ""
    };

    let status_text = if bp.is_compact() {
        format!(" ● {}{} │ {} │ ? help", active, motion, pos)
    } else {
        format!(
            " ● {}{} │ {} │ {} theme │ 1-6 jump · t theme · c copy email · l logs · ? help · q quit",
            active,
            motion,
            pos,
            app.state.theme(),
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
