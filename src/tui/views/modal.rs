// Modal overlay rendering
//
// Modals are rendered on top of the page:
// - Help modal: keyboard shortcuts and current theme
// - Logs modal: captured tracing output, newest first

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::scrollbar::render_scrollbar;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.accent);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Sections", header_style)),
        kb("1-6", "Jump to a section"),
        kb("Tab", "Next section"),
        kb("Shift+Tab", "Previous section"),
        kb("w", "Explore my work"),
        kb("i", "Get in touch"),
        kb("g, Home", "Back to top"),
        Line::raw(""),
        Line::from(Span::styled("  Scrolling", header_style)),
        kb("↑/↓, j/k", "Scroll a line"),
        kb("PgUp/PgDn", "Scroll a page"),
        kb("G, End", "Jump to the end"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Toggle dark/light theme"),
        kb("c", "Copy contact email"),
        kb("l", "Show logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Wheel", "Scroll the page"),
        kb("Click", "Nav entries, buttons"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.name.clone(), key_style),
        ]),
    ]);

    let width = 44;
    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(Modal::Help.title())
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(ratatui::style::Color::Red),
        LogLevel::Warn => Style::default().fg(ratatui::style::Color::Yellow),
        LogLevel::Info => Style::default().fg(theme.success),
        LogLevel::Debug => Style::default().fg(theme.link),
        LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

fn log_line(entry: &LogEntry, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S%.3f ").to_string(),
            Style::default().fg(theme.muted),
        ),
        Span::styled(format!("{:<5} ", entry.level.as_str()), level_style(entry.level, theme)),
        Span::styled(entry.message.clone(), Style::default().fg(theme.foreground)),
    ])
}

/// Render the logs modal overlay
fn render_logs(f: &mut Frame, app: &mut App) {
    let entries = app.log_buffer.get_all();

    // Use nearly full screen (90% width, 80% height)
    let frame_area = f.area();
    let width = (frame_area.width * 90 / 100).max(40);
    let height = (frame_area.height * 80 / 100).max(10);
    let area = centered_rect(width, height, frame_area);

    f.render_widget(Clear, area);

    let viewport_height = area.height.saturating_sub(2) as usize;
    app.log_scroll
        .update_dimensions(entries.len(), viewport_height);
    let (start, end) = app.log_scroll.visible_range();

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            " No log entries yet",
            Style::default().fg(app.theme.muted),
        ))]
    } else {
        entries
            .iter()
            .rev()
            .skip(start)
            .take(end - start)
            .map(|entry| log_line(entry, &app.theme))
            .collect()
    };

    let title = format!(" Logs ({}) ", entries.len());
    let paragraph = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(app.theme.foreground)
                .bg(app.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(title)
                .title_bottom(Line::from(" ↑↓:scroll  x:clear  Esc:close ").centered()),
        );

    f.render_widget(paragraph, area);
    render_scrollbar(f, area, &app.log_scroll, &app.theme);
}
