// Views module - screen-level rendering logic
//
// The screen is a fixed shell around the page:
// - Nav bar on top
// - The scrolling page in the middle
// - Status bar at the bottom
// Modals and the toast are drawn over everything.

mod modal;
mod page;

use super::app::App;
use super::components::{self, nav_bar, status_bar};
use super::layout::Breakpoint;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_bar::HEIGHT),
            Constraint::Min(1),
            Constraint::Length(status_bar::HEIGHT),
        ])
        .split(f.area());
    let (nav, content, status) = (chunks[0], chunks[1], chunks[2]);

    // Page first: it lays the document out and updates the scroll position
    page::render(f, content, app);

    app.layout.nav = nav;
    app.layout.status = status;
    app.nav_items = nav_bar::items(nav, &app.logo, Breakpoint::from_width(nav.width));
    components::render_nav_bar(f, nav, app);
    components::render_status(f, status, app);

    // Render modal overlay (on top of everything)
    if let Some(open) = app.modal {
        modal::render(f, open, app);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::portfolio::Portfolio;
    use crate::storage::MemoryStore;
    use crate::theme::ThemePreference;
    use crate::tui::modal::Modal;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn app() -> App {
        App::new(
            &Config::default(),
            Portfolio::bundled().unwrap(),
            ThemePreference::new(Box::new(MemoryStore::new())),
            LogBuffer::new(),
            Instant::now(),
        )
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_shell_and_records_layout() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = app();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Home"));
        assert!(text.contains("Contact"));
        assert!(text.contains("Explore my work"));
        assert_eq!(app.nav_items.len(), 7);
        assert_eq!(app.layout.text.y, nav_bar::HEIGHT);
        assert!(app.page.height() > 30);
    }

    #[test]
    fn compact_nav_numbers_entries() {
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        let mut app = app();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("06"));
    }

    #[test]
    fn modals_draw_over_the_page() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = app();
        app.modal = Some(Modal::Help);
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("Toggle dark/light theme"));

        app.modal = Some(Modal::Logs);
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("No log entries yet"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        let mut app = app();
        app.modal = Some(Modal::Help);
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }
}
