// Components module - reusable UI building blocks
//
// Shell components are rendered around the page:
// - Nav bar: logo and section entries, active one highlighted
// - Status bar: active section, scroll position, key hints
// - Toast: transient acknowledgements
// - Scrollbar: page position

pub mod nav_bar;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the nav bar (convenience wrapper)
pub fn render_nav_bar(f: &mut Frame, area: Rect, app: &App) {
    nav_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
