// TUI application state
//
// App owns everything the page needs between frames: the shared AppState,
// the laid-out document, scroll position, the tracker and navigator, the
// theme, and the transient UI bits (toast, copy indicator, modal).
//
// Per frame the event loop calls `tick` (advance animations), draws (which
// re-lays out the document via `relayout`), then `after_layout` (run the
// tracker against the freshly drawn viewport).

use super::clipboard::{copy_with_fallback, ClipboardBackend, CopyIndicator, CopyOutcome, Osc52, SystemClipboard};
use super::components::nav_bar::{self, NavItem, NavTarget};
use super::components::Toast;
use super::document::{Document, HotspotAction};
use super::input::Action;
use super::layout::ScreenLayout;
use super::modal::{Modal, ModalAction};
use super::scroll::ScrollState;
use super::sections::{self, PageContext};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::navigator::{Navigator, ScrollTarget};
use crate::portfolio::Portfolio;
use crate::section::SectionId;
use crate::state::AppState;
use crate::theme::{ColorFgBg, Theme, ThemeMode, ThemePreference};
use crate::tracker::{RegionLookup, SectionTracker};
use crate::typewriter::Typewriter;
use ratatui::layout::Position;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Longest sleep between frames when nothing is animating
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Main application state for the TUI
pub struct App {
    /// Active section and theme mode, shared with the tracker and preference
    pub state: AppState,

    /// Resolved colors for the current mode
    pub theme: Theme,
    theme_rx: watch::Receiver<ThemeMode>,
    active_rx: watch::Receiver<SectionId>,
    preference: ThemePreference,

    pub portfolio: Portfolio,

    /// Page laid out at the last render
    pub page: Document,
    pub scroll: ScrollState,
    pub tracker: SectionTracker,
    pub navigator: Navigator,

    pub typewriter: Typewriter,
    pub copy_indicator: CopyIndicator,
    pub toast: Option<Toast>,
    pub modal: Option<Modal>,

    /// Log buffer for the Logs modal
    pub log_buffer: LogBuffer,
    pub log_scroll: ScrollState,

    /// Screen areas and nav entries from the last render (mouse hit-testing)
    pub layout: ScreenLayout,
    pub nav_items: Vec<NavItem>,
    pub logo: String,

    /// Section requested on the command line, applied after the first layout
    pending_section: Option<SectionId>,
    frame_interval: Duration,
    /// Time of the current frame
    now: Instant,

    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        portfolio: Portfolio,
        mut preference: ThemePreference,
        log_buffer: LogBuffer,
        now: Instant,
    ) -> Self {
        let mode = preference.resolve(&ColorFgBg);
        let state = AppState::new(mode);
        let theme_rx = state.subscribe_theme();
        let active_rx = state.subscribe_active_section();

        let mut tracker = SectionTracker::new(config.tracker.band());
        tracker.observe_all(SectionId::ALL);

        let profile = &portfolio.profile;
        let initials: String = [&profile.name, &profile.surname]
            .iter()
            .filter_map(|part| part.chars().next())
            .collect();
        let logo = format!("◆ {}", initials.to_uppercase());

        tracing::info!(theme = %mode, "Opening portfolio of {}", profile.full_name());

        Self {
            state,
            theme: Theme::for_mode(mode),
            theme_rx,
            active_rx,
            preference,
            typewriter: Typewriter::new(&portfolio.hero.phrases, now),
            portfolio,
            page: Document::default(),
            scroll: ScrollState::new(),
            tracker,
            navigator: Navigator::new(config.navigation.scroll_duration()),
            copy_indicator: CopyIndicator::new(),
            toast: None,
            modal: None,
            log_buffer,
            log_scroll: ScrollState::new(),
            layout: ScreenLayout::default(),
            nav_items: Vec::new(),
            logo,
            pending_section: None,
            frame_interval: config.navigation.frame_interval(),
            now,
            should_quit: false,
        }
    }

    /// Open scrolled to `section` once the page has been laid out
    pub fn with_initial_section(mut self, section: Option<SectionId>) -> Self {
        self.pending_section = section;
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Frame lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Advance time-based state to `now`
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.sync_theme();

        if let Some(offset) = self.navigator.frame(now) {
            self.scroll.set_offset(offset);
        }

        self.typewriter.tick(now);
        self.copy_indicator.tick(now);
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Stop tracking and animating before the terminal is handed back
    pub fn shutdown(&mut self) {
        self.navigator.cancel();
        self.tracker.disconnect();
    }

    /// Lay the page out for a text area of `width` x `height`
    pub fn relayout(&mut self, width: u16, height: u16) {
        let page = sections::build(&PageContext {
            portfolio: &self.portfolio,
            theme: &self.theme,
            width: width as usize,
            viewport_height: height as usize,
            typed: self.typewriter.text(),
            copied: self.copy_indicator.is_copied(self.now),
        });
        self.page = page;
        self.scroll
            .update_dimensions(self.page.height(), height as usize);
    }

    /// Run the tracker against the current layout
    ///
    /// Returns true when the active section changed (the nav bar needs a redraw).
    pub fn after_layout(&mut self) -> bool {
        if let Some(section) = self.pending_section.take() {
            self.jump_to(section);
        }
        self.tracker
            .track(self.scroll.viewport(), &self.page, &self.state);

        let changed = self.active_rx.has_changed().unwrap_or(false);
        if changed {
            let section = *self.active_rx.borrow_and_update();
            tracing::debug!("Active section: {}", section);
        }
        changed
    }

    /// How long the event loop may sleep before the next frame
    pub fn next_frame_in(&self, now: Instant) -> Duration {
        if self.navigator.is_animating() {
            return self.frame_interval;
        }
        self.typewriter.next_step_in(now).min(IDLE_TICK)
    }

    fn sync_theme(&mut self) {
        if self.theme_rx.has_changed().unwrap_or(false) {
            let mode = *self.theme_rx.borrow_and_update();
            self.theme = Theme::for_mode(mode);
            tracing::debug!("Theme resolved: {}", self.theme.name);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a page action
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::GoTo(section) => {
                self.navigate(section);
            }
            Action::NextSection => {
                self.navigate(self.state.active_section().next());
            }
            Action::PrevSection => {
                self.navigate(self.state.active_section().prev());
            }
            Action::ScrollUp(rows) => self.manual_scroll(|s| s.scroll_up(rows)),
            Action::ScrollDown(rows) => self.manual_scroll(|s| s.scroll_down(rows)),
            Action::PageUp => self.manual_scroll(ScrollState::page_up),
            Action::PageDown => self.manual_scroll(ScrollState::page_down),
            Action::ScrollTop => self.scroll_to_top(),
            Action::ScrollBottom => self.manual_scroll(|s| s.scroll_down(s.total())),
            Action::ToggleTheme => self.toggle_theme(now),
            Action::CopyEmail => {
                self.copy_email(now);
            }
            Action::OpenHelp => self.modal = Some(Modal::Help),
            Action::OpenLogs => {
                self.log_scroll = ScrollState::new();
                self.modal = Some(Modal::Logs);
            }
            Action::CloseModal => self.modal = None,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Smooth scroll to a section; a no-op while it isn't laid out
    pub fn navigate(&mut self, section: SectionId) -> bool {
        let started = self.navigator.scroll_to(
            self.page.region(section),
            self.scroll.viewport(),
            self.scroll.max_offset(),
        );
        if started {
            tracing::debug!("Navigating to #{}", section.anchor());
        }
        started
    }

    /// Place the viewport on a section without animating
    fn jump_to(&mut self, section: SectionId) {
        match ScrollTarget::resolve(
            self.page.region(section),
            self.scroll.viewport(),
            self.scroll.max_offset(),
        ) {
            Some(target) => self.scroll.set_offset(target.offset),
            None => tracing::warn!("Section #{} has no layout, staying at the top", section.anchor()),
        }
    }

    /// Manual scrolling takes over from any smooth scroll in flight
    fn manual_scroll(&mut self, f: impl FnOnce(&mut ScrollState)) {
        self.navigator.cancel();
        f(&mut self.scroll);
    }

    /// Jump straight back to the hero, no easing
    pub fn scroll_to_top(&mut self) {
        self.manual_scroll(ScrollState::scroll_to_top);
    }

    pub fn toggle_theme(&mut self, now: Instant) {
        let mode = self.preference.toggle(&self.state);
        self.sync_theme();
        self.show_toast(format!("◐ {} theme", mode), now);
    }

    /// Copy the contact email (system clipboard, then OSC 52)
    pub fn copy_email(&mut self, now: Instant) -> CopyOutcome {
        let mut system = SystemClipboard;
        let mut osc52 = Osc52::stdout();
        self.copy_email_with(&mut system, &mut osc52, now)
    }

    /// Copy through the given backends; the UI acknowledges every outcome
    pub fn copy_email_with(
        &mut self,
        primary: &mut dyn ClipboardBackend,
        fallback: &mut dyn ClipboardBackend,
        now: Instant,
    ) -> CopyOutcome {
        let outcome = copy_with_fallback(&self.portfolio.profile.email, primary, fallback);
        self.copy_indicator.mark(now);
        self.show_toast("✓ Email copied", now);
        tracing::info!(?outcome, "Contact email copied");
        outcome
    }

    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(message, now));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Modals and mouse
    // ─────────────────────────────────────────────────────────────────────

    /// Execute what the open modal asked for
    pub fn handle_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::None => {}
            ModalAction::Close => self.modal = None,
            ModalAction::Quit => self.should_quit = true,
            ModalAction::ScrollUp => self.log_scroll.scroll_up(1),
            ModalAction::ScrollDown => self.log_scroll.scroll_down(1),
            ModalAction::PageUp => self.log_scroll.page_up(),
            ModalAction::PageDown => self.log_scroll.page_down(),
            ModalAction::ScrollTop => self.log_scroll.scroll_to_top(),
            ModalAction::ScrollBottom => {
                let total = self.log_scroll.total();
                self.log_scroll.scroll_down(total);
            }
            ModalAction::ClearLogs => {
                self.log_buffer.clear();
                self.log_scroll = ScrollState::new();
            }
        }
    }

    /// Left click at a screen cell
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let position = Position::new(column, row);

        if self
            .layout
            .scroll_top
            .is_some_and(|area| area.contains(position))
        {
            self.scroll_to_top();
            return;
        }

        if let Some(target) = nav_bar::hit(&self.nav_items, column, row) {
            match target {
                NavTarget::Logo => self.navigate(SectionId::Home),
                NavTarget::Section(section) => self.navigate(section),
            };
            return;
        }

        let text = self.layout.text;
        if !text.contains(position) {
            return;
        }
        let doc_row = self.scroll.offset() + (row - text.y) as usize;
        let doc_col = (column - text.x) as usize;
        match self.page.hotspot_at(doc_row, doc_col) {
            Some(HotspotAction::Navigate(section)) => {
                self.navigate(section);
            }
            Some(HotspotAction::CopyEmail) => {
                self.copy_email(now);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::bail;
    use ratatui::layout::Rect;

    const WIDTH: u16 = 76;
    const HEIGHT: u16 = 24;
    const FRAME: Duration = Duration::from_millis(16);

    struct Unavailable;

    impl ClipboardBackend for Unavailable {
        fn name(&self) -> &'static str {
            "unavailable"
        }
        fn copy(&mut self, _text: &str) -> anyhow::Result<()> {
            bail!("no display")
        }
    }

    #[derive(Default)]
    struct Recording(Vec<String>);

    impl ClipboardBackend for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }
        fn copy(&mut self, text: &str) -> anyhow::Result<()> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    fn app(t0: Instant) -> App {
        let portfolio = Portfolio::bundled().unwrap();
        let preference = ThemePreference::new(Box::new(MemoryStore::new()));
        App::new(&Config::default(), portfolio, preference, LogBuffer::new(), t0)
    }

    /// One iteration of the event loop without a terminal
    fn frame(app: &mut App, now: Instant) {
        app.tick(now);
        app.relayout(WIDTH, HEIGHT);
        app.after_layout();
    }

    #[test]
    fn starts_at_home_in_dark_mode() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);

        assert_eq!(app.state.active_section(), SectionId::Home);
        assert_eq!(app.theme.mode, ThemeMode::Dark);
        assert_eq!(app.preference.stored(), Some(ThemeMode::Dark));
        assert_eq!(app.logo, "◆ PA");
    }

    #[test]
    fn navigation_animates_to_the_section_and_activates_it() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);

        app.apply(Action::GoTo(SectionId::Projects), t0);
        assert!(app.navigator.is_animating());

        let mut seen = vec![app.state.active_section()];
        let mut now = t0;
        while now < t0 + Duration::from_millis(1100) {
            now += FRAME;
            frame(&mut app, now);
            let active = app.state.active_section();
            if seen.last() != Some(&active) {
                seen.push(active);
            }
        }

        let target = app.page.region(SectionId::Projects).unwrap().top;
        assert_eq!(app.scroll.offset(), target.min(app.scroll.max_offset()));
        assert!(!app.navigator.is_animating());
        assert_eq!(app.state.active_section(), SectionId::Projects);
        // Downward scroll only ever moves the highlight forward
        assert!(seen.windows(2).all(|w| w[0].index() < w[1].index()), "{:?}", seen);
    }

    #[test]
    fn navigation_before_layout_is_a_no_op() {
        let t0 = Instant::now();
        let mut app = app(t0);

        app.apply(Action::GoTo(SectionId::About), t0);
        assert!(!app.navigator.is_animating());
        assert_eq!(app.scroll.offset(), 0);
    }

    #[test]
    fn scroll_to_top_jumps_without_easing() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);

        app.scroll.set_offset(100.0);
        frame(&mut app, t0 + FRAME);
        assert_eq!(app.scroll.offset(), 100);

        app.apply(Action::ScrollTop, t0 + FRAME);
        assert_eq!(app.scroll.offset(), 0);
        assert!(!app.navigator.is_animating());

        frame(&mut app, t0 + Duration::from_millis(250));
        assert_eq!(app.scroll.offset(), 0);
        assert_eq!(app.state.active_section(), SectionId::Home);
    }

    #[test]
    fn scroll_to_top_stops_a_run_in_flight() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);

        app.apply(Action::GoTo(SectionId::Contact), t0);
        frame(&mut app, t0 + FRAME);
        frame(&mut app, t0 + Duration::from_millis(400));
        assert!(app.scroll.offset() > 0);

        let area = Rect::new(50, 20, 11, 1);
        app.layout.scroll_top = Some(area);
        app.click(area.x + 1, area.y, t0 + Duration::from_millis(400));
        assert_eq!(app.scroll.offset(), 0);
        assert!(!app.navigator.is_animating());
    }

    #[test]
    fn manual_scroll_cancels_smooth_scroll() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);

        app.apply(Action::GoTo(SectionId::Contact), t0);
        frame(&mut app, t0 + FRAME);
        app.apply(Action::ScrollDown(1), t0 + FRAME);

        assert!(!app.navigator.is_animating());
        let offset = app.scroll.offset();
        frame(&mut app, t0 + FRAME * 10);
        assert_eq!(app.scroll.offset(), offset);
    }

    #[test]
    fn initial_section_opens_scrolled() {
        let t0 = Instant::now();
        let mut app = app(t0).with_initial_section(Some(SectionId::Contact));
        frame(&mut app, t0);

        let contact = app.page.region(SectionId::Contact).unwrap();
        assert_eq!(app.scroll.offset(), contact.top);
        assert_eq!(app.state.active_section(), SectionId::Contact);
        assert!(app.scroll.show_scroll_top());
    }

    #[test]
    fn theme_toggle_twice_restores() {
        let t0 = Instant::now();
        let mut app = app(t0);

        app.apply(Action::ToggleTheme, t0);
        assert_eq!(app.state.theme(), ThemeMode::Light);
        assert_eq!(app.theme.mode, ThemeMode::Light);
        assert!(app.toast.is_some());

        app.apply(Action::ToggleTheme, t0);
        assert_eq!(app.state.theme(), ThemeMode::Dark);
        assert_eq!(app.theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn copy_is_acknowledged_even_when_every_path_fails() {
        let t0 = Instant::now();
        let mut app = app(t0);

        let outcome = app.copy_email_with(&mut Unavailable, &mut Unavailable, t0);
        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(app.copy_indicator.is_copied(t0));

        frame(&mut app, t0 + Duration::from_millis(100));
        assert!(app.page.plain_text().contains("Copied!"));

        frame(&mut app, t0 + Duration::from_millis(2000));
        assert!(!app.copy_indicator.is_copied(t0 + Duration::from_millis(2000)));
        assert!(!app.page.plain_text().contains("Copied!"));
        assert!(app.toast.is_none());
    }

    #[test]
    fn copy_falls_back_with_the_profile_email() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let mut fallback = Recording::default();

        let outcome = app.copy_email_with(&mut Unavailable, &mut fallback, t0);
        assert_eq!(outcome, CopyOutcome::Fallback);
        assert_eq!(fallback.0, vec![app.portfolio.profile.email.clone()]);
    }

    #[test]
    fn clicking_a_hero_cta_navigates() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);
        app.layout.text = Rect::new(2, 3, WIDTH, HEIGHT);

        let cta = *app
            .page
            .hotspots
            .iter()
            .find(|h| h.action == HotspotAction::Navigate(SectionId::About))
            .unwrap();
        app.click(2 + cta.start as u16, 3 + cta.row as u16, t0);

        let about = app.page.region(SectionId::About).unwrap();
        assert!(app.navigator.is_animating());
        assert_eq!(app.navigator.destination(), Some(about.top as f64));
    }

    #[test]
    fn tab_walks_sections_from_the_active_one() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);

        app.apply(Action::NextSection, t0);
        let about = app.page.region(SectionId::About).unwrap();
        assert_eq!(app.navigator.destination(), Some(about.top as f64));

        app.apply(Action::PrevSection, t0);
        let contact = app.page.region(SectionId::Contact).unwrap();
        assert_eq!(
            app.navigator.destination(),
            Some(contact.top.min(app.scroll.max_offset()) as f64)
        );
    }

    #[test]
    fn frame_pacing_speeds_up_while_animating() {
        let t0 = Instant::now();
        let mut app = app(t0);
        frame(&mut app, t0);
        assert!(app.next_frame_in(t0) <= IDLE_TICK);

        app.apply(Action::GoTo(SectionId::Skills), t0);
        assert_eq!(app.next_frame_in(t0), Config::default().navigation.frame_interval());
    }

    #[test]
    fn modal_actions() {
        let t0 = Instant::now();
        let mut app = app(t0);

        app.apply(Action::OpenLogs, t0);
        assert_eq!(app.modal, Some(Modal::Logs));
        app.handle_modal_action(ModalAction::Close);
        assert_eq!(app.modal, None);

        app.apply(Action::OpenHelp, t0);
        app.handle_modal_action(ModalAction::Quit);
        assert!(app.should_quit);
    }
}
