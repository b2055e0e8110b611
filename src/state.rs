//! Shared application state
//!
//! Holds the two page-wide values that several components care about:
//! the active section (written by the tracker, read by the nav bar) and the
//! theme mode (written by the theme preference, read by every renderer).
//!
//! Each value lives in a `tokio::sync::watch` channel so readers can either
//! borrow the current value or subscribe to changes. All writes happen on
//! the UI task.

use crate::section::SectionId;
use crate::theme::ThemeMode;
use tokio::sync::watch;

/// Injectable page state with change notification
#[derive(Debug)]
pub struct AppState {
    active_section: watch::Sender<SectionId>,
    theme: watch::Sender<ThemeMode>,
}

impl AppState {
    /// New state: active section starts at Home
    pub fn new(theme: ThemeMode) -> Self {
        let (active_section, _) = watch::channel(SectionId::Home);
        let (theme, _) = watch::channel(theme);
        Self {
            active_section,
            theme,
        }
    }

    /// Currently active section
    pub fn active_section(&self) -> SectionId {
        *self.active_section.borrow()
    }

    /// Display label of the active section
    pub fn active_label(&self) -> &'static str {
        self.active_section().label()
    }

    /// Set the active section; returns true if the value changed
    ///
    /// Subscribers are only notified on an actual change.
    pub fn set_active_section(&self, section: SectionId) -> bool {
        self.active_section.send_if_modified(|current| {
            if *current == section {
                false
            } else {
                *current = section;
                true
            }
        })
    }

    /// Subscribe to active-section changes
    pub fn subscribe_active_section(&self) -> watch::Receiver<SectionId> {
        self.active_section.subscribe()
    }

    pub fn theme(&self) -> ThemeMode {
        *self.theme.borrow()
    }

    /// Set the theme mode; returns true if the value changed
    pub fn set_theme(&self, mode: ThemeMode) -> bool {
        self.theme.send_if_modified(|current| {
            if *current == mode {
                false
            } else {
                *current = mode;
                true
            }
        })
    }

    pub fn subscribe_theme(&self) -> watch::Receiver<ThemeMode> {
        self.theme.subscribe()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let state = AppState::default();
        assert_eq!(state.active_section(), SectionId::Home);
        assert_eq!(state.active_label(), "Home");
    }

    #[test]
    fn subscribers_see_changes_only() {
        let state = AppState::default();
        let mut rx = state.subscribe_active_section();

        assert!(!state.set_active_section(SectionId::Home));
        assert!(!rx.has_changed().unwrap());

        assert!(state.set_active_section(SectionId::Skills));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SectionId::Skills);
    }

    #[test]
    fn theme_updates_notify() {
        let state = AppState::new(ThemeMode::Dark);
        let mut rx = state.subscribe_theme();

        assert!(state.set_theme(ThemeMode::Light));
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Light);
        assert_eq!(state.theme(), ThemeMode::Light);
    }
}
