// Theme preference - initial resolution and persistence of the theme mode
//
// Resolution order on startup:
// 1. Stored "theme" key, if it holds exactly "dark" or "light"
// 2. System preference (COLORFGBG), consulted but currently both answers open dark
//
// Every change is written back to the store immediately. A failed write is
// logged and the in-memory mode is kept.

use super::ThemeMode;
use crate::state::AppState;
use crate::storage::KeyValueStore;

/// Storage key for the theme mode
pub const THEME_KEY: &str = "theme";

/// Source of the terminal's light/dark preference
pub trait SystemPreference {
    /// `Some(true)` for dark, `Some(false)` for light, `None` when unknown
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reads `COLORFGBG` ("fg;bg" or "fg;default;bg") as set by rxvt, Konsole and friends
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorFgBg;

impl ColorFgBg {
    /// Interpret a COLORFGBG value; background 7 or 15 is light
    pub fn parse(value: &str) -> Option<bool> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        Some(!matches!(bg, 7 | 15))
    }
}

impl SystemPreference for ColorFgBg {
    fn prefers_dark(&self) -> Option<bool> {
        std::env::var("COLORFGBG").ok().as_deref().and_then(Self::parse)
    }
}

/// Theme mode backed by a persistent store
pub struct ThemePreference {
    store: Box<dyn KeyValueStore>,
}

impl ThemePreference {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Valid stored mode, if any
    ///
    /// Unknown values and read failures count as "nothing stored".
    pub fn stored(&self) -> Option<ThemeMode> {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => match value.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::debug!("Ignoring stored theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {:#}", e);
                None
            }
        }
    }

    /// Mode to open with
    pub fn initial(&self, system: &impl SystemPreference) -> ThemeMode {
        if let Some(mode) = self.stored() {
            return mode;
        }

        // Light systems still open dark; light is opt-in through the toggle
        let prefers_dark = system.prefers_dark();
        tracing::debug!(?prefers_dark, "No stored theme, opening dark");
        ThemeMode::Dark
    }

    /// Resolve the mode to open with and write it back
    ///
    /// The store holds a valid mode from the first run on, including when
    /// it held nothing or a value that didn't parse.
    pub fn resolve(&mut self, system: &impl SystemPreference) -> ThemeMode {
        let mode = self.initial(system);
        if self.stored() != Some(mode) {
            self.persist(mode);
        }
        mode
    }

    /// Write a mode to the store
    ///
    /// Returns false if the write failed; the caller keeps its in-memory value.
    pub fn persist(&mut self, mode: ThemeMode) -> bool {
        match self.store.set(THEME_KEY, mode.as_str()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to persist theme '{}': {:#}", mode, e);
                false
            }
        }
    }

    /// Apply a mode to the app state and persist it
    pub fn set(&mut self, state: &AppState, mode: ThemeMode) {
        state.set_theme(mode);
        self.persist(mode);
    }

    /// Flip the app state's mode and persist the result
    pub fn toggle(&mut self, state: &AppState) -> ThemeMode {
        let next = state.theme().toggle();
        self.set(state, next);
        tracing::info!("Theme switched to {}", next);
        next
    }
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference").finish_non_exhaustive()
    }
}
