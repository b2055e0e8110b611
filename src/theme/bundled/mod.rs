//! Bundled TOML palettes (compiled into binary)
//!
//! One palette per theme mode. Each lives in its own module file so the
//! colors can be edited without touching the loader.

mod folio_dark;
mod folio_light;

use super::ThemeMode;

/// Bundled theme metadata
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Folio_Dark.toml",
        content: folio_dark::THEME,
    },
    BundledTheme {
        filename: "Folio_Light.toml",
        content: folio_light::THEME,
    },
];

/// Palette source for a theme mode
pub fn for_mode(mode: ThemeMode) -> &'static BundledTheme {
    match mode {
        ThemeMode::Dark => &BUNDLED_THEMES[0],
        ThemeMode::Light => &BUNDLED_THEMES[1],
    }
}
