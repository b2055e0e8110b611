// Theme system
//
// - ThemeMode: the dark/light switch held in AppState and persisted
// - ThemePreference: resolves the initial mode and writes changes back
// - TomlTheme: native palette format, one bundled palette per mode
// - Theme: resolved colors ready for rendering

mod bundled;
mod mode;
mod preference;
mod toml_format;

pub use mode::{InvalidThemeMode, ThemeMode};
pub use preference::{ColorFgBg, SystemPreference, ThemePreference, THEME_KEY};
pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub mode: ThemeMode,

    // ─── UI Chrome ───────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused
    pub title: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub muted: Color,
    pub border_type: BorderType,

    // ─── Page Content ────────────────────────────────────────
    pub heading: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub emphasis: Color,
    pub link: Color,
    pub success: Color,

    // ─── Skill Gauge ─────────────────────────────────────────
    pub gauge_fill: Color,
    pub gauge_track: Color,
}

impl Theme {
    /// Resolve the bundled palette for a mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        let bundled = bundled::for_mode(mode);
        match TomlTheme::from_str(bundled.content) {
            Ok(toml) => Self::from_toml(toml, mode),
            Err(e) => {
                tracing::warn!("Bundled theme {} failed to parse: {}", bundled.filename, e);
                Self::hardcoded_default(mode)
            }
        }
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, mode: ThemeMode) -> Self {
        let parse = TomlTheme::parse_color;

        Self {
            name: toml.meta.name.clone(),
            mode,

            background: parse(&toml.ui.background),
            foreground: parse(&toml.ui.foreground),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),
            title: parse(&toml.ui.title),
            status_bar: parse(&toml.ui.status_bar),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            muted: toml
                .ui
                .muted
                .as_deref()
                .map(parse)
                .unwrap_or_else(|| parse(&toml.ui.status_bar)),
            border_type: Self::parse_border_type(toml.ui.border_type.as_ref()),

            heading: parse(&toml.page.heading),
            accent: parse(&toml.page.accent),
            accent_alt: parse(&toml.page.accent_alt),
            emphasis: parse(&toml.page.highlight),
            link: parse(&toml.page.link),
            success: parse(&toml.page.success),

            gauge_fill: parse(&toml.gauge.fill),
            gauge_track: parse(&toml.gauge.track),
        }
    }

    /// Terminal-native fallback when a bundled palette can't be loaded
    fn hardcoded_default(mode: ThemeMode) -> Self {
        let (foreground, heading) = match mode {
            ThemeMode::Dark => (Color::Gray, Color::White),
            ThemeMode::Light => (Color::Black, Color::Black),
        };

        Self {
            name: format!("Terminal {} (Fallback)", mode),
            mode,

            background: Color::Reset,
            foreground,
            border: Color::DarkGray,
            highlight: Color::Blue,
            title: Color::Magenta,
            status_bar: Color::DarkGray,
            selection: Color::DarkGray,
            selection_fg: heading,
            muted: Color::DarkGray,
            border_type: BorderType::Plain,

            heading,
            accent: Color::Blue,
            accent_alt: Color::Magenta,
            emphasis: Color::LightMagenta,
            link: Color::Cyan,
            success: Color::Green,

            gauge_fill: Color::Blue,
            gauge_track: Color::DarkGray,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_resolves_its_bundled_palette() {
        let dark = Theme::for_mode(ThemeMode::Dark);
        assert_eq!(dark.name, "Folio Dark");
        assert_eq!(dark.mode, ThemeMode::Dark);
        assert_eq!(dark.accent, Color::Rgb(0x63, 0x66, 0xf1));
        assert_eq!(dark.border_type, BorderType::Rounded);

        let light = Theme::for_mode(ThemeMode::Light);
        assert_eq!(light.name, "Folio Light");
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn fallback_uses_terminal_background() {
        let theme = Theme::hardcoded_default(ThemeMode::Light);
        assert_eq!(theme.background, Color::Reset);
        assert!(theme.name.contains("light"));
    }
}
