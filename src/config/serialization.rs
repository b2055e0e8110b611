//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use std::path::Path;

/// Quote a path as a TOML basic string
fn toml_path(path: &Path) -> String {
    toml_string(&path.display().to_string())
}

/// Quote a value as a TOML basic string (escapes backslashes and quotes)
fn toml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Config {
    /// Optional path keys: written when set, shown commented out otherwise
    fn paths_to_toml(&self) -> String {
        let content = match &self.content {
            Some(path) => format!("content = {}\n", toml_path(path)),
            None => "# content = \"~/portfolio.toml\"\n".to_string(),
        };
        let storage = match &self.storage_path {
            Some(path) => format!("storage_path = {}\n", toml_path(path)),
            None => "# storage_path = \"~/.local/share/folio/preferences.toml\"\n".to_string(),
        };
        format!("{}{}", content, storage)
    }

    /// Render the full config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Portfolio content file (TOML). Defaults to the bundled content;
# run `folio print` to see what the bundled content contains.
# Theme preference storage (defaults to the platform data dir).
{paths}
# Smooth scrolling between sections
[navigation]
scroll_duration_ms = {duration}
frame_rate = {fps}  # frames per second while a scroll is animating

# Active-section tracking band: fractions of the screen height trimmed from
# the top and bottom. A section is active once it enters the remaining band.
[tracker]
band_top = {band_top:?}
band_bottom = {band_bottom:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-app log view or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            paths = self.paths_to_toml(),
            duration = self.navigation.scroll_duration_ms,
            fps = self.navigation.frame_rate,
            band_top = self.tracker.band_top,
            band_bottom = self.tracker.band_bottom,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_path(&self.logging.file_dir),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
