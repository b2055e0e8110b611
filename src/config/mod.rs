//! Configuration for folio
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod page;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use page::{FileNavigation, FileTracker, NavigationConfig, TrackerConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Portfolio content file replacing the bundled content
    pub content: Option<PathBuf>,

    /// Preferences file (theme); defaults to the platform data dir
    pub storage_path: Option<PathBuf>,

    /// Smooth scroll settings
    pub navigation: NavigationConfig,

    /// Active-section tracking band
    pub tracker: TrackerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (every key optional)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub content: Option<String>,
    pub storage_path: Option<String>,

    /// Optional [navigation] section
    pub navigation: Option<FileNavigation>,

    /// Optional [tracker] section
    pub tracker: Option<FileTracker>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read a config file; a missing file is an empty config
    ///
    /// A file that exists but can't be read or parsed is an error: a broken
    /// config should fail loudly rather than silently fall back to defaults.
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).with_context(|| {
                format!(
                    "Failed to parse config file {}\n\n  \
                     Check for missing quotes, invalid booleans (use true/false) or typos in \
                     section names.\n  To reset, run `folio config --reset`.",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Content file: env > file > bundled
        let content = env("FOLIO_CONTENT")
            .or(file.content)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        // Preferences file: env > file > data dir
        let storage_path = env("FOLIO_STORAGE")
            .or(file.storage_path)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        // Scroll duration: env > file > default
        let scroll_override = env("FOLIO_SCROLL_DURATION_MS").and_then(|v| v.parse().ok());
        let navigation = NavigationConfig::from_file(file.navigation, scroll_override);

        let tracker = TrackerConfig::from_file(file.tracker);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            content,
            storage_path,
            navigation,
            tracker,
            logging,
        }
    }
}
