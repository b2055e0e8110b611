// folio - a single-page portfolio for the terminal
//
// The page is one tall document split into six sections. The nav bar follows
// whichever section sits in the tracking band, and navigating smooth-scrolls
// the document to a section.
//
// Architecture:
// - Portfolio: typed content, bundled or loaded from a user file
// - Tracker: turns the scroll position into the active section
// - Navigator: eased scroll animation towards a section
// - State: shared active section and theme mode (watch channels)
// - TUI (ratatui): renders the page, handles keys and mouse
// - Storage: persists the theme preference

mod cli;
mod config;
mod logging;
mod navigator;
mod portfolio;
mod section;
mod state;
mod storage;
mod theme;
mod tracker;
mod tui;
mod typewriter;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig, VERSION};
use logging::{LogBuffer, TuiLogLayer};
use portfolio::Portfolio;
use theme::ThemePreference;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let Cli { section, command } = Cli::parse();

    if let Some(command) = command {
        // Config commands must keep working when the config file is broken
        let _file_guard = if matches!(command, Commands::Config { .. }) {
            None
        } else {
            init_tracing(&Config::load().unwrap_or_default().logging, None)
        };
        return cli::run(command);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::load()?;

    // Logs go to the in-app buffer while the page owns the terminal
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, Some(log_buffer.clone()));

    tracing::info!("folio {} starting", VERSION);

    let portfolio = Portfolio::load(config.content.as_deref())?;
    let store = storage::open_store(config.storage_path.as_deref())?;
    let preference = ThemePreference::new(store);

    if let Some(section) = section {
        tracing::debug!("Opening at #{}", section.anchor());
    }

    tui::run_tui(config, portfolio, preference, log_buffer, section).await
}

/// Initialize tracing
///
/// With a log buffer (TUI mode) events are captured for the Logs modal;
/// without one they go to stderr. File logging is added on top of either
/// when enabled.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(logging: &LoggingConfig, log_buffer: Option<LogBuffer>) -> Option<WorkerGuard> {
    let default_filter = format!("folio={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let (file_writer, guard) = match file_appender(logging) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = log_buffer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    let tui_layer = log_buffer.map(TuiLogLayer::new);

    // File layer uses JSON format for structured log parsing
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling file appender, if file logging is enabled and the directory is usable
fn file_appender(logging: &LoggingConfig) -> Option<tracing_appender::rolling::RollingFileAppender> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        // Tracing isn't up yet, and file logging is optional
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };
    Some(appender)
}
