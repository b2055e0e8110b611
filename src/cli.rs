// CLI module - command-line argument parsing and handlers
//
// Running `folio` with no subcommand opens the page. Subcommands:
// - config --show/--path/--reset/--edit/--update: manage the config file
// - print [--json]: dump the portfolio content without the TUI
// - theme [--toggle]: show or flip the persisted theme

use crate::config::{Config, VERSION};
use crate::portfolio::Portfolio;
use crate::section::SectionId;
use crate::storage::open_store;
use crate::theme::{ColorFgBg, Theme, ThemePreference};
use crate::tui::sections::{self, PageContext};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Width used when printing the page as plain text
const PRINT_WIDTH: usize = 80;

/// folio - a portfolio page for the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "A single-page portfolio for the terminal", long_about = None)]
pub struct Cli {
    /// Open the page scrolled to a section (home, about, skills, projects, experience, contact)
    #[arg(long, value_name = "ANCHOR", value_parser = parse_section)]
    pub section: Option<SectionId>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Rewrite config with the current layout (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Print the portfolio content and exit
    Print {
        /// Print the content as JSON instead of the rendered page
        #[arg(long)]
        json: bool,
    },

    /// Show the persisted theme
    Theme {
        /// Switch between dark and light
        #[arg(long)]
        toggle: bool,
    },
}

fn parse_section(value: &str) -> Result<SectionId, String> {
    SectionId::from_anchor(value).ok_or_else(|| {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        format!("unknown section '{}' (expected one of: {})", value, anchors.join(", "))
    })
}

/// Run a subcommand to completion
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show()
            } else if reset {
                handle_config_reset()
            } else if edit {
                handle_config_edit()
            } else if update {
                handle_config_update()
            } else {
                // No flag provided, show help
                println!("Usage: folio config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Rewrite config with the current layout (preserves values)");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
        Commands::Print { json } => handle_print(json),
        Commands::Theme { toggle } => handle_theme(toggle),
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Config's own serializer is the single source of truth
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}'; set $EDITOR to your preferred editor",
            editor
        )
    })?;
    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_config_update() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    // Parse first so a broken file is never overwritten
    let updated = Config::load()?.to_toml();

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    std::fs::write(&path, updated)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

fn handle_print(json: bool) -> Result<()> {
    let config = Config::load()?;
    let portfolio = Portfolio::load(config.content.as_deref())?;

    if json {
        let out = serde_json::to_string_pretty(&portfolio)
            .context("Failed to serialize portfolio content")?;
        println!("{}", out);
    } else {
        print!("{}", render_plain(&portfolio));
    }
    Ok(())
}

/// The page as plain text, hero showing its first phrase in full
fn render_plain(portfolio: &Portfolio) -> String {
    let theme = Theme::default();
    let typed = portfolio
        .hero
        .phrases
        .first()
        .map(String::as_str)
        .unwrap_or_default();
    let page = sections::build(&PageContext {
        portfolio,
        theme: &theme,
        width: PRINT_WIDTH,
        viewport_height: 0,
        typed,
        copied: false,
    });
    page.plain_text()
}

fn handle_theme(toggle: bool) -> Result<()> {
    let config = Config::load()?;
    let store = open_store(config.storage_path.as_deref())?;
    let mut preference = ThemePreference::new(store);

    let current = preference.initial(&ColorFgBg);
    if !toggle {
        let source = if preference.stored().is_some() {
            "stored"
        } else {
            "default"
        };
        println!("{} ({})", current, source);
        return Ok(());
    }

    let next = current.toggle();
    if !preference.persist(next) {
        bail!("Failed to save theme '{}'", next);
    }
    println!("Theme switched to {}", next);
    Ok(())
}
