// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (input, animation frames, idle ticks)
// - Rendering the page and its overlays

pub mod app;
pub mod clipboard;
pub mod components;
pub mod document;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod sections;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::portfolio::Portfolio;
use crate::section::SectionId;
use crate::theme::ThemePreference;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::{Action, WHEEL_STEP};
use modal::Modal;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How often the input thread checks for shutdown
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. The terminal is restored even when the loop fails.
pub async fn run_tui(
    config: Config,
    portfolio: Portfolio,
    preference: ThemePreference,
    log_buffer: LogBuffer,
    initial_section: Option<SectionId>,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, portfolio, preference, log_buffer, Instant::now())
        .with_initial_section(initial_section);

    // Input is read on a blocking thread and forwarded to the loop
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();
    let reader = spawn_input_reader(event_tx, shutdown.clone());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;
    app.shutdown();

    shutdown.cancel();
    if let Err(e) = reader.await {
        tracing::warn!("Input reader ended abnormally: {}", e);
    }

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Forward terminal events until `shutdown` fires or the loop hangs up
fn spawn_input_reader(
    tx: mpsc::UnboundedSender<Event>,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !shutdown.is_cancelled() {
            match event::poll(INPUT_POLL) {
                Ok(false) => {}
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
        }
    })
}

/// Main event loop
///
/// Each iteration advances the animations, draws one frame, and runs the
/// section tracker against what was drawn. It then waits for input or for
/// the next frame, whichever comes first: a frame interval while a smooth
/// scroll is running, the typewriter's next step (capped) otherwise.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // Redraw right away so the nav bar highlight keeps up with the page
        if app.after_layout() {
            continue;
        }

        if app.should_quit {
            break;
        }

        let wait = app.next_frame_in(Instant::now());
        tokio::select! {
            received = event_rx.recv() => match received {
                Some(event) => handle_event(app, event),
                None => {
                    tracing::warn!("Input channel closed, leaving");
                    break;
                }
            },
            _ = tokio::time::sleep(wait) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key_event) => handle_key_event(app, key_event),
        Event::Mouse(mouse_event) => handle_mouse_event(app, mouse_event),
        // The next draw lays the page out for the new size
        Event::Resize(width, height) => tracing::debug!("Resized to {}x{}", width, height),
        _ => {}
    }
}

/// Handle keyboard input
/// Layered dispatch: Ctrl+C → Modal → Page
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Modal captures all input when active
    if let Some(open) = app.modal {
        let action = open.handle_input(key_event.code);
        app.handle_modal_action(action);
        return;
    }

    if let Some(action) = input::map_key(key_event) {
        app.apply(action, Instant::now());
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let logs_open = app.modal == Some(Modal::Logs);
    match mouse_event.kind {
        MouseEventKind::ScrollUp if logs_open => app.log_scroll.scroll_up(WHEEL_STEP),
        MouseEventKind::ScrollDown if logs_open => app.log_scroll.scroll_down(WHEEL_STEP),
        _ if app.modal.is_some() => {}
        MouseEventKind::ScrollUp => app.apply(Action::ScrollUp(WHEEL_STEP), Instant::now()),
        MouseEventKind::ScrollDown => app.apply(Action::ScrollDown(WHEEL_STEP), Instant::now()),
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse_event.column, mouse_event.row, Instant::now())
        }
        _ => {}
    }
}
