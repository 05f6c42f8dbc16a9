//! A themed terminal menu and command console, side by side.
//!
//! Run the binary to launch the demo.  Run with `--save-config` to write the
//! effective configuration to disk and exit.

use std::io::{self, stderr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use cyberterm::app::{
    demo,
    event::{spawn_event_reader, AppEvent},
    forward::ConsoleForwarder,
    handler,
    state::AppState,
    view,
};
use cyberterm::config::AppConfig;
use cyberterm::core::{ThemeCatalog, ThemedConsole};
use cyberterm::ui::theme::skin;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Themed terminal menu and console")]
struct Cli {
    /// Starting theme id (loki, matrix, fallout, tron).
    #[arg(long)]
    theme: Option<String>,

    /// Menu title.
    #[arg(long)]
    title: Option<String>,

    /// Theme data file.
    #[arg(long, default_value = "themes/theme_config.json")]
    themes: PathBuf,

    /// Hide the theme selector and disable theme cycling.
    #[arg(long = "no-theme-changing")]
    no_theme_changing: bool,

    /// Disable mouse input.
    #[arg(long = "no-mouse")]
    no_mouse: bool,

    /// Disable menu keyboard shortcuts.
    #[arg(long = "no-keyboard")]
    no_keyboard: bool,

    /// Write the effective configuration file and exit.
    #[arg(long = "save-config")]
    save_config: bool,
}

impl Cli {
    /// Flags win over the config file.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(theme) = &self.theme {
            config.widget.theme = theme.clone();
        }
        if let Some(title) = &self.title {
            config.widget.title = title.clone();
        }
        if self.no_theme_changing {
            config.widget.theme_changing = false;
        }
        if self.no_mouse {
            config.widget.mouse_support = false;
        }
        if self.no_keyboard {
            config.widget.keyboard_shortcuts = false;
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only emits when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // stdout is kept for the goodbye line
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();
    cli.apply(&mut config);

    if cli.save_config {
        let path = config.save()?;
        println!("{}", path.display());
        return Ok(());
    }

    // ── widgets ───────────────────────────────────────────────
    let catalog = Arc::new(ThemeCatalog::load(&cli.themes).await);
    tracing::info!("{} themes available", catalog.len());

    let (forwarder, mut forwarded) = ConsoleForwarder::channel();
    let menu = demo::build_menu(Arc::clone(&catalog), config.widget.clone(), Some(forwarder));
    let mut console = ThemedConsole::new(&demo::console_options(&config.widget));
    console.log("Type 'help' for available commands");

    let mouse = config.widget.mouse_support;
    let mut state = AppState::new(catalog, menu, console, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen)?;
    if mouse {
        execute!(stderr_handle, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;
    state.resize(size.width, size.height);

    let events = spawn_event_reader(Duration::from_millis(100));
    let result = run(&mut terminal, &mut state, events, &mut forwarded).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result?;
    println!("{}", skin(state.menu.theme()).goodbye);
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
    mut events: mpsc::UnboundedReceiver<AppEvent>,
    forwarded: &mut mpsc::UnboundedReceiver<String>,
) -> Result<()> {
    loop {
        if state.take_redraw() {
            terminal.draw(|frame| view::draw(frame, state))?;
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize(w, h) => state.resize(w, h),
                }
            }

            Some(command) = forwarded.recv() => {
                state.console.execute_command(&command);
            }

            else => break,
        }

        if state.quitting() {
            break;
        }
    }
    Ok(())
}
