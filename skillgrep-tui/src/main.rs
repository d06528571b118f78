//! skillgrep - AI-powered candidate filtering, simulated end to end.
//!
//! Terminal UI walking the full flow: sign in, connect an ATS, pick a
//! job, build criteria in chat, and review scored candidates.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use skillgrep_core::{Config, Store};

use crate::app::App;

#[derive(Debug, Parser)]
#[command(name = "skillgrep", about = "AI-powered candidate filtering (simulated)")]
struct Cli {
    /// Config file path (default: ~/.config/skillgrep/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Zero all simulated delays
    #[arg(long)]
    instant: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path).context("failed to load configuration")?,
        None => Config::load().context("failed to load configuration")?,
    };
    if cli.instant {
        config.demo = skillgrep_core::config::DemoConfig::instant();
    }

    // Initialize logging (to file, not stdout since we have a TUI)
    let _log_guard = skillgrep_core::logging::init(&config.logging)
        .context("failed to initialize logging")?;

    tracing::info!("skillgrep TUI starting up");

    let store = Store::load().context("failed to load seed data")?;
    let mut app = App::new(config.demo, &store);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    tracing::info!("skillgrep TUI shutting down");

    result
}

/// Run the main application loop.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Fire any elapsed simulated-latency timers
        app.tick(Instant::now());

        // Render
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
