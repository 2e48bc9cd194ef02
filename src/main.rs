//! p4tl - Perforce file timeline
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use futures::executor::LocalPool;
use ratatui::DefaultTerminal;
use tracing::debug;

use p4tl::app::App;
use p4tl::cli::Cli;
use p4tl::config::{Config, LogSettings};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::from(Cli::parse());
    setup_tracing(&config.log)?;
    debug!(?config, "starting");

    let terminal = ratatui::init();
    let _restore = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, &config)
}

/// Log to a file; the terminal belongs to the UI
fn setup_tracing(settings: &LogSettings) -> color_eyre::Result<()> {
    let (Some(level), Some(path)) = (settings.level.to_tracing_level(), &settings.file) else {
        return Ok(());
    };

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Run the application's main loop.
///
/// History queries finish on worker threads; the local pool is driven once
/// per tick so their results land on this thread before drawing.
fn run(mut terminal: DefaultTerminal, config: &Config) -> color_eyre::Result<()> {
    let mut pool = LocalPool::new();
    let mut app = App::new(config, &pool.spawner())?;

    while app.running {
        pool.run_until_stalled();
        app.sync();
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so finished history queries are picked up
/// without a key press.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        app.on_key_event(key);
    }
    Ok(())
}
