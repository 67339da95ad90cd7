//! Terminal user interface for the consignment calculator
//!
//! Reproduces the original single-screen flow: a short reveal sequence,
//! the daily-tax confirmation, then the calculator with a copy-to-clipboard
//! action. Rendering is ratatui, input is crossterm, and all timed behavior
//! (reveals, the copy acknowledgment) expires against deadlines checked on
//! tick events.

pub mod app;
pub mod events;
pub mod ui;

pub use app::{CalculatorApp, Screen};
pub use events::{Event, EventHandler};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

/// Runs the calculator TUI until the user quits.
pub async fn run(tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, tick_rate).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, tick_rate: Duration) -> Result<()> {
    let mut app = CalculatorApp::new();
    let mut events = EventHandler::new(tick_rate);

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        match events.next().await {
            Some(Event::Tick) => app.on_tick(),
            Some(Event::Key(key)) => app.handle_key(key),
            Some(Event::Error(msg)) => tracing::error!("terminal event error: {}", msg),
            None => break,
        }
    }

    Ok(())
}
