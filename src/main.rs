//! noteboard - In-Memory Notes Board
//!
//! A terminal-based user interface for keeping short text notes. Built with
//! Rust and ratatui for a fast, efficient terminal experience.
//!
//! noteboard lets you:
//! - Create, edit and delete short notes with a category label
//! - Mark notes as favorites and review them in a summary panel
//! - Flip the whole surface between a dark and a light theme
//!
//! Everything lives in memory: the board starts from the seed notes on every
//! launch and is gone when the process exits.

use crate::app::App;
use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::error::Error;
use std::io::{self};
use std::time::Duration;

mod app;
mod handlers;
mod models;
mod ui;

/// Application entry point and initialization
/// Sets up the terminal, runs the synchronous event loop (draw a frame, wait
/// for a key, apply the transition) and restores the terminal on the way out.
fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| app.render(frame))?;
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                should_quit = handlers::keys::handle_key_events(key, &mut app);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
