//! User Interface Module
//!
//! All rendering logic lives here, separated from the state in [`crate::app`]
//! and the data model in [`crate::models`]. Render functions only read the
//! application state; every mutation happens in the handlers.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

pub mod board;
pub mod components;
pub mod favorites;
pub mod form;
pub mod help;
pub mod theme;

/// Renders one frame of the whole surface.
///
/// Layout mirrors the board view: the form and the favorites summary in a
/// left column, the notes grid filling the rest, the bottom bar underneath
/// and any floating overlays drawn last so they sit on top.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();

    // The theme's background color covers the whole surface
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.base)),
        frame.area(),
    );

    let chunks =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(frame.area());
    let columns =
        Layout::horizontal([Constraint::Length(44), Constraint::Min(0)]).split(chunks[0]);
    let left = Layout::vertical([Constraint::Fill(2), Constraint::Fill(1)]).split(columns[0]);

    form::render(frame, left[0], app);
    favorites::render_summary(frame, left[1], app);
    board::render(frame, columns[1], app);
    components::render_bottom_bar(frame, chunks[1], app);

    favorites::render_floating_favorites(frame, app);
    help::render(frame, app);
}
