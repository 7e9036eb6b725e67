//! Help overlay listing every key binding, opened with '?'

use crate::app::{App, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("↑↓ / jk", "Move between notes"),
    ("n", "Create a new note"),
    ("e / ⏎", "Edit the selected note"),
    ("d / x", "Delete the selected note"),
    ("f / Space", "Toggle favorite"),
    ("v", "Favorites popup"),
    ("t", "Toggle dark / light theme"),
    ("Tab", "Next form field"),
    ("Ctrl+S", "Submit the form"),
    ("Esc", "Cancel / close"),
    ("q", "Quit"),
];

pub fn render(frame: &mut Frame, app: &App) {
    if app.input_mode != InputMode::Help {
        return;
    }

    let palette = app.theme.palette();
    let area = frame.area();
    let popup_width = 50;
    let popup_height = BINDINGS.len() as u16 + 4;

    let popup_area = Rect::new(
        (area.width.saturating_sub(popup_width)) / 2,
        (area.height.saturating_sub(popup_height)) / 2,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    Clear.render(popup_area, frame.buffer_mut());

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {keys:>10}  "), Style::default().fg(palette.foam)),
                Span::styled(action.to_string(), Style::default().fg(palette.text)),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Center),
    );

    let dialog = Paragraph::new(lines).block(
        Block::bordered()
            .title("  Help ")
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(palette.iris).bg(palette.surface)),
    );

    dialog.render(popup_area, frame.buffer_mut());
}
