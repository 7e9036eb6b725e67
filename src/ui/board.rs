//! Notes board rendering
//!
//! Draws the note cards in a fixed-height grid, three to a row, with the
//! heart, label and per-card action hints. Rows scroll so the selected card
//! is always visible.

use crate::app::{App, InputMode};
use crate::models::Note;
use crate::ui::components;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

const CARDS_PER_ROW: usize = 3;
const CARD_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::bordered()
        .title(format!(" 󰚸 Notes ({}) ", app.store.len()))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    if app.store.is_empty() {
        let empty = Paragraph::new("No notes yet. Press 'n' to create one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted));
        let centered =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
                .split(inner)[1];
        empty.render(centered, frame.buffer_mut());
        return;
    }

    let notes = app.store.notes();
    let total_rows = notes.len().div_ceil(CARDS_PER_ROW);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;

    // Scroll just far enough to keep the selected card on screen
    let selected_row = app.selected_note / CARDS_PER_ROW;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    for (screen_row, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let row_area = Rect::new(
            inner.x,
            inner.y + screen_row as u16 * CARD_HEIGHT,
            inner.width,
            CARD_HEIGHT.min(inner.height.saturating_sub(screen_row as u16 * CARD_HEIGHT)),
        );
        let columns = Layout::horizontal(vec![Constraint::Fill(1); CARDS_PER_ROW]).split(row_area);

        for column in 0..CARDS_PER_ROW {
            let index = row * CARDS_PER_ROW + column;
            if let Some(note) = notes.get(index) {
                let selected = index == app.selected_note && app.input_mode != InputMode::Form;
                render_card(frame, columns[column], app, note, selected);
            }
        }
    }
}

/// One note card: heart and label on top, the title, then the content
fn render_card(frame: &mut Frame, area: Rect, app: &App, note: &Note, selected: bool) {
    let palette = app.theme.palette();

    let border = if selected {
        Style::default().fg(palette.love)
    } else {
        Style::default().fg(palette.highlight_high)
    };

    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(border);
    if selected {
        block = block
            .title_bottom(Line::from(" [e] Edit · [d] X ").right_aligned())
            .title_style(Style::default().fg(palette.muted));
    }

    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let header = Line::from(vec![
        components::heart(note.favorite, palette),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", note.label.icon(), note.label.display_name()),
            Style::default().fg(palette.gold),
        ),
    ]);

    let mut lines = vec![
        header,
        Line::from(Span::styled(
            note.title.clone(),
            Style::default().fg(palette.text).bold(),
        )),
    ];
    lines.extend(
        note.content
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(palette.subtle)))),
    );

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(palette.surface))
        .render(inner, frame.buffer_mut());
}
