//! Favorites rendering: the always-visible summary panel and the floating
//! popup opened with 'v'. Both read the favorite subset straight from the
//! store, so they are current on every frame.

use crate::app::App;
use crate::ui::components;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Clear, Paragraph, Row, Table, Widget},
};

/// The favorites summary next to the form: one title per line, board order
pub fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::bordered()
        .title(" ★ Favorite Notes ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let favorites: Vec<_> = app.store.favorites().collect();
    if favorites.is_empty() {
        let empty = Paragraph::new("No favorites yet. Press 'f' on a note.")
            .style(Style::default().fg(palette.muted));
        empty.render(inner, frame.buffer_mut());
        return;
    }

    let lines: Vec<Line> = favorites
        .iter()
        .map(|note| {
            Line::from(vec![
                components::heart(true, palette),
                Span::raw(" "),
                Span::styled(note.title.clone(), Style::default().fg(palette.text)),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, frame.buffer_mut());
}

/// Render the favorites window as a floating popup
pub fn render_floating_favorites(frame: &mut Frame, app: &App) {
    if !app.show_favorites_popup {
        return;
    }

    let palette = app.theme.palette();
    let area = frame.area();
    let popup_width = 70;
    let popup_height = 20;

    let popup_area = Rect::new(
        (area.width.saturating_sub(popup_width)) / 2,
        (area.height.saturating_sub(popup_height)) / 2,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    Clear.render(popup_area, frame.buffer_mut());

    let popup_block = Block::bordered()
        .title(" ★ Favorites ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.love).bg(palette.surface));

    let inner_area = popup_block.inner(popup_area);
    popup_block.render(popup_area, frame.buffer_mut());

    let favorites: Vec<_> = app.store.favorites().collect();

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner_area);

    if favorites.is_empty() {
        let no_favorites =
            Paragraph::new("No favorites yet. Press 'f' on a note to mark it as a favorite.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted));
        no_favorites.render(chunks[0], frame.buffer_mut());
    } else {
        let header = Row::new(vec![
            Cell::from("Title").style(Style::default().fg(palette.iris).bold()),
            Cell::from("Label").style(Style::default().fg(palette.iris).bold()),
            Cell::from("Content").style(Style::default().fg(palette.iris).bold()),
        ]);

        let rows: Vec<Row> = favorites
            .iter()
            .map(|note| {
                let first_line = note.content.lines().next().unwrap_or_default();
                let preview = if first_line.chars().count() > 40 {
                    format!("{}...", first_line.chars().take(37).collect::<String>())
                } else {
                    first_line.to_string()
                };

                Row::new(vec![
                    Cell::from(note.title.clone()).style(Style::default().fg(palette.text)),
                    Cell::from(format!(
                        "{} {}",
                        note.label.icon(),
                        note.label.display_name()
                    ))
                    .style(Style::default().fg(palette.gold)),
                    Cell::from(preview).style(Style::default().fg(palette.subtle)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            &[
                Constraint::Percentage(35),
                Constraint::Percentage(20),
                Constraint::Percentage(45),
            ],
        )
        .header(header)
        .block(Block::default())
        .column_spacing(1);

        table.render(chunks[0], frame.buffer_mut());
    }

    let help_paragraph = Paragraph::new("Press Esc to close")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));
    help_paragraph.render(chunks[1], frame.buffer_mut());
}
