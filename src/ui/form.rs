//! Note form rendering
//!
//! Draws the draft editor: a title input, a multi-line content input and the
//! label selector. The focused field gets the accent border and, for the two
//! text inputs, the terminal cursor.

use crate::app::{App, FormField, InputMode};
use crate::models::Label;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let form_active = app.input_mode == InputMode::Form;

    let title = if app.edit_target.is_some() {
        " 󰷈 Update Note "
    } else {
        " 󰎞 Create Note "
    };
    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(if form_active {
            palette.gold
        } else {
            palette.highlight_high
        }));

    let inner_area = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(3),
    ])
    .split(inner_area);

    render_text_input(
        frame,
        chunks[0],
        app,
        FormField::Title,
        " Title ",
        "Note Title",
        &app.draft.title,
    );
    render_text_input(
        frame,
        chunks[1],
        app,
        FormField::Content,
        " Content ",
        "Note Content",
        &app.draft.content,
    );
    render_label_selector(frame, chunks[2], app);
}

fn field_border(app: &App, field: FormField) -> Style {
    let palette = app.theme.palette();
    if app.input_mode == InputMode::Form && app.form_focus == field {
        Style::default().fg(palette.iris)
    } else {
        Style::default().fg(palette.highlight_high)
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: FormField,
    title: &str,
    placeholder: &str,
    value: &str,
) {
    let palette = app.theme.palette();

    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .style(field_border(app, field));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let paragraph = if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(palette.muted))
    } else {
        Paragraph::new(value.to_string())
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: false })
    };
    paragraph.render(inner, frame.buffer_mut());

    // Put the terminal cursor after the last typed character
    if app.input_mode == InputMode::Form && app.form_focus == field {
        let last_line = value.rsplit('\n').next().unwrap_or("");
        let line_count = value.split('\n').count().max(1) as u16;
        let cursor_x = inner.x + (last_line.width() as u16).min(inner.width.saturating_sub(1));
        let cursor_y = inner.y + (line_count - 1).min(inner.height.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn render_label_selector(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::bordered()
        .title(" Label ")
        .border_type(BorderType::Rounded)
        .style(field_border(app, FormField::Label));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let mut spans: Vec<Span> = Vec::new();
    if app.draft.label.is_none() {
        spans.push(Span::styled(
            " Select a label: ",
            Style::default().fg(palette.muted).italic(),
        ));
    }
    for label in Label::ALL {
        let style = if app.draft.label == Some(label) {
            Style::default().fg(palette.base).bg(palette.iris)
        } else {
            Style::default().fg(palette.subtle)
        };
        spans.push(Span::styled(format!(" {} ", label.display_name()), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).render(inner, frame.buffer_mut());
}
