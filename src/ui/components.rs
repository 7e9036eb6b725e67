//! UI Components Module
//!
//! Reusable pieces shared by the board, form and favorites views: the heart
//! affordance drawn on every note card and the bottom bar with breadcrumbs,
//! feedback messages and context-aware keyboard shortcuts.

use crate::app::{App, FormField, InputMode};
use crate::ui::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// The clickable-heart stand-in: a filled heart in the active color when the
/// note is a favorite, a hollow one in the inactive color otherwise.
pub fn heart(is_active: bool, palette: &Palette) -> Span<'static> {
    if is_active {
        Span::styled("♥", Style::default().fg(palette.heart_active))
    } else {
        Span::styled("♡", Style::default().fg(palette.heart_inactive))
    }
}

/// Renders the bottom bar: breadcrumbs or feedback on the left, the
/// shortcuts valid in the current input mode on the right.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left = if let Some(ref message) = app.error_message {
        Line::from(Span::styled(
            format!("  {message} "),
            Style::default().fg(palette.love),
        ))
    } else if let Some(ref message) = app.success_message {
        Line::from(Span::styled(
            format!("  {message} "),
            Style::default().fg(palette.foam),
        ))
    } else {
        breadcrumbs(app, palette)
    };

    let left_content = Paragraph::new(left)
        .alignment(Alignment::Left)
        .style(Style::default().fg(palette.subtle))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.highlight_high)),
        );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(palette.muted))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.highlight_high)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

fn breadcrumbs(app: &App, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " 󰎞 NoteBoard ",
        Style::default().fg(palette.base).bg(palette.iris),
    )];

    if app.input_mode == InputMode::Form {
        spans.push(Span::styled(" ❯ ", Style::default().fg(palette.muted)));
        let crumb = if app.edit_target.is_some() {
            " Update Note "
        } else {
            " Create Note "
        };
        spans.push(Span::styled(
            crumb.to_string(),
            Style::default().fg(palette.base).bg(palette.gold),
        ));
    }

    spans.push(Span::styled(
        format!("  {} theme ", app.theme.display_name()),
        Style::default().fg(palette.muted),
    ));

    Line::from(spans)
}

fn context_shortcuts(app: &App) -> String {
    match app.input_mode {
        InputMode::Form => match app.form_focus {
            FormField::Label => {
                " [Tab] Next Field │ [↑↓] Pick Label │ [⏎] Submit │ [Esc] Cancel ".to_string()
            }
            FormField::Content => {
                " [Tab] Next Field │ [⏎] New Line │ [Ctrl+S] Submit │ [Esc] Cancel ".to_string()
            }
            FormField::Title => {
                " [Tab] Next Field │ [⏎] Submit │ [Esc] Cancel ".to_string()
            }
        },
        InputMode::Help => " [Esc] Close ".to_string(),
        InputMode::Browse => {
            if app.store.is_empty() {
                " [n] New Note │ [t] Theme │ [?] Help │ [q] Quit ".to_string()
            } else {
                " [↑↓] Navigate │ [n] New │ [e] Edit │ [d] Delete │ [f] ♥ │ [v] Favorites │ [t] Theme │ [?] Help │ [q] Quit "
                    .to_string()
            }
        }
    }
}
