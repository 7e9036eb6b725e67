//! Keyboard Input Handling Module
//!
//! This module processes all user keyboard interactions and translates them
//! into the state transitions defined on [`App`]: board navigation, opening
//! and driving the note form, toggling favorites and the theme, and quitting.

use crate::app::{App, FormField, InputMode};
use crate::models::Label;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main keyboard event handler and dispatcher
/// Routes the event to the handler for the active input mode and returns
/// `true` when the application should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    match app.input_mode {
        InputMode::Form => handle_form_keys(key, app),
        InputMode::Help => handle_help_keys(key, app),
        InputMode::Browse => handle_browse_keys(key, app),
    }
}

/// Handles keys while navigating the notes board
fn handle_browse_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        KeyCode::Char('?') => {
            app.clear_messages();
            app.input_mode = InputMode::Help;
        }

        KeyCode::Esc => {
            app.show_favorites_popup = false;
        }

        // Board navigation
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
            app.next_note();
        }
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
            app.previous_note();
        }

        // Note actions
        KeyCode::Char('n') => app.start_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Char('x') => app.delete_selected(),
        KeyCode::Char('f') | KeyCode::Char(' ') => app.toggle_favorite_selected(),

        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('v') => {
            app.show_favorites_popup = !app.show_favorites_popup;
        }

        _ => {}
    }
    false
}

/// Handles keys while the note form is open.
///
/// Tab / Shift-Tab move between fields. Enter submits from the title and
/// label fields but inserts a newline in the content field; Ctrl+S submits
/// from anywhere.
fn handle_form_keys(key: KeyEvent, app: &mut App) -> bool {
    // Submit shortcut that works regardless of the focused field
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.submit_form();
        return false;
    }

    match key.code {
        KeyCode::Esc => app.cancel_form(),

        KeyCode::Tab => {
            app.form_focus = app.form_focus.next();
        }
        KeyCode::BackTab => {
            app.form_focus = app.form_focus.previous();
        }

        KeyCode::Enter => match app.form_focus {
            FormField::Content => app.draft.content.push('\n'),
            FormField::Title | FormField::Label => app.submit_form(),
        },

        KeyCode::Backspace => match app.form_focus {
            FormField::Title => {
                app.draft.title.pop();
            }
            FormField::Content => {
                app.draft.content.pop();
            }
            FormField::Label => {
                app.draft.label = None;
            }
        },

        KeyCode::Down | KeyCode::Right if app.form_focus == FormField::Label => {
            app.draft.label = Some(next_label(app.draft.label));
        }
        KeyCode::Up | KeyCode::Left if app.form_focus == FormField::Label => {
            app.draft.label = Some(previous_label(app.draft.label));
        }

        KeyCode::Char(c) => match app.form_focus {
            FormField::Title => app.draft.title.push(c),
            FormField::Content => app.draft.content.push(c),
            // j/k cycle the selector like the arrow keys do
            FormField::Label => match c {
                'j' => app.draft.label = Some(next_label(app.draft.label)),
                'k' => app.draft.label = Some(previous_label(app.draft.label)),
                _ => {}
            },
        },

        _ => {}
    }
    false
}

/// Handles keys while the help overlay is open
fn handle_help_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.input_mode = InputMode::Browse;
        }
        _ => {}
    }
    false
}

/// The label after the current selection, starting from the first when
/// nothing is chosen yet
fn next_label(current: Option<Label>) -> Label {
    match current {
        None => Label::ALL[0],
        Some(label) => {
            let index = Label::ALL.iter().position(|l| *l == label).unwrap_or(0);
            Label::ALL[(index + 1) % Label::ALL.len()]
        }
    }
}

/// The label before the current selection, starting from the last when
/// nothing is chosen yet
fn previous_label(current: Option<Label>) -> Label {
    match current {
        None => Label::ALL[Label::ALL.len() - 1],
        Some(label) => {
            let index = Label::ALL.iter().position(|l| *l == label).unwrap_or(0);
            Label::ALL[(index + Label::ALL.len() - 1) % Label::ALL.len()]
        }
    }
}
