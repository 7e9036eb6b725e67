use crate::models::{Draft, Note, NoteId, NoteStore};
use crate::ui;
use crate::ui::theme::Theme;
use ratatui::Frame;

/// Input Mode Enumeration
/// Decides where key events are routed: board navigation, the note form,
/// or the help overlay. The mode also drives which shortcuts the bottom
/// bar advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Form,
    Help,
}

/// Which form field currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Content,
    Label,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Label,
            FormField::Label => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Label,
            FormField::Content => FormField::Title,
            FormField::Label => FormField::Content,
        }
    }
}

/// Main Application State Container
/// Owns every piece of mutable state in the program: the note store, the
/// draft being composed, the optional edit target, the theme flag and the
/// transient view state (selection, input mode, feedback messages). All
/// mutation goes through the methods below; render functions only read.
#[derive(Debug)]
pub struct App {
    pub store: NoteStore,
    pub draft: Draft,
    /// Id of the note the form is editing; `None` while composing a new one
    pub edit_target: Option<NoteId>,
    pub theme: Theme,

    pub input_mode: InputMode,
    pub form_focus: FormField,
    pub selected_note: usize,
    pub show_favorites_popup: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    /// Creates the application with the seeded board, an empty draft and
    /// the dark theme. This is the state the user sees on startup.
    pub fn new() -> Self {
        Self {
            store: NoteStore::seeded(),
            draft: Draft::default(),
            edit_target: None,
            theme: Theme::default(),
            input_mode: InputMode::Browse,
            form_focus: FormField::Title,
            selected_note: 0,
            show_favorites_popup: false,
            error_message: None,
            success_message: None,
        }
    }

    /// The note the board cursor is on, if the board is non-empty
    pub fn selected_note(&self) -> Option<&Note> {
        self.store.notes().get(self.selected_note)
    }

    /// Moves the board cursor to the next card, wrapping at the end
    pub fn next_note(&mut self) {
        if !self.store.is_empty() {
            self.selected_note = (self.selected_note + 1) % self.store.len();
        }
    }

    /// Moves the board cursor to the previous card, wrapping at the start
    pub fn previous_note(&mut self) {
        if !self.store.is_empty() {
            self.selected_note = if self.selected_note > 0 {
                self.selected_note - 1
            } else {
                self.store.len() - 1
            };
        }
    }

    /// Opens the form with an empty draft for composing a new note
    pub fn start_create(&mut self) {
        self.draft.clear();
        self.edit_target = None;
        self.input_mode = InputMode::Form;
        self.form_focus = FormField::Title;
        self.clear_messages();
    }

    /// Opens the form pre-filled with the selected note's fields
    pub fn start_edit(&mut self) {
        let Some(note) = self.selected_note() else {
            return;
        };
        let draft = Draft::from_note(note);
        let id = note.id;
        self.draft = draft;
        self.edit_target = Some(id);
        self.input_mode = InputMode::Form;
        self.form_focus = FormField::Title;
        self.clear_messages();
    }

    /// Abandons the form: resets the draft, clears the edit target and
    /// returns to browsing
    pub fn cancel_form(&mut self) {
        self.draft.clear();
        self.edit_target = None;
        self.input_mode = InputMode::Browse;
        self.clear_messages();
    }

    /// Commits the form. With an edit target set this replaces that note
    /// in place; otherwise it creates a new note at the end of the board.
    /// The draft is reset afterward in both cases. Incomplete drafts never
    /// reach the store and surface as an error message instead, mirroring
    /// required-field validation at the widget level.
    pub fn submit_form(&mut self) {
        let Some((title, content, label)) = self.draft.validated() else {
            self.set_error_message("Title, content and label are all required".to_string());
            return;
        };

        match self.edit_target.take() {
            Some(id) => {
                if self.store.update(id, title, content, label).is_some() {
                    self.set_success_message("Note updated!".to_string());
                } else {
                    // Unreachable through the UI: the form only ever targets
                    // a note that is still on the board
                    self.set_error_message("Note not found".to_string());
                }
            }
            None => {
                self.store.create(title, content, label);
                self.selected_note = self.store.len() - 1;
                self.set_success_message("Note created!".to_string());
            }
        }

        self.draft.clear();
        self.input_mode = InputMode::Browse;
    }

    /// Deletes the note under the board cursor
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_note().map(|note| note.id) else {
            return;
        };
        if self.store.delete(id) {
            self.selected_note = self.selected_note.min(self.store.len().saturating_sub(1));
            self.set_success_message("Note deleted".to_string());
        }
    }

    /// Flips the favorite flag on the note under the board cursor
    pub fn toggle_favorite_selected(&mut self) {
        if let Some(id) = self.selected_note().map(|note| note.id) {
            self.store.toggle_favorite(id);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Renders the whole surface for the current frame: form and favorites
    /// on the left, the notes board on the right, shortcuts at the bottom,
    /// then any floating overlays on top.
    pub fn render(&self, frame: &mut Frame) {
        ui::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    fn app_with_notes(titles: &[&str]) -> App {
        let mut app = App::new();
        app.store = NoteStore::new();
        for title in titles {
            app.store
                .create(title.to_string(), format!("{title} content"), Label::Other);
        }
        app
    }

    fn fill_draft(app: &mut App, title: &str, content: &str, label: Label) {
        app.draft.title = title.to_string();
        app.draft.content = content.to_string();
        app.draft.label = Some(label);
    }

    #[test]
    fn submit_creates_a_note_and_resets_the_draft() {
        let mut app = app_with_notes(&["A"]);
        app.start_create();
        fill_draft(&mut app, "B", "b content", Label::Study);

        app.submit_form();

        assert_eq!(app.store.len(), 2);
        let new = app.store.notes().last().unwrap();
        assert_eq!(new.id, 2, "id continues from the last note");
        assert_eq!(new.title, "B");
        assert_eq!(app.draft, Draft::default(), "draft resets after submit");
        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.success_message.is_some());
    }

    #[test]
    fn submit_with_incomplete_draft_mutates_nothing() {
        let mut app = app_with_notes(&["A"]);
        app.start_create();
        app.draft.title = "only a title".to_string();

        app.submit_form();

        assert_eq!(app.store.len(), 1, "store untouched");
        assert!(app.error_message.is_some(), "blocked at the widget level");
        assert_eq!(app.input_mode, InputMode::Form, "form stays open");
    }

    #[test]
    fn start_edit_copies_fields_and_sets_the_target() {
        let mut app = app_with_notes(&["A", "B"]);
        app.selected_note = 1;

        app.start_edit();

        assert_eq!(app.edit_target, Some(2));
        assert_eq!(app.draft.title, "B");
        assert_eq!(app.draft.label, Some(Label::Other));
        assert_eq!(app.input_mode, InputMode::Form);
    }

    #[test]
    fn submit_after_edit_replaces_in_place_preserving_id() {
        let mut app = app_with_notes(&["A", "B", "C"]);
        app.selected_note = 1;
        app.start_edit();
        fill_draft(&mut app, "B rewritten", "new content", Label::Work);

        app.submit_form();

        assert_eq!(app.store.len(), 3, "edit never grows the board");
        let note = app.store.get(2).expect("id 2 survives the edit");
        assert_eq!(note.title, "B rewritten");
        assert_eq!(note.label, Label::Work);
        let titles: Vec<_> = app.store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["A", "B rewritten", "C"],
            "position in board order unchanged"
        );
        assert_eq!(app.edit_target, None, "target cleared after submit");
    }

    #[test]
    fn cancel_resets_draft_and_target() {
        let mut app = app_with_notes(&["A"]);
        app.start_edit();
        app.draft.title = "half-finished edit".to_string();

        app.cancel_form();

        assert_eq!(app.draft, Draft::default());
        assert_eq!(app.edit_target, None);
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.store.get(1).unwrap().title, "A", "note untouched");
    }

    #[test]
    fn delete_selected_clamps_the_cursor() {
        let mut app = app_with_notes(&["A", "B"]);
        app.selected_note = 1;

        app.delete_selected();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.selected_note, 0, "cursor pulled back onto the board");
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut app = app_with_notes(&["A", "B", "C"]);
        app.previous_note();
        assert_eq!(app.selected_note, 2, "wraps backward from the start");
        app.next_note();
        assert_eq!(app.selected_note, 0, "wraps forward from the end");
    }

    #[test]
    fn toggle_favorite_selected_targets_the_cursor_note() {
        let mut app = app_with_notes(&["A", "B"]);
        app.selected_note = 1;

        app.toggle_favorite_selected();

        assert!(app.store.get(2).unwrap().favorite);
        assert!(!app.store.get(1).unwrap().favorite);
    }
}
