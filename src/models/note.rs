/// Identifier for a note within the board. Ids are handed out by the
/// store's monotonically increasing counter and are never reused, even
/// after the note that held one is deleted.
pub type NoteId = u64;

/// Category label attached to every note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Personal,
    Study,
    Work,
    Other,
}

impl Label {
    /// All labels in the order they are offered in the form selector
    pub const ALL: [Label; 4] = [Label::Personal, Label::Study, Label::Work, Label::Other];

    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Personal => "Personal",
            Label::Study => "Study",
            Label::Work => "Work",
            Label::Other => "Other",
        }
    }

    /// Icon shown next to the label on note cards
    pub fn icon(&self) -> &'static str {
        match self {
            Label::Personal => "",
            Label::Study => "󰑴",
            Label::Work => "",
            Label::Other => "",
        }
    }
}

/// A single committed note on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub label: Label,
    pub favorite: bool,
}

impl Note {
    pub fn is_favorited(&self) -> bool {
        self.favorite
    }
}

/// The in-progress note being composed or edited via the form.
///
/// A draft has no id of its own; identity is decided at submit time by the
/// store (create) or by the edit target (update). An unchosen label stands
/// in for "no selection yet" the same way an empty title does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub label: Option<Label>,
}

impl Draft {
    /// Copies a committed note's fields back into the form for editing
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            label: Some(note.label),
        }
    }

    /// Resets the form back to its empty state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Required-field check performed by the form before anything reaches
    /// the store: title and content must be non-blank and a label chosen.
    /// Returns the owned field values on success.
    pub fn validated(&self) -> Option<(String, String, Label)> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return None;
        }
        let label = self.label?;
        Some((self.title.clone(), self.content.clone(), label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_rejects_blank_title() {
        let draft = Draft {
            title: "   ".to_string(),
            content: "something".to_string(),
            label: Some(Label::Work),
        };
        assert!(draft.validated().is_none(), "blank title must not validate");
    }

    #[test]
    fn validated_rejects_missing_label() {
        let draft = Draft {
            title: "title".to_string(),
            content: "content".to_string(),
            label: None,
        };
        assert!(
            draft.validated().is_none(),
            "draft without a label must not validate"
        );
    }

    #[test]
    fn validated_returns_all_fields() {
        let draft = Draft {
            title: "Groceries".to_string(),
            content: "Milk, eggs".to_string(),
            label: Some(Label::Personal),
        };
        let (title, content, label) = draft.validated().expect("complete draft should validate");
        assert_eq!(title, "Groceries");
        assert_eq!(content, "Milk, eggs");
        assert_eq!(label, Label::Personal);
    }

    #[test]
    fn from_note_round_trips_fields() {
        let note = Note {
            id: 7,
            title: "A".to_string(),
            content: "B".to_string(),
            label: Label::Study,
            favorite: true,
        };
        let draft = Draft::from_note(&note);
        assert_eq!(draft.title, "A");
        assert_eq!(draft.content, "B");
        assert_eq!(draft.label, Some(Label::Study));
    }
}
