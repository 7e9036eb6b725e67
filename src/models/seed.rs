//! Static seed notes loaded into the board at startup

use crate::models::note::{Label, Note};

/// The initial board contents. Ids are assigned in order starting at 1 so
/// the store's counter can pick up right after the last seed.
pub fn seed_notes() -> Vec<Note> {
    vec![
        Note {
            id: 1,
            title: "test note 1 title".to_string(),
            content: "test note 1 content".to_string(),
            label: Label::Other,
            favorite: false,
        },
        Note {
            id: 2,
            title: "test note 2 title".to_string(),
            content: "test note 2 content".to_string(),
            label: Label::Personal,
            favorite: false,
        },
        Note {
            id: 3,
            title: "test note 3 title".to_string(),
            content: "test note 3 content".to_string(),
            label: Label::Work,
            favorite: false,
        },
        Note {
            id: 4,
            title: "test note 4 title".to_string(),
            content: "test note 4 content".to_string(),
            label: Label::Study,
            favorite: false,
        },
    ]
}
