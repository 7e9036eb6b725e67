pub mod note;
pub mod seed;
pub mod store;

pub use note::{Draft, Label, Note, NoteId};
pub use store::NoteStore;
