//! Core domain types: filename codec, stable ids, links, and commands.

mod command;
mod link;
mod note_id;
mod note_name;

pub use command::{RenameCommand, ReplaceCommand};
pub use link::{Link, LinkScanner};
pub use note_id::{ID_LEN, NoteId, ParseNoteIdError, is_valid_id};
pub use note_name::{NoteName, is_valid_ordering, is_valid_title};
