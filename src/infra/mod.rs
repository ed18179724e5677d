//! Infrastructure: file I/O, title canonicalization, content hashing.

mod content_hash;
mod fs;
mod slug;

pub use content_hash::{ContentHash, normalize_links};
pub use fs::{
    FsError, apply_renames, apply_replacements, list_filenames, overwrite_content, read_lines,
    read_to_string, rename_file,
};
pub use slug::title_to_basename;
