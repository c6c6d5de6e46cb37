//! File system access for dumpdir.
//!
//! [`listing::list_directory`] produces classified [`entry::FileEntry`]
//! values; [`content::read_content`] turns one file into a
//! [`content::FileContent`].

pub mod content;
pub mod entry;
pub mod listing;

pub use content::{decode_reader, read_content, FileContent};
pub use entry::{EntryKind, FileEntry};
pub use listing::list_directory;
