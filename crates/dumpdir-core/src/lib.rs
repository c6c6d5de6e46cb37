//! dumpdir core library — prints the regular files of one directory.
//!
//! `dumpdir-core` holds everything except process setup, so the walker can be
//! pointed at any directory and any writer.
//!
//! # Modules
//!
//! - [`fs`] — listing ([`list_directory`]), entries ([`FileEntry`]), and file reading ([`read_content`]).
//! - [`render`] — the per-file block layout ([`BlockWriter`]).
//! - [`dump`] — the walker itself ([`Dumper`], [`dump_directory`]).
//! - [`config`] — optional TOML settings ([`Config`]).
//! - [`error`] — unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod dump;
pub mod error;
pub mod fs;
pub mod render;

pub use config::Config;
pub use dump::{dump_directory, DumpSummary, Dumper};
pub use error::{CoreError, CoreResult};
pub use fs::{list_directory, read_content, EntryKind, FileContent, FileEntry};
pub use render::BlockWriter;
