//! Whole-file text reading with per-file failure recovery.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// The outcome of reading one file as UTF-8 text.
///
/// Every failure a read can hit lands in one of the two failure variants;
/// nothing escapes as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// The full decoded text, unmodified.
    Text(String),
    /// The bytes are not valid UTF-8.
    DecodeFailure,
    /// Opening or reading failed; holds the error's description.
    IoFailure(String),
}

/// Reads the whole file at `path` and decodes it as UTF-8.
///
/// The handle lives only for the duration of the call and is closed on every
/// return path. Mapping:
///
/// - bytes that are not valid UTF-8 → [`FileContent::DecodeFailure`]
/// - [`io::ErrorKind::InvalidData`] during the read → [`FileContent::DecodeFailure`]
/// - any other [`io::Error`] (not found, permission denied, is a directory,
///   device errors, ...) → [`FileContent::IoFailure`] with the error's `Display`
pub fn read_content(path: &Path) -> FileContent {
    match fs::File::open(path) {
        Ok(file) => decode_reader(file),
        Err(e) => FileContent::IoFailure(e.to_string()),
    }
}

/// Drains `reader` and decodes everything it yields as UTF-8.
///
/// Uses the same mapping as [`read_content`] for read errors.
pub fn decode_reader<R: Read>(mut reader: R) -> FileContent {
    let mut buf = Vec::new();
    match reader.read_to_end(&mut buf) {
        Ok(_) => match String::from_utf8(buf) {
            Ok(text) => FileContent::Text(text),
            Err(_) => FileContent::DecodeFailure,
        },
        Err(e) if e.kind() == io::ErrorKind::InvalidData => FileContent::DecodeFailure,
        Err(e) => FileContent::IoFailure(e.to_string()),
    }
}
