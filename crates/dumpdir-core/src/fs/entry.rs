//! Directory entry representation.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// What a listed path turned out to be when it was classified.
///
/// Classification follows symlinks: a link to a regular file is a
/// [`EntryKind::File`], a link to a directory is a [`EntryKind::Directory`],
/// and a dangling link is [`EntryKind::Missing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, FIFOs, device nodes.
    Other,
    /// Vanished after listing, or a broken symlink.
    Missing,
}

impl EntryKind {
    /// Classifies `path` by following symlinks.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Self::File,
            Ok(meta) if meta.is_dir() => Self::Directory,
            Ok(_) => Self::Other,
            Err(_) => Self::Missing,
        }
    }
}

/// A single listed entry of a directory.
///
/// The name is the entry's file name exactly as listed (lossily converted
/// to UTF-8 when the OS name is not valid Unicode). The kind is captured
/// once, when the entry is created, and is not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
}

impl FileEntry {
    /// Creates an entry for `name` inside `dir`, classifying the joined path.
    pub fn new(dir: &Path, name: &OsStr) -> Self {
        let path = dir.join(name);
        let kind = EntryKind::of(&path);
        Self {
            name: name.to_string_lossy().into_owned(),
            path,
            kind,
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the entry name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` if this entry is (or points to) a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn regular_file_is_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("test.txt"), "hello").unwrap();

        let entry = FileEntry::new(tmp.path(), OsStr::new("test.txt"));

        assert_eq!(entry.name(), "test.txt");
        assert_eq!(entry.path(), tmp.path().join("test.txt"));
        assert_eq!(entry.kind(), EntryKind::File);
        assert!(entry.is_file());
        assert!(!entry.is_hidden());
    }

    #[test]
    fn directory_is_not_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();

        let entry = FileEntry::new(tmp.path(), OsStr::new("subdir"));

        assert_eq!(entry.kind(), EntryKind::Directory);
        assert!(!entry.is_file());
    }

    #[test]
    fn nonexistent_is_missing() {
        let tmp = TempDir::new().unwrap();

        let entry = FileEntry::new(tmp.path(), OsStr::new("ghost"));

        assert_eq!(entry.kind(), EntryKind::Missing);
    }

    #[test]
    fn hidden_file_detected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "KEY=1").unwrap();

        let entry = FileEntry::new(tmp.path(), OsStr::new(".env"));

        assert!(entry.is_hidden());
        assert!(entry.is_file());
    }

    #[test]
    fn cyrillic_name_preserved() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("заметки.txt"), "текст").unwrap();

        let entry = FileEntry::new(tmp.path(), OsStr::new("заметки.txt"));

        assert_eq!(entry.name(), "заметки.txt");
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_follow_their_target() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("target.txt"), "data").unwrap();
        fs::create_dir(tmp.path().join("target_dir")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("target.txt"), tmp.path().join("to_file"))
            .unwrap();
        std::os::unix::fs::symlink(tmp.path().join("target_dir"), tmp.path().join("to_dir"))
            .unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dangling")).unwrap();

        assert_eq!(
            FileEntry::new(tmp.path(), OsStr::new("to_file")).kind(),
            EntryKind::File
        );
        assert_eq!(
            FileEntry::new(tmp.path(), OsStr::new("to_dir")).kind(),
            EntryKind::Directory
        );
        assert_eq!(
            FileEntry::new(tmp.path(), OsStr::new("dangling")).kind(),
            EntryKind::Missing
        );
    }

    #[cfg(unix)]
    #[test]
    fn unix_socket_is_other() {
        let tmp = TempDir::new().unwrap();
        let _listener =
            std::os::unix::net::UnixListener::bind(tmp.path().join("daemon.sock")).unwrap();

        let entry = FileEntry::new(tmp.path(), OsStr::new("daemon.sock"));

        assert_eq!(entry.kind(), EntryKind::Other);
        assert!(!entry.is_file());
    }
}
