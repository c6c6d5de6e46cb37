//! Directory listing.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// Entries come back in whatever order the OS yields them; nothing is
/// sorted. Each entry is classified as it is read, so a later removal of the
/// file does not change its recorded kind.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error while inspecting or opening the directory.
///
/// # Examples
///
/// ```no_run
/// use dumpdir_core::list_directory;
/// use std::path::Path;
///
/// let entries = list_directory(Path::new(".")).unwrap();
/// for entry in entries.iter().filter(|e| e.is_file()) {
///     println!("{}", entry.name());
/// }
/// ```
pub fn list_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %path.display(), "skipping unreadable directory entry: {e}");
                continue;
            }
        };
        entries.push(FileEntry::new(path, &dir_entry.file_name()));
    }

    tracing::debug!(dir = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}
