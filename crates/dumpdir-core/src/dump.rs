//! The directory walker: list, filter to regular files, read, print.

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::CoreResult;
use crate::fs::content::{read_content, FileContent};
use crate::fs::entry::{EntryKind, FileEntry};
use crate::fs::listing::list_directory;
use crate::render::BlockWriter;

/// Counters collected during one run. Only used for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Blocks written, one per regular file.
    pub printed: usize,
    pub decode_failures: usize,
    pub io_failures: usize,
    /// Entries that were not printed (non-files and filtered hidden files).
    pub skipped: usize,
}

/// Prints every regular file of a directory as a text block.
#[derive(Debug, Clone)]
pub struct Dumper {
    blocks: BlockWriter,
    show_hidden: bool,
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Dumper {
    pub fn new(config: &Config) -> Self {
        Self {
            blocks: BlockWriter::new(config.output.separator_width),
            show_hidden: config.output.show_hidden,
        }
    }

    /// Lists `dir` and writes one block per regular file to `out`.
    ///
    /// # Errors
    ///
    /// Listing errors from [`list_directory`] and write errors on `out`.
    /// Problems reading an individual file never produce an error.
    pub fn dump_directory<W: Write>(&self, dir: &Path, out: &mut W) -> CoreResult<DumpSummary> {
        let entries = list_directory(dir)?;
        let summary = self.dump_entries(&entries, out)?;
        tracing::info!(
            dir = %dir.display(),
            printed = summary.printed,
            decode_failures = summary.decode_failures,
            io_failures = summary.io_failures,
            skipped = summary.skipped,
            "directory dumped"
        );
        Ok(summary)
    }

    /// Writes blocks for already-listed entries, in the given order.
    ///
    /// Entries are filtered on the kind recorded at listing time; a file
    /// removed since then is still opened and reported as a read failure.
    pub fn dump_entries<W: Write>(
        &self,
        entries: &[FileEntry],
        out: &mut W,
    ) -> CoreResult<DumpSummary> {
        let mut summary = DumpSummary::default();

        for entry in entries {
            if entry.kind() != EntryKind::File {
                tracing::debug!(name = entry.name(), kind = ?entry.kind(), "skipping non-file entry");
                summary.skipped += 1;
                continue;
            }
            if entry.is_hidden() && !self.show_hidden {
                tracing::debug!(name = entry.name(), "skipping hidden file");
                summary.skipped += 1;
                continue;
            }

            let content = read_content(entry.path());
            match &content {
                FileContent::Text(_) => {}
                FileContent::DecodeFailure => {
                    tracing::debug!(name = entry.name(), "content is not valid UTF-8");
                    summary.decode_failures += 1;
                }
                FileContent::IoFailure(desc) => {
                    tracing::warn!(path = %entry.path().display(), "failed to read file: {desc}");
                    summary.io_failures += 1;
                }
            }

            self.blocks.write_block(out, entry.name(), &content)?;
            summary.printed += 1;
        }

        out.flush()?;
        Ok(summary)
    }
}

/// Dumps `dir` to `out` with the default format.
///
/// # Examples
///
/// ```no_run
/// use dumpdir_core::dump_directory;
///
/// let cwd = std::env::current_dir().unwrap();
/// dump_directory(&cwd, &mut std::io::stdout().lock()).unwrap();
/// ```
pub fn dump_directory<W: Write>(dir: &Path, out: &mut W) -> CoreResult<DumpSummary> {
    Dumper::default().dump_directory(dir, out)
}
