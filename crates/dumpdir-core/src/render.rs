//! Text layout of one per-file block.
//!
//! ```text
//! Файл: <entry-name>
//! Содержимое:
//! ----------------------------------------
//! <content, placeholder, or error line>
//! ----------------------------------------
//!
//! ```

use std::io::{self, Write};

use crate::fs::content::FileContent;

pub const FILE_LABEL: &str = "Файл: ";
pub const CONTENT_LABEL: &str = "Содержимое:";
/// Printed instead of content that is not valid UTF-8.
pub const BINARY_PLACEHOLDER: &str = "(бинарный файл или нечитаемое содержимое)";
/// Prefix of the line printed when a file cannot be opened or read.
pub const READ_ERROR_PREFIX: &str = "Ошибка при чтении файла: ";
pub const DEFAULT_SEPARATOR_WIDTH: usize = 40;

/// Writes blocks with a fixed separator line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockWriter {
    separator: String,
}

impl Default for BlockWriter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR_WIDTH)
    }
}

impl BlockWriter {
    pub fn new(separator_width: usize) -> Self {
        Self {
            separator: "-".repeat(separator_width),
        }
    }

    /// Writes the complete block for `name`.
    ///
    /// Decoded text is written verbatim and then terminated with one newline,
    /// so text that already ends in `\n` is followed by an empty line before
    /// the closing separator.
    pub fn write_block<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        content: &FileContent,
    ) -> io::Result<()> {
        writeln!(out, "{FILE_LABEL}{name}")?;
        writeln!(out, "{CONTENT_LABEL}")?;
        writeln!(out, "{}", self.separator)?;
        match content {
            FileContent::Text(text) => writeln!(out, "{text}")?,
            FileContent::DecodeFailure => writeln!(out, "{BINARY_PLACEHOLDER}")?,
            FileContent::IoFailure(desc) => writeln!(out, "{READ_ERROR_PREFIX}{desc}")?,
        }
        writeln!(out, "{}", self.separator)?;
        writeln!(out)
    }
}
