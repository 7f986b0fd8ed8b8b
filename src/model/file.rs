//! File model: a whole CSV document as an ordered list of lines
//!
//! A `CsvFile` owns its lines in physical document order. Construction is
//! either from in-memory document text (never fails) or from a file on
//! disk (surfacing I/O and encoding errors verbatim). Serialization joins
//! the lines with the canonical terminator and appends one trailing
//! terminator.

use std::ops::{Index, IndexMut};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::line::CsvLine;
use crate::config::{CARRIAGE_RETURN_TERMINATOR, CsvConfig, LINE_TERMINATOR};
use crate::{Error, Result};

/// An in-memory CSV document: ordered lines, optionally tied to a path
///
/// Rows are not validated against each other; lines with differing field
/// counts coexist freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvFile {
    /// Lines in physical document order
    pub lines: Vec<CsvLine>,
    /// Where the document was loaded from, used by [`CsvFile::save`]
    origin: Option<PathBuf>,
}

/// Normalize every line-terminator variant to the canonical `\n`
///
/// Stateless, applied exactly once at parse time.
fn normalize_terminators(text: &str) -> String {
    text.replace(CARRIAGE_RETURN_TERMINATOR, "\n")
}

impl CsvFile {
    /// Create an empty document built programmatically
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole document from raw text
    ///
    /// Terminators are normalized to `\n` first, then the text is split
    /// into lines. A trailing empty segment produced by a final terminator
    /// is discarded; a last line without a terminator is kept.
    pub fn from_document(text: &str, config: &CsvConfig) -> Self {
        let normalized = normalize_terminators(text);
        let mut segments: Vec<&str> = normalized.split(LINE_TERMINATOR).collect();
        if segments.last().is_some_and(|last| last.is_empty()) {
            segments.pop();
        }

        let lines = segments
            .iter()
            .map(|segment| CsvLine::parse(segment, config))
            .collect();

        Self {
            lines,
            origin: None,
        }
    }

    /// Load a document from a file on disk
    ///
    /// Reads the raw bytes and decodes them as UTF-8. Read failures surface
    /// as [`Error::Io`] and invalid UTF-8 as [`Error::Encoding`], both
    /// unaltered; no retry, no partial decode. The path is remembered so
    /// [`CsvFile::save`] can write back to it.
    pub async fn load(path: impl AsRef<Path>, config: &CsvConfig) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading CSV document from {}", path.display());

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::encoding(path.display().to_string(), e))?;

        let mut file = Self::from_document(&text, config);
        file.origin = Some(path.to_path_buf());

        debug!("Loaded {} lines from {}", file.lines.len(), path.display());
        Ok(file)
    }

    /// Serialize the whole document to raw text
    ///
    /// Every line is serialized, lines are joined with `\n`, and one
    /// trailing `\n` is appended.
    pub fn to_document(&self, config: &CsvConfig) -> String {
        let mut document = self
            .lines
            .iter()
            .map(|line| line.to_raw(config))
            .collect::<Vec<_>>()
            .join("\n");
        document.push(LINE_TERMINATOR);
        document
    }

    /// Write the document back to the path it was loaded from
    ///
    /// Fails with [`Error::Configuration`] for a programmatically built
    /// document that has no origin path; use [`CsvFile::save_to`] instead.
    pub async fn save(&self, config: &CsvConfig) -> Result<()> {
        let origin = self.origin.as_ref().ok_or_else(|| {
            Error::configuration("document has no origin path; use save_to")
        })?;
        self.write_document(origin, config).await
    }

    /// Write the document to an explicit path
    pub async fn save_to(&self, path: impl AsRef<Path>, config: &CsvConfig) -> Result<()> {
        self.write_document(path.as_ref(), config).await
    }

    async fn write_document(&self, path: &Path, config: &CsvConfig) -> Result<()> {
        info!(
            "Saving CSV document ({} lines) to {}",
            self.lines.len(),
            path.display()
        );
        let document = self.to_document(config);
        tokio::fs::write(path, document)
            .await
            .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))
    }

    /// The path the document was loaded from, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Bounds-checked line access
    pub fn get(&self, index: usize) -> Option<&CsvLine> {
        self.lines.get(index)
    }

    /// Bounds-checked mutable line access
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CsvLine> {
        self.lines.get_mut(index)
    }

    /// Append a line at the end of the document
    pub fn push_line(&mut self, line: CsvLine) {
        self.lines.push(line);
    }

    /// Number of lines in the document
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines as a slice, in document order
    pub fn lines(&self) -> &[CsvLine] {
        &self.lines
    }

    /// Iterate over the lines in document order
    pub fn iter(&self) -> std::slice::Iter<'_, CsvLine> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a CsvFile {
    type Item = &'a CsvLine;
    type IntoIter = std::slice::Iter<'a, CsvLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Positional line access
///
/// Out-of-range access is a precondition violation and panics; callers
/// validate against [`CsvFile::len`] or use [`CsvFile::get`].
impl Index<usize> for CsvFile {
    type Output = CsvLine;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl IndexMut<usize> for CsvFile {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.lines[index]
    }
}
