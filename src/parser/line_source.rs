//! In-memory line source for the parser.
//!
//! A [LineSource] owns a whole GEDCOM document and hands it out as numbered
//! lines after normalization:
//! - `\r\n` line endings are converted to `\n`
//! - leading and trailing whitespace of the whole document is trimmed
//!
//! Lines themselves are not altered otherwise; interior blank lines are
//! passed on and rejected by the tokenizer.

use std::fs;
use std::path::Path;

// =#========================================================================#=
// LINE SOURCE
// =#========================================================================$=
/// An in-memory line source that owns its (normalized) document.
#[derive(Debug, Clone, Default)]
pub struct LineSource {
    /// Normalized document text
    text: String,
}

impl LineSource {
    /// Creates a new line source from a document string.
    ///
    /// # Arguments
    /// * `document` - Full GEDCOM document text
    pub fn for_str(document: &str) -> Self {
        let text = if document.contains('\r') {
            document.replace("\r\n", "\n")
        } else {
            document.to_string()
        };
        Self {
            text: text.trim().to_string(),
        }
    }

    /// Reads an entire file into memory and normalizes it.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns the [std::io::Error] of opening or reading the file unchanged.
    /// Content that is not valid UTF-8 is reported as
    /// [InvalidData](std::io::ErrorKind::InvalidData).
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<LineSource> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::for_str(&contents))
    }

    /// Returns `true` if the normalized document has no content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of lines of the normalized document.
    pub fn num_lines(&self) -> usize {
        self.lines().count()
    }

    /// Iterates over `(line_number, line)` pairs, 1-based.
    ///
    /// An empty document yields no lines at all.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        let text = if self.text.is_empty() {
            None
        } else {
            Some(self.text.as_str())
        };
        text.into_iter()
            .flat_map(|t| t.split('\n'))
            .enumerate()
            .map(|(i, line)| (i + 1, line))
    }
}

// =#========================================================================#=
// TESTS
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_is_normalized() {
        let source = LineSource::for_str("0 HEAD\r\n1 CHAR UTF-8\r\n0 TRLR\r\n");
        let lines: Vec<_> = source.lines().collect();
        assert_eq!(lines, vec![(1, "0 HEAD"), (2, "1 CHAR UTF-8"), (3, "0 TRLR")]);
    }

    #[test]
    fn test_document_is_trimmed() {
        let source = LineSource::for_str("\n\n   0 HEAD\n0 TRLR  \n\n");
        let lines: Vec<_> = source.lines().map(|(_, l)| l).collect();
        assert_eq!(lines, vec!["0 HEAD", "0 TRLR"]);
    }

    #[test]
    fn test_empty_document_has_no_lines() {
        let source = LineSource::for_str(" \r\n \n");
        assert!(source.is_empty());
        assert_eq!(source.num_lines(), 0);
    }

    #[test]
    fn test_interior_blank_lines_are_kept() {
        let source = LineSource::for_str("0 HEAD\n\n0 TRLR");
        assert_eq!(source.num_lines(), 3);
    }
}
