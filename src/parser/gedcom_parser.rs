//! Configurable parser turning GEDCOM text into a [RecordTree].

use crate::model::{DepthSkip, RecordTree, TreeBuilder};
use crate::parser::line_source::LineSource;
use crate::parser::parsing_error::ParsingError;
use crate::parser::tokenizer::tokenize_line;
use std::path::Path;
use tracing::debug;

// =#========================================================================#=
// GEDCOM PARSER
// =#========================================================================$=
/// Parser (configuration) for GEDCOM documents.
///
/// Parsing is fail-fast: the first malformed line aborts the whole parse and
/// no partial tree is returned.
///
/// # Configuration
/// * [`with_depth_skip(policy)`](Self::with_depth_skip)
///     - How to handle lines skipping a depth level, see [DepthSkip].
///       Defaults to [DepthSkip::Drop].
/// * [`with_capacity(num_lines)`](Self::with_capacity)
///     - Pre-allocates the node arena. Without it, the number of lines of
///       the document is used.
///
/// # Parsing
/// * [`parse_lines`](Self::parse_lines): already split lines
/// * [`parse_str`](Self::parse_str): a whole document as string
/// * [`parse_file`](Self::parse_file): a whole document from a file
///
/// # Example
/// ```
/// use gedtree::parser::{DepthSkip, GedcomParser};
///
/// let tree = GedcomParser::new()
///     .with_depth_skip(DepthSkip::Reject)
///     .parse_str("0 HEAD\n1 GEDC\n2 VERS 5.5.1\n0 TRLR")?;
///
/// assert_eq!(tree.num_roots(), 2);
/// # Ok::<(), gedtree::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GedcomParser {
    depth_skip: DepthSkip,
    capacity: Option<usize>,
}

impl GedcomParser {
    /// Creates a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for lines skipping a depth level.
    pub fn with_depth_skip(mut self, depth_skip: DepthSkip) -> Self {
        self.depth_skip = depth_skip;
        self
    }

    /// Sets the expected number of lines, used to pre-allocate the tree.
    pub fn with_capacity(mut self, num_lines: usize) -> Self {
        self.capacity = Some(num_lines);
        self
    }

    /// Returns the configured depth skip policy.
    pub fn depth_skip(&self) -> DepthSkip {
        self.depth_skip
    }

    /// Parses an ordered sequence of lines.
    ///
    /// Lines are expected to be normalized already (no `\r`, document
    /// trimmed); numbering in errors starts at 1.
    ///
    /// # Errors
    /// Returns the [ParsingError] of the first malformed line, or of the
    /// first depth skip under [DepthSkip::Reject].
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<RecordTree, ParsingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines.into_iter();
        let capacity = self.capacity.unwrap_or_else(|| lines.size_hint().0);
        self.build(lines.enumerate().map(|(i, line)| (i + 1, line)), capacity)
    }

    /// Parses a whole document.
    ///
    /// `\r\n` is normalized to `\n` and the document is trimmed first, see
    /// [LineSource].
    pub fn parse_str(&self, document: &str) -> Result<RecordTree, ParsingError> {
        self.parse_source(&LineSource::for_str(document))
    }

    /// Reads and parses a whole document from a file.
    ///
    /// # Errors
    /// File access failures are returned as
    /// [Io](crate::parser::ParsingErrorType::Io) with the underlying
    /// [std::io::Error] as source.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<RecordTree, ParsingError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading GEDCOM file");
        self.parse_source(&LineSource::from_file(path)?)
    }

    /// Parses all lines of a [LineSource].
    pub fn parse_source(&self, source: &LineSource) -> Result<RecordTree, ParsingError> {
        let capacity = self.capacity.unwrap_or_else(|| source.num_lines());
        self.build(source.lines(), capacity)
    }

    fn build<I, S>(&self, lines: I, capacity: usize) -> Result<RecordTree, ParsingError>
    where
        I: Iterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut builder = TreeBuilder::with_capacity(self.depth_skip, capacity);
        for (line_number, line) in lines {
            builder.add_line(tokenize_line(line_number, line.as_ref())?)?;
        }

        let tree = builder.finish_tree();
        debug!(
            nodes = tree.num_nodes(),
            roots = tree.num_roots(),
            dropped = tree.num_dropped(),
            "parsed GEDCOM records"
        );
        Ok(tree)
    }
}
