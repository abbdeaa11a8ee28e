//! Line tokenizer turning a single GEDCOM line into a [RecordLine].
//!
//! A GEDCOM line has the shape `<depth> <tag> [data...]`:
//!
//! ```text
//!   0 @I1@ INDI
//!   1 NAME John /Smith/
//!     ^^^^ ^^^^^^^^^^^^^-- data (rest of the line, may contain spaces)
//!     ^^^^---------------- tag
//!   ^--------------------- depth
//! ```
//!
//! Tokens are separated by spaces. The first token must be a base-10
//! non-negative integer, the second token is the tag, everything after it
//! (trimmed) is the data, which may be empty.

use crate::parser::parsing_error::ParsingError;

/// Separator between the tokens of a line.
const TOKEN_SEPARATOR: char = ' ';

// =#========================================================================#=
// RECORD LINE
// =#========================================================================$=
/// A tokenized line: `(depth, tag, data)` borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLine<'a> {
    /// 1-based line number in the normalized document
    pub line_number: usize,
    /// Hierarchical level of the line
    pub depth: usize,
    /// Second token, e.g. `NAME` or a cross-reference identifier like `@I1@`
    pub tag: &'a str,
    /// Remainder of the line, possibly empty
    pub data: &'a str,
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================$=
/// Splits one line into its depth, tag and data.
///
/// Leading spaces before the depth and repeated spaces between depth and tag
/// are tolerated; the data is trimmed.
///
/// # Arguments
/// * `line_number` - 1-based line number, used for error reporting
/// * `line` - The raw line (without line terminator)
///
/// # Errors
/// Returns a [MalformedLine](crate::parser::ParsingErrorType::MalformedLine)
/// error if the line has fewer than two tokens or the first token is not a
/// valid non-negative integer.
///
/// # Example
/// ```
/// use gedtree::parser::tokenizer::tokenize_line;
///
/// let line = tokenize_line(1, "2 DATE 1 JAN 1900").unwrap();
/// assert_eq!(line.depth, 2);
/// assert_eq!(line.tag, "DATE");
/// assert_eq!(line.data, "1 JAN 1900");
/// ```
pub fn tokenize_line(line_number: usize, line: &str) -> Result<RecordLine<'_>, ParsingError> {
    let content = line.trim_matches(TOKEN_SEPARATOR).trim_end();

    let (depth_token, rest) = content.split_once(TOKEN_SEPARATOR).ok_or_else(|| {
        ParsingError::malformed_line(
            line_number,
            line,
            "expected at least a depth and a tag".to_string(),
        )
    })?;

    let depth = parse_depth(depth_token).ok_or_else(|| {
        ParsingError::malformed_line(
            line_number,
            line,
            format!("'{depth_token}' is not a valid depth"),
        )
    })?;

    let rest = rest.trim_start_matches(TOKEN_SEPARATOR);
    let (tag, data) = match rest.split_once(TOKEN_SEPARATOR) {
        Some((tag, data)) => (tag, data.trim()),
        None => (rest, ""),
    };

    Ok(RecordLine {
        line_number,
        depth,
        tag,
        data,
    })
}

/// Parses a depth token, accepting only ASCII digits (no sign).
fn parse_depth(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<usize>().ok()
}
