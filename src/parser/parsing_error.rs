//! Error types for GEDCOM parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while turning GEDCOM lines into a
//! [RecordTree](crate::model::RecordTree).
//!
//! Lookups (attributes, chained paths, cross-references, queries) never
//! produce an error; they return `None` instead.

use thiserror::Error;

/// Maximum number of characters of the offending line kept as context.
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================$=
/// Error types that can occur during GEDCOM parsing.
#[derive(Debug, Error)]
pub enum ParsingErrorType {
    /// Line has no valid depth token or fewer than two tokens.
    #[error("Malformed line - {0}")]
    MalformedLine(String),

    /// Line is nested deeper than any open record allows.
    ///
    /// Only reported when parsing with
    /// [DepthSkip::Reject](crate::parser::DepthSkip::Reject).
    #[error("Depth {depth} skips a level (deepest open level allows {expected_max})")]
    DepthSkip {
        /// Depth found on the line
        depth: usize,
        /// Deepest depth that would have had a parent
        expected_max: usize,
    },

    /// Reading the document failed.
    #[error("IO error - {0}")]
    Io(#[from] std::io::Error),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (line number and line content).
#[derive(Debug, Error)]
#[error("{kind} at line {line}{}", format_context(.context))]
pub struct ParsingError {
    #[source]
    kind: ParsingErrorType,
    line: usize,
    context: String,
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context: {context}")
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type and the offending line.
    ///
    /// # Arguments
    /// * `kind` - What went wrong
    /// * `line` - 1-based line number within the normalized document
    /// * `raw` - Content of the line, truncated for the error context
    pub fn at_line(kind: ParsingErrorType, line: usize, raw: &str) -> Self {
        Self {
            kind,
            line,
            context: raw.chars().take(DEFAULT_CONTEXT_LENGTH).collect(),
        }
    }

    /// Convenience constructor for MalformedLine
    pub fn malformed_line(line: usize, raw: &str, msg: String) -> Self {
        Self::at_line(ParsingErrorType::MalformedLine(msg), line, raw)
    }

    /// Convenience constructor for DepthSkip
    pub fn depth_skip(line: usize, raw: &str, depth: usize, expected_max: usize) -> Self {
        Self::at_line(ParsingErrorType::DepthSkip { depth, expected_max }, line, raw)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the 1-based line number where the error occurred (0 for IO errors)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` if this error was caused by a malformed line.
    pub fn is_malformed_line(&self) -> bool {
        matches!(self.kind, ParsingErrorType::MalformedLine(_))
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::Io(err),
            line: 0,
            context: String::new(),
        }
    }
}
