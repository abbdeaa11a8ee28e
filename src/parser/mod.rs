//! Parser for the line-oriented GEDCOM format.
//!
//! Parsing runs in three steps:
//! 1. [LineSource] normalizes the document and numbers its lines
//! 2. [tokenizer] splits each line into depth, tag and data
//! 3. [TreeBuilder](crate::model::TreeBuilder) attaches each line by depth
//!
//! [GedcomParser] wires these steps together and holds the configuration.

pub mod gedcom_parser;
pub mod line_source;
pub mod parsing_error;
pub mod tokenizer;

pub use crate::model::DepthSkip;
pub use gedcom_parser::GedcomParser;
pub use line_source::LineSource;
pub use parsing_error::{ParsingError, ParsingErrorType};
pub use tokenizer::RecordLine;
