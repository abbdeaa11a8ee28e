//! Gedtree is a library to parse GEDCOM genealogy documents into a record
//! tree and a graph of individuals and families.
//!
//! Core functionality provided:
//! - Parser: Tokenize `<depth> <tag> [data]` lines and attach each line to
//!   its parent by depth, in a single linear pass.
//! - Tree model: [RecordTree] stores all records in an arena; depth-0
//!   records are the roots, see [crate::model].
//! - Attribute lookups: single-level ([RecordTree::get_attribute]) and
//!   chained ([RecordTree::get_chained_data]), e.g. `BIRT` → `DATE`.
//! - Genealogy graph: individuals (`INDI`) and families (`FAM`) with
//!   father, mother, and children resolved from `HUSB`, `WIFE`, `CHIL`, and
//!   `FAMC` pointers, see [crate::genealogy].
//! - Configurability:
//!   - Depth-skip policy: drop (default) or reject lines that skip a level
//!
//! Limitations:
//! - Only `INDI` and `FAM` records are resolved into the graph
//! - Data is kept verbatim (no `CONC`/`CONT` merging, no date parsing)
//!
//! # Usage patterns
//! 1. Quick access with default settings via [parse_str] and [parse_file].
//! 2. Configure a [GedcomParser](crate::parser::GedcomParser) for full
//!    control over depth-skip handling.
//!
//! ## Example Default Configuration
//! ```
//! use gedtree::genealogy::GraphBuilder;
//!
//! let tree = gedtree::parse_str(
//!     "0 @I1@ INDI\n1 NAME John\n1 BIRT\n2 DATE 1 JAN 1900",
//! )?;
//! assert_eq!(tree.num_roots(), 1);
//!
//! let graph = GraphBuilder::new().build(&tree);
//! let john = graph.find_individual_by_attribute("NAME", "John").unwrap();
//! assert_eq!(graph.birth_date(john.index()), Some("1 JAN 1900"));
//! # Ok::<(), gedtree::parser::ParsingError>(())
//! ```
//!
//! ## Example Parser Configuration
//! ```no_run
//! use gedtree::parser::{DepthSkip, GedcomParser};
//!
//! let tree = GedcomParser::new()
//!     .with_depth_skip(DepthSkip::Reject) // Fail on malformed nesting
//!     .parse_file("family.ged")?;
//! println!("Loaded {} records", tree.num_roots());
//! # Ok::<(), gedtree::parser::ParsingError>(())
//! ```

pub mod genealogy;
pub mod model;
pub mod parser;

use crate::model::RecordTree;
use crate::parser::GedcomParser;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a GEDCOM document using default settings, returning its [RecordTree].
///
/// See [GedcomParser::parse_str] for details.
pub fn parse_str<S: AsRef<str>>(document: S) -> Result<RecordTree, ParsingError> {
    GedcomParser::new().parse_str(document.as_ref())
}

/// Parses a GEDCOM file using default settings, returning its [RecordTree].
///
/// See [GedcomParser::parse_file] for details.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RecordTree, ParsingError> {
    GedcomParser::new().parse_file(path)
}
