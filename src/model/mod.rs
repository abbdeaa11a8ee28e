//! Data model for parsed GEDCOM documents.
//!
//! # Tree representation
//! A document is represented by a [RecordTree], which uses the arena pattern
//! to store [RecordNode]s, one per line, referenced by [NodeIndex]. Depth-0
//! records are the roots; every other node has exactly one parent one level
//! above it.
//!
//! # Building trees
//! Trees are constructed during parsing by the [TreeBuilder], which consumes
//! tokenized lines in document order and attaches each line by depth.
//!
//! # Reading attributes
//! [NodeRef] is a read-only view on a node offering single-level
//! ([NodeRef::attribute]) and chained ([NodeRef::chained_data]) lookups.
//! The same lookups are available on [RecordTree] by index.

pub mod attribute_resolver;
pub mod node;
pub mod tree;
pub mod tree_builder;

pub use attribute_resolver::NodeRef;
pub use node::RecordNode;
pub use tree::NodeIndex;
pub use tree::RecordTree;
pub use tree_builder::DepthSkip;
pub use tree_builder::TreeBuilder;
