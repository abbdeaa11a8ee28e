//! Relational view on a parsed document: individuals and families.
//!
//! A [GenealogyGraph] is resolved from a [RecordTree](crate::model::RecordTree)
//! by the [GraphBuilder]. It borrows the tree and stores [Individual]s and
//! [Family]s in arenas; all relations (father, mother, children) are indices
//! into these arenas, resolved via cross-reference identifiers ([XrefMap]).
//!
//! The graph supports:
//! - Relation lookups: [GenealogyGraph::father], [GenealogyGraph::children], ...
//! - Attribute queries: [GenealogyGraph::find_individual_by_attribute]
//! - Diagnostics: [GenealogyGraph::unresolved] and
//!   [GenealogyGraph::find_ancestry_cycle]

pub mod defs;
pub mod family;
pub mod graph;
pub mod graph_builder;
pub mod individual;
pub mod xref_map;

pub use defs::PointerTag;
pub use family::{Family, FamilyIndex};
pub use graph::{GenealogyGraph, UnresolvedReference};
pub use graph_builder::GraphBuilder;
pub use individual::{Individual, IndividualIndex};
pub use xref_map::XrefMap;
