//! Individual (person) entries of the genealogy graph.

use crate::model::NodeIndex;

/// Index of an individual in a [GenealogyGraph](crate::genealogy::GenealogyGraph).
pub type IndividualIndex = usize;

// =#========================================================================#=
// INDIVIDUAL
// =#========================================================================#=
/// One person, backed by a depth-0 `INDI` record of the tree.
///
/// An individual does not own its record; it refers to it by [NodeIndex]
/// and to other individuals by [IndividualIndex]. Use the owning
/// [GenealogyGraph](crate::genealogy::GenealogyGraph) to follow these
/// references.
///
/// # Fields populated when linking
/// - `father`, `mother`: set from the family the record points to via `FAMC`
/// - `children`: grows whenever a child record names a family with this
///   individual as father or mother
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    index: IndividualIndex,
    node: NodeIndex,
    xref: String,
    father: Option<IndividualIndex>,
    mother: Option<IndividualIndex>,
    children: Vec<IndividualIndex>,
}

impl Individual {
    pub(crate) fn new(index: IndividualIndex, node: NodeIndex, xref: &str) -> Self {
        Individual {
            index,
            node,
            xref: xref.to_string(),
            father: None,
            mother: None,
            children: Vec::new(),
        }
    }

    /// Returns the index of this individual in its graph.
    pub fn index(&self) -> IndividualIndex {
        self.index
    }

    /// Returns the index of the backing `INDI` record in the tree.
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    /// Returns the cross-reference identifier, e.g. `@I1@`.
    pub fn xref(&self) -> &str {
        &self.xref
    }

    /// Returns the father, if recorded and resolvable.
    pub fn father(&self) -> Option<IndividualIndex> {
        self.father
    }

    /// Returns the mother, if recorded and resolvable.
    pub fn mother(&self) -> Option<IndividualIndex> {
        self.mother
    }

    /// Returns the children in the order they were linked.
    pub fn children(&self) -> &[IndividualIndex] {
        &self.children
    }

    /// Returns `true` if neither father nor mother is known.
    pub fn is_root_ancestor(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }

    pub(crate) fn set_father(&mut self, father: IndividualIndex) {
        self.father = Some(father);
    }

    pub(crate) fn set_mother(&mut self, mother: IndividualIndex) {
        self.mother = Some(mother);
    }

    pub(crate) fn push_child(&mut self, child: IndividualIndex) {
        self.children.push(child);
    }
}
