//! Family (household/union) entries of the genealogy graph.

use crate::genealogy::individual::IndividualIndex;
use crate::model::NodeIndex;

/// Index of a family in a [GenealogyGraph](crate::genealogy::GenealogyGraph).
pub type FamilyIndex = usize;

// =#========================================================================#=
// FAMILY
// =#========================================================================#=
/// One family, backed by a depth-0 `FAM` record of the tree.
///
/// Populated in a single pass over the immediate children of its record:
/// `HUSB` sets the father, `WIFE` the mother, and each `CHIL` appends a child
/// in document order. Pointers to unknown individuals are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    index: FamilyIndex,
    node: NodeIndex,
    xref: String,
    father: Option<IndividualIndex>,
    mother: Option<IndividualIndex>,
    children: Vec<IndividualIndex>,
}

impl Family {
    pub(crate) fn new(index: FamilyIndex, node: NodeIndex, xref: &str) -> Self {
        Family {
            index,
            node,
            xref: xref.to_string(),
            father: None,
            mother: None,
            children: Vec::new(),
        }
    }

    /// Returns the index of this family in its graph.
    pub fn index(&self) -> FamilyIndex {
        self.index
    }

    /// Returns the index of the backing `FAM` record in the tree.
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    /// Returns the cross-reference identifier, e.g. `@F1@`.
    pub fn xref(&self) -> &str {
        &self.xref
    }

    /// Returns the father (`HUSB`), if resolvable.
    pub fn father(&self) -> Option<IndividualIndex> {
        self.father
    }

    /// Returns the mother (`WIFE`), if resolvable.
    pub fn mother(&self) -> Option<IndividualIndex> {
        self.mother
    }

    /// Returns the children (`CHIL`) in document order.
    pub fn children(&self) -> &[IndividualIndex] {
        &self.children
    }

    /// Returns `true` if `individual` is father or mother of this family.
    pub fn has_spouse(&self, individual: IndividualIndex) -> bool {
        self.father == Some(individual) || self.mother == Some(individual)
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
