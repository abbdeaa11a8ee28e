//! Read-only lookups on record nodes.
//!
//! Two kinds of lookups are offered, both on [RecordTree] (by [NodeIndex])
//! and on the [NodeRef] view:
//! - single level: first immediate child with a given tag
//! - chained: follow one tag per path element, returning the data of the
//!   last node reached
//!
//! A miss is never an error, it is `None`: optional fields are expected to
//! be absent regularly.

use crate::model::node::RecordNode;
use crate::model::tree::{NodeIndex, RecordTree};
use std::fmt;

// ============================================================================
// Lookups on the tree (pub)
// ============================================================================
impl RecordTree {
    /// Returns the first immediate child of `node` with tag `tag`,
    /// in document order.
    pub fn get_child(&self, node: NodeIndex, tag: &str) -> Option<NodeIndex> {
        self[node]
            .children()
            .iter()
            .copied()
            .find(|&child| self[child].tag() == tag)
    }

    /// Returns the data of the first immediate child of `node` with tag `tag`.
    pub fn get_attribute(&self, node: NodeIndex, tag: &str) -> Option<&str> {
        self.get_child(node, tag).map(|child| self[child].data())
    }

    /// Follows `path` one tag per hop, starting at `node`, and returns the
    /// data of the final node.
    ///
    /// An empty path returns the data of `node` itself. If any hop misses,
    /// the result is `None`, never a partial value.
    pub fn get_chained_data(&self, node: NodeIndex, path: &[&str]) -> Option<&str> {
        let mut current = node;
        for tag in path {
            current = self.get_child(current, tag)?;
        }
        Some(self[current].data())
    }
}

// =#========================================================================#=
// NODE REF
// =#========================================================================$=
/// Navigable, read-only view on a node of a [RecordTree].
///
/// Cheap to copy; all returned strings borrow from the tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t RecordTree,
    index: NodeIndex,
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(tree: &'t RecordTree, index: NodeIndex) -> Self {
        Self { tree, index }
    }

    fn raw(&self) -> &'t RecordNode {
        &self.tree[self.index]
    }

    /// Returns the index of the viewed node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the depth of the viewed node.
    pub fn depth(&self) -> usize {
        self.raw().depth()
    }

    /// Returns the tag of the viewed node.
    pub fn tag(&self) -> &'t str {
        self.raw().tag()
    }

    /// Returns the data of the viewed node.
    pub fn data(&self) -> &'t str {
        self.raw().data()
    }

    /// Returns the structural parent, `None` for depth-0 records.
    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.raw().parent().map(|p| NodeRef::new(self.tree, p))
    }

    /// Iterates over the children in document order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + use<'t> {
        let tree = self.tree;
        self.raw()
            .children()
            .iter()
            .map(move |&child| NodeRef::new(tree, child))
    }

    /// Iterates over all children with tag `tag`, in document order.
    pub fn children_with_tag<'a>(
        &self,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeRef<'t>> + use<'a, 't> {
        self.children().filter(move |child| child.tag() == tag)
    }

    /// Returns the first child with tag `tag`.
    pub fn child(&self, tag: &str) -> Option<NodeRef<'t>> {
        self.tree
            .get_child(self.index, tag)
            .map(|child| NodeRef::new(self.tree, child))
    }

    /// Returns the data of the first child with tag `tag`.
    pub fn attribute(&self, tag: &str) -> Option<&'t str> {
        self.tree.get_attribute(self.index, tag)
    }

    /// Returns the data at the end of the chain `path` (see
    /// [RecordTree::get_chained_data]).
    pub fn chained_data(&self, path: &[&str]) -> Option<&'t str> {
        self.tree.get_chained_data(self.index, path)
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("depth", &self.depth())
            .field("tag", &self.tag())
            .field("data", &self.data())
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for NodeRef<'_> {}

// =#========================================================================#=
// TESTS
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> (RecordTree, NodeIndex) {
        let mut tree = RecordTree::new();
        let indi = tree.add_root("@I1@", "INDI");
        tree.add_child(indi, "NAME", "John");
        tree.add_child(indi, "NAME", "Johnny");
        let birt = tree.add_child(indi, "BIRT", "");
        tree.add_child(birt, "DATE", "1 JAN 1900");
        tree.add_child(birt, "PLAC", "Boston");
        (tree, indi)
    }

    #[test]
    fn test_get_attribute_first_match_wins() {
        let (tree, indi) = person();
        assert_eq!(tree.get_attribute(indi, "NAME"), Some("John"));
        assert_eq!(tree.get_attribute(indi, "SEX"), None);
    }

    #[test]
    fn test_get_attribute_only_immediate_children() {
        let (tree, indi) = person();
        assert_eq!(tree.get_attribute(indi, "DATE"), None);
    }

    #[test]
    fn test_chained_data() {
        let (tree, indi) = person();
        assert_eq!(tree.get_chained_data(indi, &["BIRT", "DATE"]), Some("1 JAN 1900"));
        assert_eq!(tree.get_chained_data(indi, &["BIRT", "TIME"]), None);
        assert_eq!(tree.get_chained_data(indi, &["DEAT", "DATE"]), None);
        assert_eq!(tree.get_chained_data(indi, &[]), Some("INDI"));
    }

    #[test]
    fn test_node_ref_navigation() {
        let (tree, indi) = person();
        let node = tree.node(indi);
        let birt = node.child("BIRT").unwrap();
        assert_eq!(birt.depth(), 1);
        assert_eq!(birt.parent(), Some(node));
        assert_eq!(birt.attribute("PLAC"), Some("Boston"));

        let names: Vec<_> = node.children_with_tag("NAME").map(|n| n.data()).collect();
        assert_eq!(names, vec!["John", "Johnny"]);
        assert_eq!(node.children().count(), 3);
        assert_eq!(node.parent(), None);
    }
}
