//! Tree module for the GEDCOM record representation.
//!
//! This module provides the core data structure for a parsed document:
//! - [RecordTree]: All records of one document, using the arena pattern.
//! - [NodeIndex] is used to index nodes.

use crate::model::attribute_resolver::NodeRef;
use crate::model::node::RecordNode;
use std::ops::Index;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

// =#========================================================================#=
// RECORD TREE
// =#========================================================================#=
/// The records of a GEDCOM document represented using the arena pattern on
/// [RecordNode].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// The tree is the sole owner of all nodes; everything else (node views,
/// [individuals](crate::genealogy::Individual),
/// [families](crate::genealogy::Family)) refers to them by index.
///
/// # Structure
/// - Nodes are appended in document order, so arena order is document order.
/// - Depth-0 nodes are the roots; their indices are kept in document order.
/// - Each nested node has exactly one parent, one level above.
///
/// # Construction
/// Usually built by the [TreeBuilder](crate::model::TreeBuilder) while
/// parsing, but can also be assembled by hand via
/// [add_root](RecordTree::add_root) and [add_child](RecordTree::add_child).
/// Test validity with [RecordTree::is_valid].
///
/// # Example
/// ```
/// use gedtree::model::RecordTree;
///
/// let mut tree = RecordTree::new();
/// let head = tree.add_root("HEAD", "");
/// let sour = tree.add_child(head, "SOUR", "PAF");
/// tree.add_child(sour, "NAME", "Personal Ancestral File");
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.node(head).chained_data(&["SOUR", "NAME"]), Some("Personal Ancestral File"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<RecordNode>,

    /// Indices of the depth-0 nodes, in document order
    roots: Vec<NodeIndex>,

    /// Number of lines dropped because their depth skipped a level
    num_dropped: usize,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl RecordTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty tree with capacity for `num_nodes` nodes.
    pub fn with_capacity(num_nodes: usize) -> Self {
        RecordTree {
            nodes: Vec::with_capacity(num_nodes),
            roots: Vec::new(),
            num_dropped: 0,
        }
    }

    /// Adds a depth-0 record, assigning a unique index, which gets returned.
    pub fn add_root(&mut self, tag: impl Into<String>, data: impl Into<String>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes
            .push(RecordNode::new_root(index, tag.into(), data.into()));
        self.roots.push(index);
        index
    }

    /// Adds a record one level below `parent`, assigning a unique index,
    /// which gets returned.
    ///
    /// # Panics
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(
        &mut self,
        parent: NodeIndex,
        tag: impl Into<String>,
        data: impl Into<String>,
    ) -> NodeIndex {
        let index = self.nodes.len();
        let depth = self[parent].depth() + 1;
        self.nodes.push(RecordNode::new_child(
            index,
            depth,
            tag.into(),
            data.into(),
            parent,
        ));
        self.nodes[parent].push_child(index);
        index
    }

    /// Records that a line was dropped during construction.
    pub(crate) fn count_dropped(&mut self) {
        self.num_dropped += 1;
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl RecordTree {
    /// Returns the total number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of depth-0 records.
    pub fn num_roots(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of lines dropped because their depth skipped a
    /// level (see [DepthSkip](crate::parser::DepthSkip)).
    pub fn num_dropped(&self) -> usize {
        self.num_dropped
    }

    /// Returns the indices of the depth-0 records in document order.
    pub fn root_indices(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Iterates over the depth-0 records in document order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.roots.iter().map(move |&index| NodeRef::new(self, index))
    }

    /// Iterates over all nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordNode> {
        self.nodes.iter()
    }

    /// Returns the raw node at `index`, or `None` if out of bounds.
    pub fn get(&self, index: NodeIndex) -> Option<&RecordNode> {
        self.nodes.get(index)
    }

    /// Returns a navigable view on the node at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not a node of this tree.
    pub fn node(&self, index: NodeIndex) -> NodeRef<'_> {
        assert!(index < self.nodes.len(), "Node index {index} out of bounds");
        NodeRef::new(self, index)
    }

    /// Returns the first depth-0 record with the given tag.
    ///
    /// Handy for cross-reference identifiers (`@I1@`) and singleton
    /// records such as `HEAD`.
    pub fn find_root(&self, tag: &str) -> Option<NodeRef<'_>> {
        self.roots().find(|node| node.tag() == tag)
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl RecordTree {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - All node indices match their position in the arena
    /// - Roots are exactly the nodes without parent, all of depth 0, in order
    /// - Every parent index is valid, one level up, and lists the node as child
    /// - Every child index is valid and points back to its parent
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let mut expected_roots = Vec::with_capacity(self.roots.len());

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            match node.parent() {
                None => {
                    if node.depth() != 0 {
                        return false;
                    }
                    expected_roots.push(index);
                }
                Some(parent) => {
                    let Some(parent_node) = self.nodes.get(parent) else {
                        return false;
                    };
                    if parent_node.depth() + 1 != node.depth() {
                        return false;
                    }
                    if !parent_node.children().contains(&index) {
                        return false;
                    }
                }
            }

            for &child in node.children() {
                match self.nodes.get(child) {
                    Some(child_node) if child_node.parent() == Some(index) => {}
                    _ => return false,
                }
            }
        }

        expected_roots == self.roots
    }
}

impl Index<NodeIndex> for RecordTree {
    type Output = RecordNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// =#========================================================================#=
// TESTS
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_tree() {
        let mut tree = RecordTree::new();
        let head = tree.add_root("HEAD", "");
        let sour = tree.add_child(head, "SOUR", "PAF");
        let name = tree.add_child(sour, "NAME", "Personal Ancestral File");
        let date = tree.add_child(head, "DATE", "31 MAR 2017");
        let indi = tree.add_root("@I1@", "INDI");

        assert_eq!(tree.num_nodes(), 5);
        assert_eq!(tree.num_roots(), 2);
        assert_eq!(tree.root_indices(), &[head, indi]);
        assert_eq!(tree[head].children(), &[sour, date]);
        assert_eq!(tree[name].depth(), 2);
        assert_eq!(tree[name].parent(), Some(sour));
        assert!(tree.is_valid());
    }

    #[test]
    fn test_empty_tree_is_valid() {
        let tree = RecordTree::new();
        assert!(tree.is_empty());
        assert!(tree.is_valid());
    }

    #[test]
    fn test_find_root() {
        let mut tree = RecordTree::new();
        tree.add_root("HEAD", "");
        tree.add_root("@F1@", "FAM");
        assert_eq!(tree.find_root("@F1@").map(|n| n.data()), Some("FAM"));
        assert!(tree.find_root("@F2@").is_none());
    }

    #[test]
    fn test_detects_broken_back_reference() {
        let mut tree = RecordTree::new();
        let head = tree.add_root("HEAD", "");
        tree.add_child(head, "SOUR", "PAF");
        tree.nodes[head] = RecordNode::new_root(head, "HEAD".to_string(), String::new());
        assert!(!tree.is_valid());
    }

    #[test]
    #[should_panic]
    fn test_get_node_out_of_bounds() {
        let tree = RecordTree::new();
        tree.node(55);
    }
}
