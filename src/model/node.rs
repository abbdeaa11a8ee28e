//! Record node module for the GEDCOM tree representation.

use crate::model::tree::NodeIndex;

// =#========================================================================#=
// RECORD NODE
// =#========================================================================#=
/// A single parsed GEDCOM line, augmented with structural links.
///
/// Nodes live in the arena of a [RecordTree](crate::model::RecordTree) and
/// reference each other only by [NodeIndex].
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - `parent` is `None` exactly for depth-0 nodes
/// - if `parent` is set, the parent's depth is `depth - 1`
/// - `children` are in document order and all have depth `depth + 1`
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RecordNode {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Hierarchical level
    depth: usize,
    /// Second token of the line, e.g. `NAME` or `@I1@`
    tag: String,
    /// Remainder of the line, possibly empty
    data: String,
    /// Index of the structural parent; `None` for depth-0 nodes
    parent: Option<NodeIndex>,
    /// Indices of the children, in document order
    children: Vec<NodeIndex>,
}

impl RecordNode {
    /// Creates a new depth-0 node.
    pub fn new_root(index: NodeIndex, tag: String, data: String) -> Self {
        RecordNode {
            index,
            depth: 0,
            tag,
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Creates a new nested node below `parent`.
    ///
    /// The caller is responsible for registering the node as child of `parent`.
    ///
    /// # Panics
    /// Panics if `depth` is zero, since depth-0 nodes never have a parent.
    pub fn new_child(
        index: NodeIndex,
        depth: usize,
        tag: String,
        data: String,
        parent: NodeIndex,
    ) -> Self {
        assert!(depth > 0, "Nested record must have positive depth");
        RecordNode {
            index,
            depth,
            tag,
            data,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the depth (hierarchical level) of this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the tag of this node.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the data of this node (empty if the line had none).
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns `true` if this is a depth-0 record.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the index of the parent if this a nested node, else `None`.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the children in document order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child, keeping document order.
    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }
}
