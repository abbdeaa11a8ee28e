//! Depth-driven construction of a [RecordTree] from tokenized lines.
//!
//! The [TreeBuilder] receives [RecordLine]s in document order and uses the
//! depth of each line as the only structural signal. It keeps a table of
//! the most recent node per depth level (the *open* levels):
//!
//! ```text
//! line            open levels after the line
//! 0 HEAD          [HEAD]
//! 1 SOUR PAF      [HEAD, SOUR]
//! 2 NAME PAF      [HEAD, SOUR, NAME]
//! 1 DATE ...      [HEAD, DATE]          (NAME can no longer be a parent)
//! 0 @I1@ INDI     [@I1@]
//! ```
//!
//! A line at depth `d > 0` is attached to the open node at level `d - 1`.
//! Each line is handled once, so construction is linear in the number of
//! lines.
//!
//! # Depth skips
//! If level `d - 1` is not open (e.g. a depth-2 line directly after a
//! depth-0 line), the line has no possible parent. What happens is decided
//! by [DepthSkip]: the line is either dropped (and counted, see
//! [RecordTree::num_dropped]) or the parse fails.

use crate::model::tree::{NodeIndex, RecordTree};
use crate::parser::ParsingError;
use crate::parser::tokenizer::RecordLine;
use tracing::trace;

// =#========================================================================#=
// DEPTH SKIP
// =#========================================================================$=
/// Policy for lines whose depth skips a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthSkip {
    /// Drop the line. Deeper lines following it are dropped as well, until
    /// the depth returns to an open level.
    #[default]
    Drop,
    /// Fail with [DepthSkip](crate::parser::ParsingErrorType::DepthSkip).
    Reject,
}

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================$=
/// Builder assembling a [RecordTree] line by line.
///
/// # Builder lifecycle
/// ```text
/// new() ──→ add_line()* ──→ finish_tree() ──→ RecordTree
/// ```
///
/// # Example
/// ```
/// use gedtree::model::TreeBuilder;
/// use gedtree::parser::DepthSkip;
/// use gedtree::parser::tokenizer::tokenize_line;
///
/// let mut builder = TreeBuilder::new(DepthSkip::Drop);
/// for (i, raw) in ["0 HEAD", "1 SOUR PAF", "2 VERS 5.2", "0 TRLR"].iter().enumerate() {
///     builder.add_line(tokenize_line(i + 1, raw)?)?;
/// }
/// let tree = builder.finish_tree();
/// assert_eq!(tree.num_roots(), 2);
/// assert_eq!(tree.num_nodes(), 4);
/// # Ok::<(), gedtree::parser::ParsingError>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    tree: RecordTree,
    /// `open[d]` is the most recent node at depth `d`
    open: Vec<NodeIndex>,
    depth_skip: DepthSkip,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DepthSkip::default())
    }
}

impl TreeBuilder {
    /// Creates a new builder with an empty tree.
    pub fn new(depth_skip: DepthSkip) -> Self {
        Self::with_capacity(depth_skip, 0)
    }

    /// Creates a new builder pre-allocating space for `num_lines` nodes.
    pub fn with_capacity(depth_skip: DepthSkip, num_lines: usize) -> Self {
        Self {
            tree: RecordTree::with_capacity(num_lines),
            open: Vec::new(),
            depth_skip,
        }
    }

    /// Adds the next line of the document.
    ///
    /// # Returns
    /// * `Ok(Some(index))` - index of the new node
    /// * `Ok(None)` - the line skipped a level and was dropped
    /// * `Err(ParsingError)` - the line skipped a level under [DepthSkip::Reject]
    pub fn add_line(&mut self, line: RecordLine<'_>) -> Result<Option<NodeIndex>, ParsingError> {
        if line.depth == 0 {
            let index = self.tree.add_root(line.tag, line.data);
            self.open.clear();
            self.open.push(index);
            return Ok(Some(index));
        }

        // Level `depth - 1` must be open to act as parent
        if line.depth > self.open.len() {
            return match self.depth_skip {
                DepthSkip::Drop => {
                    trace!(
                        line = line.line_number,
                        depth = line.depth,
                        tag = line.tag,
                        "dropping line without parent"
                    );
                    self.tree.count_dropped();
                    Ok(None)
                }
                DepthSkip::Reject => Err(ParsingError::depth_skip(
                    line.line_number,
                    &format!("{} {} {}", line.depth, line.tag, line.data),
                    line.depth,
                    self.open.len(),
                )),
            };
        }

        let parent = self.open[line.depth - 1];
        let index = self.tree.add_child(parent, line.tag, line.data);
        self.open.truncate(line.depth);
        self.open.push(index);
        Ok(Some(index))
    }

    /// Finalizes the building process and returns the resulting tree.
    pub fn finish_tree(self) -> RecordTree {
        self.tree
    }
}
