//! Resolves a [RecordTree] into a [GenealogyGraph].
//!
//! Three passes over the finished tree:
//! 1. Classification: every depth-0 record whose data is `INDI` or `FAM`
//!    becomes an [Individual] or a [Family], keyed by its identifier tag.
//! 2. Family resolution: the immediate children of each family record set
//!    father (`HUSB`), mother (`WIFE`), and children (`CHIL`).
//! 3. Individual linking: each individual's `FAMC` pointer sets its father
//!    and mother and appends it to their children.
//!
//! Pointers to unknown identifiers are skipped and recorded as
//! [UnresolvedReference]s.

use crate::genealogy::defs::{CHILD_TO_FAMILY, FAMILY_RECORD, INDIVIDUAL_RECORD, PointerTag};
use crate::genealogy::family::Family;
use crate::genealogy::graph::{GenealogyGraph, UnresolvedReference};
use crate::genealogy::individual::Individual;
use crate::model::RecordTree;
use tracing::{debug, warn};

// =#========================================================================#=
// GRAPH BUILDER
// =#========================================================================#=
/// Builds a [GenealogyGraph] from a parsed [RecordTree].
///
/// Building never fails; broken cross-references degrade to missing
/// relations and are listed in [GenealogyGraph::unresolved].
///
/// # Example
/// ```
/// use gedtree::genealogy::GraphBuilder;
/// use gedtree::parser::GedcomParser;
///
/// let tree = GedcomParser::new().parse_str("0 @I1@ INDI\n0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I7@")?;
/// let graph = GraphBuilder::new().build(&tree);
///
/// assert_eq!(graph.num_individuals(), 1);
/// assert_eq!(graph.families()[0].father(), Some(0));
/// assert_eq!(graph.families()[0].mother(), None);
/// assert_eq!(graph.unresolved()[0].target, "@I7@");
/// # Ok::<(), gedtree::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        GraphBuilder
    }

    /// Resolves `tree` into a new graph borrowing it.
    pub fn build<'t>(&self, tree: &'t RecordTree) -> GenealogyGraph<'t> {
        let mut graph = GenealogyGraph::empty(tree);
        self.populate(&mut graph);
        graph
    }

    /// Runs all passes on `graph`, whose collections must be empty.
    pub(crate) fn populate(&self, graph: &mut GenealogyGraph<'_>) {
        debug_assert!(graph.individuals.is_empty() && graph.families.is_empty());

        self.classify_records(graph);
        self.resolve_families(graph);
        self.link_individuals(graph);

        debug!(
            individuals = graph.individuals.len(),
            families = graph.families.len(),
            unresolved = graph.unresolved.len(),
            "built genealogy graph"
        );
    }
}

// ============================================================================
// Passes (private)
// ============================================================================
impl GraphBuilder {
    fn classify_records(&self, graph: &mut GenealogyGraph<'_>) {
        let tree = graph.tree;
        for root in tree.roots() {
            match root.data() {
                INDIVIDUAL_RECORD => {
                    let index = graph.individuals.len();
                    if !graph.individual_keys.insert_first(root.tag(), index) {
                        warn!(xref = root.tag(), "duplicate individual, keeping first record");
                    }
                    graph
                        .individuals
                        .push(Individual::new(index, root.index(), root.tag()));
                }
                FAMILY_RECORD => {
                    let index = graph.families.len();
                    if !graph.family_keys.insert_first(root.tag(), index) {
                        warn!(xref = root.tag(), "duplicate family, keeping first record");
                    }
                    graph
                        .families
                        .push(Family::new(index, root.index(), root.tag()));
                }
                _ => {}
            }
        }
        debug!(
            individuals = graph.individuals.len(),
            families = graph.families.len(),
            "classified root records"
        );
    }

    fn resolve_families(&self, graph: &mut GenealogyGraph<'_>) {
        let tree = graph.tree;
        for family_index in 0..graph.families.len() {
            let record = tree.node(graph.families[family_index].node());

            for field in record.children() {
                let Some(pointer) = PointerTag::from_tag(field.tag()) else {
                    continue;
                };
                if pointer == PointerTag::ChildToFamily {
                    continue;
                }

                let Some(individual) = graph.individual_keys.get(field.data()) else {
                    record_unresolved(graph, record.tag(), pointer, field.data());
                    continue;
                };

                let family = &mut graph.families[family_index];
                match pointer {
                    PointerTag::Husband => family.set_father(individual),
                    PointerTag::Wife => family.set_mother(individual),
                    PointerTag::Child => family.push_child(individual),
                    PointerTag::ChildToFamily => {}
                }
            }
        }
        debug!(families = graph.families.len(), "resolved spouse and child pointers");
    }

    fn link_individuals(&self, graph: &mut GenealogyGraph<'_>) {
        let tree = graph.tree;
        let mut num_linked = 0;

        for child in 0..graph.individuals.len() {
            let record = tree.node(graph.individuals[child].node());
            // no FAMC: a root ancestor
            let Some(family_xref) = record.chained_data(&[CHILD_TO_FAMILY]) else {
                continue;
            };
            let Some(family) = graph.family_keys.get(family_xref) else {
                record_unresolved(graph, record.tag(), PointerTag::ChildToFamily, family_xref);
                continue;
            };

            let family = &graph.families[family];
            let (father, mother) = (family.father(), family.mother());

            if let Some(father) = father {
                graph.individuals[child].set_father(father);
                graph.individuals[father].push_child(child);
            }
            if let Some(mother) = mother {
                graph.individuals[child].set_mother(mother);
                graph.individuals[mother].push_child(child);
            }
            num_linked += 1;
        }
        debug!(linked = num_linked, "linked individuals to their parents");
    }
}

fn record_unresolved(
    graph: &mut GenealogyGraph<'_>,
    source: &str,
    pointer: PointerTag,
    target: &str,
) {
    warn!(source, pointer = %pointer, target, "unresolved pointer");
    graph.unresolved.push(UnresolvedReference {
        source: source.to_string(),
        pointer,
        target: target.to_string(),
    });
}
