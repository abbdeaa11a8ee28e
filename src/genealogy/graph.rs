//! The genealogy graph: individuals and families resolved from a tree.
//!
//! [GenealogyGraph] owns the [Individual] and [Family] entries, which refer
//! to records of the borrowed [RecordTree] and to each other by index only
//! (arena + index pattern). Cyclic relations in malformed documents are
//! therefore representable without ownership troubles; detecting them is
//! an explicit step, see [GenealogyGraph::find_ancestry_cycle].

use crate::genealogy::defs::{BIRTH, DATE, NAME, PointerTag};
use crate::genealogy::family::{Family, FamilyIndex};
use crate::genealogy::graph_builder::GraphBuilder;
use crate::genealogy::individual::{Individual, IndividualIndex};
use crate::genealogy::xref_map::XrefMap;
use crate::model::{NodeRef, RecordTree};
use std::fmt;
use std::ops::Index;

// =#========================================================================#=
// UNRESOLVED REFERENCE
// =#========================================================================$=
/// A pointer field whose target identifier is not present in the document.
///
/// Dangling pointers never abort graph building; they are skipped for
/// linking and collected here so callers can tell an absent relation from a
/// broken one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Identifier of the record holding the pointer, e.g. `@F1@`
    pub source: String,
    /// Kind of pointer
    pub pointer: PointerTag,
    /// Identifier that could not be resolved, e.g. `@I9@`
    pub target: String,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} points to unknown record '{}'",
            self.source, self.pointer, self.target
        )
    }
}

// =#========================================================================#=
// GENEALOGY GRAPH
// =#========================================================================$=
/// Individuals and families of one document, linked by cross-references.
///
/// Built once by [GraphBuilder::build] and read-only afterwards; the only
/// mutator is [rebuild](Self::rebuild), which starts from empty collections.
///
/// # Example
/// ```
/// use gedtree::genealogy::GraphBuilder;
/// use gedtree::parser::GedcomParser;
///
/// let tree = GedcomParser::new().parse_str(
///     "0 @I1@ INDI\n1 NAME John\n0 @I2@ INDI\n1 NAME Sam\n1 FAMC @F1@\n0 @F1@ FAM\n1 HUSB @I1@\n1 CHIL @I2@",
/// )?;
/// let graph = GraphBuilder::new().build(&tree);
///
/// let sam = graph.find_individual_by_attribute("NAME", "Sam").unwrap();
/// let father = graph.father(sam.index()).unwrap();
/// assert_eq!(graph.name(father.index()), Some("John"));
/// # Ok::<(), gedtree::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GenealogyGraph<'t> {
    pub(crate) tree: &'t RecordTree,
    pub(crate) individuals: Vec<Individual>,
    pub(crate) families: Vec<Family>,
    pub(crate) individual_keys: XrefMap,
    pub(crate) family_keys: XrefMap,
    pub(crate) unresolved: Vec<UnresolvedReference>,
}

// ============================================================================
// New, Rebuild (pub)
// ============================================================================
impl<'t> GenealogyGraph<'t> {
    /// Creates an empty graph over `tree`; populated by the [GraphBuilder].
    pub(crate) fn empty(tree: &'t RecordTree) -> Self {
        GenealogyGraph {
            tree,
            individuals: Vec::new(),
            families: Vec::new(),
            individual_keys: XrefMap::new(),
            family_keys: XrefMap::new(),
            unresolved: Vec::new(),
        }
    }

    /// Clears all collections and resolves the tree again.
    ///
    /// Linking appends back-edges, so running it twice on the same
    /// collections would duplicate children; this always starts from empty.
    pub fn rebuild(&mut self) {
        self.clear();
        GraphBuilder::new().populate(self);
    }

    fn clear(&mut self) {
        self.individuals.clear();
        self.families.clear();
        self.individual_keys.clear();
        self.family_keys.clear();
        self.unresolved.clear();
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl<'t> GenealogyGraph<'t> {
    /// Returns the tree this graph was resolved from.
    pub fn tree(&self) -> &'t RecordTree {
        self.tree
    }

    /// Returns all individuals in document order of their records.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns all families in document order of their records.
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Returns the number of individuals.
    pub fn num_individuals(&self) -> usize {
        self.individuals.len()
    }

    /// Returns the number of families.
    pub fn num_families(&self) -> usize {
        self.families.len()
    }

    /// Returns the individual at `index`, or `None` if out of bounds.
    pub fn individual(&self, index: IndividualIndex) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Returns the family at `index`, or `None` if out of bounds.
    pub fn family(&self, index: FamilyIndex) -> Option<&Family> {
        self.families.get(index)
    }

    /// Returns the individual with identifier `xref` (first one on duplicates).
    pub fn individual_by_xref(&self, xref: &str) -> Option<&Individual> {
        self.individual_keys
            .get(xref)
            .map(|index| &self.individuals[index])
    }

    /// Returns the family with identifier `xref` (first one on duplicates).
    pub fn family_by_xref(&self, xref: &str) -> Option<&Family> {
        self.family_keys
            .get(xref)
            .map(|index| &self.families[index])
    }

    /// Returns the pointers that could not be resolved, in resolution order.
    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    /// Returns a view on the `INDI` record of the individual at `index`.
    pub fn record(&self, index: IndividualIndex) -> Option<NodeRef<'t>> {
        let individual = self.individual(index)?;
        Some(self.tree.node(individual.node()))
    }

    /// Returns a view on the `FAM` record of the family at `index`.
    pub fn family_record(&self, index: FamilyIndex) -> Option<NodeRef<'t>> {
        let family = self.family(index)?;
        Some(self.tree.node(family.node()))
    }
}

// ============================================================================
// Relations (pub)
// ============================================================================
impl<'t> GenealogyGraph<'t> {
    /// Returns the father of the individual at `index`.
    pub fn father(&self, index: IndividualIndex) -> Option<&Individual> {
        self.individual(index)?
            .father()
            .map(|father| &self.individuals[father])
    }

    /// Returns the mother of the individual at `index`.
    pub fn mother(&self, index: IndividualIndex) -> Option<&Individual> {
        self.individual(index)?
            .mother()
            .map(|mother| &self.individuals[mother])
    }

    /// Iterates over the children of the individual at `index`.
    pub fn children(&self, index: IndividualIndex) -> impl Iterator<Item = &Individual> {
        self.individual(index)
            .map(|individual| individual.children())
            .unwrap_or_default()
            .iter()
            .map(|&child| &self.individuals[child])
    }

    /// Iterates over the families naming the individual at `index` as
    /// father or mother.
    pub fn spouse_families(&self, index: IndividualIndex) -> impl Iterator<Item = &Family> {
        self.families
            .iter()
            .filter(move |family| family.has_spouse(index))
    }
}

// ============================================================================
// Queries (pub)
// ============================================================================
impl<'t> GenealogyGraph<'t> {
    /// Returns the name (`NAME`) of the individual at `index`.
    pub fn name(&self, index: IndividualIndex) -> Option<&'t str> {
        let individual = self.individual(index)?;
        self.tree.get_attribute(individual.node(), NAME)
    }

    /// Returns the birth date (`BIRT` → `DATE`) of the individual at `index`.
    ///
    /// Dates are returned verbatim, GEDCOM does not prescribe one date format.
    pub fn birth_date(&self, index: IndividualIndex) -> Option<&'t str> {
        let individual = self.individual(index)?;
        self.tree
            .get_chained_data(individual.node(), &[BIRTH, DATE])
    }

    /// Returns the first individual (in document order) whose record has an
    /// immediate child `tag` with data exactly `value`.
    pub fn find_individual_by_attribute(&self, tag: &str, value: &str) -> Option<&Individual> {
        self.find_individuals_by_attribute(tag, value).next()
    }

    /// Iterates over all individuals whose record has an immediate child
    /// `tag` with data exactly `value`.
    pub fn find_individuals_by_attribute<'s, 'a>(
        &'s self,
        tag: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = &'s Individual> + use<'s, 'a, 't> {
        self.individuals.iter().filter(move |individual| {
            self.tree.get_chained_data(individual.node(), &[tag]) == Some(value)
        })
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl<'t> GenealogyGraph<'t> {
    /// Searches for an individual recorded as their own ancestor.
    ///
    /// Follows father and mother links depth-first.
    ///
    /// # Returns
    /// The individuals on the first cycle found, starting with the ancestor
    /// that closes it and ending with its descendant on the cycle, or `None`
    /// if the ancestry is acyclic.
    pub fn find_ancestry_cycle(&self) -> Option<Vec<IndividualIndex>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnPath,
            Finished,
        }

        let mut marks = vec![Mark::Unvisited; self.individuals.len()];

        for start in 0..self.individuals.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }

            // (individual, next parent slot: 0 = father, 1 = mother)
            let mut path: Vec<(IndividualIndex, u8)> = vec![(start, 0)];
            marks[start] = Mark::OnPath;

            while let Some(top) = path.last_mut() {
                let current = top.0;
                let parent = match top.1 {
                    0 => self.individuals[current].father(),
                    1 => self.individuals[current].mother(),
                    _ => {
                        marks[current] = Mark::Finished;
                        path.pop();
                        continue;
                    }
                };
                top.1 += 1;

                let Some(parent) = parent else { continue };
                match marks[parent] {
                    Mark::Unvisited => {
                        marks[parent] = Mark::OnPath;
                        path.push((parent, 0));
                    }
                    Mark::OnPath => {
                        let from = path.iter().position(|&(i, _)| i == parent)?;
                        return Some(path[from..].iter().map(|&(i, _)| i).collect());
                    }
                    Mark::Finished => {}
                }
            }
        }

        None
    }
}

impl Index<IndividualIndex> for GenealogyGraph<'_> {
    type Output = Individual;

    fn index(&self, index: IndividualIndex) -> &Self::Output {
        &self.individuals[index]
    }
}
