//! Cross-reference identifier lookup.
//!
//! - `XrefMap`: Maps identifiers such as `@I1@` to arena indices.

use std::collections::HashMap;
use std::fmt;

// =#========================================================================#=
// XREF MAP
// =#========================================================================#=
/// Maps cross-reference identifiers (strings) to indices into a collection
/// of [individuals](crate::genealogy::Individual) or
/// [families](crate::genealogy::Family).
///
/// The first registration of an identifier wins; later duplicates are
/// rejected so that a key always designates the earliest record in the
/// document.
///
/// # Example
/// ```
/// use gedtree::genealogy::xref_map::XrefMap;
///
/// let mut map = XrefMap::with_capacity(2);
/// assert!(map.insert_first("@I1@", 0));
/// assert!(map.insert_first("@I2@", 1));
/// assert!(!map.insert_first("@I1@", 2)); // duplicate, keeps index 0
///
/// assert_eq!(map.get("@I1@"), Some(0));
/// assert_eq!(map.get("@I3@"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct XrefMap {
    map: HashMap<String, usize>,
}

impl XrefMap {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new XrefMap with pre-allocated capacity.
    pub fn with_capacity(num_xrefs: usize) -> Self {
        XrefMap {
            map: HashMap::with_capacity(num_xrefs),
        }
    }

    /// Registers `xref` for `index` unless it is already present.
    ///
    /// # Returns
    /// `true` if inserted, `false` if `xref` was already registered
    pub fn insert_first(&mut self, xref: &str, index: usize) -> bool {
        if self.map.contains_key(xref) {
            return false;
        }
        self.map.insert(xref.to_string(), index);
        true
    }

    /// Retrieves the index registered for `xref`.
    pub fn get(&self, xref: &str) -> Option<usize> {
        self.map.get(xref).copied()
    }

    /// Checks if `xref` is registered.
    pub fn contains(&self, xref: &str) -> bool {
        self.map.contains_key(xref)
    }

    /// Returns the number of registered identifiers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no identifier is registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes all identifiers.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl fmt::Display for XrefMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by_key(|(_, index)| **index);
        writeln!(f, "XrefMap ({} identifiers):", entries.len())?;
        for (xref, index) in entries {
            writeln!(f, "  [{}] {}", index, xref)?;
        }
        Ok(())
    }
}
