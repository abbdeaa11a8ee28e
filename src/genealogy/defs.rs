//! GEDCOM tag constants and definitions.
//!
//! This module contains the tags the genealogy graph relies on, for
//! classifying depth-0 records and for resolving pointer fields.

/// Data of a depth-0 record marking it as an individual: `0 @I1@ INDI`
pub const INDIVIDUAL_RECORD: &str = "INDI";

/// Data of a depth-0 record marking it as a family: `0 @F1@ FAM`
pub const FAMILY_RECORD: &str = "FAM";

// Family record pointers
/// Spouse pointer for the father of a family
pub const HUSBAND: &str = "HUSB";

/// Spouse pointer for the mother of a family
pub const WIFE: &str = "WIFE";

/// Child pointer, one per child of a family
pub const CHILD: &str = "CHIL";

// Individual record pointers and attributes
/// Pointer from an individual to the family it is a child in
pub const CHILD_TO_FAMILY: &str = "FAMC";

/// Name of an individual
pub const NAME: &str = "NAME";

/// Birth event of an individual
pub const BIRTH: &str = "BIRT";

/// Date of an event
pub const DATE: &str = "DATE";

/// Pointer fields resolved by the [GraphBuilder](crate::genealogy::GraphBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTag {
    /// `HUSB` under a family record
    Husband,
    /// `WIFE` under a family record
    Wife,
    /// `CHIL` under a family record
    Child,
    /// `FAMC` under an individual record
    ChildToFamily,
}

impl PointerTag {
    /// Parse a tag (case-sensitive) into a pointer, `None` if it is no pointer
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            HUSBAND => Some(PointerTag::Husband),
            WIFE => Some(PointerTag::Wife),
            CHILD => Some(PointerTag::Child),
            CHILD_TO_FAMILY => Some(PointerTag::ChildToFamily),
            _ => None,
        }
    }

    /// Returns the GEDCOM tag of this pointer.
    pub fn tag(&self) -> &'static str {
        match self {
            PointerTag::Husband => HUSBAND,
            PointerTag::Wife => WIFE,
            PointerTag::Child => CHILD,
            PointerTag::ChildToFamily => CHILD_TO_FAMILY,
        }
    }
}

impl std::fmt::Display for PointerTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
