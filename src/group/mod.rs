//! Point groups identified by a family tag and an order parameter.

use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use anyhow;
use duplicate::duplicate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::chartab::chartab_symbols::MullikenIrrepSymbol;
use crate::chartab::CharacterTable;
use crate::representation::IrreducibleRepresentation;

pub(crate) mod registry;

#[cfg(test)]
#[path = "group_tests.rs"]
mod group_tests;

lazy_static! {
    static ref POINT_GROUP_NAME_RE: Regex =
        Regex::new(r"^([A-Z])(\d*)([a-z]?)$").expect("Regex pattern invalid.");
}

// ======
// Errors
// ======

/// Error raised when a point-group name does not parse to a known family, or when its order
/// parameter lies outside the family's domain.
#[derive(Debug, Clone)]
pub struct InvalidPointGroupNameError(pub String);

impl fmt::Display for InvalidPointGroupNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid point-group name error: {}.", self.0)
    }
}

impl Error for InvalidPointGroupNameError {}

/// Error raised when a point group is admissible but has no tabulated character table.
#[derive(Debug, Clone)]
pub struct UnknownPointGroupError(pub String);

impl fmt::Display for UnknownPointGroupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown point-group error: {}.", self.0)
    }
}

impl Error for UnknownPointGroupError {}

/// Error raised when an irrep label does not name an irrep of a point group.
#[derive(Debug, Clone)]
pub struct UnknownIrrepError(pub String);

impl fmt::Display for UnknownIrrepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown irrep error: {}.", self.0)
    }
}

impl Error for UnknownIrrepError {}

// ==========
// PointGroup
// ==========

/// A structure to manage a finite molecular point group.
///
/// A point group is identified by its family tag (*e.g.* `dnh`) and, for infinite families, an
/// order parameter $`n`$. Two point groups are equal if and only if both of these match,
/// regardless of how they were constructed. The character table is resolved once and shared.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PointGroup {
    /// The family tag of this group.
    family: String,

    /// The order parameter of this group, absent for fixed families.
    n: Option<u32>,

    /// Whether this group has been constructed through a named shorthand such as [`D2h`].
    shorthand: bool,

    /// The shared character table of this group.
    chartab: Arc<CharacterTable>,
}

impl PointGroup {
    /// Constructs a point group from its canonical, case-sensitive name, *e.g.* `"D2h"`.
    ///
    /// # Errors
    ///
    /// Errors with [`InvalidPointGroupNameError`] if the name does not parse to a known family
    /// with an admissible order parameter, and with [`UnknownPointGroupError`] if the group has
    /// no tabulated character table.
    pub fn new(name: &str) -> Result<Self, anyhow::Error> {
        let (family, n) = parse_point_group_name(name)?;
        Self::resolve(&family, n, false)
    }

    /// Constructs a point group from a family tag and an order parameter.
    ///
    /// # Arguments
    ///
    /// * `family` - The family tag, *e.g.* `"dnh"` or `"td"`.
    /// * `n` - The order parameter, which must be `None` for fixed families.
    ///
    /// # Errors
    ///
    /// Errors as in [`Self::new`].
    pub fn from_family(family: &str, n: Option<u32>) -> Result<Self, anyhow::Error> {
        Self::resolve(family, n, false)
    }

    /// Constructs a point group by name and looks up one of its irreps in a single step.
    ///
    /// # Errors
    ///
    /// Errors if the point group cannot be constructed or if the irrep label is unknown.
    pub fn irrep_of(name: &str, symbol: &str) -> Result<IrreducibleRepresentation, anyhow::Error> {
        Ok(Self::new(name)?.irrep(symbol)?)
    }

    fn resolve(family: &str, n: Option<u32>, shorthand: bool) -> Result<Self, anyhow::Error> {
        let chartab = registry::resolve_character_table(family, n)?;
        Ok(Self {
            family: family.to_string(),
            n,
            shorthand,
            chartab,
        })
    }

    /// The family tag of this group.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The order parameter of this group, if any.
    pub fn n(&self) -> Option<u32> {
        self.n
    }

    /// The canonical name of this group, *e.g.* `D2h`.
    pub fn name(&self) -> String {
        canonical_point_group_name(&self.family, self.n)
    }

    /// The order $`|G|`$ of this group.
    pub fn order(&self) -> usize {
        self.chartab.order()
    }

    /// The character table of this group.
    pub fn character_table(&self) -> &CharacterTable {
        &self.chartab
    }

    /// Looks up an irrep of this group by its Mulliken label.
    ///
    /// Labels are matched case-insensitively against the lowercase Mulliken symbols of the
    /// character table.
    ///
    /// # Errors
    ///
    /// Errors if no irrep of this group carries the label `symbol`.
    pub fn irrep(&self, symbol: &str) -> Result<IrreducibleRepresentation, UnknownIrrepError> {
        MullikenIrrepSymbol::new(&symbol.to_lowercase())
            .ok()
            .and_then(|irrep_sym| self.chartab.get_row_index(&irrep_sym))
            .map(|index| self.irrep_at(index))
            .ok_or_else(|| {
                UnknownIrrepError(format!("`{symbol}` is not an irrep of {}", self.name()))
            })
    }

    /// All irreps of this group in canonical order.
    pub fn irreps(&self) -> Vec<IrreducibleRepresentation> {
        (0..self.chartab.class_number())
            .map(|index| self.irrep_at(index))
            .collect()
    }

    /// The totally symmetric irrep of this group.
    pub fn totally_symmetric(&self) -> IrreducibleRepresentation {
        self.irrep_at(0)
    }

    /// The Mulliken symbol of `irrep`, or `None` if `irrep` belongs to a different group.
    pub fn symbol(&self, irrep: &IrreducibleRepresentation) -> Option<&MullikenIrrepSymbol> {
        if irrep.group() == self {
            self.chartab.get_row_symbol(irrep.index())
        } else {
            None
        }
    }

    /// Binds the row at `index` of the character table to this group.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn irrep_at(&self, index: usize) -> IrreducibleRepresentation {
        IrreducibleRepresentation::new(self.clone(), index, self.chartab.get_row(index).to_owned())
    }
}

impl PartialEq for PointGroup {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.n == other.n
    }
}

impl Eq for PointGroup {}

impl Hash for PointGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.n.hash(state);
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shorthand {
            write!(f, "{}()", self.name())
        } else if let Some(n) = self.n {
            write!(f, "PointGroup(pg=\"{}\", n={n})", self.family)
        } else {
            write!(f, "PointGroup(pg=\"{}\")", self.family)
        }
    }
}

impl TryFrom<String> for PointGroup {
    type Error = anyhow::Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl From<PointGroup> for String {
    fn from(group: PointGroup) -> Self {
        group.name()
    }
}

// ==========
// Shorthands
// ==========

duplicate! {
    [
        shorthand_ family_ n_ name_;
        [C1] ["cn"] [Some(1)] ["C1"];
        [Cs] ["cs"] [None] ["Cs"];
        [Ci] ["ci"] [None] ["Ci"];
        [C2] ["cn"] [Some(2)] ["C2"];
        [C2h] ["cnh"] [Some(2)] ["C2h"];
        [C2v] ["cnv"] [Some(2)] ["C2v"];
        [C3v] ["cnv"] [Some(3)] ["C3v"];
        [C4v] ["cnv"] [Some(4)] ["C4v"];
        [C6v] ["cnv"] [Some(6)] ["C6v"];
        [D2] ["dn"] [Some(2)] ["D2"];
        [D3] ["dn"] [Some(3)] ["D3"];
        [D4] ["dn"] [Some(4)] ["D4"];
        [D6] ["dn"] [Some(6)] ["D6"];
        [D2h] ["dnh"] [Some(2)] ["D2h"];
        [D3h] ["dnh"] [Some(3)] ["D3h"];
        [D4h] ["dnh"] [Some(4)] ["D4h"];
        [D6h] ["dnh"] [Some(6)] ["D6h"];
        [D2d] ["dnd"] [Some(2)] ["D2d"];
        [D3d] ["dnd"] [Some(3)] ["D3d"];
        [Td] ["td"] [None] ["Td"];
        [Oh] ["oh"] [None] ["Oh"];
    ]
    #[doc = concat!("Named shorthand for the point group ", name_, ".")]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct shorthand_;

    impl shorthand_ {
        #[doc = concat!("Constructs the point group ", name_, ".")]
        ///
        /// # Panics
        ///
        /// Panics if the character table of this group is invalid.
        #[allow(clippy::new_ret_no_self)]
        pub fn new() -> PointGroup {
            PointGroup::resolve(family_, n_, true)
                .unwrap_or_else(|err| panic!("Unable to construct {}: {err}", name_))
        }

        #[doc = concat!("Looks up an irrep of ", name_, " by its Mulliken label.")]
        ///
        /// # Errors
        ///
        /// Errors if no irrep of this group carries the label `symbol`.
        pub fn irrep(symbol: &str) -> Result<IrreducibleRepresentation, UnknownIrrepError> {
            Self::new().irrep(symbol)
        }
    }

    impl From<shorthand_> for PointGroup {
        fn from(_: shorthand_) -> Self {
            shorthand_::new()
        }
    }
}

// =========
// Functions
// =========

/// Parses a canonical point-group name into its family tag and order parameter.
///
/// Only the syntax and the family are checked here; the domain of the order parameter is
/// checked by the registry.
fn parse_point_group_name(name: &str) -> Result<(String, Option<u32>), anyhow::Error> {
    let invalid = || InvalidPointGroupNameError(format!("`{name}` is not a valid point-group name"));
    let caps = POINT_GROUP_NAME_RE.captures(name).ok_or_else(invalid)?;
    let letter = caps
        .get(1)
        .map(|m| m.as_str().to_lowercase())
        .ok_or_else(invalid)?;
    let digits = caps.get(2).map_or("", |m| m.as_str());
    let suffix = caps.get(3).map_or("", |m| m.as_str());
    let n = if digits.is_empty() {
        None
    } else {
        Some(digits.parse::<u32>().map_err(|err| {
            InvalidPointGroupNameError(format!(
                "order parameter `{digits}` of `{name}` is unusable: {err}"
            ))
        })?)
    };
    let family = format!("{letter}{}{suffix}", if n.is_some() { "n" } else { "" });

    if !registry::POINT_GROUP_FAMILIES.contains_key(family.as_str()) {
        return Err(invalid().into());
    }
    // Leading zeros are not canonical.
    if canonical_point_group_name(&family, n) != name {
        return Err(invalid().into());
    }
    Ok((family, n))
}

/// Renders the canonical name of the point group with family tag `family` and order
/// parameter `n`, *e.g.* `("dnh", Some(2))` gives `D2h`.
fn canonical_point_group_name(family: &str, n: Option<u32>) -> String {
    let mut chars = family.chars();
    let head = chars
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let tail = chars.as_str();
    match n {
        Some(n) => format!("{head}{}", tail.replacen('n', &n.to_string(), 1)),
        None => format!("{head}{tail}"),
    }
}
