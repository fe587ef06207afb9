use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use anyhow;
use itertools::Itertools;
use ndarray::Array1;

use crate::chartab::chartab_symbols::{LinearSpaceSymbol, MullikenIrrepSymbol};
use crate::group::PointGroup;
use crate::representation::{ensure_same_group, ReducibleRepresentation, Representation};

/// A structure to manage an irreducible representation of a point group.
///
/// An irrep is a single row of the character table of its group. Two irreps are equal if and
/// only if they belong to equal groups and occupy the same row.
#[derive(Clone)]
pub struct IrreducibleRepresentation {
    /// The point group to which this irrep belongs.
    group: PointGroup,

    /// The row of this irrep in the character table of its group.
    index: usize,

    /// The characters of this irrep, one per class in canonical order.
    characters: Array1<i32>,
}

impl IrreducibleRepresentation {
    pub(crate) fn new(group: PointGroup, index: usize, characters: Array1<i32>) -> Self {
        Self {
            group,
            index,
            characters,
        }
    }

    /// The point group of this irrep.
    pub fn group(&self) -> &PointGroup {
        &self.group
    }

    /// The row of this irrep in the character table of its group.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The characters of this irrep.
    pub fn characters(&self) -> &Array1<i32> {
        &self.characters
    }

    /// The Mulliken symbol of this irrep.
    pub fn symbol(&self) -> &MullikenIrrepSymbol {
        &self.group.character_table().get_all_rows()[self.index]
    }

    /// The dimensionality of this irrep, *i.e.* its identity character.
    pub fn dimensionality(&self) -> usize {
        self.symbol().dimensionality()
    }

    /// Returns `true` if this irrep is more than one-dimensional.
    pub fn is_degenerate(&self) -> bool {
        self.dimensionality() > 1
    }

    /// Returns `true` if this irrep is the totally symmetric irrep of its group.
    pub fn is_totally_symmetric(&self) -> bool {
        self.index == 0
    }

    /// Forms the direct product of this irrep with `rhs`.
    ///
    /// The characters of the product are the element-wise products of the two character
    /// vectors. If they match a row of the character table exactly, the product is that irrep;
    /// otherwise, it is reduced into a direct sum of irreps.
    ///
    /// # Errors
    ///
    /// Errors if the two irreps belong to different point groups, or if the product
    /// characters cannot be reduced consistently.
    pub fn direct_product(&self, rhs: &Self) -> Result<Representation, anyhow::Error> {
        ensure_same_group(&self.group, &rhs.group)?;
        let characters = &self.characters * &rhs.characters;
        let chartab = self.group.character_table();
        if let Some(index) = chartab.find_row(&characters) {
            return Ok(Representation::Irreducible(self.group.irrep_at(index)));
        }
        let multiplicities = chartab.reduce_characters(&characters)?;
        Ok(Representation::Reducible(
            ReducibleRepresentation::from_multiplicities(self.group.clone(), multiplicities)?,
        ))
    }

    /// Forms the direct sum of this irrep with `rhs`.
    ///
    /// # Errors
    ///
    /// Errors if the two irreps belong to different point groups.
    pub fn direct_sum(&self, rhs: &Self) -> Result<ReducibleRepresentation, anyhow::Error> {
        Representation::from(self.clone()).direct_sum(&Representation::from(rhs.clone()))
    }

    /// Raises this irrep to the non-negative integer power `k`.
    ///
    /// # Errors
    ///
    /// Errors if `k` is negative, or if any intermediate product cannot be reduced
    /// consistently.
    pub fn power(&self, k: i32) -> Result<Representation, anyhow::Error> {
        Representation::from(self.clone()).power(k)
    }
}

impl PartialEq for IrreducibleRepresentation {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.index == other.index
    }
}

impl Eq for IrreducibleRepresentation {}

impl Hash for IrreducibleRepresentation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.index.hash(state);
    }
}

impl PartialOrd for IrreducibleRepresentation {
    /// Irreps of the same group are ordered by their rows in the character table. Irreps of
    /// different groups are not comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.group == other.group {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl fmt::Display for IrreducibleRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for IrreducibleRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One-tuples keep their trailing comma.
        let trailing = if self.characters.len() == 1 { "," } else { "" };
        write!(
            f,
            "IrreducibleRepresentation(pg={:?}, irrep=({}{trailing}), degenerate={})",
            self.group,
            self.characters.iter().join(", "),
            if self.is_degenerate() { "True" } else { "False" }
        )
    }
}
