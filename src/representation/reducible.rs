use std::fmt;

use anyhow;
use counter::Counter;
use itertools::Itertools;
use ndarray::Array1;

use crate::chartab::chartab_symbols::LinearSpaceSymbol;
use crate::group::PointGroup;
use crate::representation::{
    overflow_error, IrreducibleRepresentation, Representation, RepresentationOverflowError,
};

/// A structure to manage a reducible representation of a point group as a direct sum of
/// irreps with multiplicities.
///
/// Irreps with zero multiplicity are never stored. Iteration and rendering always follow the
/// canonical row order of the character table. The characters are summed once on construction,
/// and a representation whose characters do not fit in an `i32` is never constructed.
#[derive(Clone)]
pub struct ReducibleRepresentation {
    /// The point group to which this representation belongs.
    group: PointGroup,

    /// The multiplicities of the constituent irreps, keyed by their rows in the character
    /// table.
    multiplicities: Counter<usize>,

    /// The multiplicity-weighted sum of the characters of the constituents.
    characters: Array1<i32>,
}

impl ReducibleRepresentation {
    pub(crate) fn from_counter(
        group: PointGroup,
        mut multiplicities: Counter<usize>,
    ) -> Result<Self, RepresentationOverflowError> {
        multiplicities.retain(|_, mult| *mult > 0);
        let chartab = group.character_table();
        let mut characters = Array1::<i32>::zeros(chartab.class_number());
        for (&i, &mult) in multiplicities.iter() {
            // |χ(c)| never exceeds χ(E), so a partial sum overflows only if χ(E) does.
            let mult = i32::try_from(mult).map_err(|_| overflow_error(&group))?;
            for (acc, &chr) in characters.iter_mut().zip(chartab.get_row(i).iter()) {
                let current = *acc;
                *acc = chr
                    .checked_mul(mult)
                    .and_then(|term| current.checked_add(term))
                    .ok_or_else(|| overflow_error(&group))?;
            }
        }
        Ok(Self {
            group,
            multiplicities,
            characters,
        })
    }

    pub(crate) fn from_multiplicities(
        group: PointGroup,
        multiplicities: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, RepresentationOverflowError> {
        let mut counter = Counter::<usize>::new();
        for (i, mult) in multiplicities {
            let entry = counter.entry(i).or_insert(0);
            let current = *entry;
            *entry = current
                .checked_add(mult)
                .ok_or_else(|| overflow_error(&group))?;
        }
        Self::from_counter(group, counter)
    }

    /// Constructs a reducible representation as the direct sum of `irreps`.
    ///
    /// # Errors
    ///
    /// Errors if `irreps` is empty or if the irreps do not all belong to the same point group.
    pub fn from_irreps(irreps: &[IrreducibleRepresentation]) -> Result<Self, anyhow::Error> {
        let (first, rest) = irreps
            .split_first()
            .ok_or_else(|| anyhow::format_err!("No irreps given to form a direct sum."))?;
        let rep = rest
            .iter()
            .try_fold(Representation::from(first.clone()), |acc, irrep| {
                acc.direct_sum(&Representation::from(irrep.clone()))
                    .map(Representation::from)
            })?;
        match rep {
            Representation::Reducible(rep) => Ok(rep),
            Representation::Irreducible(irrep) => Ok(Self::from_multiplicities(
                irrep.group().clone(),
                [(irrep.index(), 1)],
            )?),
        }
    }

    /// The point group of this representation.
    pub fn group(&self) -> &PointGroup {
        &self.group
    }

    /// The constituent row indices with their multiplicities, in canonical order.
    pub(crate) fn terms(&self) -> Vec<(usize, usize)> {
        self.multiplicities
            .iter()
            .map(|(&i, &mult)| (i, mult))
            .sorted()
            .collect()
    }

    /// The multiplicity of `irrep` in this representation.
    pub fn multiplicity(&self, irrep: &IrreducibleRepresentation) -> usize {
        if irrep.group() == &self.group {
            self.multiplicities.get(&irrep.index()).copied().unwrap_or(0)
        } else {
            0
        }
    }

    /// The distinct constituent irreps with their multiplicities, in canonical order.
    pub fn multiplicities(&self) -> Vec<(IrreducibleRepresentation, usize)> {
        self.terms()
            .into_iter()
            .map(|(i, mult)| (self.group.irrep_at(i), mult))
            .collect()
    }

    /// Returns `true` if `irrep` occurs in this representation.
    pub fn contains(&self, irrep: &IrreducibleRepresentation) -> bool {
        self.multiplicity(irrep) > 0
    }

    /// The number of irreps in this representation, counted with multiplicity.
    pub fn len(&self) -> usize {
        self.multiplicities.values().sum()
    }

    /// Returns `true` if this representation contains no irreps.
    pub fn is_empty(&self) -> bool {
        self.multiplicities.is_empty()
    }

    /// Iterates over the constituent irreps in canonical order, once per unit of multiplicity.
    ///
    /// Each call starts a fresh iteration.
    pub fn iter(&self) -> impl Iterator<Item = IrreducibleRepresentation> + '_ {
        self.terms()
            .into_iter()
            .flat_map(move |(i, mult)| std::iter::repeat(self.group.irrep_at(i)).take(mult))
    }

    /// The characters of this representation, *i.e.* the multiplicity-weighted sum of the
    /// characters of its constituents.
    pub fn characters(&self) -> Array1<i32> {
        self.characters.clone()
    }

    /// The dimensionality of this representation.
    pub fn dimensionality(&self) -> usize {
        let chartab = self.group.character_table();
        self.terms()
            .into_iter()
            .map(|(i, mult)| {
                mult * chartab
                    .get_row_symbol(i)
                    .map_or(0, LinearSpaceSymbol::dimensionality)
            })
            .sum()
    }

    /// Forms the direct product of this representation with `rhs`, distributing over the
    /// constituents of both.
    ///
    /// # Errors
    ///
    /// Errors as in [`Representation::direct_product`].
    pub fn direct_product(&self, rhs: &Representation) -> Result<Representation, anyhow::Error> {
        Representation::from(self.clone()).direct_product(rhs)
    }

    /// Forms the direct sum of this representation with `rhs`, merging multiplicities.
    ///
    /// # Errors
    ///
    /// Errors as in [`Representation::direct_sum`].
    pub fn direct_sum(
        &self,
        rhs: &Representation,
    ) -> Result<ReducibleRepresentation, anyhow::Error> {
        Representation::from(self.clone()).direct_sum(rhs)
    }

    /// Raises this representation to the non-negative integer power `k`.
    ///
    /// # Errors
    ///
    /// Errors as in [`Representation::power`].
    pub fn power(&self, k: i32) -> Result<Representation, anyhow::Error> {
        Representation::from(self.clone()).power(k)
    }
}

impl PartialEq for ReducibleRepresentation {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.terms() == other.terms()
    }
}

impl Eq for ReducibleRepresentation {}

impl fmt::Display for ReducibleRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl fmt::Debug for ReducibleRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReducibleRepresentation(pg={:?}, irreps={{{}}})",
            self.group,
            self.multiplicities()
                .iter()
                .map(|(irrep, mult)| format!("{irrep}: {mult}"))
                .join(", ")
        )
    }
}
