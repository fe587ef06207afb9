//! Irreducible and reducible representations of point groups and their algebra.
//!
//! Representations of the same point group can be multiplied (direct product), added (direct
//! sum) and raised to non-negative integer powers. Products whose characters coincide with a
//! row of the character table are irreducible; all other products are reduced into direct sums
//! of irreps using the reduction formula.

use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul};

use anyhow;
use counter::Counter;
use duplicate::{duplicate, duplicate_item};
use itertools::{Either, Itertools};
use ndarray::Array1;
use num_traits::Pow;

use crate::group::PointGroup;

mod irrep;
mod reducible;

pub use irrep::IrreducibleRepresentation;
pub use reducible::ReducibleRepresentation;


// ======
// Errors
// ======

/// Error raised when representations of two different point groups are combined.
#[derive(Debug, Clone)]
pub struct IncompatiblePointGroupError(pub String);

impl fmt::Display for IncompatiblePointGroupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Incompatible point-group error: {}.", self.0)
    }
}

impl Error for IncompatiblePointGroupError {}

/// Error raised when a representation is raised to a negative power.
#[derive(Debug, Clone)]
pub struct InvalidExponentError(pub String);

impl fmt::Display for InvalidExponentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid exponent error: {}.", self.0)
    }
}

impl Error for InvalidExponentError {}

/// Error raised when the multiplicities or characters of a representation grow beyond the
/// range of the integers that hold them.
#[derive(Debug, Clone)]
pub struct RepresentationOverflowError(pub String);

impl fmt::Display for RepresentationOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Representation overflow error: {}.", self.0)
    }
}

impl Error for RepresentationOverflowError {}

// ==============
// Representation
// ==============

/// Either an irreducible or a reducible representation of a point group.
///
/// Every algebraic operation is defined on this type, so values can be combined without first
/// checking which kind they hold.
#[derive(Clone, PartialEq, Eq)]
pub enum Representation {
    Irreducible(IrreducibleRepresentation),
    Reducible(ReducibleRepresentation),
}

impl Representation {
    /// The point group of this representation.
    pub fn group(&self) -> &PointGroup {
        match self {
            Self::Irreducible(irrep) => irrep.group(),
            Self::Reducible(rep) => rep.group(),
        }
    }

    /// Returns `true` if this representation is irreducible.
    pub fn is_irreducible(&self) -> bool {
        matches!(self, Self::Irreducible(_))
    }

    /// The characters of this representation, one per class in canonical order.
    pub fn characters(&self) -> Array1<i32> {
        match self {
            Self::Irreducible(irrep) => irrep.characters().clone(),
            Self::Reducible(rep) => rep.characters(),
        }
    }

    /// The dimensionality of this representation, *i.e.* its identity character.
    pub fn dimensionality(&self) -> usize {
        match self {
            Self::Irreducible(irrep) => irrep.dimensionality(),
            Self::Reducible(rep) => rep.dimensionality(),
        }
    }

    /// The number of irreps in this representation, counted with multiplicity.
    pub fn len(&self) -> usize {
        match self {
            Self::Irreducible(_) => 1,
            Self::Reducible(rep) => rep.len(),
        }
    }

    /// Returns `true` if this representation contains no irreps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the constituent irreps in canonical order, once per unit of multiplicity.
    pub fn iter(&self) -> impl Iterator<Item = IrreducibleRepresentation> + '_ {
        match self {
            Self::Irreducible(irrep) => Either::Left(std::iter::once(irrep.clone())),
            Self::Reducible(rep) => Either::Right(rep.iter()),
        }
    }

    /// The constituent row indices with their multiplicities, in canonical order.
    pub(crate) fn terms(&self) -> Vec<(usize, usize)> {
        match self {
            Self::Irreducible(irrep) => vec![(irrep.index(), 1)],
            Self::Reducible(rep) => rep.terms(),
        }
    }

    /// Forms the direct product of this representation with `rhs`.
    ///
    /// The product of two irreps is an irrep if its characters match a row of the character
    /// table, and is reduced otherwise. Products involving a reducible representation
    /// distribute over its constituents and are always reducible.
    ///
    /// # Errors
    ///
    /// Errors with [`IncompatiblePointGroupError`] if the two representations belong to
    /// different point groups, with
    /// [`ReductionConsistencyError`](crate::chartab::ReductionConsistencyError) if a product
    /// cannot be reduced consistently, and with [`RepresentationOverflowError`] if the
    /// characters of the product do not fit in an `i32`.
    pub fn direct_product(&self, rhs: &Self) -> Result<Self, anyhow::Error> {
        ensure_same_group(self.group(), rhs.group())?;
        if let (Self::Irreducible(lhs_irrep), Self::Irreducible(rhs_irrep)) = (self, rhs) {
            return lhs_irrep.direct_product(rhs_irrep);
        }

        let group = self.group();
        let mut multiplicities = Counter::<usize>::new();
        for ((i, mult_i), (j, mult_j)) in self.terms().into_iter().cartesian_product(rhs.terms()) {
            let product = group.irrep_at(i).direct_product(&group.irrep_at(j))?;
            for (k, mult_k) in product.terms() {
                let entry = multiplicities.entry(k).or_insert(0);
                let current = *entry;
                *entry = mult_i
                    .checked_mul(mult_j)
                    .and_then(|mult| mult.checked_mul(mult_k))
                    .and_then(|mult| current.checked_add(mult))
                    .ok_or_else(|| overflow_error(group))?;
            }
        }
        Ok(Self::Reducible(ReducibleRepresentation::from_counter(
            group.clone(),
            multiplicities,
        )?))
    }

    /// Forms the direct sum of this representation with `rhs`, merging multiplicities.
    ///
    /// # Errors
    ///
    /// Errors with [`IncompatiblePointGroupError`] if the two representations belong to
    /// different point groups, and with [`RepresentationOverflowError`] if the characters of
    /// the sum do not fit in an `i32`.
    pub fn direct_sum(&self, rhs: &Self) -> Result<ReducibleRepresentation, anyhow::Error> {
        ensure_same_group(self.group(), rhs.group())?;
        let sum = ReducibleRepresentation::from_multiplicities(
            self.group().clone(),
            self.terms().into_iter().chain(rhs.terms()),
        )?;
        Ok(sum)
    }

    /// Raises this representation to the non-negative integer power `k`.
    ///
    /// The zeroth power is the totally symmetric irrep and the first power is this
    /// representation itself. Higher powers are built by repeated squaring with
    /// [`Self::direct_product`], so only O(log k) products are formed.
    ///
    /// # Errors
    ///
    /// Errors with [`InvalidExponentError`] if `k` is negative, with
    /// [`RepresentationOverflowError`] if the characters of the power do not fit in an `i32`,
    /// or if any intermediate product cannot be reduced consistently.
    pub fn power(&self, k: i32) -> Result<Self, anyhow::Error> {
        if k < 0 {
            log::error!("Unable to raise {self} to the negative power {k}.");
            return Err(InvalidExponentError(format!(
                "exponent {k} is negative, but only non-negative exponents are allowed"
            ))
            .into());
        }
        let mut res = Self::Irreducible(self.group().totally_symmetric());
        let mut base = self.clone();
        let mut k = k.unsigned_abs();
        while k > 0 {
            if k & 1 == 1 {
                res = if res.is_totally_symmetric_irrep() {
                    base.clone()
                } else {
                    res.direct_product(&base)?
                };
            }
            k >>= 1;
            if k > 0 {
                base = base.direct_product(&base)?;
            }
        }
        Ok(res)
    }

    fn is_totally_symmetric_irrep(&self) -> bool {
        matches!(self, Self::Irreducible(irrep) if irrep.is_totally_symmetric())
    }
}

impl From<IrreducibleRepresentation> for Representation {
    fn from(irrep: IrreducibleRepresentation) -> Self {
        Self::Irreducible(irrep)
    }
}

impl From<ReducibleRepresentation> for Representation {
    fn from(rep: ReducibleRepresentation) -> Self {
        Self::Reducible(rep)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Irreducible(irrep) => write!(f, "{irrep}"),
            Self::Reducible(rep) => write!(f, "{rep}"),
        }
    }
}

impl fmt::Debug for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Irreducible(irrep) => write!(f, "{irrep:?}"),
            Self::Reducible(rep) => write!(f, "{rep:?}"),
        }
    }
}

// =========
// Operators
// =========

// -----------
// Mul and Add
// -----------

duplicate! {
    [
        lhs_ rhs_;
        [IrreducibleRepresentation] [IrreducibleRepresentation];
        [IrreducibleRepresentation] [ReducibleRepresentation];
        [IrreducibleRepresentation] [Representation];
        [ReducibleRepresentation] [IrreducibleRepresentation];
        [ReducibleRepresentation] [ReducibleRepresentation];
        [ReducibleRepresentation] [Representation];
        [Representation] [IrreducibleRepresentation];
        [Representation] [ReducibleRepresentation];
        [Representation] [Representation];
    ]
    impl Mul<&'_ rhs_> for &lhs_ {
        type Output = Representation;

        fn mul(self, rhs: &rhs_) -> Self::Output {
            Representation::from(self.clone())
                .direct_product(&Representation::from(rhs.clone()))
                .unwrap_or_else(|err| panic!("{err}"))
        }
    }

    impl Mul<&'_ rhs_> for lhs_ {
        type Output = Representation;

        fn mul(self, rhs: &rhs_) -> Self::Output {
            &self * rhs
        }
    }

    impl Mul<rhs_> for lhs_ {
        type Output = Representation;

        fn mul(self, rhs: rhs_) -> Self::Output {
            &self * &rhs
        }
    }

    impl Mul<rhs_> for &lhs_ {
        type Output = Representation;

        fn mul(self, rhs: rhs_) -> Self::Output {
            self * &rhs
        }
    }

    impl Add<&'_ rhs_> for &lhs_ {
        type Output = ReducibleRepresentation;

        fn add(self, rhs: &rhs_) -> Self::Output {
            Representation::from(self.clone())
                .direct_sum(&Representation::from(rhs.clone()))
                .unwrap_or_else(|err| panic!("{err}"))
        }
    }

    impl Add<&'_ rhs_> for lhs_ {
        type Output = ReducibleRepresentation;

        fn add(self, rhs: &rhs_) -> Self::Output {
            &self + rhs
        }
    }

    impl Add<rhs_> for lhs_ {
        type Output = ReducibleRepresentation;

        fn add(self, rhs: rhs_) -> Self::Output {
            &self + &rhs
        }
    }

    impl Add<rhs_> for &lhs_ {
        type Output = ReducibleRepresentation;

        fn add(self, rhs: rhs_) -> Self::Output {
            self + &rhs
        }
    }
}

// ---
// Pow
// ---

#[duplicate_item(
    rep_;
    [IrreducibleRepresentation];
    [ReducibleRepresentation];
    [Representation];
)]
impl Pow<i32> for &rep_ {
    type Output = Representation;

    fn pow(self, rhs: i32) -> Self::Output {
        Representation::from(self.clone())
            .power(rhs)
            .unwrap_or_else(|err| panic!("{err}"))
    }
}

#[duplicate_item(
    rep_;
    [IrreducibleRepresentation];
    [ReducibleRepresentation];
    [Representation];
)]
impl Pow<i32> for rep_ {
    type Output = Representation;

    fn pow(self, rhs: i32) -> Self::Output {
        (&self).pow(rhs)
    }
}

// =========
// Functions
// =========

/// Builds the error for a representation of `group` whose characters leave the `i32` range.
pub(crate) fn overflow_error(group: &PointGroup) -> RepresentationOverflowError {
    log::error!("Characters of a representation of {group} exceed {}.", i32::MAX);
    RepresentationOverflowError(format!(
        "characters of a representation of {group} exceed {}",
        i32::MAX
    ))
}

/// Checks that two representations to be combined belong to the same point group.
///
/// # Errors
///
/// Errors if `lhs` and `rhs` are different point groups. No lowering of symmetry is attempted.
pub(crate) fn ensure_same_group(
    lhs: &PointGroup,
    rhs: &PointGroup,
) -> Result<(), IncompatiblePointGroupError> {
    if lhs == rhs {
        Ok(())
    } else {
        log::error!("Representations of {lhs} and {rhs} cannot be combined.");
        Err(IncompatiblePointGroupError(format!(
            "representations of {lhs} and {rhs} cannot be combined"
        )))
    }
}
