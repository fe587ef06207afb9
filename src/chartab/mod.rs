//! Character tables of point groups and the reduction of representations over them.

use std::error::Error;
use std::fmt;

use derive_builder::Builder;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use ndarray::{Array1, Array2, ArrayView1};
use num::Integer;

use crate::chartab::chartab_symbols::{
    ClassSymbol, CollectionSymbol, LinearSpaceSymbol, MullikenIrrepSymbol,
};
use crate::io::format::{write_title, GridLayout};

pub mod chartab_symbols;
#[rustfmt::skip]
pub(crate) mod tabulated;

#[cfg(test)]
#[path = "chartab_tests.rs"]
mod chartab_tests;

// ======
// Errors
// ======

/// Error raised when a reduction yields a non-integral or negative multiplicity, or when the
/// reduced multiplicities fail to reproduce the characters being reduced.
///
/// This always signals a defect in the tabulated character data.
#[derive(Debug, Clone)]
pub struct ReductionConsistencyError(pub String);

impl fmt::Display for ReductionConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Reduction consistency error: {}.", self.0)
    }
}

impl Error for ReductionConsistencyError {}

// ==============
// CharacterTable
// ==============

/// A structure to manage the character table of a finite point group.
///
/// The rows of the table are labelled by Mulliken irrep symbols and the columns by conjugacy
/// class symbols. Both are kept in their canonical tabulation order, which is also the order
/// used whenever representations are rendered or iterated. The first row is always the
/// totally symmetric irrep and the first column is always the identity class.
#[derive(Builder, Clone, Debug)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct CharacterTable {
    /// The name of the point group to which this character table belongs.
    #[builder(setter(into))]
    name: String,

    /// The conjugacy class symbols labelling the columns of the table.
    #[builder(setter(custom))]
    classes: IndexSet<ClassSymbol>,

    /// The irrep symbols labelling the rows of the table.
    #[builder(setter(custom))]
    irreps: IndexSet<MullikenIrrepSymbol>,

    /// The characters, indexed by `[irrep, class]`.
    characters: Array2<i32>,
}

impl CharacterTableBuilder {
    pub fn classes(&mut self, classes: &[ClassSymbol]) -> &mut Self {
        self.classes = Some(classes.iter().cloned().collect());
        self
    }

    pub fn irreps(&mut self, irreps: &[MullikenIrrepSymbol]) -> &mut Self {
        self.irreps = Some(irreps.iter().cloned().collect());
        self
    }

    fn validate(&self) -> Result<(), String> {
        let classes = self
            .classes
            .as_ref()
            .ok_or_else(|| "No class symbols found.".to_string())?;
        let irreps = self
            .irreps
            .as_ref()
            .ok_or_else(|| "No irrep symbols found.".to_string())?;
        let characters = self
            .characters
            .as_ref()
            .ok_or_else(|| "No characters found.".to_string())?;

        if characters.dim() != (irreps.len(), classes.len()) {
            return Err(format!(
                "Character array of shape {:?} does not match {} distinct irreps and {} distinct classes.",
                characters.dim(),
                irreps.len(),
                classes.len()
            ));
        }
        if irreps.len() != classes.len() {
            return Err(format!(
                "A character table must be square, but {} irreps and {} classes are given.",
                irreps.len(),
                classes.len()
            ));
        }
        if !classes.first().map_or(false, ClassSymbol::is_identity) {
            return Err("The first class must be the identity class `E`.".to_string());
        }
        if characters.row(0).iter().any(|&chr| chr != 1) {
            return Err("The first irrep must be totally symmetric.".to_string());
        }
        if let Some((irrep, chr)) = irreps
            .iter()
            .zip(characters.column(0).iter())
            .find(|&(irrep, &chr)| usize::try_from(chr).ok() != Some(irrep.dimensionality()))
        {
            return Err(format!(
                "The identity character {chr} of `{irrep}` does not match its dimensionality {}.",
                irrep.dimensionality()
            ));
        }

        // Row orthogonality: Σ_c |c| χ_i(c) χ_j(c) = |G| δ_ij.
        let weights = class_weights(classes.iter()).map_err(|err| err.to_string())?;
        let order = weights.sum();
        for ((i, row_i), (j, row_j)) in characters
            .outer_iter()
            .enumerate()
            .tuple_combinations()
            .chain(characters.outer_iter().enumerate().map(|x| (x.clone(), x)))
        {
            let inprod = (&weights * &row_i.mapv(i64::from)).dot(&row_j.mapv(i64::from));
            let expected = if i == j { order } else { 0 };
            if inprod != expected {
                return Err(format!(
                    "Rows `{}` and `{}` violate the orthogonality relation: {inprod} != {expected}.",
                    irreps[i], irreps[j]
                ));
            }
        }
        Ok(())
    }
}

impl CharacterTable {
    /// Returns a builder to construct a new character table.
    pub fn builder() -> CharacterTableBuilder {
        CharacterTableBuilder::default()
    }

    /// The name of the point group of this character table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The order of the group, *i.e.* the total number of symmetry operations.
    pub fn order(&self) -> usize {
        self.classes.iter().map(CollectionSymbol::size).sum()
    }

    /// The number of conjugacy classes (and therefore of irreps).
    pub fn class_number(&self) -> usize {
        self.classes.len()
    }

    /// The class symbols in canonical column order.
    pub fn get_all_cols(&self) -> &IndexSet<ClassSymbol> {
        &self.classes
    }

    /// The irrep symbols in canonical row order.
    pub fn get_all_rows(&self) -> &IndexSet<MullikenIrrepSymbol> {
        &self.irreps
    }

    /// Returns the index of the row labelled by `irrep`, if any.
    pub fn get_row_index(&self, irrep: &MullikenIrrepSymbol) -> Option<usize> {
        self.irreps.get_index_of(irrep)
    }

    /// Returns the irrep symbol of the row at `index`, if any.
    pub fn get_row_symbol(&self, index: usize) -> Option<&MullikenIrrepSymbol> {
        self.irreps.get_index(index)
    }

    /// Returns the characters of the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get_row(&self, index: usize) -> ArrayView1<'_, i32> {
        self.characters.row(index)
    }

    /// Returns the character of the irrep at row `row` under the class at column `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get_character(&self, row: usize, col: usize) -> i32 {
        self.characters[(row, col)]
    }

    /// Returns the index of the row whose characters are exactly `characters`, if any.
    pub fn find_row(&self, characters: &Array1<i32>) -> Option<usize> {
        self.characters
            .outer_iter()
            .position(|row| row == characters.view())
    }

    /// Reduces a set of characters into a direct sum of the irreps of this table using the
    /// reduction formula
    ///
    /// ```math
    /// n_\Gamma = \frac{1}{\lvert G \rvert} \sum_{c} \lvert c \rvert \chi(c) \chi^\Gamma(c).
    /// ```
    ///
    /// # Arguments
    ///
    /// * `characters` - The characters to be reduced, one per class in canonical order.
    ///
    /// # Returns
    ///
    /// An ordered map from row indices to their non-zero multiplicities, in canonical row
    /// order.
    ///
    /// # Errors
    ///
    /// Errors if the number of characters does not match the number of classes, if any
    /// multiplicity is non-integral or negative, or if the multiplicities do not reproduce
    /// `characters`.
    pub fn reduce_characters(
        &self,
        characters: &Array1<i32>,
    ) -> Result<IndexMap<usize, usize>, ReductionConsistencyError> {
        log::debug!("Reducing characters {characters} in {}...", self.name);
        if characters.len() != self.class_number() {
            return Err(ReductionConsistencyError(format!(
                "{} characters given for {} classes in {}",
                characters.len(),
                self.class_number(),
                self.name
            )));
        }
        let weights = class_weights(self.classes.iter())?;
        let order = weights.sum();
        let weighted_chars = &weights * &characters.mapv(i64::from);

        let multiplicities = self
            .characters
            .outer_iter()
            .enumerate()
            .map(|(i, row)| {
                let (mult, rem) = weighted_chars.dot(&row.mapv(i64::from)).div_rem(&order);
                if rem != 0 || mult < 0 {
                    log::error!(
                        "Multiplicity of `{}` in {} is {}/{order}.",
                        self.irreps[i],
                        self.name,
                        mult * order + rem
                    );
                    Err(ReductionConsistencyError(format!(
                        "multiplicity of `{}` in {} is not a non-negative integer",
                        self.irreps[i], self.name
                    )))
                } else {
                    Ok((i, mult))
                }
            })
            .filter(|res| !matches!(res, Ok((_, 0))))
            .collect::<Result<Vec<_>, _>>()?;

        let reconstructed = multiplicities.iter().fold(
            Array1::<i64>::zeros(self.class_number()),
            |acc, &(i, mult)| acc + self.characters.row(i).mapv(|chr| i64::from(chr) * mult),
        );
        if reconstructed != characters.mapv(i64::from) {
            log::error!(
                "Characters {reconstructed} reconstructed from the reduction differ from {characters}."
            );
            return Err(ReductionConsistencyError(format!(
                "reduced multiplicities do not reproduce the characters in {}",
                self.name
            )));
        }

        let res = multiplicities
            .into_iter()
            .map(|(i, mult)| {
                usize::try_from(mult)
                    .map(|mult| (i, mult))
                    .map_err(|err| ReductionConsistencyError(err.to_string()))
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;
        log::debug!(
            "Reducing characters {characters} in {}... Done: {}.",
            self.name,
            res.iter()
                .map(|(&i, mult)| format!("{mult}{}", self.irreps[i]))
                .join(" ⊕ ")
        );
        Ok(res)
    }
}

impl fmt::Display for CharacterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = GridLayout {
            label_width: self
                .irreps
                .iter()
                .map(|irrep| irrep.to_string().chars().count())
                .max()
                .unwrap_or(0)
                .max(1),
            cell_width: self
                .classes
                .iter()
                .map(|cls| cls.to_string().chars().count())
                .max()
                .unwrap_or(0)
                .max(3),
            ncells: self.class_number(),
        };
        write_title(f, &format!("Character table of {}", self.name), layout.width())?;
        layout.write_row(f, "", &self.classes)?;
        layout.write_rule(f)?;
        for (irrep, row) in self.irreps.iter().zip(self.characters.outer_iter()) {
            layout.write_row(f, &irrep.to_string(), row)?;
        }
        Ok(())
    }
}

// =========
// Functions
// =========

/// Collects the sizes of the given classes as integer weights for character sums.
fn class_weights<'a>(
    classes: impl Iterator<Item = &'a ClassSymbol>,
) -> Result<Array1<i64>, ReductionConsistencyError> {
    classes
        .map(|cls| {
            i64::try_from(cls.size()).map_err(|err| {
                ReductionConsistencyError(format!("size of class `{cls}` is unusable: {err}"))
            })
        })
        .collect::<Result<Array1<_>, _>>()
}
