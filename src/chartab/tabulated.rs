//! Compiled-in character data for the supported point groups.
//!
//! Every table lists the identity class first and the totally symmetric irrep first. Column
//! conventions follow the usual Cotton-style layout; all characters are integers.

use crate::chartab::chartab_symbols::{ClassSymbol, MullikenIrrepSymbol};
use crate::chartab::CharacterTable;

/// Static character data for one point group.
pub(crate) struct TabulatedCharacters {
    /// The canonical name of the point group.
    pub(crate) name: &'static str,

    /// The class symbols in column order.
    pub(crate) classes: &'static [&'static str],

    /// The irrep symbols in row order.
    pub(crate) irreps: &'static [&'static str],

    /// The characters, one slice per irrep.
    pub(crate) characters: &'static [&'static [i32]],
}

impl TabulatedCharacters {
    /// Builds a validated character table from this data.
    ///
    /// # Errors
    ///
    /// Errors if any symbol fails to parse or if the data violates any character-table
    /// invariant.
    pub(crate) fn to_character_table(&self) -> Result<CharacterTable, anyhow::Error> {
        let classes = self
            .classes
            .iter()
            .map(|cls| ClassSymbol::new(cls))
            .collect::<Result<Vec<_>, _>>()?;
        let irreps = self
            .irreps
            .iter()
            .map(|irrep| MullikenIrrepSymbol::new(irrep))
            .collect::<Result<Vec<_>, _>>()?;
        let ncols = self.characters.first().map_or(0, |row| row.len());
        let characters = ndarray::Array2::from_shape_vec(
            (self.characters.len(), ncols),
            self.characters.concat(),
        )?;
        Ok(CharacterTable::builder()
            .name(self.name)
            .classes(&classes)
            .irreps(&irreps)
            .characters(characters)
            .build()?)
    }
}

// ==============
// Cyclic and low
// ==============

pub(crate) static C1: TabulatedCharacters = TabulatedCharacters {
    name: "C1",
    classes: &["E"],
    irreps: &["a"],
    characters: &[&[1]],
};

pub(crate) static CS: TabulatedCharacters = TabulatedCharacters {
    name: "Cs",
    classes: &["E", "σh"],
    irreps: &["a'", "a''"],
    characters: &[
        &[1, 1],
        &[1, -1],
    ],
};

pub(crate) static CI: TabulatedCharacters = TabulatedCharacters {
    name: "Ci",
    classes: &["E", "i"],
    irreps: &["ag", "au"],
    characters: &[
        &[1, 1],
        &[1, -1],
    ],
};

pub(crate) static C2: TabulatedCharacters = TabulatedCharacters {
    name: "C2",
    classes: &["E", "C2"],
    irreps: &["a", "b"],
    characters: &[
        &[1, 1],
        &[1, -1],
    ],
};

pub(crate) static C2H: TabulatedCharacters = TabulatedCharacters {
    name: "C2h",
    classes: &["E", "C2", "i", "σh"],
    irreps: &["ag", "bg", "au", "bu"],
    characters: &[
        &[1,  1,  1,  1],
        &[1, -1,  1, -1],
        &[1,  1, -1, -1],
        &[1, -1, -1,  1],
    ],
};

// ===
// Cnv
// ===

pub(crate) static C2V: TabulatedCharacters = TabulatedCharacters {
    name: "C2v",
    classes: &["E", "C2", "σv(xz)", "σv'(yz)"],
    irreps: &["a1", "a2", "b1", "b2"],
    characters: &[
        &[1,  1,  1,  1],
        &[1,  1, -1, -1],
        &[1, -1,  1, -1],
        &[1, -1, -1,  1],
    ],
};

pub(crate) static C3V: TabulatedCharacters = TabulatedCharacters {
    name: "C3v",
    classes: &["E", "2C3", "3σv"],
    irreps: &["a1", "a2", "e"],
    characters: &[
        &[1,  1,  1],
        &[1,  1, -1],
        &[2, -1,  0],
    ],
};

pub(crate) static C4V: TabulatedCharacters = TabulatedCharacters {
    name: "C4v",
    classes: &["E", "2C4", "C2", "2σv", "2σd"],
    irreps: &["a1", "a2", "b1", "b2", "e"],
    characters: &[
        &[1,  1,  1,  1,  1],
        &[1,  1,  1, -1, -1],
        &[1, -1,  1,  1, -1],
        &[1, -1,  1, -1,  1],
        &[2,  0, -2,  0,  0],
    ],
};

pub(crate) static C6V: TabulatedCharacters = TabulatedCharacters {
    name: "C6v",
    classes: &["E", "2C6", "2C3", "C2", "3σv", "3σd"],
    irreps: &["a1", "a2", "b1", "b2", "e1", "e2"],
    characters: &[
        &[1,  1,  1,  1,  1,  1],
        &[1,  1,  1,  1, -1, -1],
        &[1, -1,  1, -1,  1, -1],
        &[1, -1,  1, -1, -1,  1],
        &[2,  1, -1, -2,  0,  0],
        &[2, -1, -1,  2,  0,  0],
    ],
};

// ==
// Dn
// ==

pub(crate) static D2: TabulatedCharacters = TabulatedCharacters {
    name: "D2",
    classes: &["E", "C2(z)", "C2(y)", "C2(x)"],
    irreps: &["a", "b1", "b2", "b3"],
    characters: &[
        &[1,  1,  1,  1],
        &[1,  1, -1, -1],
        &[1, -1,  1, -1],
        &[1, -1, -1,  1],
    ],
};

pub(crate) static D3: TabulatedCharacters = TabulatedCharacters {
    name: "D3",
    classes: &["E", "2C3", "3C2"],
    irreps: &["a1", "a2", "e"],
    characters: &[
        &[1,  1,  1],
        &[1,  1, -1],
        &[2, -1,  0],
    ],
};

pub(crate) static D4: TabulatedCharacters = TabulatedCharacters {
    name: "D4",
    classes: &["E", "2C4", "C2", "2C2'", "2C2''"],
    irreps: &["a1", "a2", "b1", "b2", "e"],
    characters: &[
        &[1,  1,  1,  1,  1],
        &[1,  1,  1, -1, -1],
        &[1, -1,  1,  1, -1],
        &[1, -1,  1, -1,  1],
        &[2,  0, -2,  0,  0],
    ],
};

pub(crate) static D6: TabulatedCharacters = TabulatedCharacters {
    name: "D6",
    classes: &["E", "2C6", "2C3", "C2", "3C2'", "3C2''"],
    irreps: &["a1", "a2", "b1", "b2", "e1", "e2"],
    characters: &[
        &[1,  1,  1,  1,  1,  1],
        &[1,  1,  1,  1, -1, -1],
        &[1, -1,  1, -1,  1, -1],
        &[1, -1,  1, -1, -1,  1],
        &[2,  1, -1, -2,  0,  0],
        &[2, -1, -1,  2,  0,  0],
    ],
};

// ===
// Dnh
// ===

pub(crate) static D2H: TabulatedCharacters = TabulatedCharacters {
    name: "D2h",
    classes: &["E", "C2(z)", "C2(y)", "C2(x)", "i", "σ(xy)", "σ(xz)", "σ(yz)"],
    irreps: &["ag", "b1g", "b2g", "b3g", "au", "b1u", "b2u", "b3u"],
    characters: &[
        &[1,  1,  1,  1,  1,  1,  1,  1],
        &[1,  1, -1, -1,  1,  1, -1, -1],
        &[1, -1, -1,  1,  1, -1,  1, -1],
        &[1, -1,  1, -1,  1, -1, -1,  1],
        &[1,  1,  1,  1, -1, -1, -1, -1],
        &[1,  1, -1, -1, -1, -1,  1,  1],
        &[1, -1, -1,  1, -1,  1, -1,  1],
        &[1, -1,  1, -1, -1,  1,  1, -1],
    ],
};

pub(crate) static D3H: TabulatedCharacters = TabulatedCharacters {
    name: "D3h",
    classes: &["E", "2C3", "3C2", "σh", "2S3", "3σv"],
    irreps: &["a1'", "a2'", "e'", "a1''", "a2''", "e''"],
    characters: &[
        &[1,  1,  1,  1,  1,  1],
        &[1,  1, -1,  1,  1, -1],
        &[2, -1,  0,  2, -1,  0],
        &[1,  1,  1, -1, -1, -1],
        &[1,  1, -1, -1, -1,  1],
        &[2, -1,  0, -2,  1,  0],
    ],
};

pub(crate) static D4H: TabulatedCharacters = TabulatedCharacters {
    name: "D4h",
    classes: &["E", "2C4", "C2", "2C2'", "2C2''", "i", "2S4", "σh", "2σv", "2σd"],
    irreps: &["a1g", "a2g", "b1g", "b2g", "eg", "a1u", "a2u", "b1u", "b2u", "eu"],
    characters: &[
        &[1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
        &[1,  1,  1, -1, -1,  1,  1,  1, -1, -1],
        &[1, -1,  1,  1, -1,  1, -1,  1,  1, -1],
        &[1, -1,  1, -1,  1,  1, -1,  1, -1,  1],
        &[2,  0, -2,  0,  0,  2,  0, -2,  0,  0],
        &[1,  1,  1,  1,  1, -1, -1, -1, -1, -1],
        &[1,  1,  1, -1, -1, -1, -1, -1,  1,  1],
        &[1, -1,  1,  1, -1, -1,  1, -1, -1,  1],
        &[1, -1,  1, -1,  1, -1,  1, -1,  1, -1],
        &[2,  0, -2,  0,  0, -2,  0,  2,  0,  0],
    ],
};

pub(crate) static D6H: TabulatedCharacters = TabulatedCharacters {
    name: "D6h",
    classes: &[
        "E", "2C6", "2C3", "C2", "3C2'", "3C2''", "i", "2S6", "2S3", "σh", "3σv", "3σd",
    ],
    irreps: &[
        "a1g", "a2g", "b1g", "b2g", "e1g", "e2g", "a1u", "a2u", "b1u", "b2u", "e1u", "e2u",
    ],
    characters: &[
        &[1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
        &[1,  1,  1,  1, -1, -1,  1,  1,  1,  1, -1, -1],
        &[1, -1,  1, -1,  1, -1,  1,  1, -1, -1, -1,  1],
        &[1, -1,  1, -1, -1,  1,  1,  1, -1, -1,  1, -1],
        &[2,  1, -1, -2,  0,  0,  2, -1,  1, -2,  0,  0],
        &[2, -1, -1,  2,  0,  0,  2, -1, -1,  2,  0,  0],
        &[1,  1,  1,  1,  1,  1, -1, -1, -1, -1, -1, -1],
        &[1,  1,  1,  1, -1, -1, -1, -1, -1, -1,  1,  1],
        &[1, -1,  1, -1,  1, -1, -1, -1,  1,  1,  1, -1],
        &[1, -1,  1, -1, -1,  1, -1, -1,  1,  1, -1,  1],
        &[2,  1, -1, -2,  0,  0, -2,  1, -1,  2,  0,  0],
        &[2, -1, -1,  2,  0,  0, -2,  1,  1, -2,  0,  0],
    ],
};

// ===
// Dnd
// ===

pub(crate) static D2D: TabulatedCharacters = TabulatedCharacters {
    name: "D2d",
    classes: &["E", "2S4", "C2", "2C2'", "2σd"],
    irreps: &["a1", "a2", "b1", "b2", "e"],
    characters: &[
        &[1,  1,  1,  1,  1],
        &[1,  1,  1, -1, -1],
        &[1, -1,  1,  1, -1],
        &[1, -1,  1, -1,  1],
        &[2,  0, -2,  0,  0],
    ],
};

pub(crate) static D3D: TabulatedCharacters = TabulatedCharacters {
    name: "D3d",
    classes: &["E", "2C3", "3C2", "i", "2S6", "3σd"],
    irreps: &["a1g", "a2g", "eg", "a1u", "a2u", "eu"],
    characters: &[
        &[1,  1,  1,  1,  1,  1],
        &[1,  1, -1,  1,  1, -1],
        &[2, -1,  0,  2, -1,  0],
        &[1,  1,  1, -1, -1, -1],
        &[1,  1, -1, -1, -1,  1],
        &[2, -1,  0, -2,  1,  0],
    ],
};

// =====
// Cubic
// =====

pub(crate) static TD: TabulatedCharacters = TabulatedCharacters {
    name: "Td",
    classes: &["E", "8C3", "3C2", "6S4", "6σd"],
    irreps: &["a1", "a2", "e", "t1", "t2"],
    characters: &[
        &[1,  1,  1,  1,  1],
        &[1,  1,  1, -1, -1],
        &[2, -1,  2,  0,  0],
        &[3,  0, -1,  1, -1],
        &[3,  0, -1, -1,  1],
    ],
};

pub(crate) static OH: TabulatedCharacters = TabulatedCharacters {
    name: "Oh",
    classes: &["E", "8C3", "6C2", "6C4", "3C2'", "i", "6S4", "8S6", "3σh", "6σd"],
    irreps: &["a1g", "a2g", "eg", "t1g", "t2g", "a1u", "a2u", "eu", "t1u", "t2u"],
    characters: &[
        &[1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
        &[1,  1, -1, -1,  1,  1, -1,  1,  1, -1],
        &[2, -1,  0,  0,  2,  2,  0, -1,  2,  0],
        &[3,  0, -1,  1, -1,  3,  1,  0, -1, -1],
        &[3,  0,  1, -1, -1,  3, -1,  0, -1,  1],
        &[1,  1,  1,  1,  1, -1, -1, -1, -1, -1],
        &[1,  1, -1, -1,  1, -1,  1, -1, -1,  1],
        &[2, -1,  0,  0,  2, -2,  0,  1, -2,  0],
        &[3,  0, -1,  1, -1, -3, -1,  0,  1,  1],
        &[3,  0,  1, -1, -1, -3,  1,  0,  1, -1],
    ],
};

/// All tabulated character data.
#[cfg(test)]
pub(crate) static ALL_TABULATED: &[&TabulatedCharacters] = &[
    &C1, &CS, &CI, &C2, &C2H, &C2V, &C3V, &C4V, &C6V, &D2, &D3, &D4, &D6, &D2H, &D3H, &D4H,
    &D6H, &D2D, &D3D, &TD, &OH,
];
