use std::error::Error;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use derive_builder::Builder;
use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

#[cfg(test)]
#[path = "chartab_symbols_tests.rs"]
mod chartab_symbols_tests;

// =========
// Constants
// =========

static MULLIKEN_IRREP_DEGENERACIES: phf::Map<&'static str, usize> = phf_map! {
    "a" => 1usize,
    "b" => 1usize,
    "e" => 2usize,
    "t" => 3usize,
};

lazy_static! {
    static ref MULLIKEN_IRREP_RE: Regex =
        Regex::new(r"^([a-z])(\d*[gu]?)('{0,2})$").expect("Regex pattern invalid.");
    static ref CLASS_RE: Regex = Regex::new(r"^(\d*)(\D.*)$").expect("Regex pattern invalid.");
}

// =================
// Trait definitions
// =================

/// A trait for general mathematical symbols.
pub trait MathematicalSymbol: Clone + Hash + Eq + fmt::Display {
    /// The main part of the symbol.
    fn main(&self) -> String;

    /// The post-superscript part of the symbol.
    fn postsuper(&self) -> String;

    /// The post-subscript part of the symbol.
    fn postsub(&self) -> String;

    /// The multiplicity of the symbol.
    fn multiplicity(&self) -> Option<usize>;
}

/// A trait for symbols describing linear spaces.
pub trait LinearSpaceSymbol: MathematicalSymbol + FromStr {
    /// The dimensionality of the linear space.
    fn dimensionality(&self) -> usize;
}

/// A trait for symbols describing collections of objects.
pub trait CollectionSymbol: MathematicalSymbol {
    /// The size of the collection.
    fn size(&self) -> usize;
}

// =======
// Structs
// =======

// -------------------
// MullikenIrrepSymbol
// -------------------

/// A structure to handle Mulliken symbols for irreducible representations.
///
/// Symbols are written in lowercase, *e.g.* `a1g`, `b3u`, `e'`, `t2`. The leading letter
/// determines the dimensionality of the irreducible representation.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MullikenIrrepSymbol {
    /// The main letter of the symbol.
    main: String,

    /// The numeric and parity subscript of the symbol, *e.g.* `1g`.
    #[builder(default = "String::new()")]
    postsub: String,

    /// The primes of the symbol, *e.g.* `''`.
    #[builder(default = "String::new()")]
    postsuper: String,

    /// The dimensionality of the irreducible representation labelled by this symbol.
    dim: usize,
}

impl MullikenIrrepSymbol {
    fn builder() -> MullikenIrrepSymbolBuilder {
        MullikenIrrepSymbolBuilder::default()
    }

    /// Parses a string representing a Mulliken irrep symbol.
    ///
    /// Some permissible symbols:
    ///
    /// ```text
    /// "a"
    /// "b1g"
    /// "e''"
    /// "t2u"
    /// ```
    ///
    /// # Errors
    ///
    /// Errors when the string cannot be parsed or when the main letter carries no known
    /// dimensionality.
    pub fn new(symstr: &str) -> Result<Self, GenericSymbolParsingError> {
        Self::from_str(symstr)
    }

    /// Returns `true` if the symbol carries the gerade subscript.
    pub fn is_gerade(&self) -> bool {
        self.postsub.ends_with('g')
    }

    /// Returns `true` if the symbol carries the ungerade subscript.
    pub fn is_ungerade(&self) -> bool {
        self.postsub.ends_with('u')
    }
}

impl MathematicalSymbol for MullikenIrrepSymbol {
    fn main(&self) -> String {
        self.main.clone()
    }

    fn postsuper(&self) -> String {
        self.postsuper.clone()
    }

    fn postsub(&self) -> String {
        self.postsub.clone()
    }

    fn multiplicity(&self) -> Option<usize> {
        None
    }
}

impl LinearSpaceSymbol for MullikenIrrepSymbol {
    fn dimensionality(&self) -> usize {
        self.dim
    }
}

impl FromStr for MullikenIrrepSymbol {
    type Err = GenericSymbolParsingError;

    fn from_str(symstr: &str) -> Result<Self, Self::Err> {
        let cap = MULLIKEN_IRREP_RE
            .captures(symstr)
            .ok_or_else(|| GenericSymbolParsingError(format!("`{symstr}` is not parsable")))?;
        let main = cap.get(1).map_or("", |m| m.as_str());
        let dim = *MULLIKEN_IRREP_DEGENERACIES.get(main).ok_or_else(|| {
            GenericSymbolParsingError(format!(
                "`{main}` in `{symstr}` is not a recognised Mulliken letter"
            ))
        })?;
        Self::builder()
            .main(main.to_string())
            .postsub(cap.get(2).map_or("", |m| m.as_str()).to_string())
            .postsuper(cap.get(3).map_or("", |m| m.as_str()).to_string())
            .dim(dim)
            .build()
            .map_err(|err| GenericSymbolParsingError(err.to_string()))
    }
}

impl fmt::Display for MullikenIrrepSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.main, self.postsub, self.postsuper)
    }
}

// -----------
// ClassSymbol
// -----------

/// A structure to handle symbols of conjugacy classes of symmetry operations.
///
/// Class symbols are written in the usual character-table notation where the number of
/// operations in the class prefixes the operation symbol, *e.g.* `2C6`, `3σv`, `E`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassSymbol {
    /// The symbol of a representative operation in the class.
    main: String,

    /// The number of operations in the class.
    size: usize,
}

impl ClassSymbol {
    /// Parses a class symbol from its character-table notation.
    ///
    /// # Errors
    ///
    /// Errors when the string cannot be parsed or when the class size is zero.
    pub fn new(symstr: &str) -> Result<Self, GenericSymbolParsingError> {
        Self::from_str(symstr)
    }

    /// Returns `true` if this class contains only the identity operation.
    pub fn is_identity(&self) -> bool {
        self.main == "E" && self.size == 1
    }
}

impl MathematicalSymbol for ClassSymbol {
    fn main(&self) -> String {
        self.main.clone()
    }

    fn postsuper(&self) -> String {
        String::new()
    }

    fn postsub(&self) -> String {
        String::new()
    }

    fn multiplicity(&self) -> Option<usize> {
        Some(self.size)
    }
}

impl CollectionSymbol for ClassSymbol {
    fn size(&self) -> usize {
        self.size
    }
}

impl FromStr for ClassSymbol {
    type Err = GenericSymbolParsingError;

    fn from_str(symstr: &str) -> Result<Self, Self::Err> {
        let cap = CLASS_RE
            .captures(symstr)
            .ok_or_else(|| GenericSymbolParsingError(format!("`{symstr}` is not parsable")))?;
        let sizestr = cap.get(1).map_or("", |m| m.as_str());
        let size = if sizestr.is_empty() {
            1
        } else {
            str::parse::<usize>(sizestr).map_err(|err| {
                GenericSymbolParsingError(format!("invalid class size in `{symstr}`: {err}"))
            })?
        };
        if size == 0 {
            return Err(GenericSymbolParsingError(format!(
                "class `{symstr}` cannot be empty"
            )));
        }
        Ok(Self {
            main: cap.get(2).map_or("", |m| m.as_str()).to_string(),
            size,
        })
    }
}

impl fmt::Display for ClassSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 1 {
            write!(f, "{}", self.main)
        } else {
            write!(f, "{}{}", self.size, self.main)
        }
    }
}

// ------
// Errors
// ------

#[derive(Debug, Clone)]
pub struct GenericSymbolParsingError(pub String);

impl fmt::Display for GenericSymbolParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Generic symbol parsing error: {}.", self.0)
    }
}

impl Error for GenericSymbolParsingError {}
