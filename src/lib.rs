//! # molsym: Molecular Point-Group Symmetry Algebra
//!
//! molsym is a library for the symmetry algebra of finite molecular point groups written in
//! Rust with the following capabilities:
//! - compiled-in, validated character tables for all point groups with integral characters,
//! - lookup of point groups by their canonical names and of irreps by their Mulliken labels,
//! - direct products, direct sums and integer powers of representations, and
//! - reduction of reducible representations into irreps via the reduction formula.
//!
//! ## Examples and usage
//!
//! ```
//! use molsym::group::{PointGroup, D2h};
//!
//! let b2g = D2h::irrep("b2g").unwrap();
//! let b1u = D2h::irrep("b1u").unwrap();
//! assert_eq!((&b2g * &b1u).to_string(), "b3u");
//!
//! let d6h = PointGroup::new("D6h").unwrap();
//! let e1g = d6h.irrep("e1g").unwrap();
//! assert_eq!(e1g.power(2).unwrap().to_string(), "a1g a2g e2g");
//! ```
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions.
//!
//! ## License
//!
//! MIT License.

pub mod chartab;
pub mod group;
pub(crate) mod io;
pub mod representation;
