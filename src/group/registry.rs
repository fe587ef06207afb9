//! Registry of point-group families and their tabulated character tables.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::{self, format_err};
use lazy_static::lazy_static;
use phf::phf_map;

use crate::chartab::tabulated::{
    TabulatedCharacters, C1, C2, C2H, C2V, C3V, C4V, C6V, CI, CS, D2, D2D, D2H, D3, D3D, D3H, D4,
    D4H, D6, D6H, OH, TD,
};
use crate::chartab::CharacterTable;
use crate::group::{InvalidPointGroupNameError, UnknownPointGroupError};

/// The admissible values of the order parameter $`n`$ of a point-group family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OrderDomain {
    /// The family consists of a single group with no order parameter, *e.g.* `Td`.
    Fixed,

    /// The family is infinite and parametrised by $`n \ge`$ `min`, *e.g.* `Dnh`.
    Infinite { min: u32 },
}

impl OrderDomain {
    /// Checks whether `n` is admissible in this domain.
    pub(crate) fn admits(&self, n: Option<u32>) -> bool {
        match (self, n) {
            (Self::Fixed, None) => true,
            (Self::Infinite { min }, Some(n)) => n >= *min,
            _ => false,
        }
    }
}

/// A point-group family together with the members for which character data are available.
pub(crate) struct PointGroupFamily {
    /// The admissible order parameters of this family.
    pub(crate) domain: OrderDomain,

    /// The tabulated members of this family, keyed by their order parameter.
    pub(crate) tables: &'static [(Option<u32>, &'static TabulatedCharacters)],
}

/// All known point-group families, keyed by their family tag.
///
/// A family tag is obtained from a canonical point-group name by lowercasing it and replacing
/// the order parameter by `n`. Adding a point group only requires tabulating it and listing it
/// here.
pub(crate) static POINT_GROUP_FAMILIES: phf::Map<&'static str, PointGroupFamily> = phf_map! {
    "cn" => PointGroupFamily {
        domain: OrderDomain::Infinite { min: 1 },
        tables: &[(Some(1), &C1), (Some(2), &C2)],
    },
    "cnv" => PointGroupFamily {
        domain: OrderDomain::Infinite { min: 2 },
        tables: &[(Some(2), &C2V), (Some(3), &C3V), (Some(4), &C4V), (Some(6), &C6V)],
    },
    "cnh" => PointGroupFamily {
        domain: OrderDomain::Infinite { min: 2 },
        tables: &[(Some(2), &C2H)],
    },
    "dn" => PointGroupFamily {
        domain: OrderDomain::Infinite { min: 2 },
        tables: &[(Some(2), &D2), (Some(3), &D3), (Some(4), &D4), (Some(6), &D6)],
    },
    "dnh" => PointGroupFamily {
        domain: OrderDomain::Infinite { min: 2 },
        tables: &[(Some(2), &D2H), (Some(3), &D3H), (Some(4), &D4H), (Some(6), &D6H)],
    },
    "dnd" => PointGroupFamily {
        domain: OrderDomain::Infinite { min: 2 },
        tables: &[(Some(2), &D2D), (Some(3), &D3D)],
    },
    "cs" => PointGroupFamily {
        domain: OrderDomain::Fixed,
        tables: &[(None, &CS)],
    },
    "ci" => PointGroupFamily {
        domain: OrderDomain::Fixed,
        tables: &[(None, &CI)],
    },
    "td" => PointGroupFamily {
        domain: OrderDomain::Fixed,
        tables: &[(None, &TD)],
    },
    "oh" => PointGroupFamily {
        domain: OrderDomain::Fixed,
        tables: &[(None, &OH)],
    },
};

lazy_static! {
    static ref CHARACTER_TABLE_CACHE: RwLock<HashMap<(String, Option<u32>), Arc<CharacterTable>>> =
        RwLock::new(HashMap::new());
}

/// Resolves the character table of the point group with family tag `family` and order
/// parameter `n`.
///
/// Character tables are built once and then shared read-only.
///
/// # Errors
///
/// Errors with [`InvalidPointGroupNameError`] if the family is unknown or `n` lies outside its
/// domain, and with [`UnknownPointGroupError`] if the group is admissible but not tabulated.
pub(crate) fn resolve_character_table(
    family: &str,
    n: Option<u32>,
) -> Result<Arc<CharacterTable>, anyhow::Error> {
    let pg_family = POINT_GROUP_FAMILIES.get(family).ok_or_else(|| {
        InvalidPointGroupNameError(format!("`{family}` is not a known point-group family"))
    })?;
    if !pg_family.domain.admits(n) {
        let reason = match (pg_family.domain, n) {
            (OrderDomain::Fixed, Some(n)) => {
                format!("family `{family}` takes no order parameter, but n = {n} is given")
            }
            (OrderDomain::Infinite { min }, Some(n)) => {
                format!("order parameter n = {n} is below the minimum {min} of family `{family}`")
            }
            _ => format!("family `{family}` requires an order parameter"),
        };
        return Err(InvalidPointGroupNameError(reason).into());
    }

    let key = (family.to_string(), n);
    if let Some(chartab) = CHARACTER_TABLE_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        log::debug!("Character table of {} found in cache.", chartab.name());
        return Ok(Arc::clone(chartab));
    }

    let (_, tab) = pg_family
        .tables
        .iter()
        .find(|(order, _)| *order == n)
        .ok_or_else(|| {
            UnknownPointGroupError(format!(
                "no character table is tabulated for family `{family}` with n = {}",
                n.map_or("none".to_string(), |n| n.to_string())
            ))
        })?;
    log::debug!("Building character table of {}...", tab.name);
    let chartab = Arc::new(tab.to_character_table().map_err(|err| {
        log::error!("Tabulated characters of {} are invalid: {err}", tab.name);
        format_err!("Invalid tabulated characters for {}: {err}", tab.name)
    })?);
    log::debug!("Building character table of {}... Done.", tab.name);

    Ok(Arc::clone(
        CHARACTER_TABLE_CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(chartab),
    ))
}
