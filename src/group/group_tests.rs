use std::collections::HashSet;

use ndarray::array;
use serde::{Deserialize, Serialize};

use crate::group::registry::POINT_GROUP_FAMILIES;
use crate::group::{
    C2v, D2h, D3, D6h, InvalidPointGroupNameError, Oh, PointGroup, Td, UnknownIrrepError,
    UnknownPointGroupError, C1,
};

#[test]
fn test_group_from_name() {
    let d2h = PointGroup::new("D2h").unwrap();
    assert_eq!(d2h.family(), "dnh");
    assert_eq!(d2h.n(), Some(2));
    assert_eq!(d2h.order(), 8);
    assert_eq!(d2h.name(), "D2h");

    let c1 = PointGroup::new("C1").unwrap();
    assert_eq!(c1.family(), "cn");
    assert_eq!(c1.n(), Some(1));
    assert_eq!(c1.order(), 1);

    let td = PointGroup::new("Td").unwrap();
    assert_eq!(td.family(), "td");
    assert_eq!(td.n(), None);
    assert_eq!(td.order(), 24);

    let cs = PointGroup::new("Cs").unwrap();
    assert_eq!(cs.family(), "cs");
    assert_eq!(cs.n(), None);

    for name in [
        "C1", "Cs", "Ci", "C2", "C2h", "C2v", "C3v", "C4v", "C6v", "D2", "D3", "D4", "D6", "D2h",
        "D3h", "D4h", "D6h", "D2d", "D3d", "Td", "Oh",
    ] {
        let group = PointGroup::new(name).unwrap();
        assert_eq!(group.to_string(), name);
        assert_eq!(
            group.character_table().order(),
            group.order(),
            "Order mismatch for {name}"
        );
    }
}

#[test]
fn test_group_from_family() {
    assert_eq!(
        PointGroup::from_family("dnh", Some(6)).unwrap(),
        PointGroup::new("D6h").unwrap()
    );
    assert_eq!(
        PointGroup::from_family("oh", None).unwrap(),
        PointGroup::new("Oh").unwrap()
    );

    let err = PointGroup::from_family("td", Some(2)).unwrap_err();
    assert!(err.downcast_ref::<InvalidPointGroupNameError>().is_some());
    let err = PointGroup::from_family("dnh", None).unwrap_err();
    assert!(err.downcast_ref::<InvalidPointGroupNameError>().is_some());
    let err = PointGroup::from_family("cn", Some(0)).unwrap_err();
    assert!(err.downcast_ref::<InvalidPointGroupNameError>().is_some());
    let err = PointGroup::from_family("xyz", Some(2)).unwrap_err();
    assert!(err.downcast_ref::<InvalidPointGroupNameError>().is_some());
}

#[test]
fn test_group_registry_consistent() {
    for (family, pg_family) in POINT_GROUP_FAMILIES.entries() {
        for (n, tab) in pg_family.tables {
            assert!(pg_family.domain.admits(*n), "{family} {n:?}");
            let group = PointGroup::from_family(family, *n).unwrap();
            assert_eq!(group.name(), tab.name);
            assert_eq!(group.character_table().name(), tab.name);
            assert_eq!(PointGroup::new(tab.name).unwrap(), group);
        }
    }
}

#[test]
fn test_group_invalid_names() {
    for name in [
        "", "C0v", "C0", "Td2", "Dh", "d2h", "D2H", "X2", "D02h", "2D", "C2vv", "Cn", "D99999999999h",
    ] {
        let err = PointGroup::new(name).unwrap_err();
        assert!(
            err.downcast_ref::<InvalidPointGroupNameError>().is_some(),
            "`{name}` should be an invalid point-group name, but got: {err}"
        );
    }
}

#[test]
fn test_group_unknown_groups() {
    for name in ["C5v", "C3", "D5h", "D8h", "D4d", "C3h", "C100"] {
        let err = PointGroup::new(name).unwrap_err();
        assert!(
            err.downcast_ref::<UnknownPointGroupError>().is_some(),
            "`{name}` should be an unknown point group, but got: {err}"
        );
    }
}

#[test]
fn test_group_equality() {
    let d2h_a = PointGroup::new("D2h").unwrap();
    let d2h_b = PointGroup::new("D2h").unwrap();
    assert_eq!(d2h_a, d2h_b);
    assert_eq!(d2h_a, D2h::new());
    assert_ne!(d2h_a, PointGroup::new("D3h").unwrap());
    assert_ne!(PointGroup::new("D2").unwrap(), d2h_a);

    let groups = [d2h_a.clone(), d2h_b, D2h::new(), D6h::new(), Td::new()]
        .into_iter()
        .collect::<HashSet<_>>();
    assert_eq!(groups.len(), 3);

    // Character tables are shared between equal groups.
    assert!(std::ptr::eq(
        d2h_a.character_table(),
        D2h::new().character_table()
    ));
}

#[test]
fn test_group_rendering() {
    assert_eq!(format!("{:?}", D2h::new()), "D2h()");
    assert_eq!(format!("{}", D2h::new()), "D2h");
    assert_eq!(
        format!("{:?}", PointGroup::new("D6h").unwrap()),
        "PointGroup(pg=\"dnh\", n=6)"
    );
    assert_eq!(format!("{}", PointGroup::new("D6h").unwrap()), "D6h");
    assert_eq!(
        format!("{:?}", PointGroup::new("Td").unwrap()),
        "PointGroup(pg=\"td\")"
    );
    assert_eq!(format!("{:?}", Oh::new()), "Oh()");
    assert_eq!(format!("{:?}", C1::new()), "C1()");
}

#[test]
fn test_group_irrep_lookup() {
    let d2h = D2h::new();
    let b1g = d2h.irrep("b1g").unwrap();
    assert_eq!(b1g.to_string(), "b1g");
    assert_eq!(b1g.characters(), &array![1, 1, -1, -1, 1, 1, -1, -1]);
    assert_eq!(d2h.irrep("B1G").unwrap(), b1g);
    assert_eq!(D2h::irrep("b1g").unwrap(), b1g);
    assert_eq!(PointGroup::irrep_of("D2h", "b1g").unwrap(), b1g);

    let err = d2h.irrep("e1g").unwrap_err();
    assert!(err.to_string().contains("`e1g` is not an irrep of D2h"));
    assert!(d2h.irrep("").is_err());
    assert!(d2h.irrep("not an irrep").is_err());

    let err = PointGroup::irrep_of("D2h", "e").unwrap_err();
    assert!(err.downcast_ref::<UnknownIrrepError>().is_some());
    let err = PointGroup::irrep_of("D5h", "a1'").unwrap_err();
    assert!(err.downcast_ref::<UnknownPointGroupError>().is_some());

    let d3h = PointGroup::new("D3h").unwrap();
    assert_eq!(d3h.irrep("e''").unwrap().to_string(), "e''");
    assert_eq!(d3h.irrep("a2'").unwrap().dimensionality(), 1);
}

#[test]
fn test_group_irreps() {
    let c2v = C2v::new();
    let irreps = c2v.irreps();
    assert_eq!(
        irreps.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["a1", "a2", "b1", "b2"]
    );
    assert_eq!(c2v.totally_symmetric(), irreps[0]);
    assert!(irreps[0].is_totally_symmetric());
    assert_eq!(c2v.symbol(&irreps[3]).unwrap().to_string(), "b2");
    assert!(D3::new().symbol(&irreps[0]).is_none());

    let oh = Oh::new();
    assert_eq!(oh.irreps().len(), 10);
    assert_eq!(
        oh.irreps()
            .iter()
            .map(|irrep| irrep.dimensionality().pow(2))
            .sum::<usize>(),
        oh.order()
    );
}

#[derive(Serialize, Deserialize)]
struct SymmetryInput {
    point_group: PointGroup,
}

#[test]
fn test_group_serde() {
    let input = SymmetryInput {
        point_group: D6h::new(),
    };
    let yaml = serde_yaml::to_string(&input).unwrap();
    assert_eq!(yaml, "point_group: D6h\n");

    let parsed: SymmetryInput = serde_yaml::from_str("point_group: Td\n").unwrap();
    assert_eq!(parsed.point_group, Td::new());
    assert_eq!(
        format!("{:?}", parsed.point_group),
        "PointGroup(pg=\"td\")"
    );

    assert!(serde_yaml::from_str::<SymmetryInput>("point_group: D2H\n").is_err());
    assert!(serde_yaml::from_str::<SymmetryInput>("point_group: C5v\n").is_err());
}
