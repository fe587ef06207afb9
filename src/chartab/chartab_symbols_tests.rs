use crate::chartab::chartab_symbols::{
    ClassSymbol, CollectionSymbol, LinearSpaceSymbol, MathematicalSymbol, MullikenIrrepSymbol,
};

#[test]
fn test_chartab_symbols_mulliken() {
    let a = MullikenIrrepSymbol::new("a").unwrap();
    assert_eq!(format!("{a}"), "a");
    assert_eq!(a.dimensionality(), 1);
    assert!(!a.is_gerade());
    assert!(!a.is_ungerade());

    let b1g = MullikenIrrepSymbol::new("b1g").unwrap();
    assert_eq!(format!("{b1g}"), "b1g");
    assert_eq!(b1g.main(), "b");
    assert_eq!(b1g.postsub(), "1g");
    assert!(b1g.is_gerade());
    assert_ne!(a, b1g);

    let e1u = MullikenIrrepSymbol::new("e1u").unwrap();
    assert_eq!(e1u.dimensionality(), 2);
    assert!(e1u.is_ungerade());

    let t2g = MullikenIrrepSymbol::new("t2g").unwrap();
    assert_eq!(t2g.dimensionality(), 3);
    assert_eq!(t2g.multiplicity(), None);

    let e2dash = MullikenIrrepSymbol::new("e''").unwrap();
    assert_eq!(format!("{e2dash}"), "e''");
    assert_eq!(e2dash.postsuper(), "''");
    assert_eq!(e2dash.postsub(), "");

    let a1dash: MullikenIrrepSymbol = "a1'".parse().unwrap();
    assert_eq!(a1dash.postsub(), "1");
    assert_eq!(a1dash.postsuper(), "'");
    assert_eq!(a1dash, MullikenIrrepSymbol::new("a1'").unwrap());
}

#[test]
fn test_chartab_symbols_mulliken_invalid() {
    assert!(MullikenIrrepSymbol::new("").is_err());
    assert!(MullikenIrrepSymbol::new("A1g").is_err());
    assert!(MullikenIrrepSymbol::new("x1").is_err());
    assert!(MullikenIrrepSymbol::new("a1g'''").is_err());
    assert!(MullikenIrrepSymbol::new("b2gu").is_err());

    // Only `a`, `b`, `e` and `t` carry a dimensionality.
    for symstr in ["g", "gu", "g1g", "h", "hu"] {
        let err = MullikenIrrepSymbol::new(symstr).unwrap_err();
        assert!(err.to_string().contains("not a recognised Mulliken letter"));
    }

    let err = MullikenIrrepSymbol::new("q").unwrap_err();
    assert!(err.to_string().contains("not a recognised Mulliken letter"));
}

#[test]
fn test_chartab_symbols_class() {
    let e = ClassSymbol::new("E").unwrap();
    assert_eq!(format!("{e}"), "E");
    assert_eq!(e.size(), 1);
    assert!(e.is_identity());

    let c6 = ClassSymbol::new("2C6").unwrap();
    assert_eq!(format!("{c6}"), "2C6");
    assert_eq!(c6.main(), "C6");
    assert_eq!(c6.size(), 2);
    assert_eq!(c6.multiplicity(), Some(2));
    assert!(!c6.is_identity());

    let sigma_v = ClassSymbol::new("3σv").unwrap();
    assert_eq!(format!("{sigma_v}"), "3σv");
    assert_eq!(sigma_v.size(), 3);

    let c2_dash: ClassSymbol = "3C2''".parse().unwrap();
    assert_eq!(c2_dash.main(), "C2''");

    let sigma_xz = ClassSymbol::new("σv(xz)").unwrap();
    assert_eq!(sigma_xz.size(), 1);
    assert_eq!(format!("{sigma_xz}"), "σv(xz)");
}

#[test]
fn test_chartab_symbols_class_invalid() {
    assert!(ClassSymbol::new("").is_err());
    assert!(ClassSymbol::new("12").is_err());
    assert!(ClassSymbol::new("0C2").is_err());
}
