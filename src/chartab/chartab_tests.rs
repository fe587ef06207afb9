use indexmap::IndexMap;
use ndarray::{array, Array1};

use crate::chartab::chartab_symbols::{ClassSymbol, LinearSpaceSymbol, MullikenIrrepSymbol};
use crate::chartab::tabulated::{ALL_TABULATED, C3V, D2H, D6H, OH, TD};
use crate::chartab::CharacterTable;

fn classes(symbols: &[&str]) -> Vec<ClassSymbol> {
    symbols.iter().map(|s| ClassSymbol::new(s).unwrap()).collect()
}

fn irreps(symbols: &[&str]) -> Vec<MullikenIrrepSymbol> {
    symbols
        .iter()
        .map(|s| MullikenIrrepSymbol::new(s).unwrap())
        .collect()
}

#[test]
fn test_chartab_all_tabulated_valid() {
    for tab in ALL_TABULATED {
        let chartab = tab.to_character_table().unwrap();
        assert_eq!(chartab.name(), tab.name);
        assert_eq!(chartab.class_number(), tab.classes.len());
        assert_eq!(chartab.get_all_rows().len(), tab.irreps.len());

        // Sum of squared dimensionalities equals the group order.
        let dim_sq_sum: usize = chartab
            .get_all_rows()
            .iter()
            .map(|irrep| irrep.dimensionality().pow(2))
            .sum();
        assert_eq!(dim_sq_sum, chartab.order(), "{}", tab.name);
    }
}

#[test]
fn test_chartab_orders() {
    let orders = [
        ("C1", 1),
        ("Cs", 2),
        ("C2v", 4),
        ("C3v", 6),
        ("D2h", 8),
        ("D3h", 12),
        ("D4h", 16),
        ("D6h", 24),
        ("Td", 24),
        ("Oh", 48),
    ];
    for (name, order) in orders {
        let tab = ALL_TABULATED.iter().find(|tab| tab.name == name).unwrap();
        assert_eq!(tab.to_character_table().unwrap().order(), order);
    }
}

#[test]
fn test_chartab_lookup() {
    let chartab = D2H.to_character_table().unwrap();
    let b1g = MullikenIrrepSymbol::new("b1g").unwrap();
    assert_eq!(chartab.get_row_index(&b1g), Some(1));
    assert_eq!(chartab.get_row_symbol(7).unwrap().to_string(), "b3u");
    assert_eq!(chartab.get_row_symbol(8), None);
    assert_eq!(chartab.get_row(1), array![1, 1, -1, -1, 1, 1, -1, -1]);
    assert_eq!(chartab.get_character(7, 4), -1);
    assert_eq!(
        chartab.get_all_cols().get_index(5).unwrap().to_string(),
        "σ(xy)"
    );
    assert_eq!(chartab.find_row(&array![1, -1, 1, -1, -1, 1, 1, -1]), Some(7));
    assert_eq!(chartab.find_row(&array![2, 0, 0, 0, 0, 0, 0, 0]), None);
}

#[test]
fn test_chartab_reduction_single_irreps() {
    for tab in ALL_TABULATED {
        let chartab = tab.to_character_table().unwrap();
        for i in 0..chartab.class_number() {
            let reduction = chartab
                .reduce_characters(&chartab.get_row(i).to_owned())
                .unwrap();
            assert_eq!(reduction, IndexMap::from([(i, 1)]));
        }
    }
}

#[test]
fn test_chartab_reduction_direct_products() {
    let chartab = D6H.to_character_table().unwrap();
    let idx = |s: &str| {
        chartab
            .get_row_index(&MullikenIrrepSymbol::new(s).unwrap())
            .unwrap()
    };

    // E1g ⊗ E1g = A1g ⊕ A2g ⊕ E2g
    let e1g = chartab.get_row(idx("e1g")).to_owned();
    let reduction = chartab.reduce_characters(&(&e1g * &e1g)).unwrap();
    assert_eq!(
        reduction,
        IndexMap::from([(idx("a1g"), 1), (idx("a2g"), 1), (idx("e2g"), 1)])
    );
    assert_eq!(
        reduction.keys().copied().collect::<Vec<_>>(),
        vec![idx("a1g"), idx("a2g"), idx("e2g")]
    );

    // E1g ⊗ E2u ⊗ E2u = B1g ⊕ B2g ⊕ 3E1g
    let e2u = chartab.get_row(idx("e2u")).to_owned();
    let reduction = chartab.reduce_characters(&(&e1g * &e2u * &e2u)).unwrap();
    assert_eq!(
        reduction,
        IndexMap::from([(idx("b1g"), 1), (idx("b2g"), 1), (idx("e1g"), 3)])
    );

    let chartab = TD.to_character_table().unwrap();
    let t1: Array1<i32> = chartab.get_row(3).to_owned();
    let t2: Array1<i32> = chartab.get_row(4).to_owned();
    let reduction = chartab.reduce_characters(&(&t1 * &t2)).unwrap();
    assert_eq!(reduction, IndexMap::from([(1, 1), (2, 1), (3, 1), (4, 1)]));

    let chartab = OH.to_character_table().unwrap();
    let t1u: Array1<i32> = chartab.get_row(8).to_owned();
    let reduction = chartab.reduce_characters(&(&t1u * &t1u)).unwrap();
    assert_eq!(reduction, IndexMap::from([(0, 1), (2, 1), (3, 1), (4, 1)]));
}

#[test]
fn test_chartab_reduction_inconsistent() {
    let chartab = C3V.to_character_table().unwrap();

    // Non-integral multiplicities.
    let err = chartab.reduce_characters(&array![1, 0, 0]).unwrap_err();
    assert!(err.to_string().contains("not a non-negative integer"));

    // Negative multiplicities.
    let neg_e = array![-2, 1, 0];
    assert!(chartab.reduce_characters(&neg_e).is_err());

    // Wrong number of characters.
    assert!(chartab.reduce_characters(&array![1, 1]).is_err());
}

#[test]
fn test_chartab_builder_validation() {
    let good = CharacterTable::builder()
        .name("C2")
        .classes(&classes(&["E", "C2"]))
        .irreps(&irreps(&["a", "b"]))
        .characters(array![[1, 1], [1, -1]])
        .build();
    assert!(good.is_ok());

    // Non-square table.
    assert!(CharacterTable::builder()
        .name("X")
        .classes(&classes(&["E", "C2", "i"]))
        .irreps(&irreps(&["a", "b"]))
        .characters(array![[1, 1, 1], [1, -1, 1]])
        .build()
        .is_err());

    // Identity class not first.
    assert!(CharacterTable::builder()
        .name("X")
        .classes(&classes(&["C2", "E"]))
        .irreps(&irreps(&["a", "b"]))
        .characters(array![[1, 1], [-1, 1]])
        .build()
        .is_err());

    // Identity character inconsistent with the Mulliken letter.
    assert!(CharacterTable::builder()
        .name("X")
        .classes(&classes(&["E", "C2"]))
        .irreps(&irreps(&["a", "e"]))
        .characters(array![[1, 1], [1, -1]])
        .build()
        .is_err());

    // Rows not orthogonal.
    let err = CharacterTable::builder()
        .name("X")
        .classes(&classes(&["E", "C2"]))
        .irreps(&irreps(&["a", "b"]))
        .characters(array![[1, 1], [1, 1]])
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("orthogonality"));

    // Duplicate labels collapse and no longer match the character array.
    assert!(CharacterTable::builder()
        .name("X")
        .classes(&classes(&["E", "C2"]))
        .irreps(&irreps(&["a", "a"]))
        .characters(array![[1, 1], [1, -1]])
        .build()
        .is_err());

    // Missing fields.
    assert!(CharacterTable::builder().name("X").build().is_err());
}

#[test]
fn test_chartab_display() {
    let chartab = C3V.to_character_table().unwrap();
    let rendered = chartab.to_string();
    assert!(rendered.contains("Character table of C3v"));
    let lines = rendered.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3 + 2 + 3);
    assert!(lines[3].contains("2C3"));
    assert!(lines[3].contains("3σv"));
    assert!(lines[7].starts_with("e"));
    assert!(lines[7].ends_with("0"));
}
