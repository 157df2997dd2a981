//! End-to-end tests of catalog, evaluation, compatibility, and enumeration.

use std::collections::HashSet;

use poly_mtncl::catalog::{Catalog, ARITY_EXCEPTIONS};
use poly_mtncl::combination::{generate_all, generate_combinations};
use poly_mtncl::compat::{implies_pointwise, is_compatible, SubsetDirection};
use poly_mtncl::export::{render_report, write_csv_file};
use poly_mtncl::truth_table::evaluate;
use poly_mtncl::types::Arity;
use poly_mtncl::Error;

const IRREGULAR: [&str; 3] = ["THxor0", "THand0", "TH24comp"];

// ─── Catalog ───────────────────────────────────────────────────────────────────

#[test]
fn irregular_gates_are_four_input_only() {
    let catalog = Catalog::builtin();
    let four: Vec<&str> = catalog.all_of_arity(Arity::FOUR).iter().map(|g| g.name()).collect();
    for name in IRREGULAR {
        assert!(four.contains(&name), "{} missing from arity 4", name);
    }
    for arity in [Arity::TWO, Arity::THREE] {
        for gate in catalog.all_of_arity(arity) {
            assert!(!IRREGULAR.contains(&gate.name()));
        }
    }

    // Every regular THmn gate with n = 4, weighted or not, is there too.
    for gate in catalog.iter() {
        let name = gate.name();
        if !IRREGULAR.contains(&name) && name.as_bytes()[3] == b'4' {
            assert!(four.contains(&name), "{} missing from arity 4", name);
        }
    }
    assert_eq!(ARITY_EXCEPTIONS.len(), 3);
}

#[test]
fn every_gate_has_exactly_one_arity_partition() {
    let catalog = Catalog::builtin();
    let total: usize = Arity::ALL.iter().map(|&a| catalog.all_of_arity(a).len()).sum();
    assert_eq!(total, catalog.len());
}

// ─── Evaluation ────────────────────────────────────────────────────────────────

#[test]
fn row_counts_match_arity() {
    let catalog = Catalog::builtin();
    for gate in catalog.iter() {
        let table = gate.evaluate_at(gate.arity()).unwrap();
        let expected = match gate.arity().get() {
            2 => 4,
            3 => 8,
            4 => 16,
            n => panic!("unexpected arity {}", n),
        };
        assert_eq!(table.len(), expected, "{}", gate.name());
        assert_eq!(table.rows().count(), expected, "{}", gate.name());
        assert_eq!(&table, gate.truth_table());
    }
}

#[test]
fn evaluation_requires_declared_arity() {
    let catalog = Catalog::builtin();
    for gate in catalog.iter() {
        for arity in Arity::ALL {
            let result = gate.evaluate_at(arity);
            if arity == gate.arity() {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(Error::ArityMismatch { .. })), "{} at {}", gate.name(), arity);
            }
        }
    }
}

#[test]
fn evaluator_agrees_with_compatibility() {
    let catalog = Catalog::builtin();
    for arity in Arity::ALL {
        let gates = catalog.all_of_arity(arity);
        for g1 in &gates {
            for g2 in &gates {
                let t1 = evaluate(g1.expr(), arity);
                let t2 = evaluate(g2.expr(), arity);
                let rowwise = t1.rows().zip(t2.rows()).all(|(r1, r2)| !r1.output() || r2.output());

                let hvdd = is_compatible(catalog, g1.name(), g2.name(), SubsetDirection::HvddSubset).unwrap();
                let lvdd = is_compatible(catalog, g2.name(), g1.name(), SubsetDirection::LvddSubset).unwrap();
                assert_eq!(rowwise, hvdd, "{} => {}", g1.name(), g2.name());
                assert_eq!(rowwise, lvdd, "{} => {}", g1.name(), g2.name());
                assert_eq!(rowwise, implies_pointwise(g1.expr(), g2.expr(), arity));
            }
        }
    }
}

// ─── Compatibility ─────────────────────────────────────────────────────────────

#[test]
fn compatibility_is_not_symmetric() {
    let catalog = Catalog::from_entries([("TH22", "A & B"), ("TH12", "A | B")]).unwrap();
    let d = SubsetDirection::HvddSubset;
    assert!(is_compatible(&catalog, "TH22", "TH12", d).unwrap());
    assert!(!is_compatible(&catalog, "TH12", "TH22", d).unwrap());
}

#[test]
fn restricted_two_input_lvdd_scenario() {
    let catalog = Catalog::from_entries([("TH12", "A | B"), ("TH22", "A & B")]).unwrap();
    let d = SubsetDirection::LvddSubset;
    assert!(is_compatible(&catalog, "TH12", "TH22", d).unwrap());

    let combinations = generate_combinations(&catalog, Arity::TWO, d).unwrap();
    assert_eq!(combinations.len(), 1);
    assert_eq!(combinations[0].hvdd_name(), "TH12");
    assert_eq!(combinations[0].lvdd_name(), "TH22");
}

#[test]
fn errors_propagate() {
    let catalog = Catalog::builtin();
    assert!(matches!(
        is_compatible(catalog, "TH44", "TH33", SubsetDirection::HvddSubset),
        Err(Error::ArityMismatch { expected: 4, found: 3, .. })
    ));
    assert!(matches!(
        is_compatible(catalog, "TH5", "TH12", SubsetDirection::HvddSubset),
        Err(Error::UnknownGate(_))
    ));
    assert!(matches!(
        "sideways".parse::<SubsetDirection>(),
        Err(Error::InvalidDirection(_))
    ));
    assert!(matches!(Arity::new(5), Err(Error::InvalidArity(5))));
}

// ─── Enumeration ───────────────────────────────────────────────────────────────

#[test]
fn enumeration_is_deterministic() {
    let catalog = Catalog::builtin();
    for arity in Arity::ALL {
        for d in SubsetDirection::ALL {
            let first = generate_combinations(catalog, arity, d).unwrap();
            let second = generate_combinations(catalog, arity, d).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn no_self_pairs_and_arity_partition() {
    let catalog = Catalog::builtin();
    for arity in Arity::ALL {
        for d in SubsetDirection::ALL {
            for c in generate_combinations(catalog, arity, d).unwrap() {
                assert_ne!(c.hvdd_name(), c.lvdd_name());
                assert_eq!(c.hvdd().arity(), arity);
                assert_eq!(c.lvdd().arity(), arity);
            }
        }
    }
}

#[test]
fn pairs_are_unique() {
    let catalog = Catalog::builtin();
    let all = generate_all(catalog, &Arity::ALL, SubsetDirection::HvddSubset).unwrap();
    let ids: HashSet<String> = all.iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn directions_mirror_each_other() {
    let catalog = Catalog::builtin();
    for arity in Arity::ALL {
        let h: HashSet<(String, String)> = generate_combinations(catalog, arity, SubsetDirection::HvddSubset)
            .unwrap()
            .iter()
            .map(|c| (c.hvdd_name().to_string(), c.lvdd_name().to_string()))
            .collect();
        let l: HashSet<(String, String)> = generate_combinations(catalog, arity, SubsetDirection::LvddSubset)
            .unwrap()
            .iter()
            .map(|c| (c.lvdd_name().to_string(), c.hvdd_name().to_string()))
            .collect();
        assert_eq!(h, l);
    }
}

#[test]
fn equivalent_gates_pair_both_ways() {
    // TH24w22 and TH34w32 share the function A | B | (C & D).
    let catalog = Catalog::builtin();
    let ids: Vec<String> = generate_combinations(catalog, Arity::FOUR, SubsetDirection::HvddSubset)
        .unwrap()
        .iter()
        .map(|c| c.id())
        .collect();
    assert!(ids.contains(&"TH24w22_TH34w32".to_string()));
    assert!(ids.contains(&"TH34w32_TH24w22".to_string()));
}

#[test]
fn full_run_counts() {
    let catalog = Catalog::builtin();
    for d in SubsetDirection::ALL {
        let counts: Vec<usize> = Arity::ALL
            .iter()
            .map(|&a| generate_combinations(catalog, a, d).unwrap().len())
            .collect();
        assert_eq!(counts, [1, 10, 156]);
    }
}

// ─── Export ────────────────────────────────────────────────────────────────────

#[test]
fn csv_file_round_trip() {
    let catalog = Catalog::builtin();
    let combinations = generate_combinations(catalog, Arity::THREE, SubsetDirection::LvddSubset).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = write_csv_file(dir.path().join("gates.csv"), &combinations).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(
        lines[0],
        "Polymorphic Gate Combination,HVDD Gate,HVDD Function,LVDD Gate,LVDD Function"
    );
    assert_eq!(lines[1], "TH13_TH23,TH13,A | B | C,TH23,(A & B) | (A & C) | (B & C)");
}

#[test]
fn library_only_run_matches_binary_output() {
    // Same pipeline as the `poly-mtncl` binary, using library items only.
    let catalog = Catalog::builtin();
    let combinations = generate_all(catalog, &[Arity::TWO], SubsetDirection::HvddSubset).unwrap();
    let report = render_report(&combinations, false);
    assert_eq!(
        report,
        "Number of Combinations: 1\n\nTH22_TH12\nPolymorphicGateCombination(\n\tHVDD: TH22 (A & B),\n\tLVDD: TH12 (A | B)\n)\n"
    );

    let dir = tempfile::tempdir().unwrap();
    let path = write_csv_file(dir.path().join("two.csv"), &combinations).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap().lines().count(), 2);
}
