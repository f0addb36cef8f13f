use argtrust::{
    aa::{AAError, AAFramework, ArgumentSubset, ExtensionSet, Semantics},
    io::{AspartixReader, InstanceReader},
    solvers::{new_extension_enumerator, ExtensionEnumerator},
    utils::{grounded_extension, EnumerationOrder, SearchBudget, SubsetEnumerator},
};
use strum::IntoEnumIterator;

const REFERENCE_FRAMEWORKS: [&str; 8] = [
    "",
    "arg(a).\narg(b).\narg(c).\n",
    "arg(a).\narg(b).\narg(c).\natt(c,b).\natt(b,a).\n",
    "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\natt(c,a).\n",
    "arg(a).\narg(b).\natt(a,b).\natt(b,a).\n",
    "arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(b,a).\natt(b,c).\natt(c,d).\n",
    "arg(a).\narg(b).\narg(c).\narg(d).\natt(a,a).\natt(a,b).\natt(b,c).\natt(c,d).\natt(d,c).\n",
    "arg(a).\narg(b).\narg(c).\narg(d).\narg(e).\natt(a,b).\natt(b,a).\natt(a,c).\natt(b,c).\natt(c,d).\natt(d,e).\natt(e,c).\n",
];

fn reference_frameworks() -> Vec<AAFramework<String>> {
    REFERENCE_FRAMEWORKS
        .iter()
        .map(|i| AspartixReader::default().read(&mut i.as_bytes()).unwrap())
        .collect()
}

fn extensions(af: &AAFramework<String>, semantics: Semantics) -> ExtensionSet {
    new_extension_enumerator(af, semantics, SearchBudget::unlimited())
        .enumerate_extensions()
        .unwrap()
}

fn all_subsets(af: &AAFramework<String>) -> Vec<ArgumentSubset> {
    SubsetEnumerator::for_framework(af, EnumerationOrder::Ascending).collect()
}

fn self_attackers(af: &AAFramework<String>) -> ArgumentSubset {
    let mut s = af.empty_subset();
    for attack in af.iter_attacks() {
        if attack.attacker() == attack.attacked() {
            s.insert(attack.attacker().id());
        }
    }
    s
}

#[test]
fn test_empty_set_is_admissible() {
    for af in reference_frameworks() {
        assert!(af.is_admissible(&af.empty_subset()).unwrap());
    }
}

#[test]
fn test_grounded_is_least_complete() {
    for af in reference_frameworks() {
        let grounded = grounded_extension(&af).unwrap();
        let complete = extensions(&af, Semantics::CO);
        assert!(complete.contains(&grounded));
        assert!(complete.iter().all(|c| grounded.is_subset(c)));
        assert_eq!(
            vec![grounded],
            extensions(&af, Semantics::GR).into_iter().collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_inclusion_chain() {
    for af in reference_frameworks() {
        let complete = extensions(&af, Semantics::CO);
        let preferred = extensions(&af, Semantics::PR);
        let semi_stable = extensions(&af, Semantics::SST);
        let stable = extensions(&af, Semantics::ST);
        assert!(stable.is_subset(&semi_stable));
        assert!(semi_stable.is_subset(&preferred));
        assert!(preferred.is_subset(&complete));
        for s in preferred.iter() {
            assert!(af.is_admissible(s).unwrap());
        }
        for s in all_subsets(&af) {
            if af.is_admissible(&s).unwrap() {
                assert!(af.is_conflict_free(&s).unwrap());
            }
        }
    }
}

#[test]
fn test_preferred_are_maximal_admissible() {
    for af in reference_frameworks() {
        let admissible = all_subsets(&af)
            .into_iter()
            .filter(|s| af.is_admissible(s).unwrap())
            .collect::<Vec<_>>();
        let expected = admissible
            .iter()
            .filter(|s| !admissible.iter().any(|o| s.is_proper_subset(o)))
            .cloned()
            .collect::<ExtensionSet>();
        assert_eq!(expected, extensions(&af, Semantics::PR));
    }
}

#[test]
fn test_no_self_attacker_in_extensions() {
    for af in reference_frameworks() {
        let self_attackers = self_attackers(&af);
        for semantics in Semantics::iter() {
            for ext in extensions(&af, semantics) {
                assert!(ext.is_disjoint(&self_attackers));
            }
        }
    }
}

#[test]
fn test_no_attack_means_single_extension() {
    let af = AAFramework::new(["a", "b", "c"], []).unwrap();
    for semantics in Semantics::iter() {
        let exts = new_extension_enumerator(&af, semantics, SearchBudget::unlimited())
            .enumerate_extensions()
            .unwrap();
        assert_eq!(vec![af.full_subset()], exts.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_idempotence() {
    for af in reference_frameworks() {
        for semantics in Semantics::iter() {
            assert_eq!(extensions(&af, semantics), extensions(&af, semantics));
        }
    }
}

fn labels(af: &AAFramework<&'static str>, labels: &[&'static str]) -> ArgumentSubset {
    af.subset_from_labels(labels).unwrap()
}

fn lib_extensions(af: &AAFramework<&'static str>, semantics: Semantics) -> ExtensionSet {
    new_extension_enumerator(af, semantics, SearchBudget::unlimited())
        .enumerate_extensions()
        .unwrap()
}

#[test]
fn test_chain() {
    let af = AAFramework::new(["A", "B", "C"], [("C", "B"), ("B", "A")]).unwrap();
    let a = af.argument_by_label(&"A").unwrap();
    assert_eq!(labels(&af, &["B"]), af.minus(a).unwrap());
    assert_eq!(af.empty_subset(), af.plus(a).unwrap());
    assert_eq!(
        labels(&af, &["A", "C"]),
        af.characteristic_function(&labels(&af, &["C"])).unwrap()
    );
    assert!(af.is_admissible(&labels(&af, &["C"])).unwrap());
    assert!(af.is_admissible(&labels(&af, &["A", "C"])).unwrap());
    assert_eq!(labels(&af, &["A", "C"]), grounded_extension(&af).unwrap());
    assert_eq!(
        ExtensionSet::from([labels(&af, &["A", "C"])]),
        lib_extensions(&af, Semantics::ST)
    );
}

#[test]
fn test_odd_cycle() {
    let af = AAFramework::new(["A", "B", "C"], [("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
    assert_eq!(
        labels(&af, &["C"]),
        af.characteristic_function(&labels(&af, &["A"])).unwrap()
    );
    assert!(!af.is_admissible(&labels(&af, &["A"])).unwrap());
    assert_eq!(af.empty_subset(), grounded_extension(&af).unwrap());
    assert_eq!(
        ExtensionSet::from([af.empty_subset()]),
        lib_extensions(&af, Semantics::PR)
    );
    assert!(lib_extensions(&af, Semantics::ST).is_empty());
}

#[test]
fn test_mutual_attack() {
    let af = AAFramework::new(["A", "B"], [("A", "B"), ("B", "A")]).unwrap();
    let only_a = labels(&af, &["A"]);
    let only_b = labels(&af, &["B"]);
    assert_eq!(only_a, af.characteristic_function(&only_a).unwrap());
    assert_eq!(only_b, af.characteristic_function(&only_b).unwrap());
    assert!(af.is_admissible(&only_a).unwrap());
    assert!(af.is_admissible(&only_b).unwrap());
    let expected = ExtensionSet::from([only_a, only_b]);
    assert_eq!(expected, lib_extensions(&af, Semantics::PR));
    assert_eq!(expected, lib_extensions(&af, Semantics::SST));
    assert_eq!(expected, lib_extensions(&af, Semantics::ST));
}

#[test]
fn test_empty_framework() {
    let af = AAFramework::<&'static str>::new([], []).unwrap();
    assert_eq!(af.empty_subset(), grounded_extension(&af).unwrap());
    for semantics in Semantics::iter() {
        assert_eq!(
            ExtensionSet::from([af.empty_subset()]),
            lib_extensions(&af, semantics)
        );
    }
}

#[test]
fn test_undeclared_attacker() {
    assert!(matches!(
        AAFramework::new(["Y"], [("X", "Y")]),
        Err(AAError::InvalidFramework(_))
    ));
}
