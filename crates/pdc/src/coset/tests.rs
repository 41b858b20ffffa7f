use super::*;
use crate::enumerate::symmetric_group;
use crate::perm::{Group, IndexSet, PermError, Permutation};
use proptest::prelude::*;
use std::collections::HashMap;

fn p(v: &[usize]) -> Permutation {
    Permutation::new(v.to_vec()).unwrap()
}

fn set(n: usize, v: &[usize]) -> IndexSet {
    IndexSet::new(n, v.iter().copied()).unwrap()
}

#[test]
fn fixture_coset_extremes_rank_and_size() {
    let w = p(&[3, 1, 4, 5, 2]);
    let (i, j) = (set(5, &[1, 3, 4]), set(5, &[2]));
    let dc = DoubleCoset::new(i.clone(), w.clone(), j.clone()).unwrap();
    assert_eq!(dc.minimal(), p(&[3, 1, 4, 5, 2]));
    assert_eq!(dc.maximal(), p(&[5, 4, 2, 3, 1]));
    assert_eq!(dc.rank(), 5);
    assert_eq!(dc.cardinality(), 24);
    assert_eq!(dc.elements().len(), 24);
    assert_eq!(cardinality(&i, &w, &j).unwrap(), 24);
    assert_eq!(rank(&i, &w, &j).unwrap(), 5);
    assert_eq!(dc.to_string(), "W_{1, 3, 4}·(3,1,4,5,2)·W_{2}");
}

#[test]
fn cardinality_of_the_whole_group_up_to_s34() {
    for n in 21..=34 {
        let full = IndexSet::full(n);
        let e = Permutation::identity(n);
        let n_factorial = Group::new(n).unwrap().order().unwrap();
        assert_eq!(parabolic_order(&full), n_factorial, "n = {n}");
        assert_eq!(cardinality(&full, &e, &full).unwrap(), n_factorial, "n = {n}");
    }
    let half = set(34, &(1..17).collect::<Vec<_>>());
    let dc = DoubleCoset::new(half.clone(), Permutation::longest(34), half).unwrap();
    let seventeen: u128 = (1..=17).product();
    assert_eq!(dc.cardinality(), seventeen * seventeen);
}

#[test]
#[should_panic(expected = "35! overflows u128")]
fn parabolic_order_past_u128_panics() {
    parabolic_order(&IndexSet::full(35));
}

#[test]
fn one_sided_extremes() {
    let w = p(&[4, 3, 1, 2, 5]);
    let j = set(5, &[1, 2]);
    assert_eq!(minimal_right(&w, &j).unwrap(), p(&[1, 3, 4, 2, 5]));
    assert_eq!(maximal_right(&w, &j).unwrap(), p(&[4, 3, 1, 2, 5]));
    let i = set(5, &[1, 2]);
    // values 1,2,3 sorted into their positions 3,4,2
    assert_eq!(minimal_left(&w, &i).unwrap(), p(&[4, 1, 2, 3, 5]));
    assert_eq!(maximal_left(&w, &i).unwrap(), p(&[4, 3, 2, 1, 5]));
}

#[test]
fn index_sets_are_checked_against_the_permutation() {
    let w = p(&[2, 1, 3]);
    let too_big = set(9, &[5]);
    assert_eq!(
        minimal_right(&w, &too_big),
        Err(PermError::IndexOutOfRange { index: 5, n: 3 })
    );
    assert!(DoubleCoset::new(IndexSet::empty(), w.clone(), too_big.clone()).is_err());
    assert!(maximal(&too_big, &w, &IndexSet::empty()).is_err());
}

#[test]
fn simple_recognizes_adjacent_transpositions_only() {
    let g = Group::new(5).unwrap();
    for k in 1..5 {
        assert_eq!(simple(&g.s(k).unwrap()), Some(k));
    }
    assert_eq!(simple(g.identity()), None);
    assert_eq!(simple(&p(&[3, 2, 1, 4, 5])), None);
    assert_eq!(simple(&p(&[2, 1, 4, 3, 5])), None);
}

#[test]
fn parabolic_order_matches_closure() {
    let g = Group::new(6).unwrap();
    for i in IndexSet::all_subsets(6) {
        let elems = parabolic_subgroup(&g, &i).unwrap();
        assert_eq!(elems.len() as u128, parabolic_order(&i), "I = {i}");
    }
    assert_eq!(parabolic_order(&set(6, &[1, 2, 4])), 12);
    assert_eq!(parabolic_order(&IndexSet::full(6)), 720);
    assert_eq!(parabolic_order(&IndexSet::empty()), 1);
}

/// Exhaustive check in S_4 against brute-force products.
#[test]
fn extremes_and_cardinality_match_brute_force_in_s4() {
    let g = Group::new(4).unwrap();
    let subsets: Vec<IndexSet> = IndexSet::all_subsets(4).collect();
    let subgroups: HashMap<IndexSet, _> = subsets
        .iter()
        .map(|i| (i.clone(), parabolic_subgroup(&g, i).unwrap()))
        .collect();
    for w in symmetric_group(4) {
        for i in &subsets {
            for j in &subsets {
                let brute = double_coset(&subgroups[i], &w, &subgroups[j]);
                let dc = DoubleCoset::new(i.clone(), w.clone(), j.clone()).unwrap();
                let shortest = brute.iter().min_by_key(|x| x.length()).unwrap();
                let longest = brute.iter().max_by_key(|x| x.length()).unwrap();
                assert_eq!(&dc.minimal(), shortest, "{dc}");
                assert_eq!(&dc.maximal(), longest, "{dc}");
                assert_eq!(dc.cardinality(), brute.len() as u128, "{dc}");
                assert_eq!(dc.elements(), brute, "{dc}");
                assert!(brute.iter().all(|x| dc.contains(x)));
            }
        }
    }
}

#[test]
fn set_equality_and_containment() {
    let g = Group::new(4).unwrap();
    let s1 = g.s(1).unwrap();
    let one = set(4, &[1]);
    let none = IndexSet::empty();
    let a = DoubleCoset::new(one.clone(), g.identity().clone(), none.clone()).unwrap();
    let b = DoubleCoset::new(none.clone(), s1.clone(), one.clone()).unwrap();
    assert_eq!(a, b);
    assert!(equals(&one, g.identity(), &none, &none, &s1, &one).unwrap());
    let big = DoubleCoset::new(set(4, &[1, 2]), g.identity().clone(), none.clone()).unwrap();
    assert!(a.is_subset_of(&big));
    assert!(!big.is_subset_of(&a));
    assert_ne!(a, big);
    let other = DoubleCoset::new(none.clone(), g.s(3).unwrap(), none).unwrap();
    assert!(!other.is_subset_of(&a));
}

#[test]
fn interval_presentations() {
    let g = Group::new(3).unwrap();
    let whole = presentation(g.identity(), g.longest()).unwrap();
    assert_eq!(whole.left(), &IndexSet::full(3));
    assert_eq!(whole.right(), &IndexSet::full(3));
    assert_eq!(whole.cardinality(), 6);

    let s1 = g.s(1).unwrap();
    let s1s2 = &s1 * &g.s(2).unwrap();
    let dc = presentation(g.identity(), &s1s2).unwrap();
    assert_eq!(dc.left(), &set(3, &[1]));
    assert_eq!(dc.right(), &set(3, &[2]));
    assert_eq!(dc.cardinality(), 4);

    assert!(is_parabolic_double_coset(&s1, g.longest()));
    assert!(is_parabolic_double_coset(&s1, &s1));

    // [e, 3412] is a Bruhat interval but not a PDC.
    let e4 = Permutation::identity(4);
    match presentation(&e4, &p(&[3, 4, 1, 2])) {
        Err(IntervalError::NotParabolic {
            left,
            right,
            minimal,
        }) => {
            assert_eq!(left, set(4, &[2]));
            assert_eq!(right, set(4, &[2]));
            assert_eq!(minimal, p(&[2, 1, 4, 3]));
        }
        other => panic!("expected NotParabolic, got {other:?}"),
    }
    assert!(!is_parabolic_double_coset(&s1, &g.s(2).unwrap()));
    assert!(matches!(
        presentation(&s1, &e4),
        Err(IntervalError::Invalid(PermError::SizeMismatch { .. }))
    ));
}

#[test]
fn every_coset_is_presented_by_its_extremes_in_s4() {
    for w in symmetric_group(4) {
        for i in IndexSet::all_subsets(4) {
            for j in IndexSet::all_subsets(4) {
                let dc = DoubleCoset::new(i.clone(), w.clone(), j.clone()).unwrap();
                let found = presentation(&dc.minimal(), &dc.maximal()).unwrap();
                assert_eq!(found, dc);
            }
        }
    }
}

fn coset_case() -> impl Strategy<Value = (Permutation, IndexSet, IndexSet)> {
    (5usize..=6).prop_flat_map(|n| {
        let gens = (1u64 << (n - 1)) - 1;
        (
            Just((1..=n).collect::<Vec<usize>>()).prop_shuffle(),
            0..=gens,
            0..=gens,
        )
            .prop_map(move |(v, mi, mj)| {
                let pick = |mask: u64| (1..n).filter(move |k| mask & (1 << (k - 1)) != 0);
                (
                    Permutation::new(v).unwrap(),
                    IndexSet::new(n, pick(mi)).unwrap(),
                    IndexSet::new(n, pick(mj)).unwrap(),
                )
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cardinality_matches_enumeration((w, i, j) in coset_case()) {
        let dc = DoubleCoset::new(i, w, j).unwrap();
        let elems = dc.elements();
        prop_assert_eq!(dc.cardinality(), elems.len() as u128);
        let lo = dc.minimal().length();
        let hi = dc.maximal().length();
        prop_assert!(elems.iter().all(|x| lo <= x.length() && x.length() <= hi));
    }

    #[test]
    fn minimal_right_is_an_idempotent_reduction((w, _i, j) in coset_case()) {
        let m = minimal_right(&w, &j).unwrap();
        prop_assert_eq!(minimal_right(&m, &j).unwrap(), m.clone());
        prop_assert!(m.length() <= w.length());
        let no_descent_in_j = j.intersection(&w.right_descent_set()).is_empty();
        prop_assert_eq!(m.length() == w.length(), no_descent_in_j);
        prop_assert!(j.intersection(&m.right_descent_set()).is_empty());
        let big = maximal_right(&w, &j).unwrap();
        prop_assert!(j.iter().all(|k| big.is_right_descent(k)));
    }

    #[test]
    fn minimal_has_no_descents_in_i_or_j((w, i, j) in coset_case()) {
        let m = minimal(&i, &w, &j).unwrap();
        prop_assert!(i.intersection(&m.left_descent_set()).is_empty());
        prop_assert!(j.intersection(&m.right_descent_set()).is_empty());
        let top = maximal(&i, &w, &j).unwrap();
        prop_assert!(i.iter().all(|k| top.is_left_descent(k)));
        prop_assert!(j.iter().all(|k| top.is_right_descent(k)));
    }
}
