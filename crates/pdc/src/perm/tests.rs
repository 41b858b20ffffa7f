use super::*;
use proptest::prelude::*;

fn perm_of(n: usize) -> impl Strategy<Value = Permutation> {
    Just((1..=n).collect::<Vec<usize>>())
        .prop_shuffle()
        .prop_map(|v| Permutation::new(v).unwrap())
}

fn same_size_triple() -> impl Strategy<Value = (Permutation, Permutation, Permutation)> {
    (1usize..=8).prop_flat_map(|n| (perm_of(n), perm_of(n), perm_of(n)))
}

#[test]
fn construction_rejects_non_bijections() {
    assert!(matches!(
        Permutation::new(vec![1, 1, 3]),
        Err(PermError::NotABijection { .. })
    ));
    assert!(matches!(
        Permutation::new(vec![0, 1, 2]),
        Err(PermError::NotABijection { .. })
    ));
    assert!(matches!(
        Permutation::new(vec![1, 2, 4]),
        Err(PermError::NotABijection { .. })
    ));
    assert_eq!(Permutation::new(vec![]), Err(PermError::EmptyGroup));
    assert_eq!(Group::new(0), Err(PermError::EmptyGroup));
}

#[test]
fn parse_accepts_common_notations() {
    let expected = Permutation::new(vec![3, 1, 4, 5, 2]).unwrap();
    for text in ["3,1,4,5,2", "(3, 1, 4, 5, 2)", "[3 1 4 5 2]", " 3 1 4 5 2 "] {
        assert_eq!(text.parse::<Permutation>().unwrap(), expected, "{text}");
    }
    assert_eq!(expected.to_string(), "3,1,4,5,2");
    assert!(matches!(
        "3,x,1".parse::<Permutation>(),
        Err(PermError::Parse { .. })
    ));
    assert!(matches!("()".parse::<Permutation>(), Err(PermError::Parse { .. })));
}

#[test]
fn multiplication_permutes_positions_on_the_right() {
    let g = Group::new(5).unwrap();
    let w = g.perm(vec![3, 1, 4, 5, 2]).unwrap();
    let s2 = g.s(2).unwrap();
    assert_eq!(s2.as_slice(), &[1, 3, 2, 4, 5]);
    // right: swap positions 2,3
    assert_eq!(g.multiply(&w, &s2).unwrap().as_slice(), &[3, 4, 1, 5, 2]);
    // left: swap values 2,3
    assert_eq!(g.multiply(&s2, &w).unwrap().as_slice(), &[2, 1, 4, 5, 3]);
    assert_eq!(w.swap_positions(2), &w * &s2);
    assert_eq!(w.swap_values(2), &s2 * &w);
}

#[test]
fn checked_operations_report_bad_sizes_and_indices() {
    let g = Group::new(4).unwrap();
    let small = Permutation::identity(3);
    assert_eq!(
        g.multiply(g.identity(), &small),
        Err(PermError::SizeMismatch {
            expected: 4,
            found: 3
        })
    );
    assert_eq!(g.s(0), Err(PermError::IndexOutOfRange { index: 0, n: 4 }));
    assert_eq!(g.s(4), Err(PermError::IndexOutOfRange { index: 4, n: 4 }));
    assert!(g.index_set([1, 3]).is_ok());
    assert_eq!(
        g.index_set([1, 4]),
        Err(PermError::IndexOutOfRange { index: 4, n: 4 })
    );
    assert!(g.perm(vec![2, 1]).is_err());
}

#[test]
fn longest_element_and_order() {
    let g = Group::new(5).unwrap();
    assert_eq!(g.longest().as_slice(), &[5, 4, 3, 2, 1]);
    assert_eq!(g.longest().length(), 10);
    assert_eq!(g.identity().length(), 0);
    assert_eq!(g.order(), Some(120));
    assert_eq!(Group::new(20).unwrap().order(), Some(2_432_902_008_176_640_000));
    assert!(Group::new(34).unwrap().order().is_some());
    assert_eq!(Group::new(35).unwrap().order(), None);
}

#[test]
fn index_set_blocks_and_subsets() {
    let set = IndexSet::new(9, [1, 2, 3, 5, 7, 8]).unwrap();
    assert_eq!(set.blocks(), vec![(1, 3), (5, 5), (7, 8)]);
    assert_eq!(set.to_string(), "{1, 2, 3, 5, 7, 8}");
    assert!(IndexSet::empty().blocks().is_empty());
    assert_eq!(IndexSet::all_subsets(5).count(), 16);
    assert_eq!(IndexSet::all_subsets(1).count(), 1);
    assert_eq!(IndexSet::all_subsets(64).next(), Some(IndexSet::empty()));
    assert_eq!(IndexSet::full(4), IndexSet::new(4, [1, 2, 3]).unwrap());
}

#[test]
fn ascent_sets_of_a_fixture() {
    let w = Permutation::new(vec![3, 1, 4, 5, 2]).unwrap();
    let set = |v: &[usize]| IndexSet::new(5, v.iter().copied()).unwrap();
    assert_eq!(w.right_ascent_set(), set(&[2, 3]));
    assert_eq!(w.right_descent_set(), set(&[1, 4]));
    assert_eq!(w.small_right_ascent_set(), set(&[3]));
    assert_eq!(w.large_right_ascent_set(), set(&[2]));
    // positions: 1@2, 2@5, 3@1, 4@3, 5@4
    assert_eq!(w.left_ascent_set(), set(&[1, 3, 4]));
    assert_eq!(w.left_descent_set(), set(&[2]));
    assert_eq!(w.small_left_ascent_set(), set(&[4]));
    assert_eq!(w.large_left_ascent_set(), set(&[1, 3]));
    // out-of-range indices are neither ascents nor descents
    assert!(!w.is_right_ascent(0) && !w.is_right_descent(5));
}

proptest! {
    #[test]
    fn group_axioms((w, x, y) in same_size_triple()) {
        prop_assert_eq!(&(&w * &x) * &y, &w * &(&x * &y));
        prop_assert!((&w * &w.inverse()).is_identity());
        prop_assert!((&w.inverse() * &w).is_identity());
        prop_assert_eq!(w.inverse().inverse(), w.clone());
        prop_assert_eq!(w.inverse().length(), w.length());
    }

    #[test]
    fn conjugation_by_longest_matches_products(w in (1usize..=8).prop_flat_map(perm_of)) {
        let w0 = Permutation::longest(w.n());
        prop_assert_eq!(w.conjugate_by_longest(), &w0 * &(&w * &w0));
        prop_assert_eq!(w.conjugate_by_longest().length(), w.length());
    }

    #[test]
    fn ascents_and_descents_partition_generators(w in (2usize..=8).prop_flat_map(perm_of)) {
        let g = Group::new(w.n()).unwrap();
        for k in 1..w.n() {
            prop_assert!(w.is_left_ascent(k) ^ w.is_left_descent(k));
            prop_assert!(w.is_right_ascent(k) ^ w.is_right_descent(k));
            let sk = g.s(k).unwrap();
            prop_assert_eq!(w.is_right_ascent(k), (&w * &sk).length() > w.length());
            prop_assert_eq!(w.is_left_ascent(k), (&sk * &w).length() > w.length());
            prop_assert_eq!(w.is_small_left_ascent(k), w.inverse().is_small_right_ascent(k));
            prop_assert!(!(w.is_small_right_ascent(k) && w.is_large_right_ascent(k)));
        }
    }
}

#[test]
#[should_panic(expected = "all_subsets supports n <= 64")]
fn all_subsets_rejects_masks_wider_than_u64() {
    let _ = IndexSet::all_subsets(65);
}
