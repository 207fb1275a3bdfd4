//! Propriétés de la distance d'édition

use bcd_core::edit_distance;
use proptest::prelude::*;

fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop::sample::select(b"ACGT".to_vec()), 0..=max_len)
}

proptest! {
    #[test]
    fn test_symmetric(a in dna(16), b in dna(16)) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn test_zero_iff_equal(a in dna(16), b in dna(16)) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
        prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn test_triangle_inequality(a in dna(10), b in dna(10), c in dna(10)) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    #[test]
    fn test_bounds(a in dna(16), b in dna(16)) {
        let d = edit_distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn test_not_above_hamming(a in dna(12)) {
        let b: Vec<u8> = a.iter().rev().copied().collect();
        let hamming = a.iter().zip(&b).filter(|(x, y)| x != y).count();
        prop_assert!(edit_distance(&a, &b) <= hamming);
    }
}
