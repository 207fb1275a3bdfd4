//! Distance d'édition (Levenshtein) entre barcodes

use crate::sequence::{Barcode, BarcodeSet};
use bio::alignment::distance::levenshtein;
use serde::{Deserialize, Serialize};

/// Nombre minimal d'insertions, délétions et substitutions pour passer de
/// `a` à `b`
///
/// Symétrique, nulle ssi `a == b`, définie pour des longueurs quelconques.
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    levenshtein(a, b) as usize
}

/// Distance d'édition entre deux barcodes
pub fn barcode_distance(a: &Barcode, b: &Barcode) -> usize {
    edit_distance(a.as_bytes(), b.as_bytes())
}

/// Vérifie que `candidate` est à distance >= `min_distance` de tous les
/// barcodes fournis; s'arrête à la première violation
pub fn is_far_enough<'a, I>(candidate: &Barcode, others: I, min_distance: usize) -> bool
where
    I: IntoIterator<Item = &'a Barcode>,
{
    others
        .into_iter()
        .all(|other| barcode_distance(candidate, other) >= min_distance)
}

/// Distance minimale de `barcode` aux autres membres de `set`
///
/// `None` si `set` ne contient aucun autre barcode.
pub fn min_distance_to_others(barcode: &Barcode, set: &BarcodeSet) -> Option<usize> {
    set.iter()
        .filter(|other| *other != barcode)
        .map(|other| barcode_distance(barcode, other))
        .min()
}

/// Paire de barcodes trop proches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceViolation {
    pub first: Barcode,
    pub second: Barcode,
    pub distance: usize,
}

/// Liste toutes les paires de `set ∪ extra` à distance < `min_distance`
///
/// Les paires internes à `extra` ne sont pas vérifiées: `extra` joue le rôle
/// d'un jeu de barcodes existants supposé valide.
pub fn find_violations(
    set: &BarcodeSet,
    extra: &BarcodeSet,
    min_distance: usize,
) -> Vec<DistanceViolation> {
    let members: Vec<&Barcode> = set.iter().collect();
    let mut violations = Vec::new();

    for (i, first) in members.iter().enumerate() {
        for second in &members[i + 1..] {
            let distance = barcode_distance(first, second);
            if distance < min_distance {
                violations.push(DistanceViolation {
                    first: (*first).clone(),
                    second: (*second).clone(),
                    distance,
                });
            }
        }

        for second in extra.iter().filter(|other| !set.contains(other)) {
            let distance = barcode_distance(first, second);
            if distance < min_distance {
                violations.push(DistanceViolation {
                    first: (*first).clone(),
                    second: second.clone(),
                    distance,
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bc(s: &str) -> Barcode {
        s.parse().unwrap()
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(edit_distance(b"ACGT", b"ACGT"), 0);
        assert_eq!(edit_distance(b"ACGT", b"ACCT"), 1);
        assert_eq!(edit_distance(b"AAAA", b"CCCC"), 4);
        // Un décalage coûte moins cher que des substitutions
        assert_eq!(edit_distance(b"ACGTA", b"CGTAC"), 2);
    }

    #[test]
    fn test_unequal_lengths() {
        assert_eq!(edit_distance(b"", b"ACG"), 3);
        assert_eq!(edit_distance(b"ACGT", b"ACG"), 1);
        assert_eq!(edit_distance(b"GATTACA", b"GCATGCT"), 4);
    }

    #[test]
    fn test_is_far_enough_short_circuit() {
        let set: BarcodeSet = [bc("AAAA"), bc("CCCC")].into_iter().collect();
        assert!(is_far_enough(&bc("GGGG"), &set, 4));
        assert!(!is_far_enough(&bc("AAAC"), &set, 2));
        // Un doublon est toujours rejeté pour un minimum positif
        assert!(!is_far_enough(&bc("AAAA"), &set, 1));
        assert!(is_far_enough(&bc("AAAA"), &BarcodeSet::new(), 10));
    }

    #[test]
    fn test_min_distance_to_others() {
        let set: BarcodeSet = [bc("AAAA"), bc("AAAC"), bc("GGGG")].into_iter().collect();
        assert_eq!(min_distance_to_others(&bc("AAAA"), &set), Some(1));
        assert_eq!(min_distance_to_others(&bc("GGGG"), &set), Some(4));

        let single: BarcodeSet = [bc("AAAA")].into_iter().collect();
        assert_eq!(min_distance_to_others(&bc("AAAA"), &single), None);
    }

    #[test]
    fn test_find_violations() {
        let set: BarcodeSet = [bc("AAAA"), bc("AAAC"), bc("GGGG")].into_iter().collect();
        let extra: BarcodeSet = [bc("GGGT"), bc("TTTT"), bc("TTTA")].into_iter().collect();

        let violations = find_violations(&set, &extra, 2);
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| v.first == bc("AAAA") && v.second == bc("AAAC") && v.distance == 1));
        assert!(violations
            .iter()
            .any(|v| v.first == bc("GGGG") && v.second == bc("GGGT") && v.distance == 1));
    }
}
