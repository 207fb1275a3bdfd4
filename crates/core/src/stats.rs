//! Statistiques d'un jeu de barcodes
//!
//! Deux calculs indépendants: la composition en bases par position (cycle de
//! séquençage) et, pour chaque barcode, la distance d'édition minimale aux
//! autres membres du même ensemble.

use crate::distance::min_distance_to_others;
use crate::error::{BarcodeError, Result};
use crate::sequence::{Base, Barcode, BarcodeSet};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Séparateur entre les deux sections du rapport texte
pub const REPORT_SEPARATOR: &str = "------";

/// Composition d'une position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleComposition {
    /// Position, numérotée à partir de 1
    pub cycle: usize,
    /// Fractions de A, C, G, T
    pub fractions: [f64; 4],
}

impl CycleComposition {
    pub fn fraction(&self, base: Base) -> f64 {
        self.fractions[base.index()]
    }
}

/// Distance minimale d'un barcode au reste de l'ensemble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeDistance {
    pub barcode: Barcode,
    pub min_edit_distance: usize,
}

/// Statistiques complètes d'un ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetStatistics {
    pub composition: Vec<CycleComposition>,
    /// Triées dans l'ordre lexicographique des barcodes
    pub min_distances: Vec<BarcodeDistance>,
}

impl SetStatistics {
    /// Calcule les statistiques d'un ensemble de barcodes de même longueur
    ///
    /// Il faut au moins deux barcodes pour que la distance minimale soit
    /// définie.
    pub fn compute(set: &BarcodeSet) -> Result<Self> {
        if set.len() < 2 {
            return Err(BarcodeError::Configuration(format!(
                "statistiques indéfinies pour un ensemble de {} barcode(s)",
                set.len()
            )));
        }
        let length = set.uniform_length().ok_or_else(|| {
            BarcodeError::Configuration(
                "les barcodes n'ont pas tous la même longueur".to_string(),
            )
        })?;

        Ok(Self {
            composition: base_composition(set, length),
            min_distances: min_distances(set),
        })
    }

    /// Plus petite distance entre deux barcodes de l'ensemble
    pub fn overall_min_distance(&self) -> usize {
        self.min_distances
            .iter()
            .map(|d| d.min_edit_distance)
            .min()
            .unwrap_or(0)
    }

    /// Rapport texte: composition par cycle puis distances par barcode
    pub fn to_report(&self) -> String {
        let mut report = String::new();

        report.push_str("cycle nA nC nG nT\n");
        for cycle in &self.composition {
            let [a, c, g, t] = cycle.fractions;
            let _ = writeln!(report, "{} {:.2} {:.2} {:.2} {:.2}", cycle.cycle, a, c, g, t);
        }

        report.push_str(REPORT_SEPARATOR);
        report.push('\n');
        report.push_str("barcode min_edit_distance\n");
        for entry in &self.min_distances {
            let _ = writeln!(report, "{} {}", entry.barcode, entry.min_edit_distance);
        }

        report
    }

    /// Sérialise les statistiques en JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn base_composition(set: &BarcodeSet, length: usize) -> Vec<CycleComposition> {
    let mut counts = vec![[0usize; 4]; length];
    for barcode in set {
        for (position, base) in barcode.bases().enumerate() {
            counts[position][base.index()] += 1;
        }
    }

    let total = set.len() as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| CycleComposition {
            cycle: i + 1,
            fractions: count.map(|n| n as f64 / total),
        })
        .collect()
}

fn min_distances(set: &BarcodeSet) -> Vec<BarcodeDistance> {
    set.iter()
        .filter_map(|barcode| {
            min_distance_to_others(barcode, set).map(|min_edit_distance| BarcodeDistance {
                barcode: barcode.clone(),
                min_edit_distance,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(barcodes: &[&str]) -> BarcodeSet {
        barcodes.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_composition() {
        let stats = SetStatistics::compute(&set_of(&["AC", "AG", "TT", "AA"])).unwrap();

        assert_eq!(stats.composition.len(), 2);
        assert_eq!(stats.composition[0].cycle, 1);
        assert_eq!(stats.composition[0].fractions, [0.75, 0.0, 0.0, 0.25]);
        assert_eq!(stats.composition[1].fractions, [0.25, 0.25, 0.25, 0.25]);
        assert_eq!(stats.composition[1].fraction(Base::G), 0.25);
    }

    #[test]
    fn test_min_distances_sorted() {
        let stats = SetStatistics::compute(&set_of(&["GGGG", "AAAA", "AAAC"])).unwrap();
        let rows: Vec<(&str, usize)> = stats
            .min_distances
            .iter()
            .map(|d| (d.barcode.as_str(), d.min_edit_distance))
            .collect();
        assert_eq!(rows, vec![("AAAA", 1), ("AAAC", 1), ("GGGG", 4)]);
        assert_eq!(stats.overall_min_distance(), 1);
    }

    #[test]
    fn test_report_layout() {
        let stats = SetStatistics::compute(&set_of(&["AAAA", "CCCC"])).unwrap();
        let expected = "cycle nA nC nG nT\n\
                        1 0.50 0.50 0.00 0.00\n\
                        2 0.50 0.50 0.00 0.00\n\
                        3 0.50 0.50 0.00 0.00\n\
                        4 0.50 0.50 0.00 0.00\n\
                        ------\n\
                        barcode min_edit_distance\n\
                        AAAA 4\n\
                        CCCC 4\n";
        assert_eq!(stats.to_report(), expected);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let stats = SetStatistics::compute(&set_of(&["A", "C", "G"])).unwrap();
        let report = stats.to_report();
        assert!(report.contains("1 0.33 0.33 0.33 0.00\n"));
    }

    #[test]
    fn test_too_small_set() {
        assert!(matches!(
            SetStatistics::compute(&set_of(&["ACGT"])),
            Err(BarcodeError::Configuration(_))
        ));
        assert!(SetStatistics::compute(&BarcodeSet::new()).is_err());
    }

    #[test]
    fn test_mixed_lengths() {
        assert!(SetStatistics::compute(&set_of(&["ACGT", "ACG"])).is_err());
    }

    #[test]
    fn test_json() {
        let stats = SetStatistics::compute(&set_of(&["AAAA", "CCCC"])).unwrap();
        let json = stats.to_json().unwrap();
        let back: SetStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
