//! Générateur de séquences aléatoires de longueur fixe

use crate::sequence::{Base, Barcode};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flux infini de barcodes aléatoires
///
/// Chaque position est tirée uniformément et indépendamment dans {A, C, G, T}.
/// Le générateur ne connaît aucun ensemble de barcodes: il ne fait que
/// consommer de l'aléa. `next()` ne retourne jamais `None`.
pub struct SequenceGenerator<R: Rng> {
    rng: R,
    length: usize,
    buffer: Vec<Base>,
}

impl SequenceGenerator<ChaCha8Rng> {
    /// Générateur reproductible à partir d'un seed
    pub fn seeded(length: usize, seed: u64) -> Self {
        Self::new(length, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Générateur initialisé depuis l'entropie du système
    pub fn from_entropy(length: usize) -> Self {
        Self::new(length, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> SequenceGenerator<R> {
    /// Crée un générateur à partir d'une source d'aléa explicite
    pub fn new(length: usize, rng: R) -> Self {
        Self {
            rng,
            length,
            buffer: Vec::with_capacity(length),
        }
    }

    /// Longueur des barcodes produits
    pub fn length(&self) -> usize {
        self.length
    }

    /// Tire une base uniformément
    pub fn random_base(&mut self) -> Base {
        Base::ALL[self.rng.gen_range(0..Base::ALL.len())]
    }

    /// Tire le prochain barcode
    pub fn next_barcode(&mut self) -> Barcode {
        self.buffer.clear();
        for _ in 0..self.length {
            let base = self.random_base();
            self.buffer.push(base);
        }
        Barcode::from_bases(&self.buffer)
    }
}

impl<R: Rng> Iterator for SequenceGenerator<R> {
    type Item = Barcode;

    fn next(&mut self) -> Option<Barcode> {
        Some(self.next_barcode())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_alphabet() {
        let mut generator = SequenceGenerator::seeded(11, 42);
        for barcode in generator.by_ref().take(200) {
            assert_eq!(barcode.len(), 11);
            assert!(barcode.as_str().chars().all(|c| "ACGT".contains(c)));
        }
        assert_eq!(generator.length(), 11);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a: Vec<Barcode> = SequenceGenerator::seeded(8, 7).take(20).collect();
        let b: Vec<Barcode> = SequenceGenerator::seeded(8, 7).take(20).collect();
        assert_eq!(a, b);

        let c: Vec<Barcode> = SequenceGenerator::seeded(8, 8).take(20).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_all_bases_drawn() {
        let mut generator = SequenceGenerator::seeded(1, 1);
        let mut seen = [false; 4];
        for barcode in generator.by_ref().take(500) {
            for base in barcode.bases() {
                seen[base.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_never_exhausted() {
        let generator = SequenceGenerator::seeded(4, 3);
        assert_eq!(generator.size_hint().1, None);
        assert_eq!(generator.skip(10_000).take(1).count(), 1);
    }
}
