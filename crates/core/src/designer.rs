//! Construction d'un jeu de barcodes par échantillonnage avec rejet
//!
//! Les candidats aléatoires sont acceptés s'ils sont à distance d'édition
//! suffisante de tous les barcodes déjà retenus (existants et nouveaux).

use crate::distance::is_far_enough;
use crate::error::{BarcodeError, Result};
use crate::generator::SequenceGenerator;
use crate::sequence::{Barcode, BarcodeSet};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Nombre de rejets consécutifs entre deux avertissements de blocage
pub const STALL_WARNING_INTERVAL: u64 = 1_000_000;

/// Paramètres de conception
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    /// Nombre de nouveaux barcodes à produire
    pub number_of_barcodes: usize,
    /// Longueur des barcodes
    pub barcode_length: usize,
    /// Distance d'édition minimale entre deux barcodes
    pub min_edit_distance: usize,
    /// Nombre maximal de candidats tirés (aucune limite par défaut)
    pub max_attempts: Option<u64>,
    /// Durée maximale de la boucle de génération
    pub time_budget: Option<Duration>,
    /// Seed pour reproductibilité
    pub rng_seed: Option<u64>,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            number_of_barcodes: 384,
            barcode_length: 11,
            min_edit_distance: 3,
            max_attempts: None,
            time_budget: None,
            rng_seed: None,
        }
    }
}

impl DesignConfig {
    /// Crée une configuration sans limite d'essais
    pub fn new(number_of_barcodes: usize, barcode_length: usize, min_edit_distance: usize) -> Self {
        Self {
            number_of_barcodes,
            barcode_length,
            min_edit_distance,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Définit le seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Vérifie les paramètres avant tout travail de génération
    pub fn validate(&self) -> Result<()> {
        if self.barcode_length == 0 {
            return Err(BarcodeError::Configuration(
                "la longueur des barcodes doit être >= 1".to_string(),
            ));
        }
        if self.number_of_barcodes == 0 {
            return Err(BarcodeError::Configuration(
                "le nombre de barcodes doit être >= 1".to_string(),
            ));
        }
        if self.min_edit_distance == 0 {
            return Err(BarcodeError::Configuration(
                "la distance d'édition minimale doit être >= 1".to_string(),
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(BarcodeError::Configuration(
                "le nombre maximal de tentatives doit être >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Rejette les paramètres dont l'infaisabilité est évidente
    ///
    /// Deux chaînes de longueur L sont au plus à distance L, et il n'existe
    /// que 4^L chaînes distinctes.
    pub fn check_feasibility(&self, seed_count: usize) -> Result<()> {
        let total = seed_count as u128 + self.number_of_barcodes as u128;

        if total >= 2 && self.min_edit_distance > self.barcode_length {
            return Err(self.infeasible(format!(
                "distance minimale {} > longueur {}",
                self.min_edit_distance, self.barcode_length
            )));
        }

        let capacity = u32::try_from(self.barcode_length)
            .ok()
            .and_then(|len| 4u128.checked_pow(len));
        if let Some(capacity) = capacity {
            if total > capacity {
                return Err(self.infeasible(format!(
                    "{} barcodes demandés pour {} séquences possibles",
                    total, capacity
                )));
            }
        }

        Ok(())
    }

    fn infeasible(&self, reason: String) -> BarcodeError {
        BarcodeError::InfeasibleConstraintStall {
            accepted: 0,
            target: self.number_of_barcodes,
            attempts: 0,
            reason,
        }
    }
}

/// État de la génération transmis au suivi de progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignProgress {
    /// Barcodes acceptés jusqu'ici
    pub accepted: usize,
    /// Nombre de barcodes visé
    pub target: usize,
    /// Candidats tirés jusqu'ici
    pub attempts: u64,
}

/// Résultat d'une conception
#[derive(Debug, Clone)]
pub struct DesignOutcome {
    /// Nouveaux barcodes uniquement (sans les barcodes existants)
    pub barcodes: BarcodeSet,
    /// Nombre total de candidats tirés
    pub attempts: u64,
    pub elapsed: Duration,
}

impl DesignOutcome {
    /// Taux d'acceptation des candidats
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.barcodes.len() as f64 / self.attempts as f64
    }
}

/// Concepteur de barcodes
pub struct BarcodeDesigner<R: Rng> {
    config: DesignConfig,
    generator: SequenceGenerator<R>,
}

impl BarcodeDesigner<ChaCha8Rng> {
    /// Crée un concepteur; utilise `rng_seed` s'il est défini
    pub fn new(config: DesignConfig) -> Result<Self> {
        let generator = match config.rng_seed {
            Some(seed) => SequenceGenerator::seeded(config.barcode_length, seed),
            None => SequenceGenerator::from_entropy(config.barcode_length),
        };
        Self::from_generator(config, generator)
    }
}

impl<R: Rng> BarcodeDesigner<R> {
    /// Crée un concepteur avec une source d'aléa explicite
    pub fn with_rng(config: DesignConfig, rng: R) -> Result<Self> {
        let generator = SequenceGenerator::new(config.barcode_length, rng);
        Self::from_generator(config, generator)
    }

    /// Crée un concepteur à partir d'un générateur existant
    pub fn from_generator(config: DesignConfig, generator: SequenceGenerator<R>) -> Result<Self> {
        config.validate()?;
        if generator.length() != config.barcode_length {
            return Err(BarcodeError::Configuration(format!(
                "le générateur produit des barcodes de longueur {} au lieu de {}",
                generator.length(),
                config.barcode_length
            )));
        }
        Ok(Self { config, generator })
    }

    /// Retourne la configuration
    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Produit les nouveaux barcodes compatibles avec `seed_set`
    pub fn design(&mut self, seed_set: &BarcodeSet) -> Result<DesignOutcome> {
        self.design_with_progress(seed_set, |_| {})
    }

    /// Comme `design`, en appelant `on_accept` après chaque barcode accepté
    pub fn design_with_progress<F>(
        &mut self,
        seed_set: &BarcodeSet,
        mut on_accept: F,
    ) -> Result<DesignOutcome>
    where
        F: FnMut(&DesignProgress),
    {
        let config = &self.config;
        let target = config.number_of_barcodes;
        let min_distance = config.min_edit_distance;

        if let Some(bad) = seed_set.iter().find(|b| b.len() != config.barcode_length) {
            return Err(BarcodeError::Configuration(format!(
                "le barcode existant {} a une longueur {} au lieu de {}",
                bad,
                bad.len(),
                config.barcode_length
            )));
        }
        config.check_feasibility(seed_set.len())?;

        info!(
            "Conception de {} barcodes (longueur {}, distance >= {}, {} existants)",
            target,
            config.barcode_length,
            min_distance,
            seed_set.len()
        );

        let start = Instant::now();
        let mut working_set = seed_set.clone();
        let mut new_set = BarcodeSet::new();
        let mut attempts: u64 = 0;
        let mut rejections_in_a_row: u64 = 0;

        while new_set.len() < target {
            if let Some(max_attempts) = config.max_attempts {
                if attempts >= max_attempts {
                    return Err(BarcodeError::InfeasibleConstraintStall {
                        accepted: new_set.len(),
                        target,
                        attempts,
                        reason: format!("limite de {} tentatives atteinte", max_attempts),
                    });
                }
            }
            if let Some(budget) = config.time_budget {
                if start.elapsed() >= budget {
                    return Err(BarcodeError::InfeasibleConstraintStall {
                        accepted: new_set.len(),
                        target,
                        attempts,
                        reason: format!("budget de temps de {:?} épuisé", budget),
                    });
                }
            }

            let candidate: Barcode = self.generator.next_barcode();
            attempts += 1;

            if is_far_enough(&candidate, &working_set, min_distance) {
                working_set.insert(candidate.clone());
                new_set.insert(candidate);
                rejections_in_a_row = 0;

                debug!("{} barcodes générés", new_set.len());
                on_accept(&DesignProgress {
                    accepted: new_set.len(),
                    target,
                    attempts,
                });
            } else {
                rejections_in_a_row += 1;
                if rejections_in_a_row % STALL_WARNING_INTERVAL == 0 {
                    warn!(
                        "{} rejets consécutifs ({}/{} barcodes): les paramètres sont peut-être infaisables",
                        rejections_in_a_row,
                        new_set.len(),
                        target
                    );
                }
            }
        }

        let elapsed = start.elapsed();
        info!(
            "{} barcodes générés en {} tentatives ({:?})",
            new_set.len(),
            attempts,
            elapsed
        );

        Ok(DesignOutcome {
            barcodes: new_set,
            attempts,
            elapsed,
        })
    }
}
