//! Types d'erreurs pour la conception de barcodes

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarcodeError {
    #[error("Erreur de configuration: {0}")]
    Configuration(String),

    #[error("Entrée malformée dans {path} (ligne {line}): {reason}")]
    MalformedInput {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("Ressource inaccessible {path}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Base invalide: {0}")]
    InvalidBase(char),

    #[error(
        "Contrainte infaisable: {accepted}/{target} barcodes après {attempts} tentatives ({reason})"
    )]
    InfeasibleConstraintStall {
        accepted: usize,
        target: usize,
        attempts: u64,
        reason: String,
    },

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BarcodeError {
    /// Associe une erreur IO au chemin concerné
    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BarcodeError::Resource {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BarcodeError>;
