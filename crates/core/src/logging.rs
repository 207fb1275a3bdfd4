//! Initialisation du logging pour la conception de barcodes

use tracing_subscriber::{fmt, EnvFilter};

/// Niveau par défaut selon le nombre de `-v` passés en ligne de commande
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise le système de logging
///
/// `RUST_LOG` est prioritaire; sinon le niveau dépend de `verbosity`.
/// Les événements vont sur stderr pour ne pas se mélanger aux résultats.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Un subscriber déjà installé (tests, appel multiple) n'est pas une erreur
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Macro pour le logging des opérations critiques
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::info!("Fin de l'opération: {}", $name);
        result
    }};
}
