//! Commande de conception

use crate::{create_progress_bar, create_spinner};
use crate::display::summary::display_summary;
use super::delimiter_byte;
use anyhow::Result;
use bcd_core::{
    read_barcode_list_with_delimiter, write_barcodes, write_report, BarcodeDesigner, BarcodeError,
    BarcodeSet, DesignConfig, SetStatistics,
};
use console::style;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Arguments de la commande `design`
pub struct DesignArgs {
    pub number_of_barcodes: usize,
    pub length: usize,
    pub min_edit_distance: usize,
    pub input_barcode_list: Option<PathBuf>,
    pub delimiter: char,
    pub output: PathBuf,
    pub stats_output: Option<PathBuf>,
    pub max_attempts: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub seed: Option<u64>,
}

pub fn run(args: DesignArgs) -> Result<()> {
    println!("🧬 Conception de {} barcodes", args.number_of_barcodes);

    // 1. Configuration, vérifiée avant tout travail
    let mut config = DesignConfig::new(args.number_of_barcodes, args.length, args.min_edit_distance);
    config.max_attempts = args.max_attempts;
    config.time_budget = args.timeout_secs.map(Duration::from_secs);
    config.rng_seed = args.seed;
    config.validate()?;
    // Le rapport de distances exige au moins deux nouveaux barcodes
    if config.number_of_barcodes < 2 {
        return Err(BarcodeError::Configuration(
            "au moins deux barcodes sont nécessaires pour les statistiques".to_string(),
        )
        .into());
    }

    let delimiter = delimiter_byte(args.delimiter)?;

    let results_path = with_suffix(&args.output, "txt");
    let stats_path = with_suffix(args.stats_output.as_ref().unwrap_or(&args.output), "stats");

    // 2. Barcodes existants
    let seeds = match &args.input_barcode_list {
        Some(path) => {
            let spinner = create_spinner("Lecture des barcodes existants...");
            let seeds = read_barcode_list_with_delimiter(path, delimiter)?;
            spinner.finish_with_message(format!("{} barcodes existants", seeds.len()));
            seeds
        }
        None => BarcodeSet::new(),
    };

    // 3. Génération
    let pb = create_progress_bar(config.number_of_barcodes as u64, "Génération des barcodes...");
    let mut designer = BarcodeDesigner::new(config)?;
    let outcome = designer.design_with_progress(&seeds, |progress| {
        pb.set_position(progress.accepted as u64);
        pb.set_message(format!("{} tentatives", progress.attempts));
    });
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            pb.abandon_with_message("Génération interrompue");
            return Err(err.into());
        }
    };
    pb.finish_with_message(format!("{} barcodes générés", outcome.barcodes.len()));

    // 4. Statistiques, sur les nouveaux barcodes uniquement
    let stats = SetStatistics::compute(&outcome.barcodes)?;

    // 5. Écriture
    write_barcodes(&results_path, &outcome.barcodes)?;
    println!("wrote {}", results_path.display());
    write_report(&stats_path, &stats.to_report())?;
    println!("wrote {}", stats_path.display());

    display_summary(&outcome, &stats, designer.config());

    println!("\n{}", style("✅ Conception terminée!").green());

    Ok(())
}

/// Ajoute une extension au préfixe sans remplacer une extension existante
fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(".");
    path.push(suffix);
    PathBuf::from(path)
}
