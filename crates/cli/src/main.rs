//! CLI pour la conception de barcodes ADN

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{check, design, stats};

#[derive(Parser)]
#[command(name = "bcd")]
#[command(about = "Conception de barcodes ADN à distance d'édition minimale", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Génère de nouveaux barcodes compatibles avec une liste existante
    Design {
        /// Nombre de barcodes à générer
        #[arg(short, long, default_value = "384")]
        number_of_barcodes: usize,

        /// Longueur des barcodes
        #[arg(short, long, default_value = "11")]
        length: usize,

        /// Distance d'édition minimale entre deux barcodes
        #[arg(short = 'e', long, default_value = "3")]
        min_edit_distance: usize,

        /// Liste de barcodes existants (premier champ de chaque ligne)
        #[arg(short, long)]
        input_barcode_list: Option<PathBuf>,

        /// Délimiteur de la liste existante
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Préfixe des résultats (<prefix>.txt)
        #[arg(short, long)]
        output: PathBuf,

        /// Préfixe des statistiques (<prefix>.stats), par défaut celui des résultats
        #[arg(short, long)]
        stats_output: Option<PathBuf>,

        /// Nombre maximal de candidats tirés
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Durée maximale de la génération, en secondes
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Seed pour reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Calcule les statistiques d'une liste de barcodes
    Stats {
        /// Liste de barcodes
        #[arg(short, long)]
        input: PathBuf,

        /// Délimiteur de la liste
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Fichier de sortie (sinon sortie standard)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format du rapport
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Vérifie la distance minimale entre tous les barcodes d'une liste
    Check {
        /// Liste de barcodes à vérifier
        #[arg(short, long)]
        input: PathBuf,

        /// Liste de barcodes existants à prendre en compte
        #[arg(short = 'x', long)]
        existing: Option<PathBuf>,

        /// Délimiteur des listes
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Distance d'édition minimale attendue
        #[arg(short = 'e', long, default_value = "3")]
        min_edit_distance: usize,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum ReportFormat {
    Text,
    Json,
    Table,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bcd_core::init_logging(cli.verbose);

    match cli.command {
        Commands::Design {
            number_of_barcodes,
            length,
            min_edit_distance,
            input_barcode_list,
            delimiter,
            output,
            stats_output,
            max_attempts,
            timeout_secs,
            seed,
        } => {
            let args = design::DesignArgs {
                number_of_barcodes,
                length,
                min_edit_distance,
                input_barcode_list,
                delimiter,
                output,
                stats_output,
                max_attempts,
                timeout_secs,
                seed,
            };
            bcd_core::log_operation!("design", { design::run(args) })?;
        }
        Commands::Stats {
            input,
            delimiter,
            output,
            format,
        } => {
            bcd_core::log_operation!("stats", { stats::run(input, delimiter, output, format) })?;
        }
        Commands::Check {
            input,
            existing,
            delimiter,
            min_edit_distance,
        } => {
            bcd_core::log_operation!("check", {
                check::run(input, existing, delimiter, min_edit_distance)
            })?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb
}
