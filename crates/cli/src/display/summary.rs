//! Affichage du résumé d'une conception

use bcd_core::{DesignConfig, DesignOutcome, SetStatistics};

/// Affiche le résumé de la conception
pub fn display_summary(outcome: &DesignOutcome, stats: &SetStatistics, config: &DesignConfig) {
    let count = outcome.barcodes.len();
    let avg_gc = if count == 0 {
        0.0
    } else {
        outcome.barcodes.iter().map(|b| b.gc_ratio()).sum::<f64>() / count as f64
    };

    println!("\n┌────────────────────────────────────────────────┐");
    println!("│ Résumé de la conception                        │");
    println!("├────────────────────────────────────────────────┤");
    println!("│ Barcodes générés       : {:>8}              │", count);
    println!("│ Longueur               : {:>8} bases        │", config.barcode_length);
    println!("│ Distance demandée      : {:>8}              │", config.min_edit_distance);
    println!("│ Distance minimale      : {:>8}              │", stats.overall_min_distance());
    println!("│ GC moyen               : {:>8.1}%             │", avg_gc * 100.0);
    println!("│ Tentatives             : {:>8}              │", outcome.attempts);
    println!("│ Taux d'acceptation     : {:>8.2}%             │", outcome.acceptance_rate() * 100.0);
    println!("│ Durée                  : {:>8.2} s            │", outcome.elapsed.as_secs_f64());
    println!("└────────────────────────────────────────────────┘");
}
