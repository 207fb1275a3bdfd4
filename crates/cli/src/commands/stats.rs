//! Commande de statistiques

use super::delimiter_byte;
use crate::ReportFormat;
use anyhow::Result;
use bcd_core::{read_barcode_list_with_delimiter, write_report, Base, SetStatistics};
use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    delimiter: char,
    output: Option<PathBuf>,
    format: ReportFormat,
) -> Result<()> {
    let barcodes = read_barcode_list_with_delimiter(&input, delimiter_byte(delimiter)?)?;
    let stats = SetStatistics::compute(&barcodes)?;

    let rendered = match format {
        ReportFormat::Text => stats.to_report(),
        ReportFormat::Json => stats.to_json()?,
        ReportFormat::Table => render_table(&stats),
    };

    match output {
        Some(path) => {
            write_report(&path, &rendered)?;
            println!("wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Composition par cycle et distances sous forme de tableaux
fn render_table(stats: &SetStatistics) -> String {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct CycleRow {
        #[tabled(rename = "Cycle")]
        cycle: usize,
        #[tabled(rename = "A")]
        a: String,
        #[tabled(rename = "C")]
        c: String,
        #[tabled(rename = "G")]
        g: String,
        #[tabled(rename = "T")]
        t: String,
    }

    #[derive(Tabled)]
    struct DistanceRow {
        #[tabled(rename = "Barcode")]
        barcode: String,
        #[tabled(rename = "Min Edit Distance")]
        min_edit_distance: usize,
    }

    let cycles: Vec<CycleRow> = stats
        .composition
        .iter()
        .map(|cycle| {
            let [a, c, g, t] = Base::ALL.map(|base| format!("{:.2}", cycle.fraction(base)));
            CycleRow {
                cycle: cycle.cycle,
                a,
                c,
                g,
                t,
            }
        })
        .collect();

    let distances: Vec<DistanceRow> = stats
        .min_distances
        .iter()
        .map(|entry| DistanceRow {
            barcode: entry.barcode.to_string(),
            min_edit_distance: entry.min_edit_distance,
        })
        .collect();

    format!("{}\n\n{}\n", Table::new(cycles), Table::new(distances))
}
