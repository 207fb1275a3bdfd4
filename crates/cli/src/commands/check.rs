//! Commande de vérification

use super::delimiter_byte;
use anyhow::{bail, Result};
use bcd_core::{find_violations, read_barcode_list_with_delimiter, BarcodeSet};
use console::style;
use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    existing: Option<PathBuf>,
    delimiter: char,
    min_edit_distance: usize,
) -> Result<()> {
    println!("🔍 Vérification de: {}", input.display());

    let delimiter = delimiter_byte(delimiter)?;
    let barcodes = read_barcode_list_with_delimiter(&input, delimiter)?;
    let existing = match existing {
        Some(path) => read_barcode_list_with_delimiter(&path, delimiter)?,
        None => BarcodeSet::new(),
    };
    println!(
        "{} barcodes, {} existants, distance minimale attendue {}",
        barcodes.len(),
        existing.len(),
        min_edit_distance
    );

    let violations = find_violations(&barcodes, &existing, min_edit_distance);
    if violations.is_empty() {
        println!("\n{}", style("✅ Toutes les paires respectent la distance minimale").green());
        return Ok(());
    }

    for violation in &violations {
        println!(
            "   {} {} distance {}",
            violation.first, violation.second, violation.distance
        );
    }
    bail!(
        "{} paire(s) sous la distance minimale de {}",
        violations.len(),
        min_edit_distance
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_tab_delimited_existing_list() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("new.tsv");
        let existing = dir.path().join("seeds.tsv");
        fs::write(&input, "CCCC\tn1\n").unwrap();
        fs::write(&existing, "AAAA\ts1\n").unwrap();

        run(input.clone(), Some(existing.clone()), '\t', 4).unwrap();
        fs::write(&existing, "CCCA\ts1\n").unwrap();
        assert!(run(input, Some(existing), '\t', 4).is_err());
    }
}
