//! Lecture et écriture des listes de barcodes et des rapports

use crate::error::{BarcodeError, Result};
use crate::sequence::{Barcode, BarcodeSet};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Délimiteur par défaut des listes de barcodes existants
pub const DEFAULT_DELIMITER: u8 = b',';

/// Lit une liste de barcodes délimitée par des virgules
pub fn read_barcode_list(path: &Path) -> Result<BarcodeSet> {
    read_barcode_list_with_delimiter(path, DEFAULT_DELIMITER)
}

/// Lit une liste de barcodes: le premier champ de chaque ligne est retenu
///
/// Les doublons sont fusionnés. Une ligne vide, ou dont le premier champ est
/// vide ou contient autre chose que A/C/G/T, est une entrée malformée.
pub fn read_barcode_list_with_delimiter(path: &Path, delimiter: u8) -> Result<BarcodeSet> {
    let content = fs::read(path).map_err(|e| BarcodeError::resource(path, e))?;
    // Le lecteur CSV ignore les lignes vides sans les signaler
    if let Some(line) = first_blank_line(&content) {
        return Err(BarcodeError::MalformedInput {
            path: path.to_path_buf(),
            line,
            reason: "ligne vide".to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(content.as_slice());

    let mut barcodes = BarcodeSet::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let field = record.get(0).unwrap_or("");
        if field.is_empty() {
            return Err(BarcodeError::MalformedInput {
                path: path.to_path_buf(),
                line,
                reason: "premier champ vide".to_string(),
            });
        }

        let barcode: Barcode = field.parse().map_err(|e| BarcodeError::MalformedInput {
            path: path.to_path_buf(),
            line,
            reason: format!("{} ({})", e, field),
        })?;
        barcodes.insert(barcode);
    }

    info!("{} barcodes lus depuis {}", barcodes.len(), path.display());
    Ok(barcodes)
}

/// Numéro (à partir de 1) de la première ligne vide, hors fin de fichier
fn first_blank_line(content: &[u8]) -> Option<u64> {
    if content.is_empty() {
        return None;
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n')
        .position(|line| line.is_empty() || line == b"\r")
        .map(|index| index as u64 + 1)
}

fn csv_error(path: &Path, err: csv::Error) -> BarcodeError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => BarcodeError::resource(path, source),
        _ => BarcodeError::MalformedInput {
            path: path.to_path_buf(),
            line,
            reason,
        },
    }
}

/// Écrit un barcode par ligne, dans l'ordre lexicographique
pub fn write_barcodes(path: &Path, barcodes: &BarcodeSet) -> Result<()> {
    write_atomic(path, |writer| {
        for barcode in barcodes {
            writeln!(writer, "{}", barcode)?;
        }
        Ok(())
    })?;
    info!("{} barcodes écrits dans {}", barcodes.len(), path.display());
    Ok(())
}

/// Écrit un rapport texte
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    write_atomic(path, |writer| writer.write_all(report.as_bytes()))?;
    info!("Rapport écrit dans {}", path.display());
    Ok(())
}

/// Écrit dans un fichier temporaire du même répertoire puis le renomme:
/// en cas d'erreur, la destination n'est jamais laissée tronquée
fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> std::io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_file_in(dir, path).map_err(|e| BarcodeError::resource(path, e))?;
    {
        let mut writer = BufWriter::new(&mut temp);
        write(&mut writer).map_err(|e| BarcodeError::resource(path, e))?;
        writer.flush().map_err(|e| BarcodeError::resource(path, e))?;
    }
    temp.persist(path)
        .map_err(|e| BarcodeError::resource(path, e.error))?;
    Ok(())
}

/// Fichier temporaire avec les permissions qu'aurait le fichier final:
/// celles de la destination si elle existe, sinon 0666 moins l'umask
fn temp_file_in(dir: &Path, destination: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = match fs::metadata(destination) {
            Ok(metadata) if metadata.is_file() => metadata.permissions(),
            _ => fs::Permissions::from_mode(0o666),
        };
        builder.permissions(permissions);
    }
    #[cfg(not(unix))]
    let _ = destination;
    builder.tempfile_in(dir)
}
