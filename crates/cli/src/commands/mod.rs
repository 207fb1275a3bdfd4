//! Sous-commandes de la CLI

use anyhow::{bail, Result};

pub mod check;
pub mod design;
pub mod stats;

/// Convertit le délimiteur passé en ligne de commande en octet
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Délimiteur non ASCII: {:?}", delimiter);
    }
    Ok(delimiter as u8)
}
