//! Bases, barcodes et ensembles de barcodes

use crate::error::{BarcodeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Nucléotides de l'alphabet des barcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Les quatre bases, dans l'ordre des colonnes du rapport
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Convertit un caractère en base
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            _ => Err(BarcodeError::InvalidBase(c)),
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }

    /// Index de la base dans `Base::ALL`
    pub fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::C => 1,
            Base::G => 2,
            Base::T => 3,
        }
    }

    /// Retourne true si c'est une base GC
    pub fn is_gc(self) -> bool {
        matches!(self, Base::G | Base::C)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Base {
    type Error = BarcodeError;

    fn try_from(c: char) -> Result<Self> {
        Base::from_char(c)
    }
}

/// Barcode: chaîne immuable sur {A, C, G, T}
///
/// L'ordre (`Ord`) est l'ordre lexicographique de la chaîne.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Construit un barcode à partir de bases
    pub fn from_bases(bases: &[Base]) -> Self {
        Self(bases.iter().map(|b| b.as_char()).collect())
    }

    /// Retourne la longueur du barcode
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Retourne true si le barcode est vide
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Itère sur les bases du barcode
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        // Le contenu est validé à la construction
        self.0.bytes().map(|b| match b {
            b'A' => Base::A,
            b'C' => Base::C,
            b'G' => Base::G,
            _ => Base::T,
        })
    }

    /// Ratio GC (0-1)
    pub fn gc_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.bases().filter(|b| b.is_gc()).count() as f64 / self.len() as f64
    }
}

impl FromStr for Barcode {
    type Err = BarcodeError;

    /// Parse un barcode; les minuscules sont acceptées et normalisées
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .chars()
            .map(|c| Base::from_char(c).map(Base::as_char))
            .collect::<Result<String>>()?;
        Ok(Self(normalized))
    }
}

impl TryFrom<String> for Barcode {
    type Error = BarcodeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.0
    }
}

impl AsRef<[u8]> for Barcode {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ensemble de barcodes sans doublons, parcouru dans l'ordre lexicographique
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeSet {
    barcodes: BTreeSet<Barcode>,
}

impl BarcodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un barcode; retourne false s'il était déjà présent
    pub fn insert(&mut self, barcode: Barcode) -> bool {
        self.barcodes.insert(barcode)
    }

    pub fn contains(&self, barcode: &Barcode) -> bool {
        self.barcodes.contains(barcode)
    }

    pub fn len(&self) -> usize {
        self.barcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barcodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Barcode> {
        self.barcodes.iter()
    }

    /// Longueur commune des barcodes, ou `None` si l'ensemble est vide
    /// ou hétérogène
    pub fn uniform_length(&self) -> Option<usize> {
        let mut lengths = self.barcodes.iter().map(Barcode::len);
        let first = lengths.next()?;
        lengths.all(|len| len == first).then_some(first)
    }
}

impl FromIterator<Barcode> for BarcodeSet {
    fn from_iter<I: IntoIterator<Item = Barcode>>(iter: I) -> Self {
        Self {
            barcodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Barcode> for BarcodeSet {
    fn extend<I: IntoIterator<Item = Barcode>>(&mut self, iter: I) {
        self.barcodes.extend(iter);
    }
}

impl IntoIterator for BarcodeSet {
    type Item = Barcode;
    type IntoIter = std::collections::btree_set::IntoIter<Barcode>;

    fn into_iter(self) -> Self::IntoIter {
        self.barcodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a BarcodeSet {
    type Item = &'a Barcode;
    type IntoIter = std::collections::btree_set::Iter<'a, Barcode>;

    fn into_iter(self) -> Self::IntoIter {
        self.barcodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_conversion() {
        assert_eq!(Base::from_char('A').unwrap(), Base::A);
        assert_eq!(Base::from_char('g').unwrap(), Base::G);
        assert!(Base::from_char('N').is_err());
        assert_eq!(Base::T.as_char(), 'T');
    }

    #[test]
    fn test_base_index_matches_all() {
        for (i, base) in Base::ALL.iter().enumerate() {
            assert_eq!(base.index(), i);
        }
    }

    #[test]
    fn test_barcode_parse_normalizes_case() {
        let barcode: Barcode = "acgT".parse().unwrap();
        assert_eq!(barcode.as_str(), "ACGT");
        assert_eq!(barcode.len(), 4);
    }

    #[test]
    fn test_barcode_parse_rejects_invalid_base() {
        let err = "ACNT".parse::<Barcode>().unwrap_err();
        assert!(matches!(err, BarcodeError::InvalidBase('N')));
    }

    #[test]
    fn test_barcode_bases_roundtrip() {
        let bases = vec![Base::G, Base::A, Base::T, Base::C];
        let barcode = Barcode::from_bases(&bases);
        assert_eq!(barcode.to_string(), "GATC");
        assert_eq!(barcode.bases().collect::<Vec<_>>(), bases);
    }

    #[test]
    fn test_gc_ratio() {
        let barcode: Barcode = "GCAT".parse().unwrap();
        assert!((barcode.gc_ratio() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_barcode_set_is_sorted_and_unique() {
        let set: BarcodeSet = ["TTTT", "AAAA", "CCCC", "AAAA"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        assert_eq!(set.len(), 3);
        let ordered: Vec<&str> = set.iter().map(Barcode::as_str).collect();
        assert_eq!(ordered, vec!["AAAA", "CCCC", "TTTT"]);
    }

    #[test]
    fn test_uniform_length() {
        let mut set = BarcodeSet::new();
        assert_eq!(set.uniform_length(), None);

        set.insert("ACGT".parse().unwrap());
        set.insert("TTTT".parse().unwrap());
        assert_eq!(set.uniform_length(), Some(4));

        set.insert("ACG".parse().unwrap());
        assert_eq!(set.uniform_length(), None);
    }

    #[test]
    fn test_barcode_serde() {
        let barcode: Barcode = "ACGT".parse().unwrap();
        let json = serde_json::to_string(&barcode).unwrap();
        assert_eq!(json, "\"ACGT\"");

        let back: Barcode = serde_json::from_str("\"acgt\"").unwrap();
        assert_eq!(back, barcode);
        assert!(serde_json::from_str::<Barcode>("\"ACXT\"").is_err());
    }
}
