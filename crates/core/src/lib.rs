//! BCD Core Library
//!
//! Conception de barcodes ADN de longueur fixe séparés par une distance
//! d'édition minimale, pour l'identification d'échantillons en séquençage.

pub mod designer;
pub mod distance;
pub mod error;
pub mod generator;
pub mod io;
pub mod logging;
pub mod sequence;
pub mod stats;

// Réexportations principales
pub use designer::{BarcodeDesigner, DesignConfig, DesignOutcome, DesignProgress};
pub use distance::{barcode_distance, edit_distance, find_violations, DistanceViolation};
pub use error::{BarcodeError, Result};
pub use generator::SequenceGenerator;
pub use io::{read_barcode_list, read_barcode_list_with_delimiter, write_barcodes, write_report};
pub use logging::init_logging;
// La macro log_operation est automatiquement exportée à la racine du crate
pub use sequence::{Barcode, BarcodeSet, Base};
pub use stats::SetStatistics;
