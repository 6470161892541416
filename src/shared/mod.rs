//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von Binary und Tests
//! gleichermaßen genutzt wird.

pub mod options;

pub use options::{CurveOptions, CONFIG_FILE_NAME};
