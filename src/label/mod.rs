//! Label-Export: Datensatz (Basis, Spitze, Körper) und Graustufen-Maske.
//!
//! Serialisierung (CSV/PNG) ist Sache des Aufrufers.

pub mod mask;
pub mod record;

pub use mask::{burn_mask, MASK_FOREGROUND};
pub use record::LabelRecord;
