//! Label-Datensatz eines Frames: Basis, Spitze und Körperpunkte.

use crate::core::{continuous_points, Bspline2};
use glam::IVec2;

/// Geordnete Punktfolge eines gelabelten Katheters.
///
/// Die Reihenfolge entspricht der Parametrisierung der Kurve: der erste
/// Punkt ist die Basis, der letzte die Spitze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// Erster Pfadpunkt
    pub base: IVec2,
    /// Letzter Pfadpunkt
    pub tip: IVec2,
    /// Vollständiger Pfad inklusive Basis und Spitze
    pub body: Vec<IVec2>,
}

impl LabelRecord {
    /// Baut den Datensatz aus einem Pixelpfad. `None` für einen leeren Pfad.
    pub fn from_path(path: Vec<IVec2>) -> Option<Self> {
        let base = *path.first()?;
        let tip = *path.last()?;
        Some(Self {
            base,
            tip,
            body: path,
        })
    }

    /// Baut den Datensatz aus dem lückenlosen Pixelpfad der Kurve.
    pub fn from_curve(curve: &Bspline2) -> Option<Self> {
        Self::from_path(continuous_points(curve))
    }

    /// Anzahl der Körperpunkte.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}
