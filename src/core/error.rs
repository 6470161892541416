//! Fehlertypen des Spline-Kerns.

use thiserror::Error;

/// Fehler bei Auswertung oder Synchronisation einer B-Spline-Kurve.
///
/// Alle Fehler sind lokal zum jeweiligen Aufruf: die Kurve bleibt im
/// letzten gültigen Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplineError {
    /// Kurvenparameter liegt außerhalb von [0, 1]
    #[error("Kurvenparameter ist nicht normiert: t = {t}")]
    ParameterNotNormalized { t: f32 },
    /// Das Gleichungssystem Knoten → Kontrollpunkte ist (numerisch) singulär
    #[error("Gleichungssystem mit {points} Punkten ist nicht invertierbar")]
    NonInvertible { points: usize },
    /// Index-Zugriff auf eine leere Punktmenge
    #[error("Kurve enthält keine Punkte")]
    EmptyCurve,
}
