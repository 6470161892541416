//! Kurven-Topologie und die davon abhängige Index-Auflösung.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offene (geklemmte) oder geschlossene (zyklische) Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Freie Endpunkte, Indizes werden abgeschnitten
    #[default]
    Open,
    /// Schleife ohne Anfang und Ende, Indizes laufen modulo N um
    Closed,
}

impl Topology {
    /// Löst einen beliebigen (auch negativen) Index gegen `count` Punkte auf.
    ///
    /// - `Closed`: zyklisch, `-1` → `count - 1`, `count` → `0`
    /// - `Open`: auf `[0, count - 1]` geklemmt
    ///
    /// Gibt `None` zurück wenn `count == 0`.
    pub fn resolve_index(self, index: isize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let resolved = match self {
            Topology::Closed => index.rem_euclid(count as isize) as usize,
            Topology::Open => index.clamp(0, count as isize - 1) as usize,
        };
        Some(resolved)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Open => f.write_str("Open B-spline"),
            Topology::Closed => f.write_str("Closed B-spline"),
        }
    }
}
