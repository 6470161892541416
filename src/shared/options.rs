//! Zentrale Konfiguration für das Katheter-Labeling.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use crate::core::{Bspline2, ReknotOptions, Topology, DEFAULT_LEVEL_OF_DETAIL};
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "catheter_label.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Kurven-Optionen.
/// Wird als `catheter_label.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveOptions {
    /// Linien-Teilstücke je Spline-Segment (Tessellierung, Bogenlänge)
    #[serde(default = "default_level_of_detail")]
    pub level_of_detail: usize,
    /// Topologie neu angelegter Kurven
    #[serde(default)]
    pub topology: Topology,
    /// Einstellungen für das Re-Knotting
    #[serde(default)]
    pub reknot: ReknotOptions,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            level_of_detail: DEFAULT_LEVEL_OF_DETAIL,
            topology: Topology::default(),
            reknot: ReknotOptions::default(),
        }
    }
}

fn default_level_of_detail() -> usize {
    DEFAULT_LEVEL_OF_DETAIL
}

impl CurveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fallback auf Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("catheter-label"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Leere Kurve mit Topologie und Detailgrad aus den Optionen.
    pub fn new_curve(&self) -> Bspline2 {
        let mut curve = Bspline2::with_topology(self.topology);
        curve.set_level_of_detail(self.level_of_detail);
        curve
    }
}
