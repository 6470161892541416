//! Katheter-Label (Kommandozeile).
//!
//! Liest Knotenpunkte aus einer Textdatei, legt einen kubischen B-Spline
//! hindurch und gibt den resultierenden Label-Datensatz aus.

use anyhow::{bail, Context};
use clap::Parser;
use catheter_label::{
    curve_length, knot_spacings, requantize, CurveOptions, LabelRecord, PointSet, Topology,
};
use glam::Vec2;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Katheter-Label v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse();
    let mut options = CurveOptions::load_from_file(&CurveOptions::config_path());
    if args.closed {
        options.topology = Topology::Closed;
    }

    let content = std::fs::read_to_string(&args.points_file)
        .with_context(|| format!("Punktdatei nicht lesbar: {}", args.points_file.display()))?;
    let points = parse_points(&content)
        .with_context(|| format!("Punktdatei fehlerhaft: {}", args.points_file.display()))?;

    let mut curve = options.new_curve();
    curve
        .set_points(PointSet::Knots, points)
        .context("Kontrollpunkte konnten nicht berechnet werden")?;
    log::info!("{} mit {} Knotenpunkten", curve.topology(), curve.len());

    if args.reknot {
        let report =
            requantize(&mut curve, &options.reknot).context("Re-Knotting fehlgeschlagen")?;
        log::info!(
            "Re-Knotting: {:?} nach {} Iterationen",
            report.status,
            report.iterations
        );
    }

    log::info!("Kurvenlänge: {:.2}", curve_length(&curve));
    log::info!("Knotenabstände: {:?}", knot_spacings(&curve));

    let Some(record) = LabelRecord::from_curve(&curve) else {
        bail!("Kurve braucht mindestens 4 Punkte, gelesen: {}", curve.len());
    };

    println!("base {} {}", record.base.x, record.base.y);
    println!("tip {} {}", record.tip.x, record.tip.y);
    println!("body {}", record.body_len());
    Ok(())
}

/// Kubischen B-Spline durch Knotenpunkte legen und als Label ausgeben.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "catheter-label", version)]
struct CliArgs {
    /// Textdatei mit einem Punkt `x y` je Zeile
    points_file: PathBuf,

    /// Geschlossene Kurve statt der konfigurierten Topologie
    #[arg(long)]
    closed: bool,

    /// Knotenpunkte nach Bogenlänge gleichmäßig neu verteilen
    #[arg(long)]
    reknot: bool,
}

/// Ein Punkt `x y` je Zeile, Leerzeilen und `#`-Kommentare werden ignoriert.
fn parse_points(content: &str) -> anyhow::Result<Vec<Vec2>> {
    let mut points = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
            bail!("Zeile {}: erwartet 'x y', gefunden '{}'", index + 1, line);
        };
        let x: f32 = x
            .parse()
            .with_context(|| format!("Zeile {}: ungültige x-Koordinate", index + 1))?;
        let y: f32 = y
            .parse()
            .with_context(|| format!("Zeile {}: ungültige y-Koordinate", index + 1))?;
        points.push(Vec2::new(x, y));
    }
    Ok(points)
}
