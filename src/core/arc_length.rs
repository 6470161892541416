//! Bogenlänge und bogenlängen-gleichmäßige Neuverteilung der Knotenpunkte.
//!
//! Die Länge wird über die Tessellierung angenähert (`lod` Linien-Teilstücke
//! je Segment). Das Re-Knotting ersetzt die Knotenpunkte iterativ durch
//! Punkte mit gleichem Bogenabstand, bis sich die Knoten kaum noch bewegen.

use super::basis::Derivative;
use super::curve::{BsplineCurve, PointSet};
use super::error::SplineError;
use super::point::CurvePoint;
use super::topology::Topology;
use serde::{Deserialize, Serialize};

/// Abbruchschwelle: euklidische Norm der Knoten-Änderung je Iteration.
pub const REKNOT_CONVERGENCE_TOLERANCE: f32 = 0.1;
/// Maximale Anzahl Re-Knotting-Iterationen.
pub const REKNOT_MAX_ITERATIONS: usize = 50;
/// Unterhalb dieses lokalen Anteils wird der Startpunkt des Teilstücks übernommen.
pub const REKNOT_MIN_FRACTION: f32 = 0.01;

/// Einstellungen für `requantize`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReknotOptions {
    /// Konvergenz, sobald sich die Knoten um weniger als diesen Betrag ändern
    pub convergence_tolerance: f32,
    /// Harte Obergrenze der Iterationen
    pub max_iterations: usize,
    /// Lokaler Parameter-Anteil, unter dem keine neue Auswertung erfolgt
    pub min_fraction: f32,
}

impl Default for ReknotOptions {
    fn default() -> Self {
        Self {
            convergence_tolerance: REKNOT_CONVERGENCE_TOLERANCE,
            max_iterations: REKNOT_MAX_ITERATIONS,
            min_fraction: REKNOT_MIN_FRACTION,
        }
    }
}

/// Ausgang eines Re-Knotting-Laufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReknotStatus {
    /// Knoten-Änderung unter der Toleranz
    Converged,
    /// Iterationsgrenze erreicht, Kurve enthält das letzte Zwischenergebnis
    IterationLimit,
    /// Kurve nicht bereit oder ohne Länge, nichts verändert
    Skipped,
}

/// Ergebnis von `requantize`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReknotReport {
    pub status: ReknotStatus,
    /// Anzahl durchlaufener Iterationen
    pub iterations: usize,
    /// Knoten-Änderung der letzten Iteration
    pub residual: f32,
}

impl ReknotReport {
    pub fn converged(&self) -> bool {
        self.status == ReknotStatus::Converged
    }
}

/// Ein Linien-Teilstück der Tessellierung.
#[derive(Debug, Clone, Copy)]
struct Chord<P> {
    segment: usize,
    t0: f32,
    t1: f32,
    start: P,
    end: P,
}

/// Alle Teilstücke der Kurve in Parametrisierungs-Reihenfolge.
fn chords<P: CurvePoint>(curve: &BsplineCurve<P>) -> impl Iterator<Item = Chord<P>> + '_ {
    let lod = curve.level_of_detail();
    (0..curve.segment_count()).flat_map(move |segment| {
        (0..lod).map(move |step| {
            let t0 = step as f32 / lod as f32;
            let t1 = (step + 1) as f32 / lod as f32;
            Chord {
                segment,
                t0,
                t1,
                start: curve.sample(segment, t0, Derivative::Position),
                end: curve.sample(segment, t1, Derivative::Position),
            }
        })
    })
}

/// Bogenlänge eines einzelnen logischen Segments.
fn segment_length<P: CurvePoint>(curve: &BsplineCurve<P>, segment: usize) -> f32 {
    let lod = curve.level_of_detail();
    let mut previous = curve.sample(segment, 0.0, Derivative::Position);
    let mut length = 0.0;
    for step in 1..=lod {
        let point = curve.sample(segment, step as f32 / lod as f32, Derivative::Position);
        length += previous.distance_to(point);
        previous = point;
    }
    length
}

/// Approximierte Gesamtlänge der Kurve. 0 solange die Kurve nicht bereit ist.
pub fn curve_length<P: CurvePoint>(curve: &BsplineCurve<P>) -> f32 {
    chords(curve)
        .map(|chord| chord.start.distance_to(chord.end))
        .sum()
}

/// Bogenlänge zwischen aufeinanderfolgenden Knotenpunkten.
///
/// `Open`: N - 1 Werte; die Randabstände enthalten jeweils zwei Segmente.
/// `Closed`: N Werte, der letzte schließt die Schleife zu Knoten 0.
pub fn knot_spacings<P: CurvePoint>(curve: &BsplineCurve<P>) -> Vec<f32> {
    let lengths: Vec<f32> = (0..curve.segment_count())
        .map(|segment| segment_length(curve, segment))
        .collect();
    if lengths.is_empty() {
        return lengths;
    }

    match curve.topology() {
        Topology::Closed => lengths,
        Topology::Open => {
            let n = curve.knot_points().len();
            let mut spacings = Vec::with_capacity(n - 1);
            spacings.push(lengths[0] + lengths[1]);
            spacings.extend_from_slice(&lengths[2..n - 1]);
            spacings.push(lengths[n - 1] + lengths[n]);
            spacings
        }
    }
}

/// Verteilt die Knotenpunkte gleichmäßig nach Bogenlänge.
///
/// Der erste Knoten (und bei `Open` der letzte) bleibt exakt erhalten, die
/// Punktanzahl ändert sich nicht. Wiederholt bis die Knoten-Änderung unter
/// `convergence_tolerance` liegt, höchstens `max_iterations` Mal.
pub fn requantize<P: CurvePoint>(
    curve: &mut BsplineCurve<P>,
    options: &ReknotOptions,
) -> Result<ReknotReport, SplineError> {
    let mut report = ReknotReport {
        status: ReknotStatus::Skipped,
        iterations: 0,
        residual: 0.0,
    };
    if !curve.is_ready() {
        return Ok(report);
    }

    while report.iterations < options.max_iterations {
        let Some(new_knots) = equidistant_knots(curve, options.min_fraction) else {
            log::debug!("Re-Knotting übersprungen: Kurve hat keine Länge");
            return Ok(report);
        };

        report.iterations += 1;
        report.residual = knot_displacement(curve.knot_points(), &new_knots);
        curve.set_points(PointSet::Knots, new_knots)?;

        if report.residual < options.convergence_tolerance {
            report.status = ReknotStatus::Converged;
            log::info!(
                "Re-Knotting konvergiert nach {} Iterationen (Δ = {:.4})",
                report.iterations,
                report.residual
            );
            return Ok(report);
        }
    }

    report.status = ReknotStatus::IterationLimit;
    log::warn!(
        "Re-Knotting nach {} Iterationen nicht konvergiert (Δ = {:.4})",
        report.iterations,
        report.residual
    );
    Ok(report)
}

/// Ein Durchlauf: neue Knoten mit gleichem Bogenabstand auf der aktuellen Kurve.
///
/// `None` wenn die Kurve (nahezu) keine Länge hat.
fn equidistant_knots<P: CurvePoint>(curve: &BsplineCurve<P>, min_fraction: f32) -> Option<Vec<P>> {
    let knots = curve.knot_points();
    let count = knots.len();
    let (intervals, interior) = match curve.topology() {
        Topology::Open => (count - 1, count - 2),
        Topology::Closed => (count, count - 1),
    };

    let total = curve_length(curve);
    if total <= f32::EPSILON {
        return None;
    }
    let spacing = total / intervals as f32;

    let mut result = Vec::with_capacity(count);
    result.push(knots[0]);

    let mut target = spacing;
    let mut travelled = 0.0f32;
    let mut last_point = knots[0];

    for chord in chords(curve) {
        let begin = travelled;
        travelled += chord.start.distance_to(chord.end);
        last_point = chord.end;

        while result.len() <= interior && travelled >= target {
            let fraction = (target - begin) / (travelled - begin);
            let point = if fraction < min_fraction {
                chord.start
            } else {
                let t = chord.t0 + fraction * (chord.t1 - chord.t0);
                curve.sample(chord.segment, t, Derivative::Position)
            };
            result.push(point);
            target += spacing;
        }
    }

    // Rundungsreste am Kurvenende
    while result.len() <= interior {
        result.push(last_point);
    }

    if curve.topology() == Topology::Open {
        result.push(knots[count - 1]);
    }
    Some(result)
}

/// Euklidische Norm der Differenz zweier gleich langer Punktfolgen.
fn knot_displacement<P: CurvePoint>(old: &[P], new: &[P]) -> f32 {
    old.iter()
        .zip(new)
        .map(|(a, b)| {
            let d = a.distance_to(*b);
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests;
