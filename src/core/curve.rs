//! Kubischer uniformer B-Spline mit dualer Darstellung.
//!
//! Die Kurve hält zwei Punktmengen:
//! - **Knotenpunkte**: Punkte, durch die die Kurve verläuft
//! - **Kontrollpunkte**: Kontrollpolygon, aus dem die Kurve geblendet wird
//!
//! Die zuletzt geschriebene Menge ist die Quelle (`driver`), die andere wird
//! bei jeder Änderung vollständig neu berechnet. Jede mutierende Methode ist
//! transaktional: schlägt die Synchronisation fehl, bleibt der alte Zustand.

use super::basis::{blend_weights, BandedBasis, Derivative, MIN_SPLINE_POINTS};
use super::error::SplineError;
use super::point::CurvePoint;
use super::solver::solve_controls;
use super::topology::Topology;
use glam::Vec2;

/// Standard-Detailgrad: Linien-Teilstücke je Spline-Segment.
pub const DEFAULT_LEVEL_OF_DETAIL: usize = 30;

/// Welche der beiden Punktmengen angesprochen wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointSet {
    /// Interpolations-Darstellung
    Knots,
    /// Kontrollpolygon
    Controls,
}

/// Ende der Punktfolge für Einfügen/Entfernen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveEnd {
    Front,
    Back,
}

/// Kubischer uniformer B-Spline über D-dimensionalen Punkten.
#[derive(Debug, Clone, PartialEq)]
pub struct BsplineCurve<P: CurvePoint> {
    topology: Topology,
    knots: Vec<P>,
    controls: Vec<P>,
    driver: PointSet,
    level_of_detail: usize,
}

/// Ebene Kurve, wie sie beim Labeln verwendet wird.
pub type Bspline2 = BsplineCurve<Vec2>;

impl<P: CurvePoint> Default for BsplineCurve<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CurvePoint> BsplineCurve<P> {
    /// Erstellt eine leere, offene Kurve.
    pub fn new() -> Self {
        Self::with_topology(Topology::Open)
    }

    /// Erstellt eine leere Kurve mit gegebener Topologie.
    pub fn with_topology(topology: Topology) -> Self {
        Self {
            topology,
            knots: Vec::new(),
            controls: Vec::new(),
            driver: PointSet::Knots,
            level_of_detail: DEFAULT_LEVEL_OF_DETAIL,
        }
    }

    /// Entfernt alle Punkte. Topologie und Detailgrad bleiben erhalten.
    pub fn clear(&mut self) {
        self.knots.clear();
        self.controls.clear();
        self.driver = PointSet::Knots;
    }

    /// `true` sobald beide Darstellungen mindestens vier Punkte haben.
    pub fn is_ready(&self) -> bool {
        self.knots.len() >= MIN_SPLINE_POINTS && self.controls.len() >= MIN_SPLINE_POINTS
    }

    /// Anzahl der Punkte (beide Darstellungen sind gleich lang).
    pub fn len(&self) -> usize {
        self.knots.len().max(self.controls.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Zuletzt geschriebene Darstellung.
    pub fn driver(&self) -> PointSet {
        self.driver
    }

    pub fn level_of_detail(&self) -> usize {
        self.level_of_detail
    }

    /// Setzt den Detailgrad (mindestens 1). Löst keine Synchronisation aus.
    pub fn set_level_of_detail(&mut self, level_of_detail: usize) {
        self.level_of_detail = level_of_detail.max(1);
    }

    pub fn knot_points(&self) -> &[P] {
        &self.knots
    }

    pub fn control_points(&self) -> &[P] {
        &self.controls
    }

    /// Punktmenge `set` als Slice.
    pub fn points(&self, set: PointSet) -> &[P] {
        match set {
            PointSet::Knots => &self.knots,
            PointSet::Controls => &self.controls,
        }
    }

    /// Punkt an einem topologie-aufgelösten Index.
    pub fn point_at(&self, index: isize, set: PointSet) -> Option<P> {
        let resolved = self.resolve_index(index)?;
        self.points(set).get(resolved).copied()
    }

    /// Löst einen Index nach der Topologie auf (zyklisch bzw. geklemmt).
    ///
    /// Die Punktanzahl ist das Maximum beider Darstellungen.
    pub fn resolve_index(&self, index: isize) -> Option<usize> {
        self.topology.resolve_index(index, self.len())
    }

    /// Wechselt die Topologie und synchronisiert aus der aktuellen Quelle neu.
    pub fn set_topology(&mut self, topology: Topology) -> Result<(), SplineError> {
        if topology == self.topology {
            return Ok(());
        }
        let driving = self.points(self.driver).to_vec();
        let derived = derive_points(topology, self.driver, &driving)?;
        self.topology = topology;
        self.commit(self.driver, driving, derived);
        Ok(())
    }

    /// Fügt einen Punkt am gewählten Ende der Darstellung `set` ein.
    pub fn add_point(&mut self, end: CurveEnd, set: PointSet, point: P) -> Result<(), SplineError> {
        let mut driving = self.points(set).to_vec();
        match end {
            CurveEnd::Front => driving.insert(0, point),
            CurveEnd::Back => driving.push(point),
        }
        self.synchronize(set, driving)
    }

    /// Ersetzt die Darstellung `set` vollständig.
    pub fn set_points<I>(&mut self, set: PointSet, points: I) -> Result<(), SplineError>
    where
        I: IntoIterator<Item = P>,
    {
        self.synchronize(set, points.into_iter().collect())
    }

    /// Entfernt den Randpunkt am gewählten Ende. Leere Darstellung: keine Änderung.
    pub fn remove_point(&mut self, end: CurveEnd, set: PointSet) -> Result<(), SplineError> {
        let mut driving = self.points(set).to_vec();
        if driving.is_empty() {
            return Ok(());
        }
        match end {
            CurveEnd::Front => {
                driving.remove(0);
            }
            CurveEnd::Back => {
                driving.pop();
            }
        }
        self.synchronize(set, driving)
    }

    /// Überschreibt den Punkt am topologie-aufgelösten Index.
    pub fn set_point_at(
        &mut self,
        index: isize,
        set: PointSet,
        point: P,
    ) -> Result<(), SplineError> {
        let mut driving = self.points(set).to_vec();
        let resolved = self
            .topology
            .resolve_index(index, driving.len())
            .ok_or(SplineError::EmptyCurve)?;
        driving[resolved] = point;
        self.synchronize(set, driving)
    }

    /// Anzahl logischer Segmente.
    ///
    /// `Open`: N + 1 (vom ersten bis zum letzten Knotenpunkt, inkl. Randsegmente),
    /// `Closed`: N (Segment N-1 schließt die Schleife). 0 solange nicht bereit.
    pub fn segment_count(&self) -> usize {
        if !self.is_ready() {
            return 0;
        }
        match self.topology {
            Topology::Open => self.controls.len() + 1,
            Topology::Closed => self.controls.len(),
        }
    }

    /// Wertet Segment `segment` an der Stelle `t ∈ [0, 1]` aus.
    ///
    /// Vor `is_ready()` liefert die Auswertung den Nullvektor.
    pub fn evaluate(
        &self,
        segment: usize,
        t: f32,
        derivative: Derivative,
    ) -> Result<P, SplineError> {
        if !(0.0..=1.0).contains(&t) {
            return Err(SplineError::ParameterNotNormalized { t });
        }
        Ok(self.sample(segment, t, derivative))
    }

    /// Auswertung ohne Parameterprüfung; `t` muss in [0, 1] liegen.
    pub(crate) fn sample(&self, segment: usize, t: f32, derivative: Derivative) -> P {
        if self.controls.len() < MIN_SPLINE_POINTS {
            return P::ZERO;
        }

        let count = self.controls.len();
        // Segment vor der Umwandlung begrenzen, sonst läuft `center + offset` über
        let center = match self.topology {
            Topology::Open => segment.min(count) as isize - 1,
            Topology::Closed => (segment % count) as isize,
        };
        let weights = blend_weights(t, derivative);
        let control = |offset: isize| {
            let index = self
                .topology
                .resolve_index(center + offset, count)
                .unwrap_or_default();
            self.controls[index]
        };

        control(-1) * weights.x + control(0) * weights.y + control(1) * weights.z
            + control(2) * weights.w
    }

    /// Dichte Polyline für die Darstellung: `segment_count · lod + 1` Punkte.
    pub fn tessellate(&self) -> Vec<P> {
        let segments = self.segment_count();
        if segments == 0 {
            return Vec::new();
        }
        let lod = self.level_of_detail;
        let mut polyline = Vec::with_capacity(segments * lod + 1);
        polyline.push(self.sample(0, 0.0, Derivative::Position));
        for segment in 0..segments {
            for step in 1..=lod {
                let t = step as f32 / lod as f32;
                polyline.push(self.sample(segment, t, Derivative::Position));
            }
        }
        polyline
    }

    /// Berechnet die abgeleitete Darstellung und übernimmt beide.
    fn synchronize(&mut self, set: PointSet, driving: Vec<P>) -> Result<(), SplineError> {
        let derived = derive_points(self.topology, set, &driving)?;
        self.commit(set, driving, derived);
        Ok(())
    }

    fn commit(&mut self, set: PointSet, driving: Vec<P>, derived: Vec<P>) {
        log::debug!(
            "B-Spline synchronisiert: {} Punkte, Quelle {:?}, {}",
            driving.len(),
            set,
            self.topology
        );
        match set {
            PointSet::Knots => {
                self.knots = driving;
                self.controls = derived;
            }
            PointSet::Controls => {
                self.controls = driving;
                self.knots = derived;
            }
        }
        self.driver = set;
    }
}

/// Leitet die jeweils andere Darstellung aus `driving` ab.
///
/// Unterhalb von vier Punkten gibt es keine Basis-Matrix; die abgeleitete
/// Menge spiegelt dann die Quelle, damit beide gleich lang bleiben.
fn derive_points<P: CurvePoint>(
    topology: Topology,
    set: PointSet,
    driving: &[P],
) -> Result<Vec<P>, SplineError> {
    let Some(basis) = BandedBasis::build(topology, driving.len()) else {
        return Ok(driving.to_vec());
    };
    match set {
        PointSet::Controls => Ok(basis.apply(driving)),
        PointSet::Knots => solve_controls(&basis, driving),
    }
}
