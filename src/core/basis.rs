//! Basis-Matrizen des kubischen uniformen B-Splines.
//!
//! - `CUBIC_BSPLINE_ROWS`: feste 4×4-Blending-Matrix für die Segment-Auswertung
//! - `BandedBasis`: N×N-Mittelungsmatrix mit `knots = B · controls`

use super::point::CurvePoint;
use super::topology::Topology;
use glam::{Mat4, Vec4};
use nalgebra::DMatrix;

/// Mindestanzahl Punkte für ein kubisches Segment.
pub const MIN_SPLINE_POINTS: usize = 4;

/// Kubische uniforme B-Spline-Blending-Matrix (Zeilen, bereits durch 6 geteilt).
pub const CUBIC_BSPLINE_ROWS: [[f32; 4]; 4] = [
    [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0],
    [-3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0],
    [3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0],
    [-1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0],
];

/// Ordnung der Auswertung: Position oder eine der drei Ableitungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Derivative {
    #[default]
    Position,
    First,
    Second,
    Third,
}

impl Derivative {
    /// Wandelt eine numerische Ordnung (0..=3) um.
    pub fn from_order(order: usize) -> Option<Self> {
        match order {
            0 => Some(Derivative::Position),
            1 => Some(Derivative::First),
            2 => Some(Derivative::Second),
            3 => Some(Derivative::Third),
            _ => None,
        }
    }

    /// Numerische Ordnung der Ableitung.
    pub fn order(self) -> usize {
        match self {
            Derivative::Position => 0,
            Derivative::First => 1,
            Derivative::Second => 2,
            Derivative::Third => 3,
        }
    }

    /// Entsprechend abgeleitete Monom-Basis `[1, t, t², t³]`.
    fn monomials(self, t: f32) -> Vec4 {
        match self {
            Derivative::Position => Vec4::new(1.0, t, t * t, t * t * t),
            Derivative::First => Vec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t),
            Derivative::Second => Vec4::new(0.0, 0.0, 2.0, 6.0 * t),
            Derivative::Third => Vec4::new(0.0, 0.0, 0.0, 6.0),
        }
    }
}

/// Gewichte der vier Kontrollpunkte `P[i-1..=i+2]` an der Stelle `t`.
///
/// Entspricht `monomials(t)ᵀ · M`; die Spalten von `blend` sind die Zeilen von `M`.
pub fn blend_weights(t: f32, derivative: Derivative) -> Vec4 {
    let blend = Mat4::from_cols_array_2d(&CUBIC_BSPLINE_ROWS);
    blend * derivative.monomials(t)
}

/// Mittelungsmatrix `B` mit `knots = B · controls` für Topologie und Punktanzahl.
#[derive(Debug, Clone, PartialEq)]
pub struct BandedBasis {
    topology: Topology,
    matrix: DMatrix<f64>,
}

impl BandedBasis {
    /// Baut die Matrix für `count` Punkte. `None` unterhalb von `MIN_SPLINE_POINTS`.
    ///
    /// Innere Zeilen tragen `1/6, 2/3, 1/6` um die Diagonale. `Open` setzt die
    /// erste und letzte Zeile auf Identität (geklemmte Endpunkte), `Closed`
    /// läuft in jeder Zeile modulo N um (zirkulante Matrix).
    pub fn build(topology: Topology, count: usize) -> Option<Self> {
        if count < MIN_SPLINE_POINTS {
            return None;
        }

        let mut matrix = DMatrix::<f64>::zeros(count, count);
        for row in 0..count {
            let is_boundary = row == 0 || row == count - 1;
            if topology == Topology::Open && is_boundary {
                matrix[(row, row)] = 1.0;
                continue;
            }
            matrix[(row, (row + count - 1) % count)] += 1.0 / 6.0;
            matrix[(row, row)] += 2.0 / 3.0;
            matrix[(row, (row + 1) % count)] += 1.0 / 6.0;
        }

        Some(Self { topology, matrix })
    }

    /// Topologie, für die die Matrix gebaut wurde.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Anzahl der Punkte (Zeilen bzw. Spalten).
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    /// Die Matrix ist nie leer (siehe `build`).
    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }

    /// Dichte Matrix-Darstellung.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Berechnet `B · points` (Kontrollpunkte → Knotenpunkte).
    pub fn apply<P: CurvePoint>(&self, points: &[P]) -> Vec<P> {
        debug_assert_eq!(points.len(), self.len());
        let rhs = points_to_matrix(points);
        let product = &self.matrix * rhs;
        matrix_to_points(&product)
    }
}

/// Punktliste als N×D-Matrix (eine Zeile je Punkt).
pub(crate) fn points_to_matrix<P: CurvePoint>(points: &[P]) -> DMatrix<f64> {
    DMatrix::from_fn(points.len(), P::DIM, |row, axis| {
        f64::from(points[row].component(axis))
    })
}

/// N×D-Matrix zurück in eine Punktliste.
pub(crate) fn matrix_to_points<P: CurvePoint>(matrix: &DMatrix<f64>) -> Vec<P> {
    let mut components = vec![0.0f32; P::DIM];
    (0..matrix.nrows())
        .map(|row| {
            for (axis, value) in components.iter_mut().enumerate() {
                *value = matrix[(row, axis)] as f32;
            }
            P::from_components(&components)
        })
        .collect()
}
