//! Dichter Gleichungslöser für die Richtung Knoten → Kontrollpunkte.

use super::basis::{matrix_to_points, points_to_matrix, BandedBasis};
use super::error::SplineError;
use super::point::CurvePoint;

/// Löst `B · controls = knots` per LU-Zerlegung mit Pivotsuche.
///
/// Liefert `SplineError::NonInvertible` wenn die Zerlegung singulär ist oder
/// das Ergebnis in f32 nicht endlich wäre; es werden nie NaN-Punkte zurückgegeben.
pub fn solve_controls<P: CurvePoint>(
    basis: &BandedBasis,
    knots: &[P],
) -> Result<Vec<P>, SplineError> {
    let points = knots.len();
    debug_assert_eq!(points, basis.len());

    let rhs = points_to_matrix(knots);
    let solution = basis
        .matrix()
        .clone()
        .lu()
        .solve(&rhs)
        .ok_or(SplineError::NonInvertible { points })?;

    // Auch Werte jenseits von f32::MAX würden beim Zurückwandeln unendlich
    if solution
        .iter()
        .any(|v| !v.is_finite() || v.abs() > f64::from(f32::MAX))
    {
        return Err(SplineError::NonInvertible { points });
    }

    Ok(matrix_to_points(&solution))
}
