//! Dimensions-generischer Punkt-Typ für Spline-Kurven.
//!
//! Die Kurve rechnet nur mit Vektor-Arithmetik und Komponenten-Zugriff,
//! daher genügt ein schmaler Trait über den glam-Vektoren.

use glam::{Vec2, Vec3};
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Ein D-dimensionaler Punkt (f32-Komponenten).
pub trait CurvePoint:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    /// Anzahl der Komponenten
    const DIM: usize;
    /// Nullvektor (neutrales Ergebnis vor `is_ready()`)
    const ZERO: Self;

    /// Liefert die Komponente `axis` (0-basiert, `axis < DIM`).
    fn component(&self, axis: usize) -> f32;

    /// Baut einen Punkt aus genau `DIM` Komponenten.
    fn from_components(components: &[f32]) -> Self;

    /// Euklidischer Abstand zweier Punkte.
    fn distance_to(self, other: Self) -> f32;
}

macro_rules! impl_curve_point {
    ($ty:ty, $dim:expr) => {
        impl CurvePoint for $ty {
            const DIM: usize = $dim;
            const ZERO: Self = <$ty>::ZERO;

            fn component(&self, axis: usize) -> f32 {
                self[axis]
            }

            fn from_components(components: &[f32]) -> Self {
                <$ty>::from_slice(components)
            }

            fn distance_to(self, other: Self) -> f32 {
                self.distance(other)
            }
        }
    };
}

impl_curve_point!(Vec2, 2);
impl_curve_point!(Vec3, 3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_components_roundtrip() {
        let p = Vec2::new(3.0, -4.0);
        let comps: Vec<f32> = (0..Vec2::DIM).map(|axis| p.component(axis)).collect();
        assert_eq!(Vec2::from_components(&comps), p);
        assert_eq!(p.distance_to(Vec2::ZERO), 5.0);
    }

    #[test]
    fn test_vec3_dim() {
        assert_eq!(<Vec3 as CurvePoint>::DIM, 3);
        assert_eq!(<Vec3 as CurvePoint>::ZERO, Vec3::ZERO);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).component(2), 3.0);
    }
}
