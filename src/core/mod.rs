//! Spline-Kern: duale B-Spline-Darstellung, Bogenlänge, Rasterisierung.

pub mod arc_length;
pub mod basis;
/// Kubischer B-Spline mit Knoten- und Kontrollpunkten
///
/// Die zuletzt geschriebene Darstellung ist die Quelle, die andere wird
/// über `BandedBasis` und den LU-Löser neu berechnet.
pub mod curve;
pub mod error;
pub mod point;
pub mod raster;
pub mod solver;
pub mod topology;

pub use arc_length::{
    curve_length, knot_spacings, requantize, ReknotOptions, ReknotReport, ReknotStatus,
};
pub use basis::{blend_weights, BandedBasis, Derivative, CUBIC_BSPLINE_ROWS, MIN_SPLINE_POINTS};
pub use curve::{Bspline2, BsplineCurve, CurveEnd, PointSet, DEFAULT_LEVEL_OF_DETAIL};
pub use error::SplineError;
pub use point::CurvePoint;
pub use raster::{continuous_points, to_pixel_path};
pub use solver::solve_controls;
pub use topology::Topology;
