//! Katheter-Labeling Library.
//! Spline-Kern, Label-Export und Konfiguration als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod label;
pub mod shared;

pub use core::{
    curve_length, knot_spacings, requantize, Bspline2, BsplineCurve, CurveEnd, CurvePoint,
    Derivative, PointSet, ReknotOptions, ReknotReport, ReknotStatus, SplineError, Topology,
};
pub use core::{continuous_points, to_pixel_path};
pub use label::{burn_mask, LabelRecord};
pub use shared::CurveOptions;
