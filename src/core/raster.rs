//! Rasterisierung einer abgetasteten Kurve zu einem lückenlosen Pixelpfad.

use super::curve::Bspline2;
use glam::IVec2;

/// Füllt die Lücken zwischen aufeinanderfolgenden Abtastpunkten.
///
/// Ergebnis ist ein 8-zusammenhängender Pfad: benachbarte Punkte unterscheiden
/// sich je Achse um höchstens 1. Zwischen weiter entfernten Punkten wird
/// entlang der dominanten Achse geschritten und die andere Achse aus dem
/// linearen Verhältnis gerundet. Direkte Duplikate werden unterdrückt.
pub fn to_pixel_path(samples: &[IVec2]) -> Vec<IVec2> {
    let Some(&first) = samples.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(samples.len());
    path.push(first);

    for pair in samples.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs());

        for step in 1..=steps {
            let ratio = step as f32 / steps as f32;
            let offset = IVec2::new(
                (delta.x as f32 * ratio).round() as i32,
                (delta.y as f32 * ratio).round() as i32,
            );
            push_unique(&mut path, from + offset);
        }
        // steps == 0: identischer Punkt, nichts zu tun
    }

    path
}

fn push_unique(path: &mut Vec<IVec2>, point: IVec2) {
    if path.last() != Some(&point) {
        path.push(point);
    }
}

/// Tessellierung der Kurve, auf Pixel gerundet und lückenlos aufgefüllt.
///
/// Leer solange die Kurve nicht bereit ist.
pub fn continuous_points(curve: &Bspline2) -> Vec<IVec2> {
    let samples: Vec<IVec2> = curve
        .tessellate()
        .into_iter()
        .map(|p| p.round().as_ivec2())
        .collect();
    to_pixel_path(&samples)
}
