//! Label-Maske: Pixelpfad in ein Graustufenbild brennen.

use glam::IVec2;
use image::{GrayImage, Luma};

/// Grauwert der Kurvenpixel.
pub const MASK_FOREGROUND: u8 = 255;

/// Erstellt eine schwarze Maske und setzt alle Pfadpunkte auf `MASK_FOREGROUND`.
///
/// Punkte außerhalb des Bildes werden übersprungen.
pub fn burn_mask(path: &[IVec2], width: u32, height: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    let mut skipped = 0usize;

    for point in path {
        let inside = point.x >= 0
            && point.y >= 0
            && (point.x as u32) < width
            && (point.y as u32) < height;
        if inside {
            mask.put_pixel(point.x as u32, point.y as u32, Luma([MASK_FOREGROUND]));
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        log::debug!(
            "Label-Maske: {} von {} Pfadpunkten außerhalb {}x{}",
            skipped,
            path.len(),
            width,
            height
        );
    }
    mask
}
