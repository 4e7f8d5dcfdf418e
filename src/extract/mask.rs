//! Circular alpha mask

use image::{GrayImage, Luma};

use crate::constants::{MASK_INSIDE, MASK_OUTSIDE};

/// Filled circle inscribed in a `side x side` square
pub fn circle_mask(side: u32) -> GrayImage {
    inscribed_ellipse_mask(side, side)
}

/// Filled ellipse inscribed in the full `width x height` bounds.
///
/// A pixel is inside when its center `(x + 0.5, y + 0.5)` lies within the
/// ellipse, so the shape touches all four edges and is mirror symmetric.
pub fn inscribed_ellipse_mask(width: u32, height: u32) -> GrayImage {
    let rx = width as f64 / 2.0;
    let ry = height as f64 / 2.0;

    GrayImage::from_fn(width, height, |x, y| {
        let dx = (x as f64 + 0.5 - rx) / rx;
        let dy = (y as f64 + 0.5 - ry) / ry;
        if dx * dx + dy * dy <= 1.0 {
            Luma([MASK_INSIDE])
        } else {
            Luma([MASK_OUTSIDE])
        }
    })
}
