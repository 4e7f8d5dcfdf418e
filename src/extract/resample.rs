//! Alpha-correct Lanczos resizing
//!
//! The masked ball is surrounded by transparent black. Filtering straight
//! RGBA would bleed that black into the rim, so colour is premultiplied by
//! alpha for the filter pass and divided back out afterwards.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Resample filter used for every thumbnail
pub const THUMBNAIL_FILTER: FilterType = FilterType::Lanczos3;

/// Resize `image` to `width x height` with Lanczos3 on premultiplied alpha
pub fn resize_lanczos(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = premultiply(image);
    let resized = imageops::resize(&premultiplied, width, height, THUMBNAIL_FILTER);
    unpremultiply(&resized)
}

fn premultiply(image: &RgbaImage) -> Rgba32FImage {
    let (w, h) = image.dimensions();
    Rgba32FImage::from_fn(w, h, |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * alpha,
            g as f32 / 255.0 * alpha,
            b as f32 / 255.0 * alpha,
            alpha,
        ])
    })
}

fn unpremultiply(image: &Rgba32FImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    RgbaImage::from_fn(w, h, |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = a.clamp(0.0, 1.0);
        let alpha_u8 = to_u8(alpha);
        if alpha_u8 == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([
            to_u8(r / alpha),
            to_u8(g / alpha),
            to_u8(b / alpha),
            alpha_u8,
        ])
    })
}

/// Unit float to byte, with Lanczos overshoot clamped
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
