//! Square extraction with transparent padding
//!
//! The crop rectangle is never clamped. Whatever part of it falls outside
//! the source comes back as fully transparent pixels, so the result always
//! has the rectangle's exact size.

use image::{RgbaImage, imageops};
use tracing::debug;

use super::geometry::CropRect;

/// Copy `rect` out of `source`, filling out-of-bounds pixels with `(0,0,0,0)`
pub fn crop_padded(source: &RgbaImage, rect: CropRect) -> RgbaImage {
    let (src_w, src_h) = source.dimensions();

    if rect.fits_within(src_w, src_h) {
        return imageops::crop_imm(
            source,
            rect.left as u32,
            rect.top as u32,
            rect.width(),
            rect.height(),
        )
        .to_image();
    }

    debug!(
        "Crop {} exceeds {}x{} source, padding with transparency",
        rect, src_w, src_h
    );

    // RgbaImage::new is zero-filled, i.e. transparent black
    let mut out = RgbaImage::new(rect.width(), rect.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let sx = rect.left + x as i64;
        let sy = rect.top + y as i64;
        if sx >= 0 && sy >= 0 && sx < src_w as i64 && sy < src_h as i64 {
            *pixel = *source.get_pixel(sx as u32, sy as u32);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Each pixel encodes its own coordinates so crops can be checked exactly
    fn coordinate_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    #[test]
    fn test_inside_crop_matches_source() {
        let src = coordinate_image(100, 80);
        let rect = CropRect {
            left: 10,
            top: 20,
            right: 30,
            bottom: 40,
        };
        let out = crop_padded(&src, rect);
        assert_eq!(out.dimensions(), (20, 20));
        assert_eq!(*out.get_pixel(0, 0), Rgba([10, 20, 7, 255]));
        assert_eq!(*out.get_pixel(19, 19), Rgba([29, 39, 7, 255]));
    }

    #[test]
    fn test_overhang_is_transparent() {
        let src = coordinate_image(50, 50);
        let rect = CropRect {
            left: -5,
            top: 40,
            right: 15,
            bottom: 60,
        };
        let out = crop_padded(&src, rect);
        assert_eq!(out.dimensions(), (20, 20));

        // Left of the source
        assert_eq!(*out.get_pixel(4, 0), Rgba([0, 0, 0, 0]));
        // Below the source
        assert_eq!(*out.get_pixel(10, 10), Rgba([0, 0, 0, 0]));
        // First in-bounds pixel
        assert_eq!(*out.get_pixel(5, 0), Rgba([0, 40, 7, 255]));
        assert_eq!(*out.get_pixel(19, 9), Rgba([14, 49, 7, 255]));
    }

    #[test]
    fn test_fully_outside_is_blank() {
        let src = coordinate_image(10, 10);
        let rect = CropRect {
            left: 100,
            top: 100,
            right: 184,
            bottom: 184,
        };
        let out = crop_padded(&src, rect);
        assert_eq!(out.dimensions(), (84, 84));
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
