//! Mask compositing
//!
//! Pastes a cropped square onto a fully transparent canvas of the same size,
//! using a single-channel mask as the per-pixel selector.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::map::map_colors2;

/// Blend `square` over transparent black, weighted by `mask`.
///
/// Mask 255 copies the source pixel unchanged, 0 leaves it transparent.
/// Intermediate values scale every channel (alpha included) linearly.
///
/// # Panics
/// If `square` and `mask` differ in size.
pub fn apply_mask(square: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    assert_eq!(
        square.dimensions(),
        mask.dimensions(),
        "mask must match the cropped square"
    );

    map_colors2(square, mask, |src: Rgba<u8>, Luma([m]): Luma<u8>| match m {
        255 => src,
        0 => Rgba([0, 0, 0, 0]),
        _ => Rgba(src.0.map(|c| scale_channel(c, m))),
    })
}

/// `c * m / 255`, rounded to nearest
fn scale_channel(c: u8, m: u8) -> u8 {
    ((c as u32 * m as u32 + 127) / 255) as u8
}
