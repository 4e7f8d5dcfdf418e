//! Crop rectangle derivation

use std::fmt;

/// Axis-aligned crop square in source pixel coordinates.
///
/// `right` and `bottom` are exclusive. Coordinates are signed because the
/// rectangle is not clamped and may extend past any edge of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropRect {
    /// Square of side `2 * radius` centered at `(width/2 + offset_x, height/2)`.
    /// Halves use integer division.
    pub fn centered_on(width: u32, height: u32, offset_x: i64, radius: u32) -> Self {
        let center_x = (width / 2) as i64 + offset_x;
        let center_y = (height / 2) as i64;
        let r = radius as i64;

        Self {
            left: center_x - r,
            top: center_y - r,
            right: center_x + r,
            bottom: center_y + r,
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top) as u32
    }

    /// Center point (integer; exact for even sides)
    pub fn center(&self) -> (i64, i64) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// True if every pixel of the rectangle lies inside a `width x height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0 && self.top >= 0 && self.right <= width as i64 && self.bottom <= height as i64
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) to ({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
