//! Fixed values for ball extraction
//!
//! These reproduce the logo layout: the ball sits slightly right of the
//! logo's horizontal center. Changing them changes every output file.

// =============================================================================
// GEOMETRY
// =============================================================================

/// Horizontal shift of the ball center from the image center (pixels, +right)
pub const BALL_OFFSET_X: i64 = 25;
/// Ball radius in source pixels
pub const BALL_RADIUS: u32 = 42;
/// Side of the native crop square
pub const BALL_SIZE: u32 = BALL_RADIUS * 2;

// =============================================================================
// OUTPUTS
// =============================================================================

/// Square thumbnail sizes resampled from the masked ball, in write order
pub const THUMBNAIL_SIZES: [u32; 2] = [100, 200];

/// Logo the ball is cut from
pub const SOURCE_FILE: &str = "frontend/src/assets/BEEXOCCER.png";
/// Native-size masked ball; thumbnails are written next to it
pub const OUTPUT_FILE: &str = "frontend/src/assets/ball.png";

// =============================================================================
// MASK VALUES
// =============================================================================

pub const MASK_INSIDE: u8 = 255;
pub const MASK_OUTSIDE: u8 = 0;
