//! Ballcrop - cut the ball out of the BEEXOCCER logo
//!
//! Crops a square around the ball, masks it to a circle with transparency and
//! exports the native-size ball plus Lanczos-resampled thumbnails.

pub mod constants;
pub mod error;
pub mod extract;
pub mod logging;
pub mod settings;

pub use constants::*;
pub use error::{Error, Result};
pub use extract::{
    BallSet, CropRect, RunReport, apply_mask, circle_mask, crop_padded, extract_ball,
    inscribed_ellipse_mask, load_source, resize_lanczos, run,
};
pub use settings::{ExtractSettings, SETTINGS_FILE};
