//! Ball extraction pipeline
//!
//! Decode the logo, cut a square around the ball, mask it into a circle,
//! resample thumbnails, then write everything. All rasters are built before
//! the first write so a decode failure leaves nothing on disk.

pub mod composite;
pub mod crop;
pub mod geometry;
pub mod mask;
pub mod resample;

use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::{BALL_OFFSET_X, BALL_RADIUS, BALL_SIZE, THUMBNAIL_SIZES};
use crate::error::{Error, Result};
use crate::settings::ExtractSettings;

pub use composite::apply_mask;
pub use crop::crop_padded;
pub use geometry::CropRect;
pub use mask::{circle_mask, inscribed_ellipse_mask};
pub use resample::resize_lanczos;

/// Masked ball plus its resampled thumbnails
#[derive(Debug, Clone)]
pub struct BallSet {
    pub crop: CropRect,
    pub ball: RgbaImage,
    /// `(size, image)` in `THUMBNAIL_SIZES` order
    pub thumbnails: Vec<(u32, RgbaImage)>,
}

/// Files written by [`run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub source_size: (u32, u32),
    pub crop: CropRect,
    pub written: Vec<PathBuf>,
}

/// Cut, mask and resample the ball out of an already decoded logo
pub fn extract_ball(source: &RgbaImage) -> BallSet {
    let (width, height) = source.dimensions();
    let crop = CropRect::centered_on(width, height, BALL_OFFSET_X, BALL_RADIUS);

    info!("Center: {:?}", crop.center());
    info!("Radius: {}", BALL_RADIUS);
    info!("Cropping: {}", crop);

    let square = crop_padded(source, crop);
    let mask = circle_mask(BALL_SIZE);
    let ball = apply_mask(&square, &mask);

    let thumbnails = THUMBNAIL_SIZES
        .iter()
        .map(|&size| {
            debug!("Resampling {}x{} -> {}x{}", ball.width(), ball.height(), size, size);
            (size, resize_lanczos(&ball, size, size))
        })
        .collect();

    BallSet {
        crop,
        ball,
        thumbnails,
    }
}

/// Open the source image as RGBA
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

fn save(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {}x{} ball to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Full run: decode the source, extract, write the ball and its thumbnails.
///
/// Output directories must already exist. A write failure stops the run and
/// leaves any files already written in place.
pub fn run(settings: &ExtractSettings) -> Result<RunReport> {
    let source = load_source(&settings.source)?;
    let source_size = source.dimensions();
    info!("Source size: {}x{}", source_size.0, source_size.1);

    let set = extract_ball(&source);
    drop(source);

    let mut written = Vec::with_capacity(1 + set.thumbnails.len());

    save(&set.ball, &settings.output)?;
    written.push(settings.output.clone());

    for (size, thumb) in &set.thumbnails {
        let path = settings.thumbnail_path(*size);
        save(thumb, &path)?;
        written.push(path);
    }

    Ok(RunReport {
        source_size,
        crop: set.crop,
        written,
    })
}
