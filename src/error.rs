//! Crate error type and `Result` alias.
//!
//! A run can only fail two ways: the source can't be decoded, or an output
//! can't be written. Both abort the run.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode source image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    /// Path of the file the failed operation was touching
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Decode { path, .. } | Error::Write { path, .. } => path,
        }
    }
}
