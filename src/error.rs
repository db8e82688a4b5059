use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ImageRef;

pub type Result<T> = std::result::Result<T, GalleryError>;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// An image could not be decoded or displayed. Navigation stays usable.
    #[error("failed to load image {image}: {reason}")]
    ImageLoadFailure { image: ImageRef, reason: String },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl GalleryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GalleryError::Io { path: path.into(), source }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, GalleryError::ImageLoadFailure { .. })
    }
}
