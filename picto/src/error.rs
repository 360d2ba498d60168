//! Picto error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown constraint mode: {0}")]
    UnknownConstraintMode(u32),

    #[error("unknown image scale type: {0}")]
    UnknownScaleMode(u32),

    #[error("pixmap data is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    PixmapSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("no image to paint")]
    MissingImage,

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
