//! Error types for barcode rendering.

use thiserror::Error;

/// Failures raised while laying out or exporting a barcode.
///
/// Unknown format names and unencodable characters are not errors; they are
/// resolved by the selector and the encoders. Everything listed here ends up
/// as an error document when it happens inside [`crate::helper::generate`].
#[derive(Debug, Error)]
pub enum BarcodeError {
    #[error("Barcode height must be a positive integer, got {0}")]
    InvalidHeight(u32),

    #[error("Bar width must be a positive integer, got {0}")]
    InvalidBarWidth(u32),

    #[error("Canvas dimensions overflow for {bars} modules at height {height}")]
    CanvasTooLarge { bars: usize, height: u32 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BarcodeError>;
