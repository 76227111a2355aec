use thiserror::Error;

/// Errors produced while configuring or running a conversion
#[derive(Error, Debug)]
pub enum AsciiError {
    /// A configuration value is out of range or names an unknown option.
    /// Reported before any sampling happens.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A palette resolved to no characters
    #[error("palette resolved to an empty character sequence")]
    EmptyPalette,

    /// The decoded image has no pixels
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;
