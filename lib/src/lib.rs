//! ASCII Sketch - brightness-based image to ASCII art converter
//!
//! An image is resampled onto a grid of character cells, each cell gets a
//! luma brightness score, and the score picks a character from a palette
//! ordered dense to sparse.
//!
//! # Example
//! ```no_run
//! use ascii_sketch::{ConversionConfig, PaletteStyle, convert, open_image};
//! use std::path::Path;
//!
//! let input = open_image(Path::new("photo.jpg")).unwrap();
//! let config = ConversionConfig {
//!     palette_style: PaletteStyle::Classic,
//!     ..Default::default()
//! };
//! let art = convert(&input, &config).unwrap();
//! print!("{}", art.text);
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod grid;
pub mod mapper;
pub mod palette;
pub mod processor;
pub mod sampler;

// Re-export main types for convenience
pub use config::{ConversionConfig, ResizeMode, SampleFilter};
pub use decode::{decode_image, open_image};
pub use error::{AsciiError, Result};
pub use grid::{BrightnessGrid, CharacterGrid, Grid};
pub use mapper::{map_to_characters, render};
pub use palette::{Palette, PaletteStyle};
pub use processor::{Conversion, convert, convert_bytes, convert_to_string};
pub use sampler::{fit_height, sample, sample_with};
