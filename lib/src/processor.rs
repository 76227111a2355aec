use crate::config::ConversionConfig;
use crate::decode::decode_image;
use crate::error::Result;
use crate::grid::{BrightnessGrid, CharacterGrid};
use crate::mapper::{map_to_characters, render};
use crate::sampler::sample_with;
use image::RgbaImage;
use std::time::Instant;

/// Everything produced by one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Per-cell brightness, kept for diagnostics
    pub brightness: BrightnessGrid,
    pub characters: CharacterGrid,
    /// Rendered text, one line per row, trailing newline included
    pub text: String,
}

/// Converts a decoded image to ASCII art
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Resample onto the output grid and compute per-cell brightness
/// 3. Map each brightness to a palette character
/// 4. Join rows into text
///
/// # Arguments
/// * `input` - The decoded RGBA image
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// The brightness grid, character grid and text, or the first configuration error
pub fn convert(input: &RgbaImage, config: &ConversionConfig) -> Result<Conversion> {
    config.validate()?;
    let start = Instant::now();

    let brightness = sample_with(
        input,
        config.output_width,
        config.output_height,
        config.resize_mode,
        config.filter,
    )?;
    let characters = map_to_characters(&brightness, config)?;
    let text = render(&characters);

    log::debug!(
        "converted {}x{} image to {}x{} cells ({}, inverse={}, sensitivity={}) in {:.2} ms",
        input.width(),
        input.height(),
        config.output_width,
        config.output_height,
        config.palette_style,
        config.inverse,
        config.sensitivity,
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(Conversion {
        brightness,
        characters,
        text,
    })
}

/// Decodes encoded image bytes and converts them
pub fn convert_bytes(bytes: &[u8], config: &ConversionConfig) -> Result<Conversion> {
    // Config errors take precedence over decode errors
    config.validate()?;
    let image = decode_image(bytes)?;
    convert(&image, config)
}

/// Converts a decoded image and returns only the text
pub fn convert_to_string(input: &RgbaImage, config: &ConversionConfig) -> Result<String> {
    convert(input, config).map(|c| c.text)
}
