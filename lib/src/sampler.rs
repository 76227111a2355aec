use crate::config::{ResizeMode, SampleFilter};
use crate::error::{AsciiError, Result};
use crate::grid::{BrightnessGrid, Grid};
use image::{Rgba, RgbaImage, imageops};
use std::borrow::Cow;

/// Terminal cells are roughly twice as tall as they are wide
pub const DEFAULT_CHAR_ASPECT: f64 = 2.0;

/// Upper bound on the row count derived by [`fit_height`]
pub const MAX_FIT_HEIGHT: u32 = 2000;

/// Brightness of one pixel
///
/// Formula: (0.299*R + 0.587*G + 0.114*B) / 255, alpha ignored
pub fn brightness(pixel: &Rgba<u8>) -> f64 {
    let r = pixel[0] as f64;
    let g = pixel[1] as f64;
    let b = pixel[2] as f64;

    ((0.299 * r + 0.587 * g + 0.114 * b) / 255.0).clamp(0.0, 1.0)
}

impl From<SampleFilter> for imageops::FilterType {
    fn from(filter: SampleFilter) -> Self {
        match filter {
            SampleFilter::Nearest => imageops::FilterType::Nearest,
            SampleFilter::Bilinear => imageops::FilterType::Triangle,
        }
    }
}

/// Resample an image so it has exactly `width` x `height` pixels
///
/// # Arguments
/// * `input` - Source image
/// * `width` - Target width (output columns)
/// * `height` - Target height (output rows)
/// * `mode` - Stretch both axes independently, or scale uniformly and crop the center
/// * `filter` - Interpolation passed to the resize primitive
///
/// # Returns
/// The resampled image, borrowed unchanged when it already has the target size
fn resize_to_grid(
    input: &RgbaImage,
    width: u32,
    height: u32,
    mode: ResizeMode,
    filter: SampleFilter,
) -> Cow<'_, RgbaImage> {
    let (src_width, src_height) = input.dimensions();
    if (src_width, src_height) == (width, height) {
        return Cow::Borrowed(input);
    }

    match mode {
        ResizeMode::Stretch => Cow::Owned(imageops::resize(input, width, height, filter.into())),
        ResizeMode::Crop => {
            // Cover the whole grid, then cut the overflow evenly from both sides
            let scale = (width as f64 / src_width as f64).max(height as f64 / src_height as f64);
            let scaled_width = ((src_width as f64 * scale).round() as u32).max(width);
            let scaled_height = ((src_height as f64 * scale).round() as u32).max(height);

            let scaled = imageops::resize(input, scaled_width, scaled_height, filter.into());
            let x = (scaled_width - width) / 2;
            let y = (scaled_height - height) / 2;
            Cow::Owned(imageops::crop_imm(&scaled, x, y, width, height).to_image())
        }
    }
}

/// Reduce an image to one brightness value per output cell, stretching it to fit
///
/// # Arguments
/// * `image` - Decoded RGBA image
/// * `width` - Output columns (>= 1)
/// * `height` - Output rows (>= 1)
///
/// # Returns
/// A `height` x `width` brightness grid in row-major order
pub fn sample(image: &RgbaImage, width: u32, height: u32) -> Result<BrightnessGrid> {
    sample_with(
        image,
        width,
        height,
        ResizeMode::Stretch,
        SampleFilter::default(),
    )
}

/// Same as [`sample`] with an explicit resize mode and filter
pub fn sample_with(
    image: &RgbaImage,
    width: u32,
    height: u32,
    mode: ResizeMode,
    filter: SampleFilter,
) -> Result<BrightnessGrid> {
    if width == 0 || height == 0 {
        return Err(AsciiError::InvalidConfiguration(format!(
            "output dimensions must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    let (src_width, src_height) = image.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(AsciiError::EmptyImage {
            width: src_width,
            height: src_height,
        });
    }

    let resized = resize_to_grid(image, width, height, mode, filter);
    Ok(Grid::from_fn(width, height, |x, y| {
        brightness(resized.get_pixel(x, y))
    }))
}

/// Number of rows that keeps the image's aspect ratio at a given column count
///
/// # Arguments
/// * `image_width` - Source width in pixels
/// * `image_height` - Source height in pixels
/// * `output_width` - Output columns
/// * `char_aspect` - Height / width ratio of one character cell
///
/// # Returns
/// The row count, clamped into `[1, MAX_FIT_HEIGHT]`
pub fn fit_height(image_width: u32, image_height: u32, output_width: u32, char_aspect: f64) -> u32 {
    if image_width == 0 || image_height == 0 || !char_aspect.is_finite() || char_aspect <= 0.0 {
        return 1;
    }
    let rows = output_width as f64 * image_height as f64 / image_width as f64 / char_aspect;
    (rows.round().min(MAX_FIT_HEIGHT as f64) as u32).max(1)
}
