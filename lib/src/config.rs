use crate::error::{AsciiError, Result};
use crate::palette::PaletteStyle;
use std::fmt;
use std::str::FromStr;

/// How the source image is fitted onto the character grid
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    /// Scale each axis independently to exactly fill the grid
    #[default]
    Stretch,
    /// Scale uniformly to cover the grid, then take the centered window
    Crop,
}

/// Interpolation used when resampling onto the grid
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SampleFilter {
    Nearest,
    #[default]
    Bilinear,
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResizeMode::Stretch => "stretch",
            ResizeMode::Crop => "crop",
        })
    }
}

impl FromStr for ResizeMode {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stretch" => Ok(ResizeMode::Stretch),
            "crop" => Ok(ResizeMode::Crop),
            other => Err(AsciiError::InvalidConfiguration(format!(
                "unknown resize mode '{}' (expected stretch or crop)",
                other
            ))),
        }
    }
}

impl fmt::Display for SampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleFilter::Nearest => "nearest",
            SampleFilter::Bilinear => "bilinear",
        })
    }
}

impl FromStr for SampleFilter {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(SampleFilter::Nearest),
            "bilinear" | "triangle" => Ok(SampleFilter::Bilinear),
            other => Err(AsciiError::InvalidConfiguration(format!(
                "unknown filter '{}' (expected nearest or bilinear)",
                other
            ))),
        }
    }
}

/// Configuration for one image to text conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Output size in character cells
    pub output_width: u32,       // >= 1, default 75
    pub output_height: u32,      // >= 1, default 40

    /// Brightness floor in [0, 1), default 0.1
    pub sensitivity: f64,

    /// Palette
    pub palette_style: PaletteStyle,
    pub inverse: bool,           // default false

    /// Resampling
    pub resize_mode: ResizeMode, // default Stretch
    pub filter: SampleFilter,    // default Bilinear
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_width: 75,
            output_height: 40,

            sensitivity: 0.1,

            palette_style: PaletteStyle::Classic,
            inverse: false,

            resize_mode: ResizeMode::Stretch,
            filter: SampleFilter::Bilinear,
        }
    }
}

impl ConversionConfig {
    /// Validates the configuration parameters
    ///
    /// A sensitivity of 1.0 or more is accepted: every cell then maps to the
    /// last palette character.
    pub fn validate(&self) -> Result<()> {
        if self.output_width < 1 {
            return Err(AsciiError::InvalidConfiguration(format!(
                "output_width must be at least 1, got {}",
                self.output_width
            )));
        }
        if self.output_height < 1 {
            return Err(AsciiError::InvalidConfiguration(format!(
                "output_height must be at least 1, got {}",
                self.output_height
            )));
        }
        if !self.sensitivity.is_finite() || self.sensitivity < 0.0 {
            return Err(AsciiError::InvalidConfiguration(format!(
                "sensitivity must be a finite value >= 0, got {}",
                self.sensitivity
            )));
        }
        if self.sensitivity >= 1.0 {
            log::warn!(
                "sensitivity {} >= 1.0 collapses the output to a single character",
                self.sensitivity
            );
        }
        Ok(())
    }
}
