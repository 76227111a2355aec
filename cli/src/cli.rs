use std::path::PathBuf;

use ascii_sketch::sampler::DEFAULT_CHAR_ASPECT;
use ascii_sketch::{ConversionConfig, PaletteStyle, ResizeMode, SampleFilter};
use clap::{Parser, ValueEnum};

/// Character palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaletteArg {
    #[default]
    Classic,
    Minimal,
    DotStar,
}

impl From<PaletteArg> for PaletteStyle {
    fn from(p: PaletteArg) -> Self {
        match p {
            PaletteArg::Classic => PaletteStyle::Classic,
            PaletteArg::Minimal => PaletteStyle::Minimal,
            PaletteArg::DotStar => PaletteStyle::DotStar,
        }
    }
}

/// How the image is fitted onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResizeArg {
    /// Scale each axis independently.
    #[default]
    Stretch,
    /// Keep the aspect ratio and crop the center.
    Crop,
}

impl From<ResizeArg> for ResizeMode {
    fn from(r: ResizeArg) -> Self {
        match r {
            ResizeArg::Stretch => ResizeMode::Stretch,
            ResizeArg::Crop => ResizeMode::Crop,
        }
    }
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterArg {
    Nearest,
    #[default]
    Bilinear,
}

impl From<FilterArg> for SampleFilter {
    fn from(f: FilterArg) -> Self {
        match f {
            FilterArg::Nearest => SampleFilter::Nearest,
            FilterArg::Bilinear => SampleFilter::Bilinear,
        }
    }
}

/// Smallest accepted cell height/width ratio.
pub const MIN_CHAR_ASPECT: f64 = 0.1;

/// ascii-sketch: turn images into brightness-mapped ASCII art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image files to convert (PNG, JPEG, BMP, GIF, ...).
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output width in characters.
    #[arg(short, long, default_value_t = 75)]
    pub width: u32,

    /// Output height in characters.
    #[arg(short = 'H', long, default_value_t = 40)]
    pub height: u32,

    /// Derive the height from each image's aspect ratio (ignores --height).
    #[arg(long, default_value_t = false)]
    pub fit_height: bool,

    /// Height/width ratio of one terminal cell, used by --fit-height.
    #[arg(long, default_value_t = DEFAULT_CHAR_ASPECT)]
    pub char_aspect: f64,

    /// Brightness floor in [0, 1); higher values favour lighter characters.
    #[arg(short, long, default_value_t = 0.1)]
    pub sensitivity: f64,

    /// Character palette.
    #[arg(short, long, value_enum, default_value_t = PaletteArg::Classic)]
    pub palette: PaletteArg,

    /// Reverse the palette (for dark-on-light display).
    #[arg(short, long, default_value_t = false)]
    pub inverse: bool,

    /// How the image is fitted onto the grid.
    #[arg(long, value_enum, default_value_t = ResizeArg::Stretch)]
    pub resize: ResizeArg,

    /// Resampling filter.
    #[arg(long, value_enum, default_value_t = FilterArg::Bilinear)]
    pub filter: FilterArg,

    /// Write the result here instead of stdout. A file for one input,
    /// a directory (one .txt per input) for several.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print the brightness grid.
    #[arg(long, default_value_t = false)]
    pub brightness: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Build the conversion config shared by every input.
    ///
    /// # Errors
    /// Returns an error for a non-positive or non-finite `--char-aspect`, or
    /// values rejected by [`ConversionConfig::validate`].
    pub fn to_config(&self) -> anyhow::Result<ConversionConfig> {
        if !self.char_aspect.is_finite() || self.char_aspect < MIN_CHAR_ASPECT {
            anyhow::bail!(
                "--char-aspect must be a finite value >= {}, got {}",
                MIN_CHAR_ASPECT,
                self.char_aspect
            );
        }
        let config = ConversionConfig {
            output_width: self.width,
            output_height: self.height,
            sensitivity: self.sensitivity,
            palette_style: self.palette.into(),
            inverse: self.inverse,
            resize_mode: self.resize.into(),
            filter: self.filter.into(),
        };
        config.validate()?;
        Ok(config)
    }
}
