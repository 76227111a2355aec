use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ascii_sketch::{BrightnessGrid, Conversion, ConversionConfig, convert, fit_height, open_image};
use rayon::prelude::*;

/// How each image's row count is chosen.
#[derive(Debug, Clone, Copy)]
pub enum HeightPolicy {
    /// Use the configured height as-is.
    Fixed,
    /// Recompute the height from the image aspect ratio.
    FitAspect { char_aspect: f64 },
}

/// Result of converting one input file.
pub struct FileResult {
    pub path: PathBuf,
    pub conversion: Result<Conversion>,
}

/// Convert a single file.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded, or the
/// conversion rejects the configuration.
pub fn convert_file(path: &Path, config: &ConversionConfig, heights: HeightPolicy) -> Result<Conversion> {
    let image = open_image(path).with_context(|| format!("cannot load {}", path.display()))?;

    let mut config = config.clone();
    if let HeightPolicy::FitAspect { char_aspect } = heights {
        config.output_height = fit_height(image.width(), image.height(), config.output_width, char_aspect);
        log::info!(
            "{}: {}x{} image -> {} rows",
            path.display(),
            image.width(),
            image.height(),
            config.output_height
        );
    }

    convert(&image, &config).with_context(|| format!("cannot convert {}", path.display()))
}

/// Convert every input independently, in parallel. Results keep input order.
pub fn convert_all(paths: &[PathBuf], config: &ConversionConfig, heights: HeightPolicy) -> Vec<FileResult> {
    paths
        .par_iter()
        .map(|path| FileResult {
            path: path.clone(),
            conversion: convert_file(path, config, heights),
        })
        .collect()
}

/// Where the text for each input goes when writing into `dir`.
///
/// Inputs are named after their file stem. Stems seen earlier in the list
/// get a `-1`, `-2`, ... suffix so no two inputs share a target.
pub fn output_paths_in(dir: &Path, inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_string());
            let mut name = format!("{stem}.txt");
            let mut n = 1;
            while !taken.insert(name.clone()) {
                name = format!("{stem}-{n}.txt");
                n += 1;
            }
            if n > 1 {
                log::warn!("{} shares its name with another input, writing {}", input.display(), name);
            }
            dir.join(name)
        })
        .collect()
}

/// Write one result to `target`.
///
/// # Errors
/// Returns an error naming `target` if the write fails.
pub fn write_output(target: &Path, text: &str) -> Result<()> {
    fs::write(target, text).with_context(|| format!("cannot write {}", target.display()))
}

/// Format a brightness grid as rows of two-decimal values.
pub fn format_brightness(grid: &BrightnessGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(|b| format!("{b:.2}")).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}
