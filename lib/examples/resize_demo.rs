use ascii_sketch::{ConversionConfig, PaletteStyle, ResizeMode, convert, fit_height};
use ascii_sketch::sampler::DEFAULT_CHAR_ASPECT;
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Sketch - Resize Mode Demo");
    println!("===============================\n");

    // Wide horizontal gradient with a dark square in the middle
    let (width, height) = (300, 100);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if (125..175).contains(&x) && (25..75).contains(&y) {
            Rgba([0, 0, 0, 255])
        } else {
            let gray = (x * 255 / (width - 1)) as u8;
            Rgba([gray, gray, gray, 255])
        }
    });

    let cols = 30;
    let rows = fit_height(width, height, cols, DEFAULT_CHAR_ASPECT);
    let test_cases = vec![
        (ResizeMode::Stretch, cols, 12, "stretch to 30x12"),
        (ResizeMode::Crop, cols, 12, "crop to 30x12"),
        (ResizeMode::Stretch, cols, rows, "stretch to aspect-preserving height"),
    ];

    for (mode, w, h, description) in test_cases {
        let config = ConversionConfig {
            output_width: w,
            output_height: h,
            sensitivity: 0.0,
            palette_style: PaletteStyle::Minimal,
            resize_mode: mode,
            ..Default::default()
        };

        println!("Testing: {} ({}x{})", description, w, h);
        match convert(&img, &config) {
            Ok(art) => println!("{}", art.text),
            Err(e) => eprintln!("  failed: {}", e),
        }
    }
}
