/// Basic example: Convert a simple test image to ASCII art
///
/// This draws a white circle on a gray background and prints it
/// with every built-in palette.
use ascii_sketch::{ConversionConfig, PaletteStyle, convert};
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Sketch - Basic Example");
    println!("============================\n");

    let width = 160;
    let height = 120;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 45.0;

    let img = RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < radius {
            Rgba([255, 255, 255, 255])
        } else if (dist - radius).abs() < 5.0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([100, 100, 100, 255])
        }
    });

    println!("Created test image: {}x{}\n", width, height);

    for style in PaletteStyle::ALL {
        let config = ConversionConfig {
            output_width: 40,
            output_height: 15,
            sensitivity: 0.0,
            palette_style: style,
            ..Default::default()
        };

        match convert(&img, &config) {
            Ok(art) => {
                println!("Palette: {}", style);
                println!("{}", art.text);
            }
            Err(e) => eprintln!("{}: {}", style, e),
        }
    }
}
