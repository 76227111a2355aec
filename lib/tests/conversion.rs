//! End-to-end conversion tests: solid images through the whole pipeline.

use ascii_sketch::palette::CLASSIC_CHARS;
use ascii_sketch::*;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

fn solid(rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(10, 10, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

fn config_2x2(style: PaletteStyle, inverse: bool, sensitivity: f64) -> ConversionConfig {
    ConversionConfig {
        output_width: 2,
        output_height: 2,
        sensitivity,
        palette_style: style,
        inverse,
        ..Default::default()
    }
}

#[test]
fn test_white_maps_to_last_classic_char() {
    let result = convert(&solid([255, 255, 255]), &config_2x2(PaletteStyle::Classic, false, 0.0)).unwrap();

    for &b in result.brightness.cells() {
        assert!((b - 1.0).abs() < 1e-9);
    }
    let last = CLASSIC_CHARS.chars().last().unwrap();
    assert!(result.characters.cells().iter().all(|&c| c == last));
    assert_eq!(result.text, "..\n..\n");
}

#[test]
fn test_black_maps_to_first_classic_char() {
    let result = convert(&solid([0, 0, 0]), &config_2x2(PaletteStyle::Classic, false, 0.0)).unwrap();

    assert!(result.brightness.cells().iter().all(|&b| b == 0.0));
    assert!(result.characters.cells().iter().all(|&c| c == '$'));
    assert_eq!(result.text, "$$\n$$\n");
}

#[test]
fn test_inverted_dot_star_black() {
    let result = convert(&solid([0, 0, 0]), &config_2x2(PaletteStyle::DotStar, true, 0.0)).unwrap();
    assert_eq!(result.text, "**\n**\n");
}

#[test]
fn test_half_sensitivity_lifts_black_to_mid_palette() {
    let result = convert(&solid([0, 0, 0]), &config_2x2(PaletteStyle::Classic, false, 0.5)).unwrap();

    let classic: Vec<char> = CLASSIC_CHARS.chars().collect();
    let expected = classic[classic.len() / 2];
    assert!(result.characters.cells().iter().all(|&c| c == expected));
    assert_ne!(expected, '$');
}

#[test]
fn test_inverse_applied_twice_matches_plain() {
    let grid = Grid::from_fn(32, 1, |x, _| x as f64 / 31.0);
    for style in PaletteStyle::ALL {
        let plain = map_to_characters(&grid, &config_2x2(style, false, 0.2)).unwrap();
        let inverted = Palette::resolve(style, true).unwrap();
        let mut restored: Vec<char> = inverted.chars().to_vec();
        restored.reverse();
        let restored = Palette::from_chars(restored).unwrap();
        let again = mapper::map_with_palette(&grid, &restored, 0.2);
        assert_eq!(plain, again);
    }
}

#[test]
fn test_output_shape_for_many_sizes() {
    let img = RgbaImage::from_fn(37, 23, |x, y| {
        let v = ((x * 7 + y * 11) % 256) as u8;
        Rgba([v, v / 2, 255 - v, 255])
    });
    for (w, h) in [(1, 1), (5, 3), (75, 40), (100, 2)] {
        for mode in [ResizeMode::Stretch, ResizeMode::Crop] {
            let config = ConversionConfig {
                output_width: w,
                output_height: h,
                resize_mode: mode,
                ..Default::default()
            };
            let result = convert(&img, &config).unwrap();
            assert_eq!(result.brightness.dimensions(), (w, h));
            assert_eq!(result.characters.dimensions(), (w, h));
            let lines: Vec<&str> = result.text.split_terminator('\n').collect();
            assert_eq!(lines.len(), h as usize);
            assert!(lines.iter().all(|l| l.chars().count() == w as usize));
            assert!(result.brightness.cells().iter().all(|b| (0.0..=1.0).contains(b)));
        }
    }
}

#[test]
fn test_convert_bytes_from_png() {
    let img = solid([255, 255, 255]);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();

    let result = convert_bytes(buf.get_ref(), &config_2x2(PaletteStyle::DotStar, false, 0.0)).unwrap();
    assert_eq!(result.text, "**\n**\n");
}

#[test]
fn test_unknown_style_is_invalid_configuration() {
    let err = "sixel".parse::<PaletteStyle>().unwrap_err();
    assert!(matches!(err, AsciiError::InvalidConfiguration(_)));
}
