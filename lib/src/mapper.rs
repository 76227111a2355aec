use crate::config::ConversionConfig;
use crate::error::Result;
use crate::grid::{BrightnessGrid, CharacterGrid};
use crate::palette::Palette;

/// Select one palette character per brightness cell
///
/// The palette is resolved from `config.palette_style` (reversed when
/// `config.inverse` is set) and `config.sensitivity` is applied uniformly.
///
/// # Arguments
/// * `grid` - Brightness values in [0.0, 1.0]
/// * `config` - Conversion settings
///
/// # Returns
/// A character grid with the same dimensions as `grid`
pub fn map_to_characters(grid: &BrightnessGrid, config: &ConversionConfig) -> Result<CharacterGrid> {
    let palette = Palette::resolve(config.palette_style, config.inverse)?;
    Ok(map_with_palette(grid, &palette, config.sensitivity))
}

/// Map brightness values through an already resolved palette
pub fn map_with_palette(grid: &BrightnessGrid, palette: &Palette, sensitivity: f64) -> CharacterGrid {
    grid.map(|&b| palette.char_for(b, sensitivity))
}

/// Join a character grid into text
///
/// Each row's characters are concatenated and terminated by `\n`,
/// including the last row.
pub fn render(grid: &CharacterGrid) -> String {
    let mut text = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for row in grid.rows() {
        text.extend(row.iter());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::palette::PaletteStyle;

    fn config(style: PaletteStyle, inverse: bool, sensitivity: f64) -> ConversionConfig {
        ConversionConfig {
            palette_style: style,
            inverse,
            sensitivity,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_example() {
        let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!(render(&grid), "ab\ncd\n");
    }

    #[test]
    fn test_render_single_cell() {
        let grid = Grid::from_fn(1, 1, |_, _| '#');
        assert_eq!(render(&grid), "#\n");
    }

    #[test]
    fn test_map_keeps_dimensions() {
        let grid = Grid::from_fn(7, 3, |x, y| (x + y) as f64 / 10.0);
        let chars = map_to_characters(&grid, &ConversionConfig::default()).unwrap();
        assert_eq!(chars.dimensions(), (7, 3));
    }

    #[test]
    fn test_map_dot_star() {
        let grid = Grid::from_rows(vec![vec![0.0, 0.49, 0.5, 1.0]]).unwrap();
        let chars = map_to_characters(&grid, &config(PaletteStyle::DotStar, false, 0.0)).unwrap();
        assert_eq!(chars.cells(), &['.', '.', '*', '*']);

        let inverted = map_to_characters(&grid, &config(PaletteStyle::DotStar, true, 0.0)).unwrap();
        assert_eq!(inverted.cells(), &['*', '*', '.', '.']);
    }

    #[test]
    fn test_map_is_idempotent() {
        let grid = Grid::from_fn(16, 4, |x, y| ((x * 7 + y * 3) % 11) as f64 / 10.0);
        let cfg = config(PaletteStyle::Minimal, true, 0.25);
        let first = map_to_characters(&grid, &cfg).unwrap();
        let second = map_to_characters(&grid, &cfg).unwrap();
        assert_eq!(first, second);
        assert_eq!(render(&first), render(&second));
    }

    #[test]
    fn test_full_sensitivity_collapses_output() {
        let grid = Grid::from_fn(5, 2, |x, _| x as f64 / 4.0);
        let chars = map_to_characters(&grid, &config(PaletteStyle::Classic, false, 1.0)).unwrap();
        assert!(chars.cells().iter().all(|&c| c == '.'));
    }

    #[test]
    fn test_render_line_structure() {
        let grid = Grid::from_fn(4, 3, |_, _| 0.3);
        let text = render(&map_to_characters(&grid, &ConversionConfig::default()).unwrap());
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 4));
    }
}
