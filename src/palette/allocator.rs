//! Deterministic colour allocation
//!
//! Output is a pure function of `(count, palette)`: the same inputs always
//! produce the same colours in the same order.

use super::error::{PaletteError, PaletteResult};
use super::types::{ColorPair, Palette, Rgb};

/// Base colours for the multicolor palette, cycled by index
pub const MULTICOLOR_BASE: [Rgb; 8] = [
    Rgb::new(40, 167, 69),  // green
    Rgb::new(0, 123, 255),  // blue
    Rgb::new(255, 193, 7),  // yellow
    Rgb::new(220, 53, 69),  // red
    Rgb::new(111, 66, 193), // purple
    Rgb::new(23, 162, 184), // cyan
    Rgb::new(253, 126, 20), // orange
    Rgb::new(32, 201, 151), // teal
];

/// Allocate `count` colour pairs from a palette
///
/// Always returns exactly `count` entries. An empty request returns an
/// empty sequence for every palette.
pub fn allocate_colors(count: usize, palette: &Palette) -> Vec<ColorPair> {
    if count == 0 {
        return Vec::new();
    }

    let colors: Vec<ColorPair> = (0..count)
        .map(|i| ColorPair::from_rgb(base_color(i, count, palette)))
        .collect();

    tracing::debug!("Allocated {} colors from {} palette", colors.len(), palette);
    colors
}

/// Allocate colours for a count coming from an untyped boundary
///
/// Negative counts are a caller error and are rejected, never clamped.
pub fn allocate_colors_checked(count: i64, palette: &Palette) -> PaletteResult<Vec<ColorPair>> {
    let count = usize::try_from(count).map_err(|_| PaletteError::NegativeCount(count))?;
    Ok(allocate_colors(count, palette))
}

/// Base colour for index `i` of `count`. Requires `count > 0`.
fn base_color(i: usize, count: usize, palette: &Palette) -> Rgb {
    match palette {
        Palette::Multicolor => MULTICOLOR_BASE[i % MULTICOLOR_BASE.len()],
        Palette::Blue => {
            let shade = ramp(150.0, 80.0, i, count) % 255;
            Rgb::new(0, shade as u8, 255)
        }
        Palette::Green => {
            let shade = ramp(100.0, 155.0, i, count) % 255;
            let red = ramp(40.0, 20.0, i, count);
            Rgb::new(red as u8, shade as u8, 40)
        }
        Palette::Gray => {
            let shade = (ramp(100.0, 155.0, i, count) % 255) as u8;
            Rgb::new(shade, shade, shade)
        }
    }
}

/// `floor(start + i * span / count)`
fn ramp(start: f64, span: f64, i: usize, count: usize) -> u32 {
    (start + i as f64 * span / count as f64).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count_for_every_palette() {
        for palette in Palette::all() {
            for count in [0, 1, 3, 8, 9, 25] {
                let colors = allocate_colors(count, palette);
                assert_eq!(colors.len(), count, "palette {}", palette);
                for pair in &colors {
                    assert!(pair.background.starts_with("rgba("));
                    assert!(pair.background.ends_with(", 0.8)"));
                    assert!(pair.border.ends_with(", 1)"));
                }
            }
        }
    }

    #[test]
    fn test_multicolor_cycles_every_eight() {
        let colors = allocate_colors(10, &Palette::Multicolor);
        assert_eq!(colors[0], colors[8]);
        assert_eq!(colors[1], colors[9]);
        assert_ne!(colors[0], colors[1]);
        assert_eq!(colors[0].background, "rgba(40, 167, 69, 0.8)");
        assert_eq!(colors[7].border, "rgba(32, 201, 151, 1)");
    }

    #[test]
    fn test_blue_shades() {
        let colors = allocate_colors(4, &Palette::Blue);
        // floor(150 + i * 80 / 4) = 150, 170, 190, 210
        assert_eq!(colors[0].background, "rgba(0, 150, 255, 0.8)");
        assert_eq!(colors[1].background, "rgba(0, 170, 255, 0.8)");
        assert_eq!(colors[3].border, "rgba(0, 210, 255, 1)");
    }

    #[test]
    fn test_blue_shades_truncate() {
        let colors = allocate_colors(3, &Palette::Blue);
        // 150 + 80/3 = 176.67 -> 176
        assert_eq!(colors[1].background, "rgba(0, 176, 255, 0.8)");
    }

    #[test]
    fn test_green_shades() {
        let colors = allocate_colors(2, &Palette::Green);
        // shade: 100, floor(177.5) = 177; red: 40, 50
        assert_eq!(colors[0].background, "rgba(40, 100, 40, 0.8)");
        assert_eq!(colors[1].background, "rgba(50, 177, 40, 0.8)");
    }

    #[test]
    fn test_gray_fallback() {
        let colors = allocate_colors(5, &Palette::from_name("unknown"));
        // floor(100 + i * 31)
        assert_eq!(colors[0].background, "rgba(100, 100, 100, 0.8)");
        assert_eq!(colors[4].border, "rgba(224, 224, 224, 1)");
    }

    #[test]
    fn test_deterministic() {
        for palette in Palette::all() {
            assert_eq!(allocate_colors(12, palette), allocate_colors(12, palette));
        }
    }

    #[test]
    fn test_checked_rejects_negative() {
        let err = allocate_colors_checked(-1, &Palette::Blue).unwrap_err();
        assert!(matches!(err, PaletteError::NegativeCount(-1)));

        let colors = allocate_colors_checked(0, &Palette::Blue).unwrap();
        assert!(colors.is_empty());

        let colors = allocate_colors_checked(3, &Palette::Green).unwrap();
        assert_eq!(colors.len(), 3);
    }
}
