//! Colour types shared by the chart and sentiment layers
//!
//! - `Rgb` / `Rgba`: colour values that render as CSS strings
//! - `ColorPair`: background + border colour for one bar
//! - `Palette`: which generation rule to apply

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alpha used for bar fills
pub const BACKGROUND_ALPHA: f64 = 0.8;

/// Alpha used for bar outlines
pub const BORDER_ALPHA: f64 = 1.0;

/// An opaque RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// RGB colour with alpha, rendered as `rgba(r, g, b, a)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display prints the shortest form: 0.8 -> "0.8", 1.0 -> "1"
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Background and border colour for a single chart element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    /// CSS colour at `BACKGROUND_ALPHA`
    pub background: String,
    /// CSS colour at `BORDER_ALPHA`
    pub border: String,
}

impl ColorPair {
    /// Build the standard fill/outline pair from one base colour
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            background: rgb.with_alpha(BACKGROUND_ALPHA).to_string(),
            border: rgb.with_alpha(BORDER_ALPHA).to_string(),
        }
    }

    /// Background colours of a sequence, in order
    pub fn backgrounds(pairs: &[ColorPair]) -> Vec<String> {
        pairs.iter().map(|p| p.background.clone()).collect()
    }

    /// Border colours of a sequence, in order
    pub fn borders(pairs: &[ColorPair]) -> Vec<String> {
        pairs.iter().map(|p| p.border.clone()).collect()
    }
}

/// Palette selector
///
/// Parsing is an exact, case-sensitive match. Anything else selects the
/// gray scheme; an unknown name is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Palette {
    /// Eight distinct base colours, cycled
    #[default]
    Multicolor,
    /// Shades of blue
    Blue,
    /// Shades of green
    Green,
    /// Grayscale fallback
    Gray,
}

impl Palette {
    /// Get all selectors for iteration
    pub fn all() -> &'static [Palette] {
        &[Palette::Multicolor, Palette::Blue, Palette::Green, Palette::Gray]
    }

    /// Resolve a selector name, falling back to gray
    pub fn from_name(name: &str) -> Self {
        match name {
            "multicolor" => Palette::Multicolor,
            "blue" => Palette::Blue,
            "green" => Palette::Green,
            other => {
                tracing::debug!("Unrecognized palette {:?}, using gray", other);
                Palette::Gray
            }
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Palette::Multicolor => write!(f, "multicolor"),
            Palette::Blue => write!(f, "blue"),
            Palette::Green => write!(f, "green"),
            Palette::Gray => write!(f, "gray"),
        }
    }
}

impl FromStr for Palette {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Palette::from_name(s))
    }
}

impl From<&str> for Palette {
    fn from(name: &str) -> Self {
        Palette::from_name(name)
    }
}

impl From<String> for Palette {
    fn from(name: String) -> Self {
        Palette::from_name(&name)
    }
}

impl From<Palette> for String {
    fn from(palette: Palette) -> Self {
        palette.to_string()
    }
}
