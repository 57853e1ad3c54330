//! Colour allocation
//!
//! - **types**: `Rgb`, `Rgba`, `ColorPair`, `Palette`
//! - **allocator**: maps `(count, palette)` to a sequence of colour pairs
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use bankview::palette::{allocate_colors, Palette};
//!
//! let colors = allocate_colors(10, &Palette::Multicolor);
//! assert_eq!(colors.len(), 10);
//! assert_eq!(colors[0], colors[8]);
//! ```

pub mod allocator;
pub mod error;
pub mod types;

pub use allocator::{allocate_colors, allocate_colors_checked, MULTICOLOR_BASE};
pub use error::{PaletteError, PaletteResult};
pub use types::{ColorPair, Palette, Rgb, Rgba, BACKGROUND_ALPHA, BORDER_ALPHA};
