//! ASCII Preview - SVG to character art converter
//!
//! This library rasterizes an SVG document, converts it to grayscale,
//! downsamples it to a small fixed grid and maps every pixel to a glyph
//! from a density palette, ready to print to a terminal.
//!
//! # Example
//! ```no_run
//! use ascii_preview::{render_file, PreviewConfig};
//!
//! let rows = render_file("drawing.svg", &PreviewConfig::default()).unwrap();
//! for row in rows {
//!     println!("{}", row);
//! }
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;
pub mod raster;

// Re-export main types for convenience
pub use ascii::write_rows;
pub use config::PreviewConfig;
pub use error::{Error, Result};
pub use processor::{render_file, render_svg};
