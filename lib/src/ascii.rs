use std::io::{self, Write};

use crate::lut::glyph_for;
use image::GrayImage;

/// Map every pixel of a grayscale grid to a glyph
///
/// # Arguments
/// * `grid` - Downsampled grayscale image
/// * `palette` - Glyphs ordered from sparsest to densest
///
/// # Returns
/// One string per image row, one glyph per pixel, in row/column order
pub fn render_rows(grid: &GrayImage, palette: &[char]) -> Vec<String> {
    grid.rows()
        .map(|row| row.map(|pixel| glyph_for(pixel[0], palette)).collect())
        .collect()
}

/// Write rows as newline-terminated lines
pub fn write_rows<W: Write>(rows: &[String], mut out: W) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    out.flush()
}
