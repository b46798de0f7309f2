use std::path::Path;

use resvg::usvg;

use crate::ascii::render_rows;
use crate::config::PreviewConfig;
use crate::error::{Error, Result};
use crate::filters::{downsample, to_grayscale};
use crate::raster::{rasterize, svg_options};

/// Converts SVG markup to character art
///
/// This runs the full pipeline:
/// 1. Rasterize to `raster_width` pixels wide
/// 2. Convert to 8-bit grayscale
/// 3. Resize to `grid_width` x `grid_height`
/// 4. Map each intensity to a palette glyph
///
/// # Arguments
/// * `svg` - Raw SVG markup
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// `grid_height` lines of `grid_width` characters each
pub fn render_svg(svg: &[u8], config: &PreviewConfig) -> Result<Vec<String>> {
    render_with_options(svg, config, &svg_options(None))
}

/// Reads an SVG file and converts it to character art
///
/// Relative resources referenced by the document resolve against the
/// file's directory.
pub fn render_file(path: impl AsRef<Path>, config: &PreviewConfig) -> Result<Vec<String>> {
    let path = path.as_ref();
    let svg = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", svg.len(), path.display());

    let resources_dir = std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    render_with_options(&svg, config, &svg_options(resources_dir))
}

fn render_with_options(
    svg: &[u8],
    config: &PreviewConfig,
    options: &usvg::Options,
) -> Result<Vec<String>> {
    config.validate().map_err(Error::InvalidConfig)?;

    // Step 1: Rasterize
    let raster = rasterize(svg, config.raster_width, options)?;

    // Step 2: Grayscale
    let gray = to_grayscale(&raster);

    // Step 3: Fixed grid
    let grid = downsample(&gray, config.grid_width, config.grid_height);
    log::debug!(
        "downsampled {}x{} raster to {}x{} grid",
        gray.width(),
        gray.height(),
        grid.width(),
        grid.height()
    );

    // Step 4: Glyphs
    Ok(render_rows(&grid, &config.palette))
}
