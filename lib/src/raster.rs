//! SVG rasterization
//!
//! Parsing is done by `usvg` and drawing by `resvg` onto a `tiny_skia`
//! pixmap, which is then handed over to the `image` crate.

use std::path::PathBuf;

use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use crate::config::MAX_RASTER_HEIGHT;
use crate::error::{Error, Result};

/// Build parser options for an SVG document
///
/// System fonts are loaded so `<text>` elements are drawn. Relative
/// references (embedded images) resolve against `resources_dir` when given.
pub fn svg_options(resources_dir: Option<PathBuf>) -> usvg::Options<'static> {
    let mut options = usvg::Options {
        resources_dir,
        ..Default::default()
    };
    options.fontdb_mut().load_system_fonts();
    options
}

/// Raster height for a document scaled to `width`, never below one pixel
///
/// Computed in f64 and rounded so a square document gets exactly `width`
/// rows; f32 drift would otherwise add a transparent row.
fn scaled_height(size: usvg::Size, width: u32) -> u32 {
    let height = size.height() as f64 * width as f64 / size.width() as f64;
    (height.round() as u32).max(1)
}

/// Rasterize SVG markup to an RGBA bitmap of a fixed width
///
/// The document is scaled uniformly so the bitmap is exactly `width` pixels
/// wide and its height follows the document aspect ratio. The background is
/// transparent black and the returned pixels carry straight alpha.
///
/// # Arguments
/// * `svg` - Raw SVG markup
/// * `width` - Output width in pixels
/// * `options` - Parser options, see [`svg_options`]
pub fn rasterize(svg: &[u8], width: u32, options: &usvg::Options) -> Result<RgbaImage> {
    if width == 0 {
        return Err(Error::EmptyCanvas { width, height: 0 });
    }

    let tree = usvg::Tree::from_data(svg, options)?;
    let size = tree.size();

    let height = scaled_height(size, width);
    let scale = width as f32 / size.width();
    log::debug!(
        "rasterizing {}x{} document to {}x{} (scale {:.3})",
        size.width(),
        size.height(),
        width,
        height,
        scale
    );

    if height > MAX_RASTER_HEIGHT {
        return Err(Error::CanvasTooLarge { width, height });
    }
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(Error::CanvasTooLarge { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny_skia stores premultiplied alpha, image expects straight alpha
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(width, height, data).ok_or(Error::CanvasTooLarge { width, height })
}
