use std::path::PathBuf;

use resvg::usvg;

/// Errors raised while turning an SVG document into character art
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse SVG")]
    Svg(#[from] usvg::Error),

    /// The requested raster has no area to draw on
    #[error("cannot rasterize onto an empty {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    /// The scaled raster is too large to allocate
    #[error("a {width}x{height} canvas is too large to allocate")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
