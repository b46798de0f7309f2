use crate::lut::PALETTE;

/// Largest raster width accepted before rasterization
pub const MAX_RASTER_WIDTH: u32 = 8192;

/// Tallest raster allowed once the document is scaled to `raster_width`
pub const MAX_RASTER_HEIGHT: u32 = 65536;

/// Largest grid dimension accepted for the character output
pub const MAX_GRID_SIZE: u32 = 1024;

/// Configuration for SVG to character-art conversion
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Rasterization
    pub raster_width: u32, // pixels, height follows the document aspect ratio, default 360

    /// Output grid
    pub grid_width: u32,  // characters per line, default 90
    pub grid_height: u32, // lines, default 90

    /// Glyphs ordered from sparsest to densest
    pub palette: Vec<char>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            raster_width: 360,

            grid_width: 90,
            grid_height: 90,

            palette: PALETTE.to_vec(),
        }
    }
}

impl PreviewConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.raster_width < 1 || self.raster_width > MAX_RASTER_WIDTH {
            return Err(format!(
                "raster_width must be between 1 and {}, got {}",
                MAX_RASTER_WIDTH, self.raster_width
            ));
        }
        if self.grid_width < 1 || self.grid_width > MAX_GRID_SIZE {
            return Err(format!(
                "grid_width must be between 1 and {}, got {}",
                MAX_GRID_SIZE, self.grid_width
            ));
        }
        if self.grid_height < 1 || self.grid_height > MAX_GRID_SIZE {
            return Err(format!(
                "grid_height must be between 1 and {}, got {}",
                MAX_GRID_SIZE, self.grid_height
            ));
        }
        if self.palette.len() < 2 {
            return Err(format!(
                "palette must hold at least 2 characters, got {}",
                self.palette.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PreviewConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.raster_width, 360);
        assert_eq!((config.grid_width, config.grid_height), (90, 90));
        assert_eq!(config.palette.iter().collect::<String>(), " .:-=+*#%@");
    }

    #[test]
    fn test_invalid_raster_width() {
        let mut config = PreviewConfig::default();
        config.raster_width = 0;
        assert!(config.validate().is_err());

        config.raster_width = MAX_RASTER_WIDTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_grid() {
        let mut config = PreviewConfig::default();
        config.grid_width = 0;
        assert!(config.validate().is_err());

        let mut config = PreviewConfig::default();
        config.grid_height = MAX_GRID_SIZE + 1;
        let err = config.validate().unwrap_err();
        assert!(err.contains("grid_height"));
    }

    #[test]
    fn test_palette_too_short() {
        let config = PreviewConfig {
            palette: vec!['@'],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
