use std::io;

use anyhow::Context;
use ascii_preview::{PreviewConfig, render_file, write_rows};

/// Document rendered on every run
const INPUT_PATH: &str = "Layout sample/CTA.svg";

fn main() -> anyhow::Result<()> {
    // Configure logging
    env_logger::init();

    let config = PreviewConfig::default();
    log::info!(
        "rendering {} as {}x{} characters",
        INPUT_PATH,
        config.grid_width,
        config.grid_height
    );

    let rows = render_file(INPUT_PATH, &config)
        .with_context(|| format!("failed to render {}", INPUT_PATH))?;

    write_rows(&rows, io::stdout().lock()).context("failed to write to stdout")?;
    Ok(())
}
