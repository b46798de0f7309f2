/// Basic example: Convert a generated SVG to character art
///
/// This builds a small drawing with a few basic shapes and prints it
use ascii_preview::{PreviewConfig, render_svg};

fn main() {
    println!("ASCII Preview - Basic Example");
    println!("=============================\n");

    // Light page with a gray disc, a black outline and a diagonal stroke
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="160">
        <rect width="160" height="160" fill="#ffffff"/>
        <circle cx="80" cy="80" r="50" fill="#999999" stroke="#000000" stroke-width="5"/>
        <line x1="0" y1="0" x2="160" y2="160" stroke="#cc0000" stroke-width="3"/>
    </svg>"##;

    // Smaller grid than the default so it fits a normal terminal
    let config = PreviewConfig {
        raster_width: 320,
        grid_width: 60,
        grid_height: 30,
        ..Default::default()
    };

    println!("Processing with config:");
    println!("  - Raster width: {}", config.raster_width);
    println!("  - Grid: {}x{}", config.grid_width, config.grid_height);
    println!(
        "  - Palette: {:?}",
        config.palette.iter().collect::<String>()
    );
    println!();

    let rows = render_svg(svg.as_bytes(), &config).expect("Failed to render SVG");
    for row in &rows {
        println!("{}", row);
    }

    println!("\nRendered {} lines", rows.len());
}
